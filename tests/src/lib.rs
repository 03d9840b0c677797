//! Random path generators shared by the test suite and the benchmarks.

use meander::math::{point, rect, vector};
use meander::path::builder::Builder;
use meander::path::Path;
use rand::Rng;
use rand_pcg::Pcg32;

pub use rand::SeedableRng;

#[cfg(test)]
mod measure;

/// Coordinates of the random paths are picked in `-COORD_RANGE..COORD_RANGE`.
pub const COORD_RANGE: f32 = 1000.0;

/// A deterministic random number generator.
pub fn rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

fn coord<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(-COORD_RANGE..COORD_RANGE)
}

/// Generates a random path with up to `max_contours` contours.
///
/// One path out of twenty is picked among degenerate cases (empty paths, single points, flat
/// rectangles, zero-length segments...). The others mix rectangles, circles, spliced paths and
/// contours of random lines and curves, each optionally closed.
pub fn create_random_path<R: Rng>(rng: &mut R, max_contours: usize) -> Path {
    if rng.gen_range(0..20) == 0 {
        return create_random_degenerate_path(rng, max_contours);
    }

    let mut builder = Path::builder();
    let n = rng.gen_range(1..10).min(max_contours);
    for _ in 0..n {
        if rng.gen_range(0..3) != 0 {
            add_standard_contour(rng, &mut builder);
        } else {
            add_shape_contour(rng, &mut builder);
        }
    }

    builder.build()
}

pub fn create_random_degenerate_path<R: Rng>(rng: &mut R, max_contours: usize) -> Path {
    let mut builder = Path::builder();

    match rng.gen_range(0..14) {
        0 => {
            // Empty path.
        }
        1 => {
            builder.move_to(point(coord(rng), coord(rng)));
        }
        2 => {
            for _ in 0..max_contours.min(10) {
                builder.move_to(point(coord(rng), coord(rng)));
            }
        }
        3 => {
            builder.move_to(point(coord(rng), coord(rng)));
            builder.close();
        }
        4 => {
            // The same point closed several times.
            builder.move_to(point(coord(rng), coord(rng)));
            for _ in 0..max_contours.min(10) {
                builder.close();
            }
        }
        5 => {
            builder.add_rectangle(&rect(coord(rng), coord(rng), 0.0, 0.0));
        }
        6 => {
            builder.add_rectangle(&rect(coord(rng), coord(rng), 0.0, coord(rng)));
        }
        7 => {
            builder.add_rectangle(&rect(coord(rng), coord(rng), coord(rng), 0.0));
        }
        8 => {
            let w = rng.gen_range(-COORD_RANGE..0.0);
            let h = rng.gen_range(-COORD_RANGE..0.0);
            builder.add_rectangle(&rect(coord(rng), coord(rng), w, h));
        }
        9 | 10 => {
            builder.add_rectangle(&rect(coord(rng), coord(rng), coord(rng), coord(rng)));
        }
        11 => {
            let radius = rng.gen_range(1.0..COORD_RANGE);
            builder.add_circle(point(coord(rng), coord(rng)), radius);
        }
        12 => {
            // A zero-length line.
            let p = point(coord(rng), coord(rng));
            builder.move_to(p);
            builder.line_to(p);
        }
        _ => {
            // A curve that ends where it starts.
            let p = point(coord(rng), coord(rng));
            builder.move_to(p);
            builder.cubic_bezier_to(
                point(coord(rng), coord(rng)),
                point(coord(rng), coord(rng)),
                p,
            );
        }
    }

    builder.build()
}

fn add_shape_contour<R: Rng>(rng: &mut R, builder: &mut Builder) {
    match rng.gen_range(0..3) {
        0 => {
            let w = rng.gen_range(1.0..COORD_RANGE);
            let h = rng.gen_range(1.0..COORD_RANGE);
            builder.add_rectangle(&rect(coord(rng), coord(rng), w, h));
        }
        1 => {
            let radius = rng.gen_range(1.0..COORD_RANGE);
            builder.add_circle(point(coord(rng), coord(rng)), radius);
        }
        _ => {
            let path = create_random_path(rng, 1);
            builder.add_path(&path);
        }
    }
}

fn add_standard_contour<R: Rng>(rng: &mut R, builder: &mut Builder) {
    if rng.gen() {
        if rng.gen() {
            builder.move_to(point(coord(rng), coord(rng)));
        } else {
            builder.relative_move_to(vector(coord(rng), coord(rng)));
        }
    }

    let n = rng.gen_range(1..20);
    for _ in 0..n {
        match rng.gen_range(0..4) {
            0 => builder.line_to(point(coord(rng), coord(rng))),
            1 => builder.relative_line_to(vector(coord(rng), coord(rng))),
            2 => builder.cubic_bezier_to(
                point(coord(rng), coord(rng)),
                point(coord(rng), coord(rng)),
                point(coord(rng), coord(rng)),
            ),
            _ => builder.relative_cubic_bezier_to(
                vector(coord(rng), coord(rng)),
                vector(coord(rng), coord(rng)),
                vector(coord(rng), coord(rng)),
            ),
        }
    }

    if rng.gen() {
        builder.close();
    }
}

#[test]
fn random_paths_are_deterministic() {
    for seed in 0..10 {
        let a = create_random_path(&mut rng(seed), usize::MAX);
        let b = create_random_path(&mut rng(seed), usize::MAX);
        assert_eq!(a.to_string(), b.to_string());
    }
}

#[test]
fn random_paths_respect_max_contours() {
    let mut rng = rng(7);
    for _ in 0..200 {
        let path = create_random_path(&mut rng, 1);
        assert!(path.num_contours() <= 1, "{}", path);
    }
}
