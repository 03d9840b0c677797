use crate::commands::{CliError, ClosestCmd, PathCmd, PointCmd, SegmentCmd};
use meander::math::point;
use meander::measure::PathMeasure;
use meander::path::Path;
use std::io::Write;

pub fn show(input: &PathCmd, output: &mut dyn Write) -> Result<(), CliError> {
    writeln!(output, "{}", input.path)?;
    Ok(())
}

pub fn length(input: &PathCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let measure = PathMeasure::with_tolerance(&input.path, input.tolerance);

    writeln!(output, "length: {}", measure.length())?;
    writeln!(output, "contours: {}", measure.num_contours())?;

    Ok(())
}

pub fn sample(input: &PathCmd, cmd: &PointCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let measure = PathMeasure::with_tolerance(&input.path, input.tolerance);

    match measure.sample(cmd.offset) {
        Some(sample) => {
            let (p, t) = (sample.position(), sample.tangent());
            writeln!(output, "position: {} {}", p.x, p.y)?;
            writeln!(output, "tangent: {} {}", t.x, t.y)?;
        }
        None => writeln!(output, "none")?,
    }

    Ok(())
}

pub fn closest(input: &PathCmd, cmd: &ClosestCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let measure = PathMeasure::with_tolerance(&input.path, input.tolerance);

    match measure.closest_point(point(cmd.x, cmd.y), cmd.max_distance) {
        Some(result) => {
            let (p, t) = (result.position(), result.tangent());
            writeln!(output, "position: {} {}", p.x, p.y)?;
            writeln!(output, "distance: {}", result.distance())?;
            writeln!(output, "offset: {}", result.offset())?;
            writeln!(output, "tangent: {} {}", t.x, t.y)?;
        }
        None => writeln!(output, "none")?,
    }

    Ok(())
}

pub fn segment(input: &PathCmd, cmd: &SegmentCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let measure = PathMeasure::with_tolerance(&input.path, input.tolerance);

    let mut builder = Path::builder();
    measure.add_segment(cmd.start..cmd.end, &mut builder);
    let segment = builder.build();

    log::debug!("extracted {} contour(s)", segment.num_contours());
    writeln!(output, "{}", segment)?;

    Ok(())
}

#[cfg(test)]
fn input(src: &str) -> PathCmd {
    PathCmd {
        path: src.parse().unwrap(),
        tolerance: 0.5,
    }
}

#[cfg(test)]
fn output_of<F: FnOnce(&mut dyn Write) -> Result<(), CliError>>(f: F) -> String {
    let mut output = Vec::new();
    f(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn length_of_a_closed_line() {
    let input = input("M 0 0 L 10 0 Z");
    assert_eq!(
        output_of(|out| length(&input, out)),
        "length: 20\ncontours: 1\n"
    );
}

#[test]
fn show_normalizes() {
    let input = input("m 1 1 h 2 v 2 z");
    assert_eq!(output_of(|out| show(&input, out)), "M 1 1 L 3 1 L 3 3 Z\n");
}

#[test]
fn sample_a_point() {
    let input = input("M 0 0 L 10 0 L 10 10");
    let cmd = PointCmd { offset: 15.0 };
    assert_eq!(
        output_of(|out| sample(&input, &cmd, out)),
        "position: 10 5\ntangent: 0 1\n"
    );

    let empty = input_empty();
    assert_eq!(output_of(|out| sample(&empty, &cmd, out)), "none\n");
}

#[cfg(test)]
fn input_empty() -> PathCmd {
    PathCmd {
        path: Path::new(),
        tolerance: 0.5,
    }
}

#[test]
fn closest_point() {
    let input = input("M 0 0 L 10 0");
    let cmd = ClosestCmd {
        x: 4.0,
        y: 3.0,
        max_distance: f32::INFINITY,
    };
    assert_eq!(
        output_of(|out| closest(&input, &cmd, out)),
        "position: 4 0\ndistance: 3\noffset: 4\ntangent: 1 0\n"
    );

    let cmd = ClosestCmd {
        x: 4.0,
        y: 3.0,
        max_distance: 1.0,
    };
    assert_eq!(output_of(|out| closest(&input, &cmd, out)), "none\n");
}

#[test]
fn extract_segment() {
    let input = input("M 0 0 L 10 0 L 10 10");
    let cmd = SegmentCmd {
        start: 5.0,
        end: 15.0,
    };
    assert_eq!(
        output_of(|out| segment(&input, &cmd, out)),
        "M 5 0 L 10 0 L 10 5\n"
    );
}
