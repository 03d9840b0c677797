use crate::commands::{CliError, FlattenCmd, PathCmd};
use meander::measure::PathMeasure;
use std::io::Write;

pub fn flatten(
    input: &PathCmd,
    cmd: &FlattenCmd,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let measure = PathMeasure::with_tolerance(&input.path, input.tolerance);

    if cmd.count {
        let mut num_contours = 0;
        let mut num_vertices = 0;
        for polyline in measure.polylines() {
            num_contours += 1;
            num_vertices += polyline.points.len();
        }

        writeln!(output, "vertices: {}", num_vertices)?;
        writeln!(output, "contours: {}", num_contours)?;

        return Ok(());
    }

    let mut separator = "";
    for polyline in measure.polylines() {
        let mut points = polyline.points.iter();
        if let Some(first) = points.next() {
            write!(output, "{}M {} {}", separator, first.x, first.y)?;
        }
        for p in points {
            write!(output, " L {} {}", p.x, p.y)?;
        }
        if polyline.closed {
            write!(output, " Z")?;
        }
        separator = " ";
    }
    writeln!(output)?;

    Ok(())
}

#[cfg(test)]
fn run(src: &str, count: bool) -> String {
    let input = PathCmd {
        path: src.parse().unwrap(),
        tolerance: 0.5,
    };
    let mut output = Vec::new();
    flatten(&input, &FlattenCmd { count }, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn flatten_polylines() {
    assert_eq!(run("M 0 0 L 1 0 L 1 1 Z M 5 5", false), "M 0 0 L 1 0 L 1 1 L 0 0 Z M 5 5\n");
}

#[test]
fn flatten_count() {
    assert_eq!(run("M 0 0 L 1 0 L 1 1 Z M 5 5", true), "vertices: 5\ncontours: 2\n");
}
