mod commands;
mod flatten;
mod measure;

use clap::{Args, Parser, Subcommand};
use commands::*;
use meander::measure::DEFAULT_TOLERANCE;
use meander::path::Path;

use std::fs::File;
use std::io::{stdout, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "meander")]
#[command(version, about = "Path measurement command-line interface", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct InputArgs {
    /// A path in SVG path syntax
    #[arg(value_name = "PATH")]
    path: Option<String>,

    /// Reads the path from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Writes the result to a file instead of the standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Sets the tolerance threshold for flattening
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the path in its normalized form
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the length of the path
    Length {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the position and tangent at a distance along the path
    Point {
        /// Distance from the start of the path
        #[arg(long, allow_negative_numbers = true)]
        offset: f32,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the point of the path closest to a position
    Closest {
        #[arg(short, long, allow_negative_numbers = true)]
        x: f32,

        #[arg(short, long, allow_negative_numbers = true)]
        y: f32,

        /// Ignores points further than this distance
        #[arg(long, allow_negative_numbers = true)]
        max_distance: Option<f32>,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the part of the path between two distances
    Segment {
        #[arg(long, allow_negative_numbers = true)]
        start: f32,

        #[arg(long, allow_negative_numbers = true)]
        end: f32,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Prints the flattened path
    Flatten {
        /// Prints the number of vertices and contours
        #[arg(short, long)]
        count: bool,

        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    fn input(&self) -> &InputArgs {
        match self {
            Command::Show { input }
            | Command::Length { input }
            | Command::Point { input, .. }
            | Command::Closest { input, .. }
            | Command::Segment { input, .. }
            | Command::Flatten { input, .. } => input,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<(), CliError> {
    let args = command.input();
    let input = PathCmd {
        path: read_path(args)?,
        tolerance: args.tolerance,
    };

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(source) => {
                return Err(CliError::Open {
                    path: path.clone(),
                    source,
                })
            }
        },
        None => Box::new(stdout()),
    };

    match command {
        Command::Show { .. } => measure::show(&input, &mut *output)?,
        Command::Length { .. } => measure::length(&input, &mut *output)?,
        Command::Point { offset, .. } => {
            measure::sample(&input, &PointCmd { offset: *offset }, &mut *output)?
        }
        Command::Closest {
            x, y, max_distance, ..
        } => {
            let cmd = ClosestCmd {
                x: *x,
                y: *y,
                max_distance: max_distance.unwrap_or(f32::INFINITY),
            };
            measure::closest(&input, &cmd, &mut *output)?
        }
        Command::Segment { start, end, .. } => {
            let cmd = SegmentCmd {
                start: *start,
                end: *end,
            };
            measure::segment(&input, &cmd, &mut *output)?
        }
        Command::Flatten { count, .. } => {
            flatten::flatten(&input, &FlattenCmd { count: *count }, &mut *output)?
        }
    }

    output.flush()?;

    Ok(())
}

fn read_path(args: &InputArgs) -> Result<Path, CliError> {
    let mut source = args.path.clone().unwrap_or_default();

    if let Some(input_file) = &args.input {
        let mut file = File::open(input_file).map_err(|source| CliError::Open {
            path: input_file.clone(),
            source,
        })?;
        source.push(' ');
        file.read_to_string(&mut source)?;
    } else if args.path.is_none() {
        return Err(CliError::NoInput);
    }

    let path: Path = source.parse()?;
    log::debug!(
        "parsed {} contour(s), tolerance: {}",
        path.num_contours(),
        args.tolerance
    );

    Ok(path)
}
