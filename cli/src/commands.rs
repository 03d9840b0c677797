use meander::path::{ParseError, Path};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("no input path, pass one as an argument or with --input")]
    NoInput,
    #[error("invalid path: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The parsed input of every command.
pub struct PathCmd {
    pub path: Path,
    pub tolerance: f32,
}

pub struct PointCmd {
    pub offset: f32,
}

pub struct ClosestCmd {
    pub x: f32,
    pub y: f32,
    pub max_distance: f32,
}

pub struct SegmentCmd {
    pub start: f32,
    pub end: f32,
}

pub struct FlattenCmd {
    pub count: bool,
}
