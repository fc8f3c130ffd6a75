use std::{error, fmt};

use crate::BadLonLat;

/// Something wrong with a line, either as text or in memory.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The text isn't a valid LINESTRING. Nothing was parsed.
    MalformedGeometry(Malformed),
    /// A sequence of points is too short to export as a line.
    InvalidGeometry { num_pts: usize },
}

/// The specific problem with some WKT text. Indices count points from 0.
#[derive(Clone, Debug, PartialEq)]
pub enum Malformed {
    /// Missing the `LINESTRING(...)` wrapper, or some other geometry type
    NotLineString,
    Unbalanced,
    Empty,
    SinglePoint,
    /// A point doesn't split into exactly a longitude and latitude
    WrongArity { idx: usize, pair: String },
    NotANumber { idx: usize, token: String },
    OutOfRange { idx: usize, problem: BadLonLat },
}

impl From<Malformed> for GeometryError {
    fn from(problem: Malformed) -> GeometryError {
        GeometryError::MalformedGeometry(problem)
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeometryError::MalformedGeometry(problem) => {
                write!(f, "Invalid WKT: {}", problem)
            }
            GeometryError::InvalidGeometry { num_pts } => write!(
                f,
                "A line needs at least two points, but this one has {}",
                num_pts
            ),
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Malformed::NotLineString => write!(f, "expecting LINESTRING(...)"),
            Malformed::Unbalanced => write!(f, "unbalanced parentheses"),
            Malformed::Empty => write!(f, "the LINESTRING has no points"),
            Malformed::SinglePoint => write!(f, "the LINESTRING needs at least two points"),
            Malformed::WrongArity { idx, pair } => write!(
                f,
                "point {} \"{}\" should be a longitude and latitude",
                idx, pair
            ),
            Malformed::NotANumber { idx, token } => {
                write!(f, "point {} has a bad number \"{}\"", idx, token)
            }
            Malformed::OutOfRange { idx, problem } => write!(f, "point {} {}", idx, problem),
        }
    }
}

impl error::Error for GeometryError {}
