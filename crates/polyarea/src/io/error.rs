use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading point sets or polygons from text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty input: expected a `(<n> points)` header")]
    MissingHeader,

    #[error("malformed header: {line:?}")]
    MalformedHeader { line: String },

    #[error("too few points: expected at least 3, got {count}")]
    TooFewPoints { count: usize },

    #[error("line {line}: expected `<index> <x> <y>`, got {text:?}")]
    MalformedPoint { line: usize, text: String },

    #[error("line {line}: wrong point index {found}, expected {expected}")]
    WrongIndex {
        line: usize,
        expected: usize,
        found: i64,
    },

    #[error("point {index} has a negative coordinate")]
    NegativeCoordinate { index: usize },

    #[error("points {first} and {second} coincide")]
    DuplicatePoint { first: usize, second: usize },

    #[error("expected {expected} points, input ends after {found}")]
    Truncated { expected: usize, found: usize },

    #[error("line {line}: expected a point index, got {text:?}")]
    MalformedIndex { line: usize, text: String },
}

pub type LoadResult<T> = Result<T, LoadError>;
