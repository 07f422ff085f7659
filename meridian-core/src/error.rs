use thiserror::Error;

use crate::collections::StructureError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InputFormat(#[from] InputFormatError),
    #[error("Invalid input at line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: InputFormatError,
    },
    #[error("Unknown intersection: {0}")]
    UnknownEntity(String),
    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },
    #[error("No spanning tree exists: reached {reached} of {total} intersections")]
    DisconnectedGraph { reached: usize, total: usize },
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to read line {line}: {source}")]
    ReadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

/// Problems with a single input record or graph construction call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputFormatError {
    #[error("duplicate intersection title '{0}'")]
    DuplicateTitle(String),
    #[error("unknown intersection title '{0}'")]
    UnknownTitle(String),
    #[error("unknown record kind '{0}'")]
    UnknownRecord(String),
    #[error("missing field <{0}>")]
    MissingField(&'static str),
    #[error("unexpected trailing field '{0}'")]
    TrailingField(String),
    #[error("invalid number for <{field}>: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid coordinate: latitude {lat}, longitude {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("invalid weight for street '{name}': {weight}")]
    InvalidWeight { name: String, weight: f64 },
}

impl Error {
    /// Attaches a 1-based line number to a record-level failure.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Error::InputFormat(source) => Error::Record { line, source },
            other => other,
        }
    }
}
