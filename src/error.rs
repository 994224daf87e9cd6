//! Error types for warehouse setup and search.

use crate::cell::Cell;
use core::fmt;
use grid_util::Point;
use thiserror::Error;

/// The endpoint a search was missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Robot,
    Package,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Robot => f.write_str("robot"),
            Endpoint::Package => f.write_str("package"),
        }
    }
}

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("{point} is already occupied by {cell:?}")]
    CellOccupied { point: Point, cell: Cell },

    #[error("no {0} has been placed")]
    MissingEndpoint(Endpoint),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not read scenario: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for WarehouseError {
    fn from(e: toml::de::Error) -> Self {
        WarehouseError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
