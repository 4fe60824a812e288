//! Error types for table construction and position registration.

use superko_core::{ConfigError, Fingerprint, StateShapeError};
use thiserror::Error;

/// Errors from the unique key generator.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum KeyGenError {
    #[error("cannot draw {requested} unique keys from a {key_bits}-bit key space")]
    KeySpaceExhausted { requested: u128, key_bits: u32 },

    #[error("no unique key found after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Errors from the position registry.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    /// The position has already been seen on this line.
    #[error("position {0} repeats an earlier position")]
    Duplicate(Fingerprint),

    #[error(transparent)]
    Shape(#[from] StateShapeError),
}

/// Any error raised while building or using a table.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    KeyGen(#[from] KeyGenError),

    #[error(transparent)]
    Shape(#[from] StateShapeError),

    #[error(transparent)]
    Registry(RegistryError),
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Shape(shape) => Error::Shape(shape),
            other => Error::Registry(other),
        }
    }
}

impl Error {
    /// Returns the repeated fingerprint if this error is a superko violation.
    pub fn duplicate(&self) -> Option<Fingerprint> {
        match self {
            Error::Registry(RegistryError::Duplicate(fp)) => Some(*fp),
            _ => None,
        }
    }
}
