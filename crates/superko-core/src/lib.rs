//! Core types for Zobrist position fingerprints.
//!
//! This crate provides the fundamental types shared by the key table, the
//! hasher and the position registry:
//! - [`Vertex`] for board locations
//! - [`Value`] and [`Player`] for the per-vertex state and the side to move
//! - [`Fingerprint`] and [`Key`] for hash values
//! - [`Shape`] for a validated board geometry
//! - [`TableConfig`] for loading a table configuration from TOML

mod config;
mod error;
mod fingerprint;
mod shape;
mod vertex;

pub use config::TableConfig;
pub use error::{ConfigError, StateShapeError};
pub use fingerprint::{Fingerprint, Key};
pub use shape::{Player, Shape, Value, MAX_KEY_BITS, MIN_SAFE_KEY_BITS};
pub use vertex::Vertex;
