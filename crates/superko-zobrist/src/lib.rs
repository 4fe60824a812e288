//! Zobrist fingerprints and superko detection for board games.
//!
//! This crate provides:
//! - [`KeyGenerator`] - unique random keys drawn from an injected rng
//! - [`KeyTable`] - immutable per-vertex and per-player keys
//! - [`KeyTable::hash`] - the XOR fold from a board state to a [`Fingerprint`]
//! - [`PositionRegistry`] - the set of positions seen, rejecting repeats
//! - [`SharedRegistry`] and [`PositionHistory`] for parallel search and undo
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use superko_core::Shape;
//! use superko_zobrist::{KeyTable, PositionRegistry, RegistryError};
//!
//! let table = KeyTable::seeded(Shape::new(81, 2, 2).unwrap(), 64, 42).unwrap();
//! let mut registry = PositionRegistry::new(Arc::new(table));
//!
//! let mut board = vec![0; 81];
//! board[10] = 2;
//! board[11] = 1;
//! let h1 = registry.add(&board, 0).unwrap();
//! assert_eq!(registry.add(&board, 0), Err(RegistryError::Duplicate(h1)));
//!
//! board[12] = 2;
//! let h2 = registry.add(&board, 0).unwrap();
//! assert_ne!(h1, h2);
//! ```

mod error;
mod hasher;
mod history;
pub mod keygen;
mod registry;
mod shared;
mod superko;
mod table;

pub use error::{Error, KeyGenError, RegistryError};
pub use history::PositionHistory;
pub use keygen::KeyGenerator;
pub use registry::PositionRegistry;
pub use shared::SharedRegistry;
pub use superko::Superko;
pub use table::KeyTable;

pub use superko_core::{Fingerprint, Key, Player, Shape, TableConfig, Value, Vertex};
