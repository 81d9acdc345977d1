//! Puzzle engine for Grid Power, a "Lights Out" variant where power tiles change what a click flips.

#![no_std]

extern crate alloc;

pub use board::*;
pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use initializer::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod catalog;
mod engine;
mod error;
mod initializer;
mod session;
mod tile;
mod types;
