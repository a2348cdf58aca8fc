//! Core domain types for Tether.
//!
//! This crate contains pure domain types with no IO, no async, and no dependencies.
//! Everything here can be used from any layer of the workspace.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod list;
mod sink;

pub use list::{IntoIter, Iter, List};
pub use sink::LineSink;
