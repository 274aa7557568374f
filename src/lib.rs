//! conduitfill library
//!
//! Core functionality for the conduit fill calculator: the wire catalog,
//! the conduit trade-size registry, the selection state, and the fill
//! percentage computation, plus the TUI built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod conduit;
pub mod error;
pub mod fill;
pub mod selection;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, Manufacturer, Wire};
pub use conduit::TradeSize;
pub use error::ConduitFillError;
pub use fill::{compute_fill, compute_fill_for_size};
pub use selection::Selection;
