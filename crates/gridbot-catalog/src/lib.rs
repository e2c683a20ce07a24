//! Gridbot puzzle catalog.
//!
//! Supplies read-only [`Puzzle`](gridbot_types::Puzzle) values to the
//! engine and the front end. Unlike the engine, the catalog checks that
//! every puzzle is well formed before handing it out.

mod catalog;
mod error;
pub mod validate;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use validate::{validate, validate_puzzle};
