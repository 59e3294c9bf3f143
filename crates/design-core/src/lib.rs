pub mod bm25;
pub mod csv;
pub mod docgen;
pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod page;
pub mod search;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::CoreError;
