//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive runtime
//! behavior (audio, UI, catalog and logging) and helpers to load it from
//! disk and the environment.

mod load;
mod schema;

pub use load::*;
pub use schema::*;

#[cfg(test)]
mod tests;
