//! Configuration types
//!
//! The canvas size is the engine's only configuration. It can be persisted
//! as postcard binary data with the `serde` feature.

pub mod matrix;

pub use matrix::*;
