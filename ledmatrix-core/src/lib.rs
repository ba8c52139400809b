//! Board-agnostic drawing engine for brightness-level LED matrices
//!
//! This crate contains everything that does not depend on a specific
//! display driver:
//!
//! - The [`PixelSurface`] trait every driver implements
//! - Primitive rasterization (lines, rectangles, circles, triangles)
//! - The fixed 3x5 font and 8x8 picture assets
//! - Whole-canvas rotation
//! - Timed pixel animation and scrolling text
//! - Matrix configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  LedMatrix (facade, owns surface+delay) │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐   ┌──────────────────┐
//! │ text / bitmap / │   │ animation        │
//! │ transform       │   │ (DelayNs)        │
//! └─────────────────┘   └──────────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  raster (lines, circles, triangles)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  PixelSurface (implemented by drivers)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The engine never clips. Drivers ignore writes outside their canvas and
//! read back 0 there.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod animation;
pub mod bitmap;
pub mod config;
pub mod matrix;
pub mod raster;
pub mod text;
pub mod traits;
pub mod transform;

pub use config::{ConfigError, MatrixConfig};
pub use matrix::LedMatrix;
pub use traits::{PixelSurface, MAX_BRIGHTNESS};
