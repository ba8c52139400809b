//! Display abstraction traits
//!
//! These traits define the interface between the drawing engine and
//! display-specific implementations.

pub mod surface;

pub use surface::{PixelSurface, MAX_BRIGHTNESS};
