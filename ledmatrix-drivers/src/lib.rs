//! Pixel surface implementations
//!
//! Concrete [`PixelSurface`](ledmatrix_core::PixelSurface) types for the
//! engine in ledmatrix-core:
//!
//! - [`FrameBuffer`]: in-memory canvas of any const size
//! - [`Is31fl3731`]: 16x9 charlieplexed PWM matrix over I2C
//! - [`GraphicsSurface`]: embedded-graphics `DrawTarget` over any surface

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod framebuffer;
pub mod graphics;
pub mod is31fl3731;

pub use framebuffer::FrameBuffer;
pub use graphics::GraphicsSurface;
pub use is31fl3731::{Is31Error, Is31fl3731};
