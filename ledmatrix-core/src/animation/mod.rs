//! Timed pixel animation and scrolling text
//!
//! Every routine here blocks the caller: frames are separated by
//! `delay_ms(step_speed)` on the injected [`DelayNs`] and the call returns
//! once the last frame is on the canvas.

mod pixel;
mod scroll;

pub use pixel::{animate_pixel, move_pixel};
pub use scroll::{running_text, scroll_frames};

pub use embedded_hal::delay::DelayNs;
