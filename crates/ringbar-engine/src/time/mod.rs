//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a host loop.
//! Intended usage:
//! - one `FrameClock` per render loop, `tick()` once per presented frame
//! - `easing` curves map normalized animation time to normalized progress

pub mod easing;
mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
