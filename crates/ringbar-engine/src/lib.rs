//! Ringbar engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint, the recorded draw stream, frame timing and logging.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
