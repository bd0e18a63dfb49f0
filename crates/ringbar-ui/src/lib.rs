//! Ringbar UI — a circular gradient progress ring on top of `ringbar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ringbar_ui::prelude::*;
//!
//! let mut bar = GradientProgressBar::new(RingConfig::new().rotation_offset(-90.0))?;
//! let side = bar.measure(Constraints::loose(Vec2::new(320.0, 320.0)));
//! let rect = Rect::new(0.0, 0.0, side.x, side.y);
//! bar.on_size_changed(rect);
//! bar.set_progress(85, true);
//!
//! // In your frame callback:
//! let mut draw_list = DrawList::new();
//! bar.tick(Instant::now());
//! bar.paint(&mut Painter::new(&mut draw_list), rect);
//! // Hand draw_list to your surface.
//! ```
//!
//! The composition itself is pure and host-agnostic:
//! [`composer::ArcComposer::compose`] maps a sweep angle and
//! [`geometry::RingGeometry`] to an ordered list of primitives.

pub mod animator;
pub mod composer;
pub mod config;
pub mod constraints;
pub mod error;
pub mod geometry;
pub mod painter;
pub mod widget;
pub mod widgets;

/// Everything needed to host a ring — import this in application code.
pub mod prelude {
    pub use crate::animator::{AnimationTick, ProgressAnimator};
    pub use crate::composer::{ArcComposer, DrawPhase, RingPart, RingPrimitive, RingStyle};
    pub use crate::config::RingConfig;
    pub use crate::constraints::Constraints;
    pub use crate::error::ConfigError;
    pub use crate::geometry::{ProgressState, RingGeometry, sweep_angle};
    pub use crate::painter::Painter;
    pub use crate::widget::Widget;
    pub use crate::widgets::gradient_ring::GradientProgressBar;

    // Re-export the engine primitives everyone needs.
    pub use ringbar_engine::coords::{Affine, Rect, Vec2};
    pub use ringbar_engine::paint::{Color, Paint, PaintStyle, SweepGradient};
    pub use ringbar_engine::scene::{DrawCmd, DrawItem, DrawList};
}
