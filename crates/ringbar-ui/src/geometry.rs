//! Sweep geometry: progress → sweep angle, widget bounds → ring and cap rects.

use ringbar_engine::coords::{Rect, Vec2};

use crate::error::ConfigError;

/// Largest sweep ever produced. A full 360° arc is never emitted.
pub const MAX_SWEEP_DEG: f32 = 359.0;

/// Maps a (possibly fractional) progress value to a sweep angle in degrees.
///
/// `clamp(progress / max * 360, 0, 359)`. `max` must be positive.
#[inline]
pub fn sweep_angle(progress: f32, max: i32) -> f32 {
    debug_assert!(max > 0, "sweep_angle: max must be positive");
    (progress / max as f32 * 360.0).clamp(0.0, MAX_SWEEP_DEG)
}

// ── ProgressState ─────────────────────────────────────────────────────────

/// Committed progress value and its upper bound.
///
/// Invariant: `0 <= progress <= max`, `max > 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProgressState {
    progress: i32,
    max: i32,
}

impl ProgressState {
    /// Creates a state, clamping `progress` into range.
    pub fn new(progress: i32, max: i32) -> Result<Self, ConfigError> {
        if max <= 0 {
            return Err(ConfigError::InvalidProgressMax(max));
        }
        Ok(Self { progress: progress.clamp(0, max), max })
    }

    #[inline]
    pub fn progress(self) -> i32 {
        self.progress
    }

    #[inline]
    pub fn max(self) -> i32 {
        self.max
    }

    /// Clamps `value` into `[0, max]`.
    #[inline]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(0, self.max)
    }

    /// Stores `value` clamped into range and returns what was stored.
    #[inline]
    pub fn set(&mut self, value: i32) -> i32 {
        self.progress = self.clamp(value);
        self.progress
    }

    #[inline]
    pub fn sweep_angle(self) -> f32 {
        sweep_angle(self.progress as f32, self.max)
    }
}

// ── RingGeometry ──────────────────────────────────────────────────────────

/// Rects derived from the widget bounds and stroke width.
///
/// - `ring_rect`: bounds inset by half the stroke, so the stroke stays inside the bounds
/// - `cap_rect`: `stroke × stroke` square centered on the ring at 0°
///   (rightmost point, mid-height), before any rotation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingGeometry {
    pub bounds: Rect,
    pub ring_rect: Rect,
    pub cap_rect: Rect,
    pub stroke_width: f32,
}

impl RingGeometry {
    pub fn new(bounds: Rect, stroke_width: f32) -> Self {
        let half = stroke_width * 0.5;
        let ring_rect = bounds.inset(half, half);
        let cap_rect = Rect::new(0.0, 0.0, stroke_width, stroke_width).offset_to(
            bounds.origin.x + ring_rect.width(),
            bounds.origin.y + ring_rect.height() * 0.5,
        );
        Self { bounds, ring_rect, cap_rect, stroke_width }
    }

    /// Rotation pivot for every sweep-dependent transform.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.ring_rect.center()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.ring_rect.width().min(self.ring_rect.height()) * 0.5
    }
}
