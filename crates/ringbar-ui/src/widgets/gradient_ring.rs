use std::time::{Duration, Instant};

use ringbar_engine::coords::{Rect, Vec2};

use crate::animator::ProgressAnimator;
use crate::composer::{ArcComposer, RingPrimitive, RingStyle};
use crate::config::RingConfig;
use crate::constraints::Constraints;
use crate::error::ConfigError;
use crate::geometry::{ProgressState, RingGeometry, sweep_angle};
use crate::painter::Painter;
use crate::widget::Widget;

/// Circular progress ring with a sweep gradient and rounded caps.
///
/// Thin adapter over the pure pieces: it owns the committed progress, the
/// value currently on screen, cached geometry and the animator.
///
/// # Example
/// ```rust,ignore
/// let mut bar = GradientProgressBar::new(RingConfig::new().rotation_offset(-90.0))?;
/// bar.on_size_changed(Rect::new(0.0, 0.0, 320.0, 320.0));
/// bar.set_progress(85, true);
///
/// // Each frame:
/// bar.tick(Instant::now());
/// bar.paint(&mut Painter::new(&mut draw_list), rect);
/// ```
#[derive(Debug, Clone)]
pub struct GradientProgressBar {
    state: ProgressState,
    /// Progress value on screen; trails `state` while animating.
    rendered: f32,
    stroke_width: f32,
    animation_duration: Duration,
    composer: ArcComposer,
    geometry: Option<RingGeometry>,
    animator: ProgressAnimator,
    needs_redraw: bool,
}

impl GradientProgressBar {
    /// Builds the widget. Fails when `progress_max <= 0` or the border width is invalid.
    pub fn new(config: RingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = ProgressState::new(0, config.progress_max)?;
        let mut bar = Self {
            state,
            rendered: 0.0,
            stroke_width: config.border_width,
            animation_duration: config.animation_duration,
            composer: ArcComposer::new(RingStyle::from(&config)),
            geometry: None,
            animator: ProgressAnimator::new(),
            needs_redraw: true,
        };
        bar.set_progress_at(config.progress, false, Instant::now());
        Ok(bar)
    }

    // ── progress ──────────────────────────────────────────────────────────

    /// Sets progress, clamped into `[0, progress_max]`, animating if requested.
    pub fn set_progress(&mut self, value: i32, animate: bool) {
        self.set_progress_at(value, animate, Instant::now());
    }

    /// Like [`set_progress`](Self::set_progress) with an explicit clock.
    ///
    /// An animated call first advances any in-flight animation to `now`, then
    /// starts from that value, so a host that skipped ticks does not see the
    /// ring jump back. A direct call cancels the animation.
    pub fn set_progress_at(&mut self, value: i32, animate: bool, now: Instant) {
        let target = self.state.set(value);
        if value != target {
            log::debug!("progress {value} clamped to {target}");
        }
        if animate {
            if let Some(tick) = self.animator.tick(now) {
                self.rendered = tick.value;
            }
            self.animator.animate_to(self.rendered, target as f32, self.animation_duration, now);
        } else {
            self.animator.cancel();
            self.rendered = target as f32;
        }
        self.needs_redraw = true;
    }

    /// Advances the animation. Returns true when the rendered value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tick) = self.animator.tick(now) else { return false };
        let changed = tick.value != self.rendered;
        self.rendered = tick.value;
        self.needs_redraw |= changed;
        changed
    }

    /// Returns and clears the pending-redraw flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Committed (target) progress.
    #[inline]
    pub fn progress(&self) -> i32 {
        self.state.progress()
    }

    #[inline]
    pub fn progress_max(&self) -> i32 {
        self.state.max()
    }

    /// Progress value currently on screen.
    #[inline]
    pub fn rendered_progress(&self) -> f32 {
        self.rendered
    }

    #[inline]
    pub fn sweep_angle(&self) -> f32 {
        sweep_angle(self.rendered, self.state.max())
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Recomputes ring and cap geometry for new bounds.
    pub fn on_size_changed(&mut self, bounds: Rect) {
        if self.geometry.is_some_and(|g| g.bounds == bounds) {
            return;
        }
        let geo = RingGeometry::new(bounds, self.stroke_width);
        log::debug!(
            "ring geometry: bounds={}x{} radius={:.1} stroke={}",
            bounds.width(),
            bounds.height(),
            geo.radius(),
            self.stroke_width,
        );
        self.geometry = Some(geo);
        self.needs_redraw = true;
    }

    #[inline]
    pub fn geometry(&self) -> Option<&RingGeometry> {
        self.geometry.as_ref()
    }

    /// Primitives for the current frame. Empty until bounds are known.
    pub fn primitives(&self) -> Vec<RingPrimitive> {
        match &self.geometry {
            Some(geo) => self.composer.compose(self.sweep_angle(), geo),
            None => Vec::new(),
        }
    }
}

impl Widget for GradientProgressBar {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let side = constraints.square_side();
        Vec2::new(side, side)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Geometry is normally cached by `on_size_changed`; a host that paints
        // into a different rect gets it derived on the spot.
        let geo = match self.geometry {
            Some(g) if g.bounds == rect => g,
            _ => RingGeometry::new(rect, self.stroke_width),
        };
        painter.draw_primitives(&self.composer.compose(self.sweep_angle(), &geo));
    }
}
