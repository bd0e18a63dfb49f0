//! Time-based progress animation.
//!
//! Modeled as an explicit state machine: the host calls [`ProgressAnimator::tick`]
//! with the current time on each frame; there are no callbacks or timers here.

use std::time::{Duration, Instant};

use ringbar_engine::time::easing::{ease_in_out, lerp};

/// One in-flight transition. Replaced, never queued.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSession {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub start: Instant,
}

impl AnimationSession {
    /// Eased value at `now` and whether the session has reached its end.
    pub fn sample(&self, now: Instant) -> AnimationTick {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return AnimationTick { value: self.to, done: true };
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        AnimationTick { value: lerp(self.from, self.to, ease_in_out(t)), done: false }
    }
}

/// Result of a single animation tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationTick {
    pub value: f32,
    pub done: bool,
}

/// Drives a progress value toward a target with ease-in/ease-out timing.
#[derive(Debug, Default, Clone)]
pub struct ProgressAnimator {
    session: Option<AnimationSession>,
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition from `current` to `target`, discarding any
    /// in-flight session.
    ///
    /// `current` should be the value on screen right now so a replaced
    /// animation continues from where it visibly was.
    pub fn animate_to(&mut self, current: f32, target: f32, duration: Duration, now: Instant) {
        if let Some(old) = self.session.take() {
            log::debug!("animation {:.2} -> {:.2} cancelled at {current:.2}", old.from, old.to);
        }
        log::debug!("animation {current:.2} -> {target:.2} over {duration:?}");
        self.session = Some(AnimationSession { from: current, to: target, duration, start: now });
    }

    /// Samples the session at `now`. Returns `None` when idle.
    ///
    /// The tick that reaches the end returns exactly the target and leaves the
    /// animator idle.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationTick> {
        let session = self.session?;
        let tick = session.sample(now);
        log::trace!("animation tick value={:.3} done={}", tick.value, tick.done);
        if tick.done {
            log::debug!("animation reached {:.2}", session.to);
            self.session = None;
        }
        Some(tick)
    }

    /// Drops the in-flight session, if any. No final tick is produced.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("animation cancelled");
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    #[inline]
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn idle_animator_yields_nothing() {
        let mut a = ProgressAnimator::new();
        assert!(a.is_idle());
        assert_eq!(a.tick(Instant::now()), None);
    }

    #[test]
    fn starts_at_current_value() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(20.0, 80.0, ms(200), t0);
        assert_eq!(a.tick(t0), Some(AnimationTick { value: 20.0, done: false }));
    }

    #[test]
    fn midpoint_is_halfway_because_curve_is_symmetric() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(0.0, 100.0, ms(200), t0);
        let tick = a.tick(t0 + ms(100)).unwrap();
        assert!((tick.value - 50.0).abs() < 1e-3);
        assert!(!tick.done);
    }

    #[test]
    fn eases_in() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(0.0, 100.0, ms(1000), t0);
        // Linear would be 10; the eased value lags behind early on.
        assert!(a.tick(t0 + ms(100)).unwrap().value < 10.0);
    }

    #[test]
    fn ends_exactly_at_target_and_goes_idle() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(10.0, 85.0, ms(250), t0);
        assert_eq!(a.tick(t0 + ms(300)), Some(AnimationTick { value: 85.0, done: true }));
        assert!(a.is_idle());
        assert_eq!(a.tick(t0 + ms(400)), None);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(0.0, 40.0, Duration::ZERO, t0);
        assert_eq!(a.tick(t0), Some(AnimationTick { value: 40.0, done: true }));
    }

    #[test]
    fn replacement_resumes_from_value_at_cancellation() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(0.0, 100.0, ms(200), t0);
        let mid = a.tick(t0 + ms(100)).unwrap().value;

        // New request mid-flight: starts where the old one was, not at 100 or 0.
        a.animate_to(mid, 20.0, ms(200), t0 + ms(100));
        let session = *a.session().unwrap();
        assert_eq!(session.from, mid);
        assert_eq!(session.to, 20.0);
        assert_eq!(a.tick(t0 + ms(100)).unwrap().value, mid);
        assert_eq!(a.tick(t0 + ms(300)).unwrap(), AnimationTick { value: 20.0, done: true });
    }

    #[test]
    fn cancel_discards_without_final_tick() {
        let t0 = Instant::now();
        let mut a = ProgressAnimator::new();
        a.animate_to(0.0, 100.0, ms(200), t0);
        a.cancel();
        assert!(a.is_idle());
        assert_eq!(a.tick(t0 + ms(500)), None);
    }
}
