use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots at a target rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    interval: Duration,
}

impl FrameClock {
    /// Creates a clock paced at 60 frames per second.
    pub fn new() -> Self {
        Self::with_target_fps(60)
    }

    /// Creates a clock paced at `fps` frames per second (at least 1).
    pub fn with_target_fps(fps: u32) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            interval: Duration::from_secs(1) / fps.max(1),
        }
    }

    /// Target frame interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.last = now;

        let ft = FrameTime {
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time left until the next frame is due, measured from the last tick.
    pub fn until_next_frame(&self) -> Duration {
        self.interval.saturating_sub(self.last.elapsed())
    }

    /// Blocks the current thread until the next frame is due.
    pub fn wait_for_next_frame(&self) {
        let wait = self.until_next_frame();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
