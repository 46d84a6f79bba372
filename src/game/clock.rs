use std::time::{Duration, Instant};

/// Fixed-cadence frame pacer.
///
/// Call [`FrameClock::tick`] once at the end of every loop iteration. It
/// sleeps for whatever is left of the frame budget so the loop never runs
/// faster than the target rate. A frame that overran is not made up for.
#[derive(Debug)]
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u64) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / target_fps.max(1) as u32,
            frame_start: Instant::now(),
        }
    }

    /// A clock that never sleeps
    #[cfg(test)]
    pub fn unthrottled() -> Self {
        Self {
            frame_duration: Duration::ZERO,
            frame_start: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
