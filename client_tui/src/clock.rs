use std::time::{Duration, Instant};

use game_core::FrameClock;

/// Paces the loop to a fixed frame rate by sleeping off the remainder of each frame
#[derive(Debug)]
pub struct FixedRateClock {
    frame: Duration,
    next: Instant,
}

impl FixedRateClock {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next += self.frame;
        } else {
            // Fell behind; don't try to catch up with a burst of frames
            self.next = now + self.frame;
        }
    }
}
