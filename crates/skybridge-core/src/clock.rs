use std::time::Instant;

/// Monotonic game clock reporting whole milliseconds since construction.
///
/// Summon cooldown and lifetime are real-time durations, so the timestamps
/// fed into the world each tick must come from a monotonic source rather
/// than a frame counter. The simulation itself never reads a clock; callers
/// sample this once per tick and pass the value in.
#[derive(Debug, Clone)]
pub struct GameClock {
    started: Instant,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
