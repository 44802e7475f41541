//! Frame timing for the animation loop

/// Number of frame timestamps kept for the FPS estimate
pub const FPS_WINDOW: usize = 60;

/// Log FPS and particle count every this many frames
pub const FPS_LOG_INTERVAL_FRAMES: u64 = 600;

/// Rolling frames-per-second estimate over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (milliseconds) and return the current estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot just past the newest holds the oldest sample
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_estimate_until_window_full() {
        let mut counter = FpsCounter::new();
        for i in 1..FPS_WINDOW {
            assert_eq!(counter.record(i as f64 * 16.0), 0);
        }
    }

    #[test]
    fn test_steady_sixty_fps() {
        let mut counter = FpsCounter::new();
        let frame = 1000.0 / 60.0;
        for i in 1..=200 {
            counter.record(i as f64 * frame);
        }
        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn test_tracks_slowdown() {
        let mut counter = FpsCounter::new();
        let mut t = 0.0;
        for _ in 0..120 {
            t += 1000.0 / 60.0;
            counter.record(t);
        }
        for _ in 0..120 {
            t += 1000.0 / 30.0;
            counter.record(t);
        }
        assert_eq!(counter.fps(), 30);
    }
}
