//! Frame-rate tracking for the debug status line.

/// Immutable snapshot read by the renderer.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    pub fps: f32,
}

/// Per-frame accumulator behind the snapshot.
#[derive(Debug)]
pub struct StatusLineAccumulator {
    /// Exponential moving average so the readout does not jitter.
    fps_ema: f32,
}

impl Default for StatusLineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLineAccumulator {
    pub fn new() -> Self {
        Self { fps_ema: 60.0 }
    }

    /// Records the time since the previous render, in milliseconds.
    pub fn on_frame(&mut self, frame_ms: u16) {
        let fps = if frame_ms > 0 {
            1000.0 / f32::from(frame_ms)
        } else {
            self.fps_ema
        };
        self.fps_ema += 0.1 * (fps - self.fps_ema);
    }

    pub fn snapshot(&self) -> StatusLine {
        StatusLine {
            fps: (self.fps_ema * 10.0).round() / 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_converges_toward_the_frame_rate() {
        let mut acc = StatusLineAccumulator::new();
        // 100 ms frames are 10 fps; the EMA should move well below 60.
        for _ in 0..60 {
            acc.on_frame(100);
        }
        let snapshot = acc.snapshot();
        assert!(snapshot.fps < 15.0, "fps = {}", snapshot.fps);
    }

    #[test]
    fn zero_frame_time_keeps_the_previous_estimate() {
        let mut acc = StatusLineAccumulator::new();
        acc.on_frame(0);
        assert!((acc.snapshot().fps - 60.0).abs() < 0.1);
    }
}
