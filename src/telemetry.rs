//! Frame timing telemetry.
//!
//! A fixed ring of recent samples backs the stats panel: the frame-to-frame
//! period and the rasterization slice of it. Fixed memory footprint, no
//! allocation after construction.

use std::time::Duration;

const WINDOW: usize = 120;

/// Aggregated view over the recent frame window.
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub frames: u64,
    pub avg_frame_ms: f32,
    pub worst_frame_ms: f32,
    pub avg_render_ms: f32,
}

/// Rolling frame-time collector.
pub struct FrameMetrics {
    frame_ms: [f32; WINDOW],
    render_ms: [f32; WINDOW],
    cursor: usize,
    filled: usize,
    frames: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self {
            frame_ms: [0.0; WINDOW],
            render_ms: [0.0; WINDOW],
            cursor: 0,
            filled: 0,
            frames: 0,
        }
    }

    /// Record one frame: the period since the previous frame and the time
    /// spent rasterizing inside it.
    pub fn record(&mut self, frame: Duration, render: Duration) {
        self.frame_ms[self.cursor] = frame.as_secs_f32() * 1000.0;
        self.render_ms[self.cursor] = render.as_secs_f32() * 1000.0;
        self.cursor = (self.cursor + 1) % WINDOW;
        self.filled = (self.filled + 1).min(WINDOW);
        self.frames += 1;
    }

    /// Snapshot of the current window for display.
    pub fn snapshot(&self) -> MetricsSnapshot {
        if self.filled == 0 {
            return MetricsSnapshot {
                frames: 0,
                avg_frame_ms: 0.0,
                worst_frame_ms: 0.0,
                avg_render_ms: 0.0,
            };
        }
        let n = self.filled;
        let avg_frame_ms = self.frame_ms[..n].iter().sum::<f32>() / n as f32;
        let avg_render_ms = self.render_ms[..n].iter().sum::<f32>() / n as f32;
        let worst_frame_ms = self.frame_ms[..n].iter().fold(0.0f32, |a, &b| a.max(b));
        MetricsSnapshot {
            frames: self.frames,
            avg_frame_ms,
            worst_frame_ms,
            avg_render_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_is_all_zero() {
        let snap = FrameMetrics::new().snapshot();
        assert_eq!(snap.frames, 0);
        assert_eq!(snap.avg_frame_ms, 0.0);
        assert_eq!(snap.worst_frame_ms, 0.0);
    }

    #[test]
    fn record_and_snapshot() {
        let mut metrics = FrameMetrics::new();
        metrics.record(Duration::from_millis(10), Duration::from_millis(4));
        metrics.record(Duration::from_millis(20), Duration::from_millis(8));

        let snap = metrics.snapshot();
        assert_eq!(snap.frames, 2);
        assert!((snap.avg_frame_ms - 15.0).abs() < 0.01);
        assert!((snap.worst_frame_ms - 20.0).abs() < 0.01);
        assert!((snap.avg_render_ms - 6.0).abs() < 0.01);
    }

    #[test]
    fn window_wraps_but_the_frame_count_keeps_going() {
        let mut metrics = FrameMetrics::new();
        for _ in 0..WINDOW + 5 {
            metrics.record(Duration::from_millis(16), Duration::from_millis(2));
        }
        let snap = metrics.snapshot();
        assert_eq!(snap.frames, (WINDOW + 5) as u64);
        assert!((snap.avg_frame_ms - 16.0).abs() < 0.01);
    }

    #[test]
    fn worst_frame_survives_until_it_leaves_the_window() {
        let mut metrics = FrameMetrics::new();
        metrics.record(Duration::from_millis(100), Duration::from_millis(1));
        for _ in 0..10 {
            metrics.record(Duration::from_millis(16), Duration::from_millis(1));
        }
        assert!((metrics.snapshot().worst_frame_ms - 100.0).abs() < 0.01);

        // Push the spike out of the ring
        for _ in 0..WINDOW {
            metrics.record(Duration::from_millis(16), Duration::from_millis(1));
        }
        assert!(metrics.snapshot().worst_frame_ms < 20.0);
    }
}
