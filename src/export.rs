//! Background PNG export.
//!
//! Frames are handed to a worker thread for encoding so the UI never waits
//! on disk. Completions are polled once per frame and logged.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of one export job.
pub struct ExportResult {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Queues RGBA frames for encoding and polls for completion.
pub struct FrameExporter {
    pending: Vec<mpsc::Receiver<ExportResult>>,
    completed: u64,
    failed: u64,
}

impl FrameExporter {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            completed: 0,
            failed: 0,
        }
    }

    /// Queue a frame for encoding. `prefix` may carry a directory; the
    /// epoch-second stamp keeps repeated saves distinct. Returns the path
    /// the worker will write.
    pub fn save(&mut self, prefix: &str, width: u32, height: u32, rgba: Vec<u8>) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = PathBuf::from(format!("{}-{}.png", prefix, stamp));
        let result = path.clone();

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let error = image::save_buffer(&path, &rgba, width, height, image::ColorType::Rgba8)
                .err()
                .map(|e| e.to_string());
            let _ = tx.send(ExportResult { path, error });
        });
        self.pending.push(rx);
        result
    }

    /// Poll for finished jobs. Call every frame.
    pub fn poll(&mut self) {
        let mut still_pending = Vec::new();
        for rx in self.pending.drain(..) {
            match rx.try_recv() {
                Ok(result) => match result.error {
                    None => {
                        self.completed += 1;
                        log::info!("saved frame to {}", result.path.display());
                    }
                    Some(err) => {
                        self.failed += 1;
                        log::warn!("export to {} failed: {}", result.path.display(), err);
                    }
                },
                Err(mpsc::TryRecvError::Empty) => still_pending.push(rx),
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed += 1;
                    log::warn!("export worker dropped without a result");
                }
            }
        }
        self.pending = still_pending;
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> u64 {
        self.completed
    }

    pub fn failed_count(&self) -> u64 {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn wait_for_drain(exporter: &mut FrameExporter) {
        for _ in 0..100 {
            exporter.poll();
            if exporter.pending_count() == 0 {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn export_writes_a_png() {
        let prefix = std::env::temp_dir().join("sdf-export-ok");
        let mut exporter = FrameExporter::new();
        let rgba = vec![255u8; 8 * 8 * 4];
        let path = exporter.save(prefix.to_str().unwrap(), 8, 8, rgba);

        wait_for_drain(&mut exporter);
        assert_eq!(exporter.pending_count(), 0);
        assert_eq!(exporter.completed_count(), 1);
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn export_into_a_missing_directory_fails_cleanly() {
        let prefix = std::env::temp_dir()
            .join("no-such-dir")
            .join("deeper")
            .join("frame");
        let mut exporter = FrameExporter::new();
        let rgba = vec![0u8; 4 * 4 * 4];
        exporter.save(prefix.to_str().unwrap(), 4, 4, rgba);

        wait_for_drain(&mut exporter);
        assert_eq!(exporter.pending_count(), 0);
        assert_eq!(exporter.completed_count(), 0);
        assert_eq!(exporter.failed_count(), 1);
    }
}
