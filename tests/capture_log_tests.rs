use std::sync::{Mutex, Once};

use glam::Vec3;
use log::{Level, LevelFilter, Log, Metadata, Record};
use turntable_capture::config::CaptureConfig;
use turntable_capture::core::{CaptureLoop, MemoryHost};
use turntable_capture::scenes::setup_camera;

/// Collects formatted info records from this crate
struct LineLog {
    lines: Mutex<Vec<String>>,
}

impl Log for LineLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.target().starts_with("turntable_capture") {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOG: LineLog = LineLog {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install_log() {
    INIT.call_once(|| {
        log::set_logger(&LOG).unwrap();
        log::set_max_level(LevelFilter::Info);
    });
}

fn lines_mentioning(prefix: &str) -> Vec<String> {
    LOG.lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod progress_log_tests {
    use super::*;

    #[test]
    fn test_one_progress_line_per_frame() {
        install_log();
        let dir = tempfile::tempdir().unwrap();
        let mut host = MemoryHost::new().without_images();
        let drill = host.add_mesh("Drill", Vec3::ONE);
        let config = CaptureConfig {
            output_dir: dir.path().to_path_buf(),
            file_prefix: "log_sweep_".to_string(),
            frame_count: 12,
            ..CaptureConfig::default()
        };
        setup_camera(&mut host, &config.camera).unwrap();

        CaptureLoop::new(&config).run(&mut host, drill).unwrap();

        let progress: Vec<String> = lines_mentioning("log_sweep_")
            .into_iter()
            .filter(|line| line.ends_with("/12)"))
            .collect();
        assert_eq!(progress.len(), 12, "Expected one progress line per frame: {:?}", progress);
        for (i, line) in progress.iter().enumerate() {
            let filename = format!("log_sweep_{:02}.png", i);
            assert!(line.contains(&filename), "Line {} should name {}: {}", i, filename, line);
            assert!(line.contains(&format!("({}/12)", i + 1)), "Line {} lacks its counter: {}", i, line);
        }
    }
}
