use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};
use glam::Vec3;
use log::{debug, error, info};

use super::clock::Clock;
use crate::config::{CaptureConfig, StartPose};
use crate::error::{CaptureError, HostError};
use crate::math::frame_angle;
use crate::traits::SceneHost;
use crate::types::ObjectId;

/// Progress of a [`CaptureLoop`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    DirectoryChecked,
    AngleSaved,
    /// Rendering the frame with this index
    Rendering(u32),
    AngleRestored,
    Done,
    Failed,
}

/// One written frame
#[derive(Clone, Debug)]
pub struct FrameRecord {
    pub index: u32,
    pub filename: String,
    pub path: PathBuf,
    /// Z rotation of the target in radians
    pub angle: f32,
    pub render_time: Duration,
}

/// Outcome of a completed batch
#[derive(Clone, Debug)]
pub struct CaptureSummary {
    pub frames: Vec<FrameRecord>,
    pub output_dir: PathBuf,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

/// Puts the target back to its saved rotation when dropped
///
/// Holds the host for the whole batch so restoration also runs when a render
/// errors out or panics.
struct RotationGuard<'h, H: SceneHost> {
    host: &'h mut H,
    target: ObjectId,
    saved: Vec3,
    restored: bool,
}

impl<'h, H: SceneHost> RotationGuard<'h, H> {
    fn new(host: &'h mut H, target: ObjectId) -> Result<Self, HostError> {
        let saved = host.rotation(target)?;
        Ok(Self {
            host,
            target,
            saved,
            restored: false,
        })
    }

    fn host(&mut self) -> &mut H {
        &mut *self.host
    }

    fn restore(&mut self) -> Result<(), HostError> {
        if !self.restored {
            self.host.set_rotation(self.target, self.saved)?;
            self.restored = true;
        }
        Ok(())
    }
}

impl<H: SceneHost> Drop for RotationGuard<'_, H> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore rotation of {:?}: {}", self.target, e);
        }
    }
}

/// Turntable batch: one render per angular step over a full revolution
pub struct CaptureLoop<'c> {
    config: &'c CaptureConfig,
    state: CaptureState,
}

impl<'c> CaptureLoop<'c> {
    pub fn new(config: &'c CaptureConfig) -> Self {
        Self {
            config,
            state: CaptureState::Idle,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    fn enter(&mut self, state: CaptureState) {
        debug!("Capture state: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Render every frame of the batch, rotating `target` about Z
    ///
    /// The target's rotation is restored before this returns, whether the batch
    /// completed or not.
    pub fn run<H: SceneHost>(&mut self, host: &mut H, target: ObjectId) -> Result<CaptureSummary, CaptureError> {
        let result = self.capture(host, target);
        match &result {
            Ok(summary) => {
                self.enter(CaptureState::Done);
                info!(
                    "Capture complete: {} frames in {:.1}s -> {}",
                    summary.frames.len(),
                    summary.elapsed.as_secs_f64(),
                    summary.output_dir.display()
                );
            }
            Err(e) => {
                self.enter(CaptureState::Failed);
                error!("Capture aborted: {}", e);
            }
        }
        result
    }

    fn capture<H: SceneHost>(&mut self, host: &mut H, target: ObjectId) -> Result<CaptureSummary, CaptureError> {
        let config = self.config;
        if config.frame_count == 0 {
            return Err(CaptureError::InvalidConfig("frame_count must be greater than zero".to_string()));
        }

        let output_dir = ensure_output_dir(&config.output_dir)?;
        self.enter(CaptureState::DirectoryChecked);

        let started_at = Local::now();
        let mut clock = Clock::new();
        let n = config.frame_count;

        let mut guard = RotationGuard::new(host, target)?;
        self.enter(CaptureState::AngleSaved);

        let start = match config.start_pose {
            StartPose::Zero => 0.0,
            StartPose::Current => guard.saved.z,
        };
        info!(
            "Capturing {} frames ({:.3} deg step) into {} (batch started {})",
            n,
            config.step_degrees(),
            output_dir.display(),
            started_at.format("%Y-%m-%d %H:%M:%S")
        );

        let mut frames = Vec::with_capacity(n as usize);
        for i in 0..n {
            self.enter(CaptureState::Rendering(i));

            let filename = config.frame_filename(i);
            let path = output_dir.join(&filename);
            let angle = frame_angle(start, i, n);
            let rotation = Vec3::new(guard.saved.x, guard.saved.y, angle);

            info!("Rendering {} ({}/{})", filename, i + 1, n);
            clock.tick();
            let rendered = render_frame(guard.host(), target, rotation, &path);
            if let Err(source) = rendered {
                // Restore before the error surfaces; the render error wins
                match guard.restore() {
                    Ok(()) => self.enter(CaptureState::AngleRestored),
                    Err(e) => error!("Failed to restore rotation of {:?}: {}", target, e),
                }
                return Err(CaptureError::Render {
                    index: i,
                    filename,
                    source,
                });
            }

            frames.push(FrameRecord {
                index: i,
                filename,
                path,
                angle,
                render_time: clock.tick(),
            });
        }

        guard.restore()?;
        self.enter(CaptureState::AngleRestored);

        Ok(CaptureSummary {
            frames,
            output_dir,
            started_at,
            elapsed: clock.elapsed(),
        })
    }
}

fn render_frame<H: SceneHost>(host: &mut H, target: ObjectId, rotation: Vec3, path: &Path) -> Result<(), HostError> {
    host.set_rotation(target, rotation)?;
    host.set_render_filepath(path)?;
    host.render_still()
}

/// Create the output directory if needed; a non-directory at the path is an error
fn ensure_output_dir(dir: &Path) -> Result<PathBuf, CaptureError> {
    let fail = |source| CaptureError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };

    if dir.is_dir() {
        debug!("Output directory {} exists", dir.display());
    } else {
        if dir.exists() {
            return Err(fail(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            )));
        }
        fs::create_dir_all(dir).map_err(fail)?;
        info!("Created output directory {}", dir.display());
    }
    Ok(dir.to_path_buf())
}
