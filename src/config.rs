// config.rs - Capture configuration and studio presets
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CaptureError;
use crate::math;
use crate::types::{ComputeDevice, Denoiser, RenderEngine, RenderSetting};

/// Immutable description of one turntable batch
///
/// The angular step is always derived from `frame_count`, so a full batch
/// covers exactly one revolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub frame_count: u32,
    pub resolution: Resolution,
    pub camera: CameraPreset,
    pub lighting: LightingPreset,
    pub material: MaterialPreset,
    /// `None` skips the backdrop stage
    pub backdrop: Option<BackdropPreset>,
    pub render: RenderPreset,
    pub start_pose: StartPose,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dataset"),
            file_prefix: "Ref_Drill_103-418_".to_string(),
            frame_count: 60,
            resolution: Resolution::default(),
            camera: CameraPreset::default(),
            lighting: LightingPreset::default(),
            material: MaterialPreset::default(),
            backdrop: Some(BackdropPreset::default()),
            render: RenderPreset::default(),
            start_pose: StartPose::Zero,
        }
    }
}

impl CaptureConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    pub fn validate(&self) -> Result<(), CaptureError> {
        let invalid = |msg: &str| Err(CaptureError::InvalidConfig(msg.to_string()));

        if self.frame_count == 0 {
            return invalid("frame_count must be greater than zero");
        }
        if self.file_prefix.contains(&['/', '\\'][..]) {
            return invalid("file_prefix must not contain path separators");
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return invalid("resolution must be non-zero");
        }
        if self.camera.focal_length <= 0.0 || self.camera.sensor_width <= 0.0 {
            return invalid("focal_length and sensor_width must be positive");
        }
        if self.camera.distance <= 0.0 {
            return invalid("camera distance must be positive");
        }
        if self.lighting.margin >= self.camera.distance {
            return invalid("light margin must be smaller than the camera distance");
        }
        Ok(())
    }

    /// Rotation between consecutive frames, in degrees
    pub fn step_degrees(&self) -> f64 {
        math::step_degrees(self.frame_count)
    }

    /// Rotation between consecutive frames, in radians
    pub fn step_radians(&self) -> f64 {
        self.step_degrees().to_radians()
    }

    /// Zero-pad width of the frame index in file names
    pub fn index_width(&self) -> usize {
        math::index_width(self.frame_count)
    }

    /// File name of frame `index`, e.g. `broca_padrao07.png`
    pub fn frame_filename(&self, index: u32) -> String {
        format!("{}{:0width$}.png", self.file_prefix, index, width = self.index_width())
    }
}

/// Output image size in pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 2224,
            height: 2224,
        }
    }
}

/// Pose of the target before the first frame
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPose {
    /// Start every batch from a Z rotation of exactly zero
    #[default]
    Zero,
    /// Start from whatever Z rotation the target has when the batch begins
    Current,
}

/// Camera lens and placement; the camera sits on -Y looking along +Y
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPreset {
    /// Millimetres (100 mm macro)
    pub focal_length: f32,
    /// Millimetres (full frame)
    pub sensor_width: f32,
    /// Metres from the turntable axis
    pub distance: f32,
    /// Height of the optical axis in metres
    pub height: f32,
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self {
            focal_length: 100.0,
            sensor_width: 36.0,
            distance: 0.24,
            height: -0.0175,
        }
    }
}

/// Four-bar ring light around the lens
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingPreset {
    /// Watts per bar
    pub energy: f32,
    pub bar_length: f32,
    pub bar_width: f32,
    /// Distance from the optical axis to each bar's center
    pub center_offset: f32,
    /// How far in front of the camera plane the bars sit
    pub margin: f32,
    pub spread_degrees: f32,
}

impl Default for LightingPreset {
    fn default() -> Self {
        Self {
            energy: 15.0,
            bar_length: 0.12,
            bar_width: 0.04,
            center_offset: 0.07,
            margin: 0.02,
            spread_degrees: 160.0,
        }
    }
}

impl LightingPreset {
    /// Tighter, brighter ring with full-hemisphere spread
    pub fn compact_ring() -> Self {
        Self {
            energy: 150.0,
            bar_length: 0.10,
            bar_width: 0.02,
            center_offset: 0.06,
            margin: 0.01,
            spread_degrees: 180.0,
        }
    }
}

/// Surface assigned to the inspected object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialPreset {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

impl Default for MaterialPreset {
    fn default() -> Self {
        // Near-black steel keeps the body dark while edges catch the ring light
        Self {
            name: "Steel_QC".to_string(),
            base_color: [0.02, 0.02, 0.02, 1.0],
            metallic: 1.0,
            roughness: 0.30,
        }
    }
}

/// Textured plastic plane behind the subject
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropPreset {
    pub size: f32,
    pub location: Vec3,
    /// Rotation about X that stands the plane upright
    pub tilt_degrees: f32,
    pub material_name: String,
    pub base_color: [f32; 4],
    pub roughness: f32,
    pub metallic: f32,
    pub noise_scale: f32,
    pub noise_detail: f32,
    pub bump_strength: f32,
}

impl Default for BackdropPreset {
    fn default() -> Self {
        Self {
            size: 0.5,
            location: Vec3::new(0.0, 0.02, 0.0),
            tilt_degrees: 90.0,
            material_name: "Plastic_Blister".to_string(),
            base_color: [0.6, 0.6, 0.6, 1.0],
            roughness: 0.5,
            metallic: 0.0,
            noise_scale: 150.0,
            noise_detail: 2.0,
            bump_strength: 0.05,
        }
    }
}

/// Render engine quality and color management
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPreset {
    pub engine: RenderEngine,
    pub samples: u32,
    pub adaptive_sampling: bool,
    pub resolution_percentage: u32,
    pub view_transform: String,
    pub look: String,
    pub denoising: bool,
    pub denoiser: Denoiser,
    pub device: ComputeDevice,
    pub world_background: Option<[f32; 4]>,
}

impl Default for RenderPreset {
    fn default() -> Self {
        Self {
            engine: RenderEngine::Cycles,
            samples: 512,
            adaptive_sampling: true,
            resolution_percentage: 100,
            view_transform: "AgX".to_string(),
            look: "AgX - High Contrast".to_string(),
            denoising: true,
            denoiser: Denoiser::OpenImageDenoise,
            device: ComputeDevice::Gpu,
            world_background: Some([0.0, 0.0, 0.0, 1.0]),
        }
    }
}

impl RenderPreset {
    /// Settings in the order they are applied to the host
    pub fn settings(&self, resolution: Resolution) -> Vec<RenderSetting> {
        let mut settings = vec![
            RenderSetting::Engine(self.engine),
            RenderSetting::Samples(self.samples),
            RenderSetting::AdaptiveSampling(self.adaptive_sampling),
            RenderSetting::Resolution {
                width: resolution.width,
                height: resolution.height,
            },
            RenderSetting::ResolutionPercentage(self.resolution_percentage),
            RenderSetting::ViewTransform(self.view_transform.clone()),
            RenderSetting::Look(self.look.clone()),
            RenderSetting::Denoising(self.denoising),
        ];
        if self.denoising {
            settings.push(RenderSetting::Denoiser(self.denoiser));
        }
        settings.push(RenderSetting::Device(self.device));
        if let Some(color) = self.world_background {
            settings.push(RenderSetting::WorldBackground(color));
        }
        settings
    }
}
