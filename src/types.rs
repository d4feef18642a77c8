use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

// === Handles ===

/// Handle to an object living in the host's object namespace
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

/// Handle to a material datablock
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(pub u32);

/// Handle to a node inside a material's node graph
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

// === Scene objects ===

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Camera,
    Light,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Mesh => "mesh",
            ObjectKind::Camera => "camera",
            ObjectKind::Light => "light",
        };
        f.write_str(name)
    }
}

/// Lens parameters of a camera object
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraLens {
    /// Focal length in millimetres
    pub focal_length: f32,
    /// Sensor width in millimetres
    pub sensor_width: f32,
}

impl Default for CameraLens {
    fn default() -> Self {
        Self {
            focal_length: 50.0,
            sensor_width: 36.0,
        }
    }
}

/// Rectangular area light datablock
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AreaLight {
    /// Emitted power in watts
    pub energy: f32,
    /// Extent along the light's local X axis
    pub size_x: f32,
    /// Extent along the light's local Y axis
    pub size_y: f32,
    /// Angular spread in radians, clamped to [0, PI] by hosts
    pub spread: f32,
}

// === Material node graph ===

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    PrincipledBsdf,
    NoiseTexture,
    Bump,
    MaterialOutput,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::PrincipledBsdf => "Principled BSDF",
            NodeKind::NoiseTexture => "Noise Texture",
            NodeKind::Bump => "Bump",
            NodeKind::MaterialOutput => "Material Output",
        };
        f.write_str(name)
    }
}

/// Value written to an unlinked node input
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SocketValue {
    Float(f32),
    Color([f32; 4]),
}

// === Render settings ===

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEngine {
    Cycles,
    Eevee,
    Workbench,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denoiser {
    OpenImageDenoise,
    Optix,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputeDevice {
    Cpu,
    Gpu,
}

/// A single scene-level render setting
///
/// Settings are applied one at a time so that a host build lacking one feature
/// (a denoiser, a color look) only loses that feature.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderSetting {
    Engine(RenderEngine),
    Samples(u32),
    AdaptiveSampling(bool),
    Resolution { width: u32, height: u32 },
    ResolutionPercentage(u32),
    ViewTransform(String),
    Look(String),
    Denoising(bool),
    Denoiser(Denoiser),
    Device(ComputeDevice),
    WorldBackground([f32; 4]),
}

/// Discriminant of [`RenderSetting`], used to report and filter settings
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Engine,
    Samples,
    AdaptiveSampling,
    Resolution,
    ResolutionPercentage,
    ViewTransform,
    Look,
    Denoising,
    Denoiser,
    Device,
    WorldBackground,
}

impl RenderSetting {
    pub fn kind(&self) -> SettingKind {
        match self {
            RenderSetting::Engine(_) => SettingKind::Engine,
            RenderSetting::Samples(_) => SettingKind::Samples,
            RenderSetting::AdaptiveSampling(_) => SettingKind::AdaptiveSampling,
            RenderSetting::Resolution { .. } => SettingKind::Resolution,
            RenderSetting::ResolutionPercentage(_) => SettingKind::ResolutionPercentage,
            RenderSetting::ViewTransform(_) => SettingKind::ViewTransform,
            RenderSetting::Look(_) => SettingKind::Look,
            RenderSetting::Denoising(_) => SettingKind::Denoising,
            RenderSetting::Denoiser(_) => SettingKind::Denoiser,
            RenderSetting::Device(_) => SettingKind::Device,
            RenderSetting::WorldBackground(_) => SettingKind::WorldBackground,
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// === Transforms ===

/// Location and XYZ Euler rotation (radians) of an object
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn new(location: Vec3, rotation: Vec3) -> Self {
        Self { location, rotation }
    }
}
