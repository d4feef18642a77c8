use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use log::{debug, info};

use super::common::remove_tagged;
use crate::config::{CameraPreset, LightingPreset};
use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{AreaLight, ObjectId};

/// Every rig light carries this tag in its name
pub const LIGHT_TAG: &str = "Luz_";

/// One bar of the ring light, positioned relative to the camera's optical axis
#[derive(Clone, Debug, PartialEq)]
pub struct LightSpec {
    pub name: &'static str,
    /// World X of the bar center
    pub x: f32,
    /// World Z of the bar center
    pub z: f32,
    /// In-plane rotation about the light's Z axis
    pub rotation_z: f32,
    pub width: f32,
    pub height: f32,
    pub energy: f32,
    /// Radians
    pub spread: f32,
}

impl LightSpec {
    pub fn area_light(&self) -> AreaLight {
        AreaLight {
            energy: self.energy,
            size_x: self.width,
            size_y: self.height,
            spread: self.spread,
        }
    }
}

/// Y of the plane holding the bars, just in front of the camera
pub fn light_plane_y(camera: &CameraPreset, preset: &LightingPreset) -> f32 {
    -camera.distance + preset.margin
}

/// The four bars framing the lens: top and bottom lie horizontally, left and right vertically
pub fn ring_layout(camera: &CameraPreset, preset: &LightingPreset) -> [LightSpec; 4] {
    let (len, wid, offset) = (preset.bar_length, preset.bar_width, preset.center_offset);
    let center_z = camera.height;
    let bar = |name, x, z, width, height| LightSpec {
        name,
        x,
        z,
        rotation_z: 0.0,
        width,
        height,
        energy: preset.energy,
        spread: preset.spread_degrees.clamp(0.0, 180.0).to_radians(),
    };

    [
        bar("Luz_Top", 0.0, center_z + offset, len, wid),
        bar("Luz_Bottom", 0.0, center_z - offset, len, wid),
        bar("Luz_Left", -offset, center_z, wid, len),
        bar("Luz_Right", offset, center_z, wid, len),
    ]
}

/// Replace the ring light rig
///
/// All tagged lights from earlier runs go first, so a changed layout never
/// leaves stale bars behind. Bars are turned 90 degrees about X to emit along
/// +Y, the camera's viewing direction.
pub fn build_lighting_rig<H: SceneHost>(
    host: &mut H,
    camera: &CameraPreset,
    preset: &LightingPreset,
) -> Result<Vec<ObjectId>, HostError> {
    let removed = remove_tagged(host, LIGHT_TAG)?;
    if removed > 0 {
        debug!("Removed {} stale rig lights", removed);
    }

    let y = light_plane_y(camera, preset);
    let mut ids = Vec::with_capacity(4);
    for bar in ring_layout(camera, preset) {
        let id = host.create_area_light(bar.name, &bar.area_light())?;
        host.set_location(id, Vec3::new(bar.x, y, bar.z))?;
        host.set_rotation(id, Vec3::new(FRAC_PI_2, 0.0, bar.rotation_z))?;
        ids.push(id);
    }

    info!(
        "Ring light built: 4 bars x {} W, spread {} deg",
        preset.energy, preset.spread_degrees
    );
    Ok(ids)
}
