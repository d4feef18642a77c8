use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use log::info;

use crate::config::CameraPreset;
use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{CameraLens, ObjectId};

/// Reserved name of the capture camera
pub const CAMERA_NAME: &str = "Camera_QC";

/// Create or update the capture camera and make it the active one
///
/// The camera sits at `(0, -distance, height)` and looks along +Y with no
/// roll or yaw.
pub fn setup_camera<H: SceneHost>(host: &mut H, preset: &CameraPreset) -> Result<ObjectId, HostError> {
    let camera = match host.find_object(CAMERA_NAME) {
        Some(id) => id,
        None => host.create_camera(CAMERA_NAME)?,
    };

    let lens = CameraLens {
        focal_length: preset.focal_length,
        sensor_width: preset.sensor_width,
    };
    host.set_camera_lens(camera, &lens)?;
    host.set_location(camera, Vec3::new(0.0, -preset.distance, preset.height))?;
    host.set_rotation(camera, Vec3::new(FRAC_PI_2, 0.0, 0.0))?;
    host.set_active_camera(camera)?;

    info!(
        "Camera '{}' at {:.3} m with {} mm lens",
        CAMERA_NAME, preset.distance, preset.focal_length
    );
    Ok(camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryHost, ObjectData};

    #[test]
    fn camera_is_placed_and_active() {
        let mut host = MemoryHost::new();
        let preset = CameraPreset::default();
        let cam = setup_camera(&mut host, &preset).unwrap();

        let obj = host.object(cam).unwrap();
        assert_eq!(obj.transform.location, Vec3::new(0.0, -0.24, -0.0175));
        assert_eq!(obj.transform.rotation, Vec3::new(FRAC_PI_2, 0.0, 0.0));
        assert_eq!(obj.data, ObjectData::Camera(CameraLens { focal_length: 100.0, sensor_width: 36.0 }));
        assert_eq!(host.active_camera(), Some(cam));
    }

    #[test]
    fn existing_camera_is_updated_in_place() {
        let mut host = MemoryHost::new();
        let first = setup_camera(&mut host, &CameraPreset::default()).unwrap();

        let closer = CameraPreset {
            distance: 0.2,
            ..CameraPreset::default()
        };
        let second = setup_camera(&mut host, &closer).unwrap();

        assert_eq!(first, second);
        assert_eq!(host.location(second).unwrap().y, -0.2);
    }

    #[test]
    fn non_camera_with_reserved_name_is_an_error() {
        let mut host = MemoryHost::new();
        host.add_mesh(CAMERA_NAME, Vec3::ONE);

        let err = setup_camera(&mut host, &CameraPreset::default()).unwrap_err();
        assert!(matches!(err, HostError::WrongKind { .. }));
    }
}
