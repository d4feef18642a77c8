use log::info;

use super::capture::{CaptureLoop, CaptureSummary};
use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::scenes::{
    assign_material, build_backdrop, build_lighting_rig, configure_scene, setup_camera, SettingWarning,
    BACKDROP_NAME, CAMERA_NAME, LIGHT_TAG,
};
use crate::traits::SceneHost;
use crate::types::{ObjectId, ObjectKind};

/// Everything a finished run reports back
#[derive(Debug)]
pub struct PipelineReport {
    /// Name of the photographed mesh
    pub target: String,
    /// Render settings the host refused
    pub warnings: Vec<SettingWarning>,
    pub capture: CaptureSummary,
}

/// Whether `name` belongs to an object the builders own and rebuild
pub fn is_rig_object(name: &str) -> bool {
    name == BACKDROP_NAME || name == CAMERA_NAME || name.contains(LIGHT_TAG)
}

/// The host's active object, provided it is a mesh outside the capture rig
pub fn select_target<H: SceneHost>(host: &H) -> Result<(ObjectId, String), CaptureError> {
    let target = host.active_object().ok_or(CaptureError::NoTarget)?;
    let name = host.object_name(target)?;
    let kind = host.object_kind(target)?;
    if kind != ObjectKind::Mesh {
        return Err(CaptureError::NotAMesh { name, kind });
    }
    if is_rig_object(&name) {
        return Err(CaptureError::RigObject { name });
    }
    Ok((target, name))
}

/// Stage the studio around the active mesh and capture the turntable batch
///
/// The target and the configuration are checked before the scene is touched.
pub fn run_pipeline<H: SceneHost>(host: &mut H, config: &CaptureConfig) -> Result<PipelineReport, CaptureError> {
    config.validate()?;
    let (target, name) = select_target(host)?;
    info!("Target: '{}'", name);

    let warnings = configure_scene(host, config);
    assign_material(host, target, &config.material)?;

    if let Some(backdrop) = &config.backdrop {
        build_backdrop(host, backdrop)?;
    }
    build_lighting_rig(host, &config.camera, &config.lighting)?;
    setup_camera(host, &config.camera)?;

    let capture = CaptureLoop::new(config).run(host, target)?;

    Ok(PipelineReport {
        target: name,
        warnings,
        capture,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryHost;
    use glam::Vec3;

    #[test]
    fn camera_target_rejected_without_mutation() {
        let mut host = MemoryHost::new();
        let cam = host.create_camera("Cam").unwrap();
        host.select(cam);
        let before = host.object_names();

        let err = run_pipeline(&mut host, &CaptureConfig::default()).unwrap_err();
        assert!(matches!(err, CaptureError::NotAMesh { kind: ObjectKind::Camera, .. }));
        assert_eq!(host.object_names(), before);
        assert!(host.material_names().is_empty());
    }

    #[test]
    fn rig_names_are_recognized() {
        assert!(is_rig_object("Blister_Plane"));
        assert!(is_rig_object("Camera_QC"));
        assert!(is_rig_object("Luz_Left"));
        assert!(is_rig_object("Luz_Top.001"));
        assert!(!is_rig_object("Drill"));
        assert!(!is_rig_object("Blister_Plane_Spare"));
    }

    #[test]
    fn no_selection_is_reported() {
        let mut host = MemoryHost::new();
        host.add_mesh("Drill", Vec3::ONE);

        let err = run_pipeline(&mut host, &CaptureConfig::default()).unwrap_err();
        assert!(matches!(err, CaptureError::NoTarget));
    }
}
