use glam::Vec3;
use turntable_capture::config::{BackdropPreset, CameraPreset, LightingPreset, MaterialPreset};
use turntable_capture::core::{MemoryHost, ObjectData};
use turntable_capture::scenes::{
    assign_material, build_backdrop, build_lighting_rig, setup_camera, BACKDROP_NAME, CAMERA_NAME,
    LIGHT_TAG,
};
use turntable_capture::traits::SceneHost;

const LIGHT_NAMES: [&str; 4] = ["Luz_Top", "Luz_Bottom", "Luz_Left", "Luz_Right"];

fn lights_in(host: &MemoryHost) -> usize {
    host.object_names().iter().filter(|n| n.contains(LIGHT_TAG)).count()
}

#[cfg(test)]
mod rebuild_tests {
    use super::*;

    #[test]
    fn test_lighting_rig_rebuilt_three_times() {
        let mut host = MemoryHost::new();
        for _ in 0..3 {
            build_lighting_rig(&mut host, &CameraPreset::default(), &LightingPreset::default()).unwrap();
        }

        assert_eq!(lights_in(&host), 4);
        for name in LIGHT_NAMES {
            assert!(host.find_object(name).is_some(), "{} should exist without suffix", name);
            assert_eq!(host.count_named(name), 1);
        }
    }

    #[test]
    fn test_stray_tagged_lights_are_swept() {
        let mut host = MemoryHost::new();
        host.create_camera("Luz_Old_Camera").unwrap();
        host.add_mesh("Luz_Top.001", Vec3::ONE);

        build_lighting_rig(&mut host, &CameraPreset::default(), &LightingPreset::default()).unwrap();

        assert_eq!(lights_in(&host), 4);
        assert!(host.find_object("Luz_Old_Camera").is_none());
    }

    #[test]
    fn test_preset_switch_replaces_bars() {
        let mut host = MemoryHost::new();
        let camera = CameraPreset::default();
        build_lighting_rig(&mut host, &camera, &LightingPreset::default()).unwrap();
        build_lighting_rig(&mut host, &camera, &LightingPreset::compact_ring()).unwrap();

        let top = host.find_object("Luz_Top").unwrap();
        let ObjectData::Light(light) = host.object(top).unwrap().data else {
            panic!("Luz_Top is not a light");
        };
        assert_eq!(light.energy, 150.0);
        assert!((host.location(top).unwrap().y - (-0.24 + 0.01)).abs() < 1e-6);
    }

    #[test]
    fn test_backdrop_rebuilt_keeps_single_plane_and_material() {
        let mut host = MemoryHost::new();
        let preset = BackdropPreset::default();
        for _ in 0..3 {
            build_backdrop(&mut host, &preset).unwrap();
        }

        assert_eq!(host.count_named(BACKDROP_NAME), 1);
        assert_eq!(host.count_materials_named(&preset.material_name), 1);
        let plane = host.find_object(BACKDROP_NAME).unwrap();
        assert_eq!(host.material_slots(plane).unwrap().len(), 1);
    }

    #[test]
    fn test_camera_upsert_keeps_one_camera() {
        let mut host = MemoryHost::new();
        let first = setup_camera(&mut host, &CameraPreset::default()).unwrap();
        let second = setup_camera(&mut host, &CameraPreset::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(host.count_named(CAMERA_NAME), 1);
        assert_eq!(host.active_camera(), Some(first));
    }

    #[test]
    fn test_material_reused_across_runs() {
        let mut host = MemoryHost::new();
        let drill = host.add_mesh("Drill", Vec3::ONE);
        let preset = MaterialPreset::default();

        let first = assign_material(&mut host, drill, &preset).unwrap();
        let second = assign_material(&mut host, drill, &preset).unwrap();

        assert_eq!(first, second);
        assert_eq!(host.count_materials_named(&preset.name), 1);
        assert_eq!(host.material_slots(drill).unwrap(), vec![first]);
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_ring_brackets_camera_axis() {
        let camera = CameraPreset::default();
        let mut host = MemoryHost::new();
        build_lighting_rig(&mut host, &camera, &LightingPreset::default()).unwrap();

        let at = |name: &str| host.location(host.find_object(name).unwrap()).unwrap();
        assert!(at("Luz_Top").z > camera.height);
        assert!(at("Luz_Bottom").z < camera.height);
        assert!(at("Luz_Left").x < 0.0);
        assert!(at("Luz_Right").x > 0.0);
        assert!((at("Luz_Top").z - camera.height - 0.07).abs() < 1e-6);
    }
}
