use glam::Vec3;
use log::{debug, info, warn};

use super::common::{material_users, set_surface, SurfaceInputs};
use crate::config::BackdropPreset;
use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{NodeKind, ObjectId, SocketValue};

/// Reserved name of the backdrop plane
pub const BACKDROP_NAME: &str = "Blister_Plane";

/// Rebuild the textured backdrop plane behind the subject
///
/// Any previous plane is deleted first, along with its materials and the
/// preset-named material, unless another object still uses them. The plane is
/// hidden from glossy rays so it never shows up as a reflection on a metallic
/// subject. The host's selection is left where it was.
pub fn build_backdrop<H: SceneHost>(host: &mut H, preset: &BackdropPreset) -> Result<ObjectId, HostError> {
    let selection = host.active_object();
    let old_plane = host.find_object(BACKDROP_NAME);

    let mut stale = match old_plane {
        Some(plane) => host.material_slots(plane)?,
        None => Vec::new(),
    };
    if let Some(named) = host.find_material(&preset.material_name) {
        if !stale.contains(&named) {
            stale.push(named);
        }
    }
    if let Some(plane) = old_plane {
        host.remove_object(plane)?;
        debug!("Removed existing '{}'", BACKDROP_NAME);
    }
    for material in stale {
        if material_users(host, material)?.is_empty() {
            host.remove_material(material)?;
        } else {
            warn!("Backdrop material {:?} is shared with other objects; left in place", material);
        }
    }

    let plane = host.add_plane(BACKDROP_NAME, preset.size)?;
    host.set_location(plane, preset.location)?;
    host.set_rotation(plane, Vec3::new(preset.tilt_degrees.to_radians(), 0.0, 0.0))?;
    host.set_visible_glossy(plane, false)?;

    let material = host.create_material(&preset.material_name)?;
    let surface = SurfaceInputs {
        base_color: preset.base_color,
        metallic: preset.metallic,
        roughness: preset.roughness,
    };

    // Fine noise through a bump node gives the plastic its grain
    if set_surface(host, material, &surface)? {
        if let Some(bsdf) = host.principled_node(material) {
            let noise = host.add_node(material, NodeKind::NoiseTexture)?;
            host.set_node_input(material, noise, "Scale", SocketValue::Float(preset.noise_scale))?;
            host.set_node_input(material, noise, "Detail", SocketValue::Float(preset.noise_detail))?;

            let bump = host.add_node(material, NodeKind::Bump)?;
            host.set_node_input(material, bump, "Strength", SocketValue::Float(preset.bump_strength))?;

            host.link_nodes(material, (noise, "Fac"), (bump, "Height"))?;
            host.link_nodes(material, (bump, "Normal"), (bsdf, "Normal"))?;
        }
    }
    host.append_material(plane, material)?;

    // Adding a primitive selects it
    if let Some(previous) = selection.filter(|id| Some(*id) != old_plane) {
        host.set_active_object(previous)?;
    }

    info!("Backdrop '{}' created ({} m plane)", BACKDROP_NAME, preset.size);
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryHost;

    #[test]
    fn plane_is_glossy_invisible_and_upright() {
        let mut host = MemoryHost::new();
        let plane = build_backdrop(&mut host, &BackdropPreset::default()).unwrap();

        let obj = host.object(plane).unwrap();
        assert!(!obj.visible_glossy);
        assert!((obj.transform.rotation.x - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(obj.transform.location, Vec3::new(0.0, 0.02, 0.0));
    }

    #[test]
    fn selection_survives_rebuild() {
        let mut host = MemoryHost::new();
        let drill = host.add_mesh("Drill", Vec3::ONE);
        host.select(drill);

        build_backdrop(&mut host, &BackdropPreset::default()).unwrap();
        build_backdrop(&mut host, &BackdropPreset::default()).unwrap();

        assert_eq!(host.active_object(), Some(drill));
    }

    #[test]
    fn shared_material_is_not_stripped() {
        let mut host = MemoryHost::new();
        let preset = BackdropPreset::default();
        let tray = host.add_mesh("Tray", Vec3::ONE);
        let shared = host.create_material(&preset.material_name).unwrap();
        host.append_material(tray, shared).unwrap();

        build_backdrop(&mut host, &preset).unwrap();
        let plane = build_backdrop(&mut host, &preset).unwrap();

        assert_eq!(host.material_slots(tray).unwrap(), vec![shared]);
        assert!(host.material(shared).is_some());
        assert_ne!(host.material_slots(plane).unwrap()[0], shared);
        // The backdrop's own copy is replaced, not accumulated
        assert_eq!(host.count_materials_named(&preset.material_name), 2);
    }

    #[test]
    fn bump_chain_reaches_bsdf_normal() {
        let mut host = MemoryHost::new();
        let preset = BackdropPreset::default();
        let plane = build_backdrop(&mut host, &preset).unwrap();

        let mat_id = host.material_slots(plane).unwrap()[0];
        let mat = host.material(mat_id).unwrap();
        let noise = mat.node_of_kind(NodeKind::NoiseTexture).unwrap();
        let bump = mat.node_of_kind(NodeKind::Bump).unwrap();
        let bsdf = mat.node_of_kind(NodeKind::PrincipledBsdf).unwrap();

        assert!(mat.links.iter().any(|l| l.from == (noise, "Fac".to_string()) && l.to == (bump, "Height".to_string())));
        assert!(mat.links.iter().any(|l| l.from == (bump, "Normal".to_string()) && l.to == (bsdf, "Normal".to_string())));
        assert_eq!(mat.input(noise, "Scale"), Some(SocketValue::Float(preset.noise_scale)));
        assert_eq!(mat.input(bump, "Strength"), Some(SocketValue::Float(preset.bump_strength)));
    }
}
