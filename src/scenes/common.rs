use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{MaterialId, ObjectId, SocketValue};

/// Objects holding `material` in any of their slots
pub fn material_users<H: SceneHost>(host: &H, material: MaterialId) -> Result<Vec<ObjectId>, HostError> {
    let mut users = Vec::new();
    for name in host.object_names() {
        if let Some(id) = host.find_object(&name) {
            if host.material_slots(id)?.contains(&material) {
                users.push(id);
            }
        }
    }
    Ok(users)
}

/// Delete every object whose name contains `tag`; returns how many went
pub fn remove_tagged<H: SceneHost>(host: &mut H, tag: &str) -> Result<usize, HostError> {
    let stale: Vec<String> = host
        .object_names()
        .into_iter()
        .filter(|name| name.contains(tag))
        .collect();

    for name in &stale {
        if let Some(id) = host.find_object(name) {
            host.remove_object(id)?;
        }
    }
    Ok(stale.len())
}

/// Existing material with this name, or a fresh one
pub fn find_or_create_material<H: SceneHost>(host: &mut H, name: &str) -> Result<MaterialId, HostError> {
    match host.find_material(name) {
        Some(id) => Ok(id),
        None => host.create_material(name),
    }
}

/// Principled BSDF inputs shared by every preset
pub struct SurfaceInputs {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

/// Write surface inputs to the material's principled node
///
/// Returns `false` when the material has no principled node to write to.
pub fn set_surface<H: SceneHost>(
    host: &mut H,
    material: MaterialId,
    inputs: &SurfaceInputs,
) -> Result<bool, HostError> {
    let Some(bsdf) = host.principled_node(material) else {
        return Ok(false);
    };

    host.set_node_input(material, bsdf, "Base Color", SocketValue::Color(inputs.base_color))?;
    host.set_node_input(material, bsdf, "Metallic", SocketValue::Float(inputs.metallic))?;
    host.set_node_input(material, bsdf, "Roughness", SocketValue::Float(inputs.roughness))?;
    Ok(true)
}
