use log::{info, warn};

use super::common::{find_or_create_material, set_surface, SurfaceInputs};
use crate::config::MaterialPreset;
use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{MaterialId, ObjectId};

/// Put the preset material in slot 0 of `target`
///
/// The material is looked up by name and reused, so repeated runs keep a
/// single datablock. Slot 0 is overwritten if present, appended otherwise.
pub fn assign_material<H: SceneHost>(
    host: &mut H,
    target: ObjectId,
    preset: &MaterialPreset,
) -> Result<MaterialId, HostError> {
    let material = find_or_create_material(host, &preset.name)?;

    let inputs = SurfaceInputs {
        base_color: preset.base_color,
        metallic: preset.metallic,
        roughness: preset.roughness,
    };
    if !set_surface(host, material, &inputs)? {
        warn!("Material '{}' has no principled BSDF; assigned unchanged", preset.name);
    }

    if host.material_slots(target)?.is_empty() {
        host.append_material(target, material)?;
    } else {
        host.set_material_slot(target, 0, material)?;
    }

    info!(
        "Material '{}' assigned (metallic {:.2}, roughness {:.2})",
        preset.name, preset.metallic, preset.roughness
    );
    Ok(material)
}
