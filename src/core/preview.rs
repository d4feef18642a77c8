use glam::{Vec2, Vec3};

use super::canvas::{Canvas, DrawOp, Rgba8};
use super::memory_host::{MemoryHost, ObjectData, SceneObject};
use crate::error::HostError;
use crate::math::{euler_xyz_matrix, rgba_to_srgb8, Pinhole};
use crate::types::{ObjectId, ObjectKind};

/// Grey used for meshes without a material
const UNSHADED: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Bar energy at which wireframe edges reach full brightness
const FULL_LIGHT_WATTS: f32 = 60.0;

/// Box edges as corner index pairs; corner bit 0 = +X, bit 1 = +Y, bit 2 = +Z
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7),
    (0, 2), (1, 3), (4, 6), (5, 7),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Rasterize the scene as seen from `camera`
///
/// Flat meshes (planes) are filled with their base color; every other mesh is
/// drawn as its oriented bounding box, brightened by the total area-light power
/// in the scene, with a dot on its local +X face so the turntable angle reads
/// off each frame.
pub fn render_preview(host: &MemoryHost, camera: ObjectId) -> Result<Canvas, HostError> {
    let cam = host.object(camera).ok_or(HostError::ObjectNotFound(camera))?;
    let ObjectData::Camera(lens) = cam.data else {
        return Err(HostError::WrongKind {
            name: cam.name.clone(),
            expected: ObjectKind::Camera,
            actual: cam.kind(),
        });
    };

    let settings = host.settings();
    let (width, height) = settings.output_size();
    let pinhole = Pinhole::new(
        cam.transform.location,
        cam.transform.rotation,
        lens.focal_length,
        lens.sensor_width,
        width,
        height,
    );

    let light_level = (total_light_energy(host) / FULL_LIGHT_WATTS).min(1.0);
    let mut canvas = Canvas::new(width, height).draw(DrawOp::Clear(rgba_to_srgb8(settings.world_background)));

    // Planes first so solids draw over the backdrop
    let (flat, solid): (Vec<_>, Vec<_>) = host
        .objects()
        .filter_map(|(_, obj)| match obj.data {
            ObjectData::Mesh { dimensions } => Some((obj, dimensions)),
            _ => None,
        })
        .partition(|(_, dims)| dims.min_element() <= f32::EPSILON);

    for (obj, dims) in flat {
        let color = rgba_to_srgb8(base_color(host, obj));
        let quad = [(0, 0), (1, 0), (1, 1), (0, 1)]
            .iter()
            .map(|&(sx, sy)| corner(obj, dims, sx as f32, sy as f32, 0.5))
            .map(|p| pinhole.project(p).map(to_pixel))
            .collect::<Option<Vec<_>>>();
        if let Some(points) = quad {
            canvas.push(DrawOp::FilledPolygon { points, color });
        }
    }

    for (obj, dims) in solid {
        let color = lit(base_color(host, obj), light_level);
        let corners: Vec<Option<Vec2>> = (0..8)
            .map(|bits| {
                let (sx, sy, sz) = ((bits & 1) as f32, ((bits >> 1) & 1) as f32, ((bits >> 2) & 1) as f32);
                pinhole.project(corner(obj, dims, sx, sy, sz))
            })
            .collect();

        for (a, b) in BOX_EDGES {
            if let (Some(pa), Some(pb)) = (corners[a], corners[b]) {
                let (x1, y1) = to_pixel(pa);
                let (x2, y2) = to_pixel(pb);
                canvas.push(DrawOp::Line { x1, y1, x2, y2, color });
            }
        }

        let front = obj.transform.location + euler_xyz_matrix(obj.transform.rotation) * Vec3::new(dims.x * 0.5, 0.0, 0.0);
        if let Some(p) = pinhole.project(front) {
            let (cx, cy) = to_pixel(p);
            let radius = (width.min(height) / 200).max(1) as i32;
            canvas.push(DrawOp::FilledCircle { cx, cy, radius, color });
        }
    }

    Ok(canvas.execute_ops())
}

/// World position of a bounding-box corner; `s*` are 0 or 1 per axis
fn corner(obj: &SceneObject, dims: Vec3, sx: f32, sy: f32, sz: f32) -> Vec3 {
    let local = Vec3::new(sx - 0.5, sy - 0.5, sz - 0.5) * dims;
    obj.transform.location + euler_xyz_matrix(obj.transform.rotation) * local
}

fn to_pixel(p: Vec2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn base_color(host: &MemoryHost, obj: &SceneObject) -> [f32; 4] {
    obj.material_slots
        .first()
        .and_then(|id| host.material(*id))
        .and_then(|m| m.base_color())
        .unwrap_or(UNSHADED)
}

fn total_light_energy(host: &MemoryHost) -> f32 {
    host.objects()
        .filter_map(|(_, obj)| match obj.data {
            ObjectData::Light(light) => Some(light.energy),
            _ => None,
        })
        .sum()
}

/// Lift a base color toward white by the light level so dark metals stay visible
fn lit(color: [f32; 4], level: f32) -> Rgba8 {
    let lift = |c: f32| c + (1.0 - c) * 0.7 * level;
    rgba_to_srgb8([lift(color[0]), lift(color[1]), lift(color[2]), 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SceneHost;
    use crate::types::{AreaLight, CameraLens};
    use std::f32::consts::FRAC_PI_2;

    fn studio() -> (MemoryHost, ObjectId) {
        let mut host = MemoryHost::new().without_images();
        host.apply_render_setting(&crate::types::RenderSetting::Resolution { width: 64, height: 64 })
            .unwrap();
        let cam = host.create_camera("Cam").unwrap();
        host.set_camera_lens(cam, &CameraLens { focal_length: 50.0, sensor_width: 36.0 }).unwrap();
        host.set_location(cam, Vec3::new(0.0, -1.0, 0.0)).unwrap();
        host.set_rotation(cam, Vec3::new(FRAC_PI_2, 0.0, 0.0)).unwrap();
        host.set_active_camera(cam).unwrap();
        (host, cam)
    }

    #[test]
    fn empty_scene_is_background() {
        let (host, cam) = studio();
        let canvas = render_preview(&host, cam).unwrap();

        assert_eq!(canvas.dimensions(), (64, 64));
        let bg = rgba_to_srgb8(host.settings().world_background);
        assert_eq!(canvas.pixel(32, 32), Some(bg));
    }

    #[test]
    fn plane_fills_center() {
        let (mut host, cam) = studio();
        let plane = host.add_plane("Backdrop", 2.0).unwrap();
        host.set_rotation(plane, Vec3::new(FRAC_PI_2, 0.0, 0.0)).unwrap();

        let canvas = render_preview(&host, cam).unwrap();
        assert_eq!(canvas.pixel(32, 32), Some(rgba_to_srgb8(UNSHADED)));
    }

    #[test]
    fn rotation_changes_the_frame() {
        let (mut host, cam) = studio();
        let mesh = host.add_mesh("Drill", Vec3::new(0.4, 0.1, 0.1));

        let first = render_preview(&host, cam).unwrap();
        host.set_rotation(mesh, Vec3::new(0.0, 0.0, 0.7)).unwrap();
        let second = render_preview(&host, cam).unwrap();

        assert_ne!(first.pixels(), second.pixels());
    }

    #[test]
    fn lights_brighten_edges() {
        assert!(lit([0.02; 4], 1.0)[0] > lit([0.02; 4], 0.0)[0]);

        let (mut host, _) = studio();
        let light = AreaLight { energy: 30.0, size_x: 0.1, size_y: 0.1, spread: 1.0 };
        host.create_area_light("Key", &light).unwrap();
        host.create_area_light("Fill", &light).unwrap();
        assert_eq!(total_light_energy(&host), 60.0);
    }

    #[test]
    fn non_camera_rejected() {
        let (mut host, _) = studio();
        let mesh = host.add_mesh("Drill", Vec3::ONE);
        assert!(matches!(render_preview(&host, mesh), Err(HostError::WrongKind { .. })));
    }
}
