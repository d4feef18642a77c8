use glam::{Mat3, Vec2, Vec3};

/// Rotation matrix of an XYZ Euler triple: X is applied first, then Y, then Z
pub fn euler_xyz_matrix(rotation: Vec3) -> Mat3 {
    Mat3::from_rotation_z(rotation.z) * Mat3::from_rotation_y(rotation.y) * Mat3::from_rotation_x(rotation.x)
}

/// Pinhole camera that looks down its local -Z axis with +Y up
///
/// The sensor width is fitted to the image width, matching how the host
/// frames square and landscape outputs.
#[derive(Copy, Clone, Debug)]
pub struct Pinhole {
    eye: Vec3,
    /// World-to-camera rotation
    view: Mat3,
    /// Focal length over sensor width
    zoom: f32,
    width: f32,
    height: f32,
}

impl Pinhole {
    const NEAR: f32 = 1e-4;

    pub fn new(
        eye: Vec3,
        rotation: Vec3,
        focal_length: f32,
        sensor_width: f32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            eye,
            view: euler_xyz_matrix(rotation).transpose(),
            zoom: focal_length / sensor_width,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Pixel coordinates of a world point, or `None` if it is behind the lens
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let local = self.view * (point - self.eye);
        let depth = -local.z;
        if depth <= Self::NEAR {
            return None;
        }

        let scale = self.zoom * self.width / depth;
        Some(Vec2::new(
            self.width * 0.5 + local.x * scale,
            self.height * 0.5 - local.y * scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn studio_camera() -> Pinhole {
        Pinhole::new(
            Vec3::new(0.0, -0.24, 0.0),
            Vec3::new(FRAC_PI_2, 0.0, 0.0),
            100.0,
            36.0,
            1000,
            1000,
        )
    }

    #[test]
    fn axis_point_hits_image_center() {
        let p = studio_camera().project(Vec3::ZERO).unwrap();
        assert!((p.x - 500.0).abs() < 1e-3);
        assert!((p.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn world_up_is_image_up() {
        let p = studio_camera().project(Vec3::new(0.0, 0.0, 0.01)).unwrap();
        assert!(p.y < 500.0);
    }

    #[test]
    fn world_right_is_image_right() {
        let p = studio_camera().project(Vec3::new(0.01, 0.0, 0.0)).unwrap();
        assert!(p.x > 500.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        assert!(studio_camera().project(Vec3::new(0.0, -0.5, 0.0)).is_none());
    }

    #[test]
    fn euler_x_quarter_turn_maps_minus_z_to_plus_y() {
        let m = euler_xyz_matrix(Vec3::new(FRAC_PI_2, 0.0, 0.0));
        let forward = m * Vec3::NEG_Z;
        assert!((forward - Vec3::Y).length() < 1e-6);
    }
}
