mod backdrop;
mod camera;
mod common;
mod lighting;
mod material;
mod settings;

pub use backdrop::{build_backdrop, BACKDROP_NAME};
pub use camera::{setup_camera, CAMERA_NAME};
pub use common::{material_users, remove_tagged};
pub use lighting::{build_lighting_rig, light_plane_y, ring_layout, LightSpec, LIGHT_TAG};
pub use material::assign_material;
pub use settings::{configure_scene, SettingWarning};
