mod angle;
mod color;
mod projection;

pub use angle::{frame_angle, index_width, step_degrees};
pub use color::{linear_to_srgb8, rgba_to_srgb8};
pub use projection::{euler_xyz_matrix, Pinhole};
