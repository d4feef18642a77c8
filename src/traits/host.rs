use std::path::Path;

use glam::Vec3;

use crate::error::HostError;
use crate::types::{
    AreaLight, CameraLens, MaterialId, NodeId, NodeKind, ObjectId, ObjectKind, RenderSetting,
    SocketValue,
};

/// Object-graph contract of the 3D host driving the capture
///
/// Every builder and the capture loop receive the host explicitly instead of
/// reading ambient scene state, so any implementation of this trait (a live
/// host binding or [`MemoryHost`](crate::core::MemoryHost)) can run the pipeline.
///
/// Object and material names form a single flat namespace each. Creating an
/// object under a name that is already taken is allowed; hosts resolve the
/// clash by renaming the new object (`Name.001`), which is the drift the
/// builders avoid by looking names up first.
pub trait SceneHost {
    // --- Object namespace ---

    /// Look up a live object by exact name
    fn find_object(&self, name: &str) -> Option<ObjectId>;

    /// Names of all live objects
    fn object_names(&self) -> Vec<String>;

    fn object_name(&self, id: ObjectId) -> Result<String, HostError>;

    fn object_kind(&self, id: ObjectId) -> Result<ObjectKind, HostError>;

    /// Object currently selected by the user, if any
    fn active_object(&self) -> Option<ObjectId>;

    /// Make an object the active one
    fn set_active_object(&mut self, id: ObjectId) -> Result<(), HostError>;

    /// Create a camera object and link it into the active collection
    fn create_camera(&mut self, name: &str) -> Result<ObjectId, HostError>;

    /// Create a rectangular area light object and link it into the active collection
    fn create_area_light(&mut self, name: &str, light: &AreaLight) -> Result<ObjectId, HostError>;

    /// Add a square plane primitive of the given edge length
    fn add_plane(&mut self, name: &str, size: f32) -> Result<ObjectId, HostError>;

    /// Unlink and delete an object
    fn remove_object(&mut self, id: ObjectId) -> Result<(), HostError>;

    // --- Transforms ---

    fn location(&self, id: ObjectId) -> Result<Vec3, HostError>;

    fn set_location(&mut self, id: ObjectId, location: Vec3) -> Result<(), HostError>;

    /// XYZ Euler rotation in radians
    fn rotation(&self, id: ObjectId) -> Result<Vec3, HostError>;

    fn set_rotation(&mut self, id: ObjectId, rotation: Vec3) -> Result<(), HostError>;

    // --- Object data ---

    fn set_camera_lens(&mut self, id: ObjectId, lens: &CameraLens) -> Result<(), HostError>;

    fn set_active_camera(&mut self, id: ObjectId) -> Result<(), HostError>;

    /// Toggle whether glossy rays can see the object
    fn set_visible_glossy(&mut self, id: ObjectId, visible: bool) -> Result<(), HostError>;

    // --- Materials ---

    fn find_material(&self, name: &str) -> Option<MaterialId>;

    fn material_names(&self) -> Vec<String>;

    /// Create a node-based material seeded with a principled BSDF wired to an output
    fn create_material(&mut self, name: &str) -> Result<MaterialId, HostError>;

    fn remove_material(&mut self, id: MaterialId) -> Result<(), HostError>;

    /// The principled BSDF node of a material, if it still has one
    fn principled_node(&self, material: MaterialId) -> Option<NodeId>;

    fn add_node(&mut self, material: MaterialId, kind: NodeKind) -> Result<NodeId, HostError>;

    fn set_node_input(
        &mut self,
        material: MaterialId,
        node: NodeId,
        socket: &str,
        value: SocketValue,
    ) -> Result<(), HostError>;

    /// Connect `from`'s output socket to `to`'s input socket
    fn link_nodes(
        &mut self,
        material: MaterialId,
        from: (NodeId, &str),
        to: (NodeId, &str),
    ) -> Result<(), HostError>;

    fn material_slots(&self, object: ObjectId) -> Result<Vec<MaterialId>, HostError>;

    fn append_material(&mut self, object: ObjectId, material: MaterialId) -> Result<(), HostError>;

    fn set_material_slot(
        &mut self,
        object: ObjectId,
        slot: usize,
        material: MaterialId,
    ) -> Result<(), HostError>;

    // --- Scene settings and rendering ---

    fn apply_render_setting(&mut self, setting: &RenderSetting) -> Result<(), HostError>;

    fn set_render_filepath(&mut self, path: &Path) -> Result<(), HostError>;

    /// Render the active camera and write the still to the configured path
    ///
    /// Blocks until the file is written.
    fn render_still(&mut self) -> Result<(), HostError>;
}
