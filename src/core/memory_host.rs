use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use glam::Vec3;
use log::{debug, trace};

use super::preview;
use crate::error::HostError;
use crate::traits::SceneHost;
use crate::types::{
    AreaLight, CameraLens, ComputeDevice, Denoiser, MaterialId, NodeId, NodeKind, ObjectId,
    ObjectKind, RenderEngine, RenderSetting, SettingKind, SocketValue, Transform,
};

// === Scene data ===

/// Datablock attached to an object
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectData {
    /// Mesh summarized by its local bounding-box extent
    Mesh { dimensions: Vec3 },
    Camera(CameraLens),
    Light(AreaLight),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
    pub transform: Transform,
    pub visible_glossy: bool,
    pub material_slots: Vec<MaterialId>,
}

impl SceneObject {
    fn new(name: String, data: ObjectData) -> Self {
        Self {
            name,
            data,
            transform: Transform::default(),
            visible_glossy: true,
            material_slots: Vec::new(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self.data {
            ObjectData::Mesh { .. } => ObjectKind::Mesh,
            ObjectData::Camera(_) => ObjectKind::Camera,
            ObjectData::Light(_) => ObjectKind::Light,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub inputs: BTreeMap<String, SocketValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeLink {
    pub from: (NodeId, String),
    pub to: (NodeId, String),
}

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub nodes: BTreeMap<NodeId, Node>,
    pub links: Vec<NodeLink>,
    next_node: u32,
}

impl Material {
    fn new(name: String) -> Self {
        Self {
            name,
            nodes: BTreeMap::new(),
            links: Vec::new(),
            next_node: 0,
        }
    }

    fn insert_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;

        let inputs = match kind {
            NodeKind::PrincipledBsdf => BTreeMap::from([
                ("Base Color".to_string(), SocketValue::Color([0.8, 0.8, 0.8, 1.0])),
                ("Metallic".to_string(), SocketValue::Float(0.0)),
                ("Roughness".to_string(), SocketValue::Float(0.5)),
            ]),
            NodeKind::NoiseTexture => BTreeMap::from([
                ("Scale".to_string(), SocketValue::Float(5.0)),
                ("Detail".to_string(), SocketValue::Float(2.0)),
            ]),
            NodeKind::Bump => BTreeMap::from([
                ("Strength".to_string(), SocketValue::Float(1.0)),
                ("Distance".to_string(), SocketValue::Float(1.0)),
            ]),
            NodeKind::MaterialOutput => BTreeMap::new(),
        };
        self.nodes.insert(id, Node { kind, inputs });
        id
    }

    /// First node of the given kind
    pub fn node_of_kind(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes.iter().find(|(_, n)| n.kind == kind).map(|(id, _)| *id)
    }

    pub fn input(&self, node: NodeId, socket: &str) -> Option<SocketValue> {
        self.nodes.get(&node)?.inputs.get(socket).copied()
    }

    /// Base color of the principled node, if any
    pub fn base_color(&self) -> Option<[f32; 4]> {
        let node = self.node_of_kind(NodeKind::PrincipledBsdf)?;
        match self.input(node, "Base Color")? {
            SocketValue::Color(c) => Some(c),
            SocketValue::Float(v) => Some([v, v, v, 1.0]),
        }
    }
}

fn input_sockets(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::PrincipledBsdf => &["Base Color", "Metallic", "Roughness", "Normal"],
        NodeKind::NoiseTexture => &["Vector", "Scale", "Detail", "Roughness"],
        NodeKind::Bump => &["Strength", "Distance", "Height", "Normal"],
        NodeKind::MaterialOutput => &["Surface", "Volume", "Displacement"],
    }
}

fn output_sockets(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::PrincipledBsdf => &["BSDF"],
        NodeKind::NoiseTexture => &["Fac", "Color"],
        NodeKind::Bump => &["Normal"],
        NodeKind::MaterialOutput => &[],
    }
}

/// Scene-level render state
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub engine: RenderEngine,
    pub samples: u32,
    pub adaptive_sampling: bool,
    pub resolution: (u32, u32),
    pub resolution_percentage: u32,
    pub view_transform: String,
    pub look: String,
    pub denoising: bool,
    pub denoiser: Option<Denoiser>,
    pub device: ComputeDevice,
    pub world_background: [f32; 4],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            engine: RenderEngine::Eevee,
            samples: 64,
            adaptive_sampling: false,
            resolution: (1920, 1080),
            resolution_percentage: 100,
            view_transform: "Standard".to_string(),
            look: "None".to_string(),
            denoising: false,
            denoiser: None,
            device: ComputeDevice::Cpu,
            world_background: [0.05, 0.05, 0.05, 1.0],
        }
    }
}

impl RenderSettings {
    /// Output size after the resolution percentage is applied
    pub fn output_size(&self) -> (u32, u32) {
        let scale = |v: u32| (v as u64 * self.resolution_percentage as u64 / 100).max(1) as u32;
        (scale(self.resolution.0), scale(self.resolution.1))
    }
}

/// One completed `render_still` call
#[derive(Clone, Debug)]
pub struct RenderRecord {
    pub path: PathBuf,
    pub camera: ObjectId,
    /// Euler rotation of every mesh at the moment of the render
    pub mesh_rotations: BTreeMap<ObjectId, Vec3>,
}

impl RenderRecord {
    pub fn rotation_of(&self, id: ObjectId) -> Option<Vec3> {
        self.mesh_rotations.get(&id).copied()
    }
}

// === Host ===

/// In-process scene graph implementing [`SceneHost`]
///
/// Renders are wireframe previews of every mesh seen through the active
/// camera, written as PNG. Hosts can be configured to reject settings or fail a
/// given render to exercise the pipeline's degraded paths.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    objects: BTreeMap<ObjectId, SceneObject>,
    materials: BTreeMap<MaterialId, Material>,
    next_object: u32,
    next_material: u32,
    active_object: Option<ObjectId>,
    active_camera: Option<ObjectId>,
    settings: RenderSettings,
    render_filepath: Option<PathBuf>,
    renders: Vec<RenderRecord>,
    unsupported: HashSet<SettingKind>,
    write_images: bool,
    fail_render_at: Option<usize>,
    rotation_writes: usize,
    fail_rotation_write_at: Option<usize>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            materials: BTreeMap::new(),
            next_object: 0,
            next_material: 0,
            active_object: None,
            active_camera: None,
            settings: RenderSettings::default(),
            render_filepath: None,
            renders: Vec::new(),
            unsupported: HashSet::new(),
            write_images: true,
            fail_render_at: None,
            rotation_writes: 0,
            fail_rotation_write_at: None,
        }
    }

    /// Skip image encoding; renders are only recorded
    pub fn without_images(mut self) -> Self {
        self.write_images = false;
        self
    }

    /// Reject a setting the way a host build lacking that feature would
    pub fn without_setting(mut self, kind: SettingKind) -> Self {
        self.unsupported.insert(kind);
        self
    }

    /// Fail the render call with this zero-based index
    pub fn fail_render_at(mut self, index: usize) -> Self {
        self.fail_render_at = Some(index);
        self
    }

    /// Fail the `set_rotation` call with this zero-based index
    pub fn fail_rotation_write_at(mut self, index: usize) -> Self {
        self.fail_rotation_write_at = Some(index);
        self
    }

    /// Add a mesh object whose local bounding box has the given extent
    pub fn add_mesh(&mut self, name: &str, dimensions: Vec3) -> ObjectId {
        self.insert_object(name, ObjectData::Mesh { dimensions })
    }

    /// Make an object the user's selection
    pub fn select(&mut self, id: ObjectId) {
        if self.objects.contains_key(&id) {
            self.active_object = Some(id);
        }
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn active_camera(&self) -> Option<ObjectId> {
        self.active_camera
    }

    pub fn render_filepath(&self) -> Option<&Path> {
        self.render_filepath.as_deref()
    }

    pub fn renders(&self) -> &[RenderRecord] {
        &self.renders
    }

    /// Number of live objects whose name equals `name` or is a `name.NNN` rename of it
    pub fn count_named(&self, name: &str) -> usize {
        self.objects.values().filter(|o| is_same_base(&o.name, name)).count()
    }

    /// Same as [`count_named`](Self::count_named) for materials
    pub fn count_materials_named(&self, name: &str) -> usize {
        self.materials.values().filter(|m| is_same_base(&m.name, name)).count()
    }

    fn insert_object(&mut self, name: &str, data: ObjectData) -> ObjectId {
        let unique = unique_name(name, self.objects.values().map(|o| o.name.as_str()));
        let id = ObjectId(self.next_object);
        self.next_object += 1;

        trace!("memory host: create {:?} '{}'", id, unique);
        self.objects.insert(id, SceneObject::new(unique, data));
        id
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, HostError> {
        self.objects.get_mut(&id).ok_or(HostError::ObjectNotFound(id))
    }

    fn get_object(&self, id: ObjectId) -> Result<&SceneObject, HostError> {
        self.objects.get(&id).ok_or(HostError::ObjectNotFound(id))
    }

    fn material_mut(&mut self, id: MaterialId) -> Result<&mut Material, HostError> {
        self.materials.get_mut(&id).ok_or(HostError::MaterialNotFound(id))
    }

    fn snapshot_mesh_rotations(&self) -> BTreeMap<ObjectId, Vec3> {
        self.objects
            .iter()
            .filter(|(_, o)| o.kind() == ObjectKind::Mesh)
            .map(|(id, o)| (*id, o.transform.rotation))
            .collect()
    }
}

/// `base`, or `base.001`, `base.002`, ... whichever is free first
fn unique_name<'a>(base: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    if !taken.clone().any(|n| n == base) {
        return base.to_string();
    }
    (1..)
        .map(|i| format!("{}.{:03}", base, i))
        .find(|candidate| !taken.clone().any(|n| n == candidate))
        .unwrap_or_else(|| base.to_string())
}

fn is_same_base(name: &str, base: &str) -> bool {
    match name.strip_prefix(base) {
        Some("") => true,
        Some(rest) => {
            rest.len() == 4 && rest.starts_with('.') && rest[1..].chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

impl SceneHost for MemoryHost {
    fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects.iter().find(|(_, o)| o.name == name).map(|(id, _)| *id)
    }

    fn object_names(&self) -> Vec<String> {
        self.objects.values().map(|o| o.name.clone()).collect()
    }

    fn object_name(&self, id: ObjectId) -> Result<String, HostError> {
        Ok(self.get_object(id)?.name.clone())
    }

    fn object_kind(&self, id: ObjectId) -> Result<ObjectKind, HostError> {
        Ok(self.get_object(id)?.kind())
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active_object.filter(|id| self.objects.contains_key(id))
    }

    fn set_active_object(&mut self, id: ObjectId) -> Result<(), HostError> {
        self.get_object(id)?;
        self.active_object = Some(id);
        Ok(())
    }

    fn create_camera(&mut self, name: &str) -> Result<ObjectId, HostError> {
        Ok(self.insert_object(name, ObjectData::Camera(CameraLens::default())))
    }

    fn create_area_light(&mut self, name: &str, light: &AreaLight) -> Result<ObjectId, HostError> {
        let clamped = AreaLight {
            spread: light.spread.clamp(0.0, std::f32::consts::PI),
            ..*light
        };
        Ok(self.insert_object(name, ObjectData::Light(clamped)))
    }

    fn add_plane(&mut self, name: &str, size: f32) -> Result<ObjectId, HostError> {
        let id = self.insert_object(
            name,
            ObjectData::Mesh {
                dimensions: Vec3::new(size, size, 0.0),
            },
        );
        // Primitive operators select what they add
        self.active_object = Some(id);
        Ok(id)
    }

    fn remove_object(&mut self, id: ObjectId) -> Result<(), HostError> {
        let removed = self.objects.remove(&id).ok_or(HostError::ObjectNotFound(id))?;
        trace!("memory host: remove {:?} '{}'", id, removed.name);

        if self.active_object == Some(id) {
            self.active_object = None;
        }
        if self.active_camera == Some(id) {
            self.active_camera = None;
        }
        Ok(())
    }

    fn location(&self, id: ObjectId) -> Result<Vec3, HostError> {
        Ok(self.get_object(id)?.transform.location)
    }

    fn set_location(&mut self, id: ObjectId, location: Vec3) -> Result<(), HostError> {
        self.object_mut(id)?.transform.location = location;
        Ok(())
    }

    fn rotation(&self, id: ObjectId) -> Result<Vec3, HostError> {
        Ok(self.get_object(id)?.transform.rotation)
    }

    fn set_rotation(&mut self, id: ObjectId, rotation: Vec3) -> Result<(), HostError> {
        let call = self.rotation_writes;
        self.rotation_writes += 1;
        if self.fail_rotation_write_at == Some(call) {
            return Err(HostError::Locked(id));
        }
        self.object_mut(id)?.transform.rotation = rotation;
        Ok(())
    }

    fn set_camera_lens(&mut self, id: ObjectId, lens: &CameraLens) -> Result<(), HostError> {
        let object = self.object_mut(id)?;
        if let ObjectData::Camera(current) = &mut object.data {
            *current = *lens;
            return Ok(());
        }
        Err(HostError::WrongKind {
            name: object.name.clone(),
            expected: ObjectKind::Camera,
            actual: object.kind(),
        })
    }

    fn set_active_camera(&mut self, id: ObjectId) -> Result<(), HostError> {
        let object = self.get_object(id)?;
        if object.kind() != ObjectKind::Camera {
            return Err(HostError::WrongKind {
                name: object.name.clone(),
                expected: ObjectKind::Camera,
                actual: object.kind(),
            });
        }
        self.active_camera = Some(id);
        Ok(())
    }

    fn set_visible_glossy(&mut self, id: ObjectId, visible: bool) -> Result<(), HostError> {
        self.object_mut(id)?.visible_glossy = visible;
        Ok(())
    }

    fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.materials.iter().find(|(_, m)| m.name == name).map(|(id, _)| *id)
    }

    fn material_names(&self) -> Vec<String> {
        self.materials.values().map(|m| m.name.clone()).collect()
    }

    fn create_material(&mut self, name: &str) -> Result<MaterialId, HostError> {
        let unique = unique_name(name, self.materials.values().map(|m| m.name.as_str()));
        let id = MaterialId(self.next_material);
        self.next_material += 1;

        let mut material = Material::new(unique);
        let bsdf = material.insert_node(NodeKind::PrincipledBsdf);
        let output = material.insert_node(NodeKind::MaterialOutput);
        material.links.push(NodeLink {
            from: (bsdf, "BSDF".to_string()),
            to: (output, "Surface".to_string()),
        });

        self.materials.insert(id, material);
        Ok(id)
    }

    fn remove_material(&mut self, id: MaterialId) -> Result<(), HostError> {
        self.materials.remove(&id).ok_or(HostError::MaterialNotFound(id))?;
        for object in self.objects.values_mut() {
            object.material_slots.retain(|m| *m != id);
        }
        Ok(())
    }

    fn principled_node(&self, material: MaterialId) -> Option<NodeId> {
        self.materials.get(&material)?.node_of_kind(NodeKind::PrincipledBsdf)
    }

    fn add_node(&mut self, material: MaterialId, kind: NodeKind) -> Result<NodeId, HostError> {
        Ok(self.material_mut(material)?.insert_node(kind))
    }

    fn set_node_input(
        &mut self,
        material: MaterialId,
        node: NodeId,
        socket: &str,
        value: SocketValue,
    ) -> Result<(), HostError> {
        let mat = self.material_mut(material)?;
        let target = mat
            .nodes
            .get_mut(&node)
            .ok_or(HostError::NodeNotFound { material, node })?;

        if !input_sockets(target.kind).contains(&socket) {
            return Err(HostError::UnknownSocket {
                node: target.kind,
                socket: socket.to_string(),
            });
        }
        target.inputs.insert(socket.to_string(), value);
        Ok(())
    }

    fn link_nodes(
        &mut self,
        material: MaterialId,
        from: (NodeId, &str),
        to: (NodeId, &str),
    ) -> Result<(), HostError> {
        let mat = self.material_mut(material)?;
        let kind_of = |node: NodeId| {
            mat.nodes
                .get(&node)
                .map(|n| n.kind)
                .ok_or(HostError::NodeNotFound { material, node })
        };
        let (from_kind, to_kind) = (kind_of(from.0)?, kind_of(to.0)?);

        if !output_sockets(from_kind).contains(&from.1) {
            return Err(HostError::UnknownSocket {
                node: from_kind,
                socket: from.1.to_string(),
            });
        }
        if !input_sockets(to_kind).contains(&to.1) {
            return Err(HostError::UnknownSocket {
                node: to_kind,
                socket: to.1.to_string(),
            });
        }

        // An input accepts a single link
        mat.links.retain(|l| !(l.to.0 == to.0 && l.to.1 == to.1));
        mat.links.push(NodeLink {
            from: (from.0, from.1.to_string()),
            to: (to.0, to.1.to_string()),
        });
        Ok(())
    }

    fn material_slots(&self, object: ObjectId) -> Result<Vec<MaterialId>, HostError> {
        Ok(self.get_object(object)?.material_slots.clone())
    }

    fn append_material(&mut self, object: ObjectId, material: MaterialId) -> Result<(), HostError> {
        if !self.materials.contains_key(&material) {
            return Err(HostError::MaterialNotFound(material));
        }
        self.object_mut(object)?.material_slots.push(material);
        Ok(())
    }

    fn set_material_slot(
        &mut self,
        object: ObjectId,
        slot: usize,
        material: MaterialId,
    ) -> Result<(), HostError> {
        if !self.materials.contains_key(&material) {
            return Err(HostError::MaterialNotFound(material));
        }
        let target = self.object_mut(object)?;
        match target.material_slots.get_mut(slot) {
            Some(current) => {
                *current = material;
                Ok(())
            }
            None => Err(HostError::NoMaterialSlot {
                name: target.name.clone(),
                slot,
            }),
        }
    }

    fn apply_render_setting(&mut self, setting: &RenderSetting) -> Result<(), HostError> {
        if self.unsupported.contains(&setting.kind()) {
            return Err(HostError::Unsupported(setting.kind()));
        }

        let s = &mut self.settings;
        match setting {
            RenderSetting::Engine(engine) => s.engine = *engine,
            RenderSetting::Samples(n) => s.samples = *n,
            RenderSetting::AdaptiveSampling(on) => s.adaptive_sampling = *on,
            RenderSetting::Resolution { width, height } => s.resolution = (*width, *height),
            RenderSetting::ResolutionPercentage(p) => s.resolution_percentage = (*p).max(1),
            RenderSetting::ViewTransform(name) => s.view_transform = name.clone(),
            RenderSetting::Look(name) => s.look = name.clone(),
            RenderSetting::Denoising(on) => s.denoising = *on,
            RenderSetting::Denoiser(d) => s.denoiser = Some(*d),
            RenderSetting::Device(d) => s.device = *d,
            RenderSetting::WorldBackground(c) => s.world_background = *c,
        }
        Ok(())
    }

    fn set_render_filepath(&mut self, path: &Path) -> Result<(), HostError> {
        self.render_filepath = Some(path.to_path_buf());
        Ok(())
    }

    fn render_still(&mut self) -> Result<(), HostError> {
        let path = self.render_filepath.clone().ok_or(HostError::NoRenderPath)?;
        let camera = self
            .active_camera
            .filter(|id| self.objects.contains_key(id))
            .ok_or(HostError::NoActiveCamera)?;

        if self.fail_render_at == Some(self.renders.len()) {
            return Err(HostError::RenderFailed(format!(
                "could not write {}",
                path.display()
            )));
        }

        if self.write_images {
            let canvas = preview::render_preview(self, camera)?;
            canvas.save_png(&path)?;
        }
        debug!("memory host: rendered {}", path.display());

        let record = RenderRecord {
            path,
            camera,
            mesh_rotations: self.snapshot_mesh_rotations(),
        };
        self.renders.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_clash_gets_numbered_suffix() {
        let mut host = MemoryHost::new();
        let a = host.add_mesh("Cube", Vec3::ONE);
        let b = host.add_mesh("Cube", Vec3::ONE);
        let c = host.add_mesh("Cube", Vec3::ONE);

        assert_eq!(host.object_name(a).unwrap(), "Cube");
        assert_eq!(host.object_name(b).unwrap(), "Cube.001");
        assert_eq!(host.object_name(c).unwrap(), "Cube.002");
        assert_eq!(host.count_named("Cube"), 3);
    }

    #[test]
    fn same_base_ignores_unrelated_names() {
        assert!(is_same_base("Luz_Top", "Luz_Top"));
        assert!(is_same_base("Luz_Top.004", "Luz_Top"));
        assert!(!is_same_base("Luz_Top_Data", "Luz_Top"));
        assert!(!is_same_base("Luz", "Luz_Top"));
    }

    #[test]
    fn new_material_wires_bsdf_to_output() {
        let mut host = MemoryHost::new();
        let id = host.create_material("Steel").unwrap();
        let mat = host.material(id).unwrap();

        assert!(mat.node_of_kind(NodeKind::PrincipledBsdf).is_some());
        assert_eq!(mat.links.len(), 1);
        assert_eq!(mat.links[0].to.1, "Surface");
    }

    #[test]
    fn unknown_socket_rejected() {
        let mut host = MemoryHost::new();
        let mat = host.create_material("M").unwrap();
        let bsdf = host.principled_node(mat).unwrap();

        let err = host
            .set_node_input(mat, bsdf, "Sheen Tint Wobble", SocketValue::Float(1.0))
            .unwrap_err();
        assert!(matches!(err, HostError::UnknownSocket { .. }));
    }

    #[test]
    fn render_requires_camera_and_path() {
        let mut host = MemoryHost::new().without_images();
        assert!(matches!(host.render_still(), Err(HostError::NoRenderPath)));

        host.set_render_filepath(Path::new("frame.png")).unwrap();
        assert!(matches!(host.render_still(), Err(HostError::NoActiveCamera)));

        let cam = host.create_camera("Cam").unwrap();
        host.set_active_camera(cam).unwrap();
        host.render_still().unwrap();
        assert_eq!(host.renders().len(), 1);
    }

    #[test]
    fn unsupported_setting_leaves_state_untouched() {
        let mut host = MemoryHost::new().without_setting(SettingKind::Denoiser);
        let before = host.settings().clone();

        let err = host
            .apply_render_setting(&RenderSetting::Denoiser(Denoiser::OpenImageDenoise))
            .unwrap_err();
        assert!(matches!(err, HostError::Unsupported(SettingKind::Denoiser)));
        assert_eq!(host.settings(), &before);
    }

    #[test]
    fn removing_material_clears_slots() {
        let mut host = MemoryHost::new();
        let mesh = host.add_mesh("Drill", Vec3::ONE);
        let mat = host.create_material("Steel").unwrap();
        host.append_material(mesh, mat).unwrap();

        host.remove_material(mat).unwrap();
        assert!(host.material_slots(mesh).unwrap().is_empty());
    }
}
