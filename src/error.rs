use std::path::PathBuf;

use thiserror::Error;

use crate::types::{MaterialId, NodeId, NodeKind, ObjectId, ObjectKind, SettingKind};

/// Failures reported by a [`SceneHost`](crate::traits::SceneHost) implementation
#[derive(Error, Debug)]
pub enum HostError {
    #[error("object {0:?} does not exist")]
    ObjectNotFound(ObjectId),

    #[error("object {0:?} is locked against edits")]
    Locked(ObjectId),

    #[error("material {0:?} does not exist")]
    MaterialNotFound(MaterialId),

    #[error("node {node:?} does not exist in material {material:?}")]
    NodeNotFound { material: MaterialId, node: NodeId },

    #[error("'{socket}' is not a socket of the {node} node")]
    UnknownSocket { node: NodeKind, socket: String },

    #[error("object '{name}' is a {actual}, expected a {expected}")]
    WrongKind {
        name: String,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    #[error("object '{name}' has no material slot {slot}")]
    NoMaterialSlot { name: String, slot: usize },

    #[error("setting {0} is not supported by this host")]
    Unsupported(SettingKind),

    #[error("scene has no active camera")]
    NoActiveCamera,

    #[error("render output path is not set")]
    NoRenderPath,

    #[error("render failed: {0}")]
    RenderFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Fatal failures of the capture pipeline
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("no target object selected")]
    NoTarget,

    #[error("target '{name}' is a {kind}, select a mesh")]
    NotAMesh { name: String, kind: ObjectKind },

    #[error("target '{name}' is part of the capture rig, select the subject mesh")]
    RigObject { name: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot prepare output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame {index} ({filename}) failed: {source}")]
    Render {
        index: u32,
        filename: String,
        #[source]
        source: HostError,
    },

    #[error(transparent)]
    Host(#[from] HostError),
}
