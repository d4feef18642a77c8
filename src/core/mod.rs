pub mod canvas;
pub mod capture;
pub mod clock;
pub mod memory_host;
pub mod pipeline;
pub mod preview;

pub use canvas::{Canvas, DrawOp, Rgba8};
pub use capture::{CaptureLoop, CaptureState, CaptureSummary, FrameRecord};
pub use clock::Clock;
pub use memory_host::{Material, MemoryHost, NodeLink, ObjectData, RenderRecord, RenderSettings, SceneObject};
pub use pipeline::{is_rig_object, run_pipeline, select_target, PipelineReport};
pub use preview::render_preview;
