//! Renderer module: backend capability surface and state cache.
//!
//! The GraphicsContext trait is what the engine consumes from a backend;
//! PipelineState is the single funnel every state mutation goes through.

mod graphics_context;
mod pipeline_state;
mod recording_context;

pub use graphics_context::{
    GraphicsContext, DepthFunc, CullMode,
    ProgramHandle, VertexArrayHandle, TextureHandle,
};
pub use pipeline_state::{PipelineState, MAX_TEXTURE_UNITS};
pub use recording_context::RecordingContext;
