/// GraphicsContext trait - the backend capability surface.
///
/// The narrow interface the engine core consumes from the graphics backend:
/// state toggles, clear/draw commands, and bind primitives. Resources are
/// opaque handles; their creation and destruction belong to the asset and
/// backend collaborators, not to this core.
///
/// No renderer code calls a state-mutating method on this trait directly.
/// All such calls funnel through PipelineState, whose cache must stay equal
/// to the backend's actual state at all times.

use crate::error::Result;

/// Opaque handle to a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u64);

/// Opaque handle to a vertex array object (vertex layout + buffer bindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(pub u64);

/// Opaque handle to a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Depth comparison function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

/// Which triangle faces to cull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    Front,
    Back,
    FrontAndBack,
}

/// Backend drawing API consumed by the engine core.
///
/// Implementations wrap a real graphics context (GL-style state machine)
/// or record calls for tests and headless runs (RecordingContext).
pub trait GraphicsContext: Send + Sync {
    // ===== STATE MUTATION (PipelineState only) =====

    /// Set the color the next color clear writes.
    fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()>;

    /// Set the depth value the next depth clear writes.
    fn set_clear_depth(&mut self, depth: f32) -> Result<()>;

    /// Enable or disable depth testing.
    fn set_depth_test(&mut self, enabled: bool) -> Result<()>;

    /// Set the depth comparison function.
    fn set_depth_func(&mut self, func: DepthFunc) -> Result<()>;

    /// Enable or disable face culling.
    fn set_cull_face(&mut self, enabled: bool) -> Result<()>;

    /// Set which faces are culled.
    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()>;

    /// Bind a shader program for subsequent draws.
    fn use_program(&mut self, program: ProgramHandle) -> Result<()>;

    /// Bind a vertex array object for subsequent draws.
    fn bind_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()>;

    /// Select the active texture unit for the next texture bind.
    fn set_active_texture_unit(&mut self, unit: u32) -> Result<()>;

    /// Bind a texture to the currently active unit.
    fn bind_texture(&mut self, texture: TextureHandle) -> Result<()>;

    // ===== COMMANDS =====

    /// Clear the color and/or depth attachments with the current clear values.
    fn clear(&mut self, color: bool, depth: bool) -> Result<()>;

    /// Draw `index_count` indices from the bound vertex array.
    fn draw_indexed(&mut self, index_count: u32) -> Result<()>;
}
