/// PipelineState, a state-diffing cache over the graphics backend.
///
/// Mirrors every piece of backend draw state this core touches and issues a
/// backend call only when a requested value differs from the cached one,
/// removing O(frame × objects) redundant calls from the render loop.
///
/// One instance per graphics context, explicitly owned and passed by
/// reference to every consumer. Invariant: the cache equals the backend's
/// actual state at all times; any code that mutates backend state without
/// going through this cache permanently desynchronizes it for the rest of
/// the session.

use rustc_hash::FxHashMap;
use crate::engine_bail;
use crate::error::Result;
use super::graphics_context::{
    CullMode, DepthFunc, GraphicsContext, ProgramHandle, TextureHandle, VertexArrayHandle,
};

/// Number of texture units the cache tracks (GL guaranteed minimum tier).
pub const MAX_TEXTURE_UNITS: u32 = 32;

/// State cache and single funnel for backend state mutation.
///
/// The cache is seeded with the backend's documented initial state for
/// value state (clear values, toggles) and with "unknown" for bindings
/// (program, vertex array, active unit), so the first bind of each kind is
/// always issued.
pub struct PipelineState {
    context: Box<dyn GraphicsContext>,
    clear_color: [f32; 4],
    clear_depth: f32,
    depth_test: bool,
    depth_func: DepthFunc,
    cull_face: bool,
    cull_mode: CullMode,
    program: Option<ProgramHandle>,
    vertex_array: Option<VertexArrayHandle>,
    active_unit: Option<u32>,
    /// Texture bound to each unit; bindings persist across unit switches
    bound_textures: FxHashMap<u32, TextureHandle>,
}

impl PipelineState {
    /// Take ownership of a freshly created backend context.
    ///
    /// The context must still be in its initial state; a pre-mutated
    /// context breaks the cache invariant from the first frame.
    pub fn new(context: Box<dyn GraphicsContext>) -> Self {
        crate::engine_debug!("aurora3d::PipelineState", "state cache initialized");
        Self {
            context,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            clear_depth: 1.0,
            depth_test: false,
            depth_func: DepthFunc::Less,
            cull_face: false,
            cull_mode: CullMode::Back,
            program: None,
            vertex_array: None,
            active_unit: None,
            bound_textures: FxHashMap::default(),
        }
    }

    // ===== STATE SETTERS: compare, cache, forward once =====

    pub fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()> {
        if self.clear_color == color {
            return Ok(());
        }
        self.clear_color = color;
        self.context.set_clear_color(color)
    }

    pub fn set_clear_depth(&mut self, depth: f32) -> Result<()> {
        if self.clear_depth == depth {
            return Ok(());
        }
        self.clear_depth = depth;
        self.context.set_clear_depth(depth)
    }

    pub fn set_depth_test(&mut self, enabled: bool) -> Result<()> {
        if self.depth_test == enabled {
            return Ok(());
        }
        self.depth_test = enabled;
        self.context.set_depth_test(enabled)
    }

    pub fn set_depth_func(&mut self, func: DepthFunc) -> Result<()> {
        if self.depth_func == func {
            return Ok(());
        }
        self.depth_func = func;
        self.context.set_depth_func(func)
    }

    pub fn set_cull_face(&mut self, enabled: bool) -> Result<()> {
        if self.cull_face == enabled {
            return Ok(());
        }
        self.cull_face = enabled;
        self.context.set_cull_face(enabled)
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) -> Result<()> {
        if self.cull_mode == mode {
            return Ok(());
        }
        self.cull_mode = mode;
        self.context.set_cull_mode(mode)
    }

    pub fn use_program(&mut self, program: ProgramHandle) -> Result<()> {
        if self.program == Some(program) {
            return Ok(());
        }
        self.program = Some(program);
        self.context.use_program(program)
    }

    pub fn bind_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()> {
        if self.vertex_array == Some(vertex_array) {
            return Ok(());
        }
        self.vertex_array = Some(vertex_array);
        self.context.bind_vertex_array(vertex_array)
    }

    /// Bind a texture to a unit, two-level:
    ///
    /// - unit already holds the texture → no backend call at all (the
    ///   binding persists on its unit regardless of the active unit)
    /// - otherwise, activate the unit only if it is not the cached active
    ///   unit, then issue exactly one bind
    pub fn bind_texture(&mut self, unit: u32, texture: TextureHandle) -> Result<()> {
        if unit >= MAX_TEXTURE_UNITS {
            engine_bail!(
                "aurora3d::PipelineState",
                "texture unit {} out of range (max {})",
                unit,
                MAX_TEXTURE_UNITS
            );
        }
        if self.bound_textures.get(&unit) == Some(&texture) {
            return Ok(());
        }
        if self.active_unit != Some(unit) {
            self.context.set_active_texture_unit(unit)?;
            self.active_unit = Some(unit);
        }
        self.context.bind_texture(texture)?;
        self.bound_textures.insert(unit, texture);
        Ok(())
    }

    // ===== COMMANDS: always forwarded =====

    /// Clear attachments. A command, not state: forwarded unconditionally.
    pub fn clear(&mut self, color: bool, depth: bool) -> Result<()> {
        self.context.clear(color, depth)
    }

    /// Issue an indexed draw. Forwarded unconditionally.
    pub fn draw_indexed(&mut self, index_count: u32) -> Result<()> {
        self.context.draw_indexed(index_count)
    }
}

#[cfg(test)]
#[path = "pipeline_state_tests.rs"]
mod tests;
