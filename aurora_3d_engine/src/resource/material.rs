/// Material: the draw state a mesh is rendered with.
///
/// A shader program, per-unit texture assignments, and depth/cull settings.
/// Binding a material routes every state change through the PipelineState
/// cache, so rendering many objects with the same material issues each
/// backend call at most once.

use crate::error::Result;
use crate::renderer::{CullMode, DepthFunc, PipelineState, ProgramHandle, TextureHandle};

/// Shared draw-state description. Immutable while bound; shared via `Arc`.
#[derive(Debug, Clone)]
pub struct Material {
    program: ProgramHandle,
    /// (texture unit, texture) assignments, bound in order
    textures: Vec<(u32, TextureHandle)>,
    depth_test: bool,
    depth_func: DepthFunc,
    cull_face: bool,
    cull_mode: CullMode,
}

impl Material {
    /// Material over a shader program, with depth testing and back-face
    /// culling enabled.
    pub fn new(program: ProgramHandle) -> Self {
        Self {
            program,
            textures: Vec::new(),
            depth_test: true,
            depth_func: DepthFunc::Less,
            cull_face: true,
            cull_mode: CullMode::Back,
        }
    }

    // ===== GETTERS =====

    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    pub fn textures(&self) -> &[(u32, TextureHandle)] {
        &self.textures
    }

    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    pub fn depth_func(&self) -> DepthFunc {
        self.depth_func
    }

    pub fn cull_face(&self) -> bool {
        self.cull_face
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    // ===== SETTERS =====

    /// Assign a texture to a unit, replacing any previous assignment
    /// for that unit.
    pub fn set_texture(&mut self, unit: u32, texture: TextureHandle) {
        if let Some(slot) = self.textures.iter_mut().find(|(u, _)| *u == unit) {
            slot.1 = texture;
        } else {
            self.textures.push((unit, texture));
        }
    }

    pub fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    pub fn set_depth_func(&mut self, func: DepthFunc) {
        self.depth_func = func;
    }

    pub fn set_cull_face(&mut self, enabled: bool) {
        self.cull_face = enabled;
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    // ===== BIND =====

    /// Apply this material's draw state through the pipeline cache.
    ///
    /// Every call goes through PipelineState, so repeated binds of the
    /// same material are deduplicated down to zero backend calls.
    pub fn bind(&self, state: &mut PipelineState) -> Result<()> {
        state.use_program(self.program)?;
        state.set_depth_test(self.depth_test)?;
        state.set_depth_func(self.depth_func)?;
        state.set_cull_face(self.cull_face)?;
        state.set_cull_mode(self.cull_mode)?;
        for &(unit, texture) in &self.textures {
            state.bind_texture(unit, texture)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
