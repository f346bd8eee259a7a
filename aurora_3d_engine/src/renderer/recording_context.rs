/// Recording backend: appends one log entry per call, no GPU required.
///
/// The crate's built-in GraphicsContext implementation: tests assert on the
/// recorded call sequence (in particular that PipelineState deduplicates),
/// and headless runs use it as a null backend. Clone the call log handle
/// before boxing the context into a PipelineState.

use std::sync::{Arc, Mutex};
use crate::error::Result;
use super::graphics_context::{
    CullMode, DepthFunc, GraphicsContext, ProgramHandle, TextureHandle, VertexArrayHandle,
};

/// GraphicsContext that records every call as a formatted string.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the call log, usable after the context is boxed.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl GraphicsContext for RecordingContext {
    fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()> {
        self.record(format!(
            "set_clear_color({}, {}, {}, {})",
            color[0], color[1], color[2], color[3]
        ));
        Ok(())
    }

    fn set_clear_depth(&mut self, depth: f32) -> Result<()> {
        self.record(format!("set_clear_depth({})", depth));
        Ok(())
    }

    fn set_depth_test(&mut self, enabled: bool) -> Result<()> {
        self.record(format!("set_depth_test({})", enabled));
        Ok(())
    }

    fn set_depth_func(&mut self, func: DepthFunc) -> Result<()> {
        self.record(format!("set_depth_func({:?})", func));
        Ok(())
    }

    fn set_cull_face(&mut self, enabled: bool) -> Result<()> {
        self.record(format!("set_cull_face({})", enabled));
        Ok(())
    }

    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()> {
        self.record(format!("set_cull_mode({:?})", mode));
        Ok(())
    }

    fn use_program(&mut self, program: ProgramHandle) -> Result<()> {
        self.record(format!("use_program({})", program.0));
        Ok(())
    }

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()> {
        self.record(format!("bind_vertex_array({})", vertex_array.0));
        Ok(())
    }

    fn set_active_texture_unit(&mut self, unit: u32) -> Result<()> {
        self.record(format!("set_active_texture_unit({})", unit));
        Ok(())
    }

    fn bind_texture(&mut self, texture: TextureHandle) -> Result<()> {
        self.record(format!("bind_texture({})", texture.0));
        Ok(())
    }

    fn clear(&mut self, color: bool, depth: bool) -> Result<()> {
        self.record(format!("clear(color={}, depth={})", color, depth));
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32) -> Result<()> {
        self.record(format!("draw_indexed({})", index_count));
        Ok(())
    }
}
