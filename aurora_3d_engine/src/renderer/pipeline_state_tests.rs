//! Unit tests for pipeline_state.rs
//!
//! Tests that every cached setter forwards to the backend exactly once per
//! distinct value, that texture unit bookkeeping is per-unit, and that
//! clear/draw always pass through.

use std::sync::{Arc, Mutex};
use super::*;
use crate::renderer::RecordingContext;

// ============================================================================
// HELPERS
// ============================================================================

fn recording_state() -> (PipelineState, Arc<Mutex<Vec<String>>>) {
    let context = RecordingContext::new();
    let calls = context.call_log();
    (PipelineState::new(Box::new(context)), calls)
}

fn count(calls: &Arc<Mutex<Vec<String>>>, prefix: &str) -> usize {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|call| call.starts_with(prefix))
        .count()
}

fn total(calls: &Arc<Mutex<Vec<String>>>) -> usize {
    calls.lock().unwrap().len()
}

// ============================================================================
// INITIAL STATE
// ============================================================================

#[test]
fn test_new_issues_no_backend_calls() {
    let (_state, calls) = recording_state();
    assert_eq!(total(&calls), 0);
}

#[test]
fn test_setting_the_startup_defaults_is_a_no_op() {
    let (mut state, calls) = recording_state();

    state.set_clear_color([0.0, 0.0, 0.0, 0.0]).unwrap();
    state.set_clear_depth(1.0).unwrap();
    state.set_depth_test(false).unwrap();
    state.set_depth_func(DepthFunc::Less).unwrap();
    state.set_cull_face(false).unwrap();
    state.set_cull_mode(CullMode::Back).unwrap();

    assert_eq!(total(&calls), 0);
}

// ============================================================================
// VALUE-LEVEL DEDUPLICATION
// ============================================================================

#[test]
fn test_repeated_clear_color_forwards_once() {
    let (mut state, calls) = recording_state();

    for _ in 0..5 {
        state.set_clear_color([0.1, 0.2, 0.3, 1.0]).unwrap();
    }
    assert_eq!(count(&calls, "set_clear_color"), 1);
}

#[test]
fn test_distinct_clear_colors_all_forward() {
    let (mut state, calls) = recording_state();

    for i in 0..5 {
        state.set_clear_color([i as f32 * 0.1, 0.0, 0.0, 1.0]).unwrap();
    }
    assert_eq!(count(&calls, "set_clear_color"), 5);
}

#[test]
fn test_toggle_forwards_each_change() {
    let (mut state, calls) = recording_state();

    state.set_depth_test(true).unwrap();
    state.set_depth_test(true).unwrap();
    state.set_depth_test(false).unwrap();
    state.set_depth_test(true).unwrap();

    assert_eq!(count(&calls, "set_depth_test"), 3);
}

#[test]
fn test_each_setter_deduplicates() {
    let (mut state, calls) = recording_state();

    for _ in 0..3 {
        state.set_clear_depth(0.5).unwrap();
        state.set_depth_test(true).unwrap();
        state.set_depth_func(DepthFunc::LessEqual).unwrap();
        state.set_cull_face(true).unwrap();
        state.set_cull_mode(CullMode::Front).unwrap();
        state.use_program(ProgramHandle(7)).unwrap();
        state.bind_vertex_array(VertexArrayHandle(3)).unwrap();
    }

    assert_eq!(count(&calls, "set_clear_depth"), 1);
    assert_eq!(count(&calls, "set_depth_test"), 1);
    assert_eq!(count(&calls, "set_depth_func"), 1);
    assert_eq!(count(&calls, "set_cull_face"), 1);
    assert_eq!(count(&calls, "set_cull_mode"), 1);
    assert_eq!(count(&calls, "use_program"), 1);
    assert_eq!(count(&calls, "bind_vertex_array"), 1);
}

#[test]
fn test_program_switch_forwards() {
    let (mut state, calls) = recording_state();

    state.use_program(ProgramHandle(1)).unwrap();
    state.use_program(ProgramHandle(2)).unwrap();
    state.use_program(ProgramHandle(1)).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec!["use_program(1)", "use_program(2)", "use_program(1)"]
    );
}

// ============================================================================
// TEXTURE UNITS
// ============================================================================

#[test]
fn test_first_bind_activates_unit() {
    let (mut state, calls) = recording_state();

    state.bind_texture(0, TextureHandle(9)).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(*calls, vec!["set_active_texture_unit(0)", "bind_texture(9)"]);
}

#[test]
fn test_fully_cached_rebind_is_a_total_no_op() {
    let (mut state, calls) = recording_state();

    state.bind_texture(0, TextureHandle(10)).unwrap();
    state.bind_texture(1, TextureHandle(11)).unwrap();

    // Rebinding the exact same pairs touches the backend zero times
    state.bind_texture(0, TextureHandle(10)).unwrap();
    state.bind_texture(1, TextureHandle(11)).unwrap();

    assert_eq!(count(&calls, "set_active_texture_unit"), 2);
    assert_eq!(count(&calls, "bind_texture"), 2);
}

#[test]
fn test_rebinding_same_unit_skips_activate() {
    let (mut state, calls) = recording_state();

    state.bind_texture(2, TextureHandle(1)).unwrap();
    state.bind_texture(2, TextureHandle(2)).unwrap();

    // One activate (unit already active), two binds
    assert_eq!(count(&calls, "set_active_texture_unit"), 1);
    assert_eq!(count(&calls, "bind_texture"), 2);
}

#[test]
fn test_texture_cache_is_per_unit() {
    let (mut state, calls) = recording_state();

    // The same texture on two units is two distinct bindings
    state.bind_texture(0, TextureHandle(5)).unwrap();
    state.bind_texture(1, TextureHandle(5)).unwrap();
    state.bind_texture(0, TextureHandle(5)).unwrap();

    assert_eq!(count(&calls, "set_active_texture_unit"), 2);
    assert_eq!(count(&calls, "bind_texture"), 2);
}

#[test]
fn test_bind_texture_rejects_out_of_range_unit() {
    let (mut state, calls) = recording_state();

    let result = state.bind_texture(MAX_TEXTURE_UNITS, TextureHandle(1));
    assert!(result.is_err());
    assert_eq!(total(&calls), 0);

    // Last valid unit still works
    state.bind_texture(MAX_TEXTURE_UNITS - 1, TextureHandle(1)).unwrap();
    assert_eq!(count(&calls, "bind_texture"), 1);
}

// ============================================================================
// PASS-THROUGH COMMANDS
// ============================================================================

#[test]
fn test_clear_always_forwards() {
    let (mut state, calls) = recording_state();

    state.clear(true, true).unwrap();
    state.clear(true, true).unwrap();
    state.clear(false, true).unwrap();

    assert_eq!(count(&calls, "clear"), 3);
}

#[test]
fn test_draw_indexed_always_forwards() {
    let (mut state, calls) = recording_state();

    state.draw_indexed(36).unwrap();
    state.draw_indexed(36).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(*calls, vec!["draw_indexed(36)", "draw_indexed(36)"]);
}
