/*!
# Aurora 3D Engine

Per-frame spatial visibility and GPU-state-caching core for the Aurora 3D
rendering engine.

The crate owns the numeric hot path of a frame: lazy transform recomputation,
camera view/projection/frustum derivation, AABB-vs-frustum culling, and a
state-diffing cache ([`renderer::PipelineState`]) that deduplicates calls into
the graphics backend. Everything around it (asset loading, windowing, input,
uniform upload) is an external collaborator reached through the narrow
[`renderer::GraphicsContext`] capability trait.

## Architecture

- **Transform**: position/rotation/scale with a lazily rebuilt model matrix
  and a generation counter dependents pull against
- **Camera**: view/projection matrices and a culling frustum, each tracked by
  its own dirty flag with explicit cascade rules
- **Frustum**: six named planes and the p-vertex/n-vertex tri-state AABB test
- **PipelineState**: the single funnel for backend state mutation
- **Scene/MeshRenderer**: the two-pass Update → Render frame driver

A frame is strictly single-threaded: all transforms and camera state are
rebuilt before any visibility test runs, so culling never sees a stale
frustum.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod renderer;
pub mod resource;
pub mod scene;

// Main aurora3d namespace module
pub mod aurora3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logger host
    pub use crate::engine::Engine;

    // Logging sub-module (the engine_* macros live at the crate root
    // via #[macro_export])
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module with backend-facing types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
