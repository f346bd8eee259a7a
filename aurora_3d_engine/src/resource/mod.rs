//! Resource module: thin descriptions of GPU-side assets.
//!
//! Meshes and materials are handles plus the metadata the visibility and
//! state-caching core needs; loading and upload belong to collaborators.

mod mesh;
mod material;

pub use mesh::Mesh;
pub use material::Material;
