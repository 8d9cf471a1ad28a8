//! Umbra Core - scene description for the Umbra renderer.
//!
//! This crate provides renderer-agnostic scene data:
//!
//! - **Materials**: `Material`, `SurfaceModel`, addressed by `MaterialId`
//! - **Meshes**: `Mesh` buffers owned by a `MeshArena`, addressed by `MeshId`
//! - **Scene**: materials, meshes and analytic spheres, plus validation
//!
//! # Example
//!
//! ```
//! use umbra_core::{Material, Scene};
//! use umbra_math::Vec3;
//!
//! let mut scene = Scene::new("example");
//! let grey = scene.add_material(Material::default());
//! scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, grey);
//! assert!(scene.validate().is_ok());
//! ```

pub mod material;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use material::{Color, Material, MaterialError, MaterialId, SurfaceModel};
pub use mesh::{Mesh, MeshArena, MeshError, MeshId};
pub use scene::{Scene, SceneError, SphereDesc};
