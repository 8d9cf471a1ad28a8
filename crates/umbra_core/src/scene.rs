//! Scene description handed to the renderer.
//!
//! Holds materials, mesh buffers and analytic spheres. The renderer consumes
//! a `Scene` once to build its primitives and acceleration structure.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use umbra_math::{Aabb, Vec3};

use crate::material::{Material, MaterialError, MaterialId};
use crate::mesh::{Mesh, MeshArena, MeshError, MeshId};

/// Errors raised when validating a scene before rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("{owner} references material {material} but the scene has {material_count}")]
    UnknownMaterial {
        owner: String,
        material: u32,
        material_count: usize,
    },

    #[error("sphere {index}: radius must be positive and finite, got {radius}")]
    InvalidSphere { index: usize, radius: f32 },
}

/// An analytic sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A complete scene containing materials, meshes and spheres.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (for diagnostics)
    pub name: String,

    /// Materials, addressed by [`MaterialId`]
    pub materials: Vec<Material>,

    /// Mesh buffers, addressed by [`MeshId`]
    pub meshes: MeshArena,

    /// Analytic spheres
    pub spheres: Vec<SphereDesc>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a material to the scene and return its ID.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    /// Add a mesh to the scene and return its ID.
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh)
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) {
        self.spheres.push(SphereDesc::new(center, radius, material));
    }

    /// Get a material by ID.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    /// Get total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.triangle_count()
    }

    /// Number of primitives the renderer will build (triangles + spheres).
    pub fn primitive_count(&self) -> usize {
        self.triangle_count() + self.spheres.len()
    }

    /// Bounding box of everything in the scene.
    pub fn world_bounds(&self) -> Aabb {
        let meshes = self
            .meshes
            .iter()
            .fold(Aabb::EMPTY, |acc, (_, mesh)| acc.union(&mesh.bounds));

        self.spheres.iter().fold(meshes, |acc, s| {
            let r = Vec3::splat(s.radius);
            acc.union(&Aabb::from_points(s.center - r, s.center + r))
        })
    }

    /// Check materials, meshes and spheres before building render data.
    ///
    /// Any error here is a configuration fault: rendering a scene that fails
    /// validation is not attempted.
    pub fn validate(&self) -> Result<(), SceneError> {
        for material in &self.materials {
            material.validate()?;
        }

        for (_, mesh) in self.meshes.iter() {
            mesh.validate()?;
            self.check_material(&format!("mesh '{}'", mesh.name), mesh.material)?;
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) || !sphere.center.is_finite() {
                return Err(SceneError::InvalidSphere {
                    index,
                    radius: sphere.radius,
                });
            }
            self.check_material(&format!("sphere {index}"), sphere.material)?;
        }

        log::debug!(
            "Scene '{}' validated: {} materials, {} meshes ({} triangles), {} spheres",
            self.name,
            self.materials.len(),
            self.meshes.len(),
            self.triangle_count(),
            self.spheres.len()
        );

        Ok(())
    }

    fn check_material(&self, owner: &str, material: MaterialId) -> Result<(), SceneError> {
        if material.index() >= self.materials.len() {
            return Err(SceneError::UnknownMaterial {
                owner: owner.to_string(),
                material: material.0,
                material_count: self.materials.len(),
            });
        }
        Ok(())
    }
}
