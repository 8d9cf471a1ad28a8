//! Triangle mesh buffers and the arena that owns them.
//!
//! Triangles in the renderer refer to a mesh by [`MeshId`] and to a face by
//! index; meshes never know about the triangles built from them.

use crate::MaterialId;
use thiserror::Error;
use umbra_math::{Aabb, Vec3};

/// Errors raised when mesh buffers are inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("mesh '{name}': index buffer length {len} is not a multiple of 3")]
    RaggedIndices { name: String, len: usize },

    #[error("mesh '{name}': index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        name: String,
        index: u32,
        vertex_count: usize,
    },

    #[error("mesh '{name}': {normal_count} normals for {vertex_count} vertices")]
    NormalCountMismatch {
        name: String,
        normal_count: usize,
        vertex_count: usize,
    },

    #[error("mesh '{name}': vertex {vertex} is not finite")]
    NonFiniteVertex { name: String, vertex: usize },
}

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
///
/// Front faces wind counter-clockwise: the geometric normal of face
/// `(v0, v1, v2)` is `(v1 - v0) x (v2 - v0)`.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Mesh name (for diagnostics)
    pub name: String,

    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Per-vertex shading normals (optional)
    pub normals: Option<Vec<Vec3>>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Material applied to every face
    pub material: MaterialId,

    /// Axis-aligned bounding box
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// If normals are not provided, they will NOT be automatically computed.
    /// Call `compute_normals()` explicitly if you need smooth shading.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        normals: Option<Vec<Vec3>>,
        material: MaterialId,
    ) -> Self {
        let bounds = Aabb::from_iter_points(positions.iter().copied());
        Self {
            name: name.into(),
            positions,
            normals,
            indices,
            material,
            bounds,
        }
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Each vertex normal is the normalized, area-weighted average of the
    /// normals of the faces sharing that vertex.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for face in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let face_normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            // Isolated or degenerate vertices keep a default up normal
            *normal = normal.try_normalize().unwrap_or(Vec3::Y);
        }

        self.normals = Some(normals);
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex indices of face `triangle`.
    #[inline]
    pub fn face(&self, triangle: usize) -> [usize; 3] {
        let base = 3 * triangle;
        [
            self.indices[base] as usize,
            self.indices[base + 1] as usize,
            self.indices[base + 2] as usize,
        ]
    }

    /// Vertex positions of face `triangle`.
    #[inline]
    pub fn face_positions(&self, triangle: usize) -> [Vec3; 3] {
        let [i0, i1, i2] = self.face(triangle);
        [self.positions[i0], self.positions[i1], self.positions[i2]]
    }

    /// Vertex normals of face `triangle`, when the mesh has them.
    #[inline]
    pub fn face_normals(&self, triangle: usize) -> Option<[Vec3; 3]> {
        let normals = self.normals.as_ref()?;
        let [i0, i1, i2] = self.face(triangle);
        Some([normals[i0], normals[i1], normals[i2]])
    }

    /// Check the buffers are consistent with each other.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices {
                name: self.name.clone(),
                len: self.indices.len(),
            });
        }

        let vertex_count = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                name: self.name.clone(),
                index,
                vertex_count,
            });
        }

        if let Some(vertex) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFiniteVertex {
                name: self.name.clone(),
                vertex,
            });
        }

        if let Some(normals) = &self.normals {
            if normals.len() != vertex_count {
                return Err(MeshError::NormalCountMismatch {
                    name: self.name.clone(),
                    normal_count: normals.len(),
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}

/// Index of a mesh inside a [`MeshArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl MeshId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owner of every mesh buffer in a scene, addressed by [`MeshId`].
#[derive(Clone, Debug, Default)]
pub struct MeshArena {
    meshes: Vec<Mesh>,
}

impl MeshArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh and return its id.
    pub fn push(&mut self, mesh: Mesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    /// Get a mesh by id.
    ///
    /// Ids are only handed out by `push`, so lookups of ids from this arena
    /// never fail.
    #[inline]
    pub fn get(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterate meshes together with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &Mesh)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, mesh)| (MeshId(i as u32), mesh))
    }

    /// Get total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}
