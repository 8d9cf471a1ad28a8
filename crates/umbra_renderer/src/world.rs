//! Render-ready world: primitives in a BVH plus the scene's materials.

use std::time::Instant;

use crate::{Bvh, Primitive, ShadingRecord, Sphere, Triangle};
use umbra_core::{Material, MaterialId, Scene, SceneError};
use umbra_math::{Aabb, Ray};

/// A validated scene turned into intersectable primitives.
///
/// Built once, then shared read-only by every render thread.
#[derive(Debug, Clone)]
pub struct World {
    bvh: Bvh,
    materials: Vec<Material>,
}

impl World {
    /// Validate `scene` and build its acceleration structure.
    ///
    /// Degenerate triangles are skipped with a warning; they could never be
    /// hit.
    pub fn build(scene: Scene) -> Result<Self, SceneError> {
        scene.validate()?;
        let start = Instant::now();

        let Scene {
            name,
            materials,
            meshes,
            spheres,
        } = scene;

        let mut primitives: Vec<Primitive> =
            Vec::with_capacity(meshes.triangle_count() + spheres.len());
        primitives.extend(
            spheres
                .iter()
                .map(|s| Primitive::from(Sphere::new(s.center, s.radius, s.material))),
        );

        let mut skipped = 0usize;
        for (id, mesh) in meshes.iter() {
            for index in 0..mesh.triangle_count() {
                if Triangle::is_degenerate(mesh, index) {
                    skipped += 1;
                    continue;
                }
                primitives.push(Triangle::new(&meshes, id, index as u32).into());
            }
        }
        if skipped > 0 {
            log::warn!("Scene '{}': skipped {} degenerate triangles", name, skipped);
        }

        let bvh = Bvh::build(primitives, meshes);

        log::info!(
            "World '{}' ready: {} primitives, {} materials in {:.2?}",
            name,
            bvh.primitives().len(),
            materials.len(),
            start.elapsed()
        );

        Ok(Self { bvh, materials })
    }

    /// Nearest surface along `ray` in `(0, t_max]`.
    pub fn intersect(&self, ray: &Ray, t_max: f32) -> Option<ShadingRecord> {
        let hit = self.bvh.nearest_hit(ray, t_max)?;
        Some(self.bvh.shading_record(&hit, ray))
    }

    /// Material for `id`. Ids are checked when the world is built.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.index()]
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    pub fn bounds(&self) -> Aabb {
        self.bvh.bounds()
    }
}
