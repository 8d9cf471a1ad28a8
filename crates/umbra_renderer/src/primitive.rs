//! Shape trait, the closed `Primitive` set, and hit records.

use crate::{Sphere, Triangle};
use umbra_core::{MaterialId, MeshArena};
use umbra_math::{Aabb, Ray, Vec3};

/// Relative offset applied when spawning a ray from a surface point.
const SPAWN_EPSILON: f32 = 1e-4;

/// Everything the shading code needs about an intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: MaterialId,
    /// True surface normal, always pointing against the ray
    pub geometric_normal: Vec3,
    /// Interpolated normal used for shading, in the same hemisphere as
    /// `geometric_normal`
    pub shading_normal: Vec3,
}

impl ShadingRecord {
    /// Orient `outward_normal` against the ray.
    ///
    /// Returns `(front_face, facing_normal)`. If the ray and normal point in
    /// the same direction, we're inside.
    #[inline]
    pub fn face_normal(ray: &Ray, outward_normal: Vec3) -> (bool, Vec3) {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        (front_face, normal)
    }

    /// Ray leaving the surface towards `direction`.
    ///
    /// The origin is pushed off the surface along the geometric normal, on
    /// the side `direction` points to.
    pub fn spawn_ray(&self, direction: Vec3) -> Ray {
        let scale = SPAWN_EPSILON * (1.0 + self.point.abs().max_element());
        let offset = if direction.dot(self.geometric_normal) >= 0.0 {
            self.geometric_normal * scale
        } else {
            -self.geometric_normal * scale
        };
        Ray::new(self.point + offset, direction)
    }
}

/// Geometry that can be intersected by rays.
///
/// `hit` only answers "where", the full record is rebuilt afterwards for
/// the single nearest hit.
pub trait Shape {
    /// Get the axis-aligned bounding box of this object.
    fn bounds(&self) -> Aabb;

    /// Representative point used to sort primitives during BVH builds.
    fn centroid(&self) -> Vec3;

    /// Distance of the first intersection in `(0, t_max]`, if any.
    fn hit(&self, meshes: &MeshArena, ray: &Ray, t_max: f32) -> Option<f32>;

    /// Rebuild the hit record for a distance previously returned by `hit`.
    fn shading_record(&self, meshes: &MeshArena, ray: &Ray, t: f32) -> ShadingRecord;
}

/// Every kind of primitive the acceleration structure stores.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Material bound to this primitive.
    pub fn material(&self) -> MaterialId {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }
}

impl Shape for Primitive {
    #[inline]
    fn bounds(&self) -> Aabb {
        match self {
            Primitive::Sphere(s) => s.bounds(),
            Primitive::Triangle(t) => t.bounds(),
        }
    }

    #[inline]
    fn centroid(&self) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.centroid(),
            Primitive::Triangle(t) => t.centroid(),
        }
    }

    #[inline]
    fn hit(&self, meshes: &MeshArena, ray: &Ray, t_max: f32) -> Option<f32> {
        match self {
            Primitive::Sphere(s) => s.hit(meshes, ray, t_max),
            Primitive::Triangle(t) => t.hit(meshes, ray, t_max),
        }
    }

    fn shading_record(&self, meshes: &MeshArena, ray: &Ray, t: f32) -> ShadingRecord {
        match self {
            Primitive::Sphere(s) => s.shading_record(meshes, ray, t),
            Primitive::Triangle(tri) => tri.shading_record(meshes, ray, t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
