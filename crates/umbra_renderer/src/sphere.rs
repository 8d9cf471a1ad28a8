//! Sphere primitive for ray tracing.

use crate::primitive::{ShadingRecord, Shape};
use umbra_core::{MaterialId, MeshArena};
use umbra_math::{Aabb, Ray, Vec3};

/// Relative padding of the sphere box, so rounding in the quadratic can't
/// place a hit just outside it.
const BOUNDS_PADDING: f32 = 1e-5;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let pad = BOUNDS_PADDING * (radius + center.abs().max_element());
        let bbox = Aabb::from_points(center - rvec, center + rvec).padded(pad);

        Self {
            center,
            radius,
            material,
            bbox,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Shape for Sphere {
    fn bounds(&self) -> Aabb {
        self.bbox
    }

    fn centroid(&self) -> Vec3 {
        self.center
    }

    fn hit(&self, _meshes: &MeshArena, ray: &Ray, t_max: f32) -> Option<f32> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let accept = |t: f32| t > 0.0 && t <= t_max;

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !accept(root) {
            root = (h + sqrtd) / a;
            if !accept(root) {
                return None;
            }
        }

        Some(root)
    }

    fn shading_record(&self, _meshes: &MeshArena, ray: &Ray, t: f32) -> ShadingRecord {
        let point = ray.at(t);
        let outward_normal = (point - self.center) / self.radius;
        let (front_face, normal) = ShadingRecord::face_normal(ray, outward_normal);

        ShadingRecord {
            t,
            point,
            front_face,
            material: self.material,
            geometric_normal: normal,
            shading_normal: normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;
    use umbra_math::{sampling::uniform_sphere, Vec2};

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let meshes = MeshArena::new();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = sphere.hit(&meshes, &ray, f32::INFINITY).unwrap();
        assert!((t - 0.5).abs() < 1e-6); // Should hit at t=0.5

        let rec = sphere.shading_record(&meshes, &ray, t);
        assert!(rec.front_face);
        assert!((rec.geometric_normal - Vec3::Z).length() < 1e-6);
        assert_eq!(rec.shading_normal, rec.geometric_normal);
        assert_eq!(rec.material, MaterialId(0));
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let meshes = MeshArena::new();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&meshes, &ray, f32::INFINITY).is_none());
    }

    #[test]
    fn test_sphere_respects_t_max() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));
        let meshes = MeshArena::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.hit(&meshes, &ray, 0.4).is_none());
        assert_eq!(sphere.hit(&meshes, &ray, 0.5), Some(0.5));
    }

    #[test]
    fn test_hit_from_inside_flips_normal() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, MaterialId(2));
        let meshes = MeshArena::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.hit(&meshes, &ray, f32::INFINITY).unwrap();
        assert!((t - 1.0).abs() < 1e-6);

        let rec = sphere.shading_record(&meshes, &ray, t);
        assert!(!rec.front_face);
        assert!((rec.geometric_normal - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_bounds_contain_surface_points() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let meshes = MeshArena::new();

        for _ in 0..200 {
            let center = Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            let sphere = Sphere::new(center, rng.gen_range(0.01..5.0), MaterialId(0));
            let bounds = sphere.bounds();
            assert!(bounds.contains_point(sphere.centroid()));

            // Fire at the center from outside and check the hit lies in the box
            let dir = uniform_sphere(Vec2::new(rng.gen(), rng.gen()));
            let ray = Ray::new(center - dir * 20.0, dir);
            let t = sphere.hit(&meshes, &ray, f32::INFINITY).unwrap();
            assert!(bounds.contains_point(ray.at(t)));
        }
    }
}
