//! Triangle primitive for ray tracing.
//!
//! Uses the watertight ray-triangle test of Woop, Benthin and Wald with the
//! conservative error bounds from Physically Based Rendering. Rays crossing
//! an edge shared by two triangles hit at least one of them, and a ray
//! leaving a triangle's surface never re-hits that triangle.

use crate::primitive::{ShadingRecord, Shape};
use umbra_core::{MaterialId, Mesh, MeshArena, MeshId};
use umbra_math::float::{gamma, max_dimension};
use umbra_math::{axis_component, Aabb, Ray, Vec3};

/// Padding applied to triangle boxes so flat triangles keep a volume.
const BOUNDS_PADDING: f32 = 0.0001;

/// A triangle primitive: one face of a mesh in a [`MeshArena`].
#[derive(Debug, Clone)]
pub struct Triangle {
    mesh: MeshId,
    index: u32,
    material: MaterialId,
    centroid: Vec3,
    bbox: Aabb,
}

impl Triangle {
    /// Create the triangle for face `index` of `mesh`.
    pub fn new(meshes: &MeshArena, mesh: MeshId, index: u32) -> Self {
        let source = meshes.get(mesh);
        let [p0, p1, p2] = source.face_positions(index as usize);

        let bbox = Aabb::from_iter_points([p0, p1, p2]).padded(BOUNDS_PADDING);
        let centroid = (p0 + p1 + p2) / 3.0;

        Self {
            mesh,
            index,
            material: source.material,
            centroid,
            bbox,
        }
    }

    /// True when face `index` of `mesh` has zero area.
    pub fn is_degenerate(mesh: &Mesh, index: usize) -> bool {
        let [p0, p1, p2] = mesh.face_positions(index);
        (p1 - p0).cross(p2 - p0).length_squared() == 0.0
    }

    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    fn positions(&self, meshes: &MeshArena) -> [Vec3; 3] {
        meshes.get(self.mesh).face_positions(self.index as usize)
    }
}

#[inline]
fn permute(v: Vec3, kx: usize, ky: usize, kz: usize) -> Vec3 {
    Vec3::new(
        axis_component(v, kx),
        axis_component(v, ky),
        axis_component(v, kz),
    )
}

/// Watertight intersection of `ray` with the triangle `(p0, p1, p2)`.
///
/// Returns the ray parameter of the hit in `(deltaT, t_max]`.
pub fn intersect_triangle(ray: &Ray, t_max: f32, p0: Vec3, p1: Vec3, p2: Vec3) -> Option<f32> {
    // Translate vertices based on ray origin
    let mut p0t = p0 - ray.origin;
    let mut p1t = p1 - ray.origin;
    let mut p2t = p2 - ray.origin;

    // Permute components so the ray direction's largest axis becomes z
    let kz = max_dimension(ray.direction.abs());
    let kx = (kz + 1) % 3;
    let ky = (kx + 1) % 3;
    let d = permute(ray.direction, kx, ky, kz);
    p0t = permute(p0t, kx, ky, kz);
    p1t = permute(p1t, kx, ky, kz);
    p2t = permute(p2t, kx, ky, kz);

    if d.z == 0.0 {
        return None;
    }

    // Shear x and y now, z only once the hit is known to be inside
    let sx = -d.x / d.z;
    let sy = -d.y / d.z;
    let sz = 1.0 / d.z;
    p0t.x += sx * p0t.z;
    p0t.y += sy * p0t.z;
    p1t.x += sx * p1t.z;
    p1t.y += sy * p1t.z;
    p2t.x += sx * p2t.z;
    p2t.y += sy * p2t.z;

    let mut e0 = p1t.x * p2t.y - p1t.y * p2t.x;
    let mut e1 = p2t.x * p0t.y - p2t.y * p0t.x;
    let mut e2 = p0t.x * p1t.y - p0t.y * p1t.x;

    // Exactly zero edge functions are re-evaluated in double precision
    if e0 == 0.0 || e1 == 0.0 || e2 == 0.0 {
        let edge = |a: Vec3, b: Vec3| {
            ((a.x as f64) * (b.y as f64) - (a.y as f64) * (b.x as f64)) as f32
        };
        e0 = edge(p1t, p2t);
        e1 = edge(p2t, p0t);
        e2 = edge(p0t, p1t);
    }

    if (e0 < 0.0 || e1 < 0.0 || e2 < 0.0) && (e0 > 0.0 || e1 > 0.0 || e2 > 0.0) {
        return None;
    }
    let det = e0 + e1 + e2;
    if det == 0.0 {
        return None;
    }

    // Scaled hit distance, compared against t_max without dividing by det
    p0t.z *= sz;
    p1t.z *= sz;
    p2t.z *= sz;
    let t_scaled = e0 * p0t.z + e1 * p1t.z + e2 * p2t.z;
    if det < 0.0 && (t_scaled >= 0.0 || t_scaled < t_max * det) {
        return None;
    }
    if det > 0.0 && (t_scaled <= 0.0 || t_scaled > t_max * det) {
        return None;
    }

    let inv_det = 1.0 / det;
    let t = t_scaled * inv_det;

    // Conservative bound on the error of t
    let max_zt = Vec3::new(p0t.z, p1t.z, p2t.z).abs().max_element();
    let delta_z = gamma(3) * max_zt;

    let max_xt = Vec3::new(p0t.x, p1t.x, p2t.x).abs().max_element();
    let max_yt = Vec3::new(p0t.y, p1t.y, p2t.y).abs().max_element();
    let delta_x = gamma(5) * (max_xt + max_zt);
    let delta_y = gamma(5) * (max_yt + max_zt);

    let delta_e = 2.0 * (gamma(2) * max_xt * max_yt + delta_y * max_xt + delta_x * max_yt);
    let max_e = Vec3::new(e0, e1, e2).abs().max_element();

    let delta_t =
        3.0 * (gamma(3) * max_e * max_zt + delta_e * max_zt + delta_z * max_e) * inv_det.abs();
    if t <= delta_t {
        return None;
    }

    Some(t)
}

/// Barycentric coordinates of `p` with respect to `(p0, p1, p2)`.
fn barycentric(p: Vec3, p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let v0 = p1 - p0;
    let v1 = p2 - p0;
    let v2 = p - p0;
    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;
    if denom == 0.0 {
        return Vec3::splat(1.0 / 3.0);
    }
    let b1 = (d11 * d20 - d01 * d21) / denom;
    let b2 = (d00 * d21 - d01 * d20) / denom;
    Vec3::new(1.0 - b1 - b2, b1, b2)
}

impl Shape for Triangle {
    fn bounds(&self) -> Aabb {
        self.bbox
    }

    fn centroid(&self) -> Vec3 {
        self.centroid
    }

    fn hit(&self, meshes: &MeshArena, ray: &Ray, t_max: f32) -> Option<f32> {
        let [p0, p1, p2] = self.positions(meshes);
        intersect_triangle(ray, t_max, p0, p1, p2)
    }

    fn shading_record(&self, meshes: &MeshArena, ray: &Ray, t: f32) -> ShadingRecord {
        let mesh = meshes.get(self.mesh);
        let [p0, p1, p2] = mesh.face_positions(self.index as usize);
        let point = ray.at(t);

        let outward = (p1 - p0).cross(p2 - p0).normalize_or_zero();
        let (front_face, geometric_normal) = ShadingRecord::face_normal(ray, outward);

        let shading_normal = match mesh.face_normals(self.index as usize) {
            Some([n0, n1, n2]) => {
                let b = barycentric(point, p0, p1, p2);
                let n = (n0 * b.x + n1 * b.y + n2 * b.z).normalize_or_zero();
                if n == Vec3::ZERO {
                    geometric_normal
                } else if n.dot(geometric_normal) < 0.0 {
                    -n
                } else {
                    n
                }
            }
            None => geometric_normal,
        };

        ShadingRecord {
            t,
            point,
            front_face,
            material: self.material,
            geometric_normal,
            shading_normal,
        }
    }
}
