use crate::{axis_component, Ray, Vec3};

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// Stored as two corners. Boxes built from real geometry satisfy
/// `min[i] <= max[i]`; [`Aabb::EMPTY`] is the identity for [`Aabb::union`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Minimum extent a box built by [`Aabb::from_points`] is padded to.
const MIN_EXTENT: f32 = 0.0001;

impl Aabb {
    /// Box containing nothing; `union` with it is a no-op.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Box containing everything.
    pub const UNIVERSE: Aabb = Aabb {
        min: Vec3::NEG_INFINITY,
        max: Vec3::INFINITY,
    };

    /// Create an AABB from two corner points, in any order.
    ///
    /// Axes thinner than a small epsilon are padded so flat geometry still
    /// has a box with positive volume.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let aabb = Self {
            min: a.min(b),
            max: a.max(b),
        };
        aabb.pad_to_minimums()
    }

    /// Smallest box containing every point of the iterator.
    ///
    /// Returns [`Aabb::EMPTY`] for an empty iterator. No padding is applied.
    pub fn from_iter_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |acc, p| acc.grow(p))
    }

    /// Create an AABB that surrounds two other AABBs.
    #[inline]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extend the box to include `p`.
    #[inline]
    pub fn grow(&self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Expand every face outwards by `delta`.
    pub fn padded(&self, delta: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(delta),
            max: self.max + Vec3::splat(delta),
        }
    }

    /// True for [`Aabb::EMPTY`] and any other inverted box.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Width of the box along each axis.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the center point of the bounding box.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn surface_area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extent();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    pub fn volume(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Closed containment test for a point.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// True when `other` lies entirely inside this box (faces may touch).
    pub fn contains(&self, other: &Aabb) -> bool {
        other.is_empty() || (other.min.cmpge(self.min).all() && other.max.cmple(self.max).all())
    }

    /// Slab test: does `ray` cross the box somewhere in `[0, t_max]`?
    ///
    /// Zero direction components produce signed infinite reciprocals, so an
    /// axis-parallel ray is handled by the same arithmetic as any other ray.
    /// The only special case is `0 * inf`, which happens when the origin lies
    /// exactly on a face plane of a parallel slab; the plane counts as inside.
    pub fn hit(&self, ray: &Ray, t_max: f32) -> bool {
        let inv = ray.inv_direction();
        let mut t_enter = 0.0_f32;
        let mut t_exit = t_max;

        for axis in 0..3 {
            let origin = axis_component(ray.origin, axis);
            let inv_d = axis_component(inv, axis);
            let lo = (axis_component(self.min, axis) - origin) * inv_d;
            let hi = (axis_component(self.max, axis) - origin) * inv_d;

            if lo.is_nan() || hi.is_nan() {
                continue;
            }

            t_enter = t_enter.max(lo.min(hi));
            t_exit = t_exit.min(lo.max(hi));
            if t_exit < t_enter {
                return false;
            }
        }

        true
    }

    fn pad_to_minimums(mut self) -> Self {
        let extent = self.extent();
        for axis in 0..3 {
            if axis_component(extent, axis) < MIN_EXTENT {
                let half = MIN_EXTENT * 0.5;
                self.min[axis] -= half;
                self.max[axis] += half;
            }
        }
        self
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
