//! Umbra math - vectors, rays, bounding boxes and numerical helpers.
//!
//! Re-exports `glam` so downstream crates share one vector type.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
pub mod float;
mod frame;
mod ray;
pub mod sampling;

pub use aabb::Aabb;
pub use frame::Frame;
pub use ray::Ray;

/// Component of `v` along `axis` (0=X, 1=Y, anything else=Z).
#[inline]
pub fn axis_component(v: Vec3, axis: usize) -> f32 {
    match axis {
        0 => v.x,
        1 => v.y,
        _ => v.z,
    }
}
