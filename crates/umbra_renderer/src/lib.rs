//! Umbra renderer - CPU path tracing core.
//!
//! A Monte Carlo path tracer built around three pieces:
//! - watertight sphere and triangle intersection under a SAH-split BVH,
//! - a closed set of microfacet and diffuse BDFs with importance sampling
//!   and multiple-scattering energy compensation,
//! - a unidirectional path estimator driven by a bucketed, parallel render
//!   loop.

pub mod bdf;
mod bucket;
mod bvh;
mod camera;
pub mod energy;
mod integrator;
mod primitive;
mod renderer;
pub mod sampler;
mod sphere;
mod triangle;
mod world;

pub use bdf::{make_bdf, Bdf, BdfSample, DiffuseModel, Lobe, ShadingConfig};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::{Bvh, BvhNode, Hit, NodeRef};
pub use camera::{Camera, CameraSettings};
pub use energy::{BakeConfig, EnergyTableError, EnergyTables};
pub use integrator::PathTracer;
pub use primitive::{Primitive, ShadingRecord, Shape};
pub use renderer::{color_to_rgba, linear_to_gamma, render, render_pixel, ImageBuffer, RenderConfig};
pub use sampler::{PixelSampler, RandomSampler, SampleSeed, Sampler};
pub use sphere::Sphere;
pub use triangle::{intersect_triangle, Triangle};
pub use world::World;

/// Re-export the scene and math types the renderer API is expressed in
pub use umbra_core::{Color, Material, MaterialId, Mesh, MeshArena, MeshId, Scene, SurfaceModel};
pub use umbra_math::{Aabb, Frame, Ray, Vec2, Vec3};
