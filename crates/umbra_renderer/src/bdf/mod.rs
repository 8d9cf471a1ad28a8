//! Surface scattering models ("BDFs").
//!
//! Every model exposes the same three operations, all with world-space
//! directions pointing away from the surface:
//!
//! - `sample_dir(wo, sampler)` draws an incident direction and the lobe it
//!   came from,
//! - `pdf(wo, wi, lobe)` is the solid-angle density of that draw,
//! - `estimator(wo, wi, lobe)` is `f(wo, wi) * cos(wi) / pdf`, the factor a
//!   path's throughput is multiplied by.
//!
//! A direction on the wrong side of the shading normal has zero density and
//! zero estimator.

pub mod composite;
pub mod dielectric;
pub mod diffuse;
pub mod ggx;
pub mod metal;

pub use composite::CompositeBdf;
pub use dielectric::DielectricBdf;
pub use diffuse::DiffuseBdf;
pub use ggx::{GgxBdf, MultiScatter};
pub use metal::MetalBdf;

use crate::energy::EnergyTables;
use crate::sampler::Sampler;
use serde::{Deserialize, Serialize};
use umbra_core::{Color, Material, SurfaceModel};
use umbra_math::{Frame, Vec3};

/// Which lobe of a model produced a sampled direction.
///
/// Returned by `sample_dir` and handed back to `pdf` and `estimator`, so a
/// stochastic choice made while sampling is honoured when evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lobe {
    Diffuse,
    Specular,
}

/// A sampled incident direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BdfSample {
    pub wi: Vec3,
    pub lobe: Lobe,
}

/// Diffuse reflectance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffuseModel {
    #[default]
    Lambert,
    OrenNayar,
}

/// Shading switches shared by every material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub diffuse_model: DiffuseModel,
    /// Add the multiple-scattering compensation lobes
    pub multi_scatter: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            diffuse_model: DiffuseModel::Lambert,
            multi_scatter: true,
        }
    }
}

impl ShadingConfig {
    pub fn with_diffuse_model(mut self, diffuse_model: DiffuseModel) -> Self {
        self.diffuse_model = diffuse_model;
        self
    }

    pub fn with_multi_scatter(mut self, multi_scatter: bool) -> Self {
        self.multi_scatter = multi_scatter;
        self
    }
}

/// A scattering model bound to one shading point.
#[derive(Debug, Clone)]
pub enum Bdf<'a> {
    Diffuse(DiffuseBdf),
    Ggx(GgxBdf<'a>),
    Metal(MetalBdf<'a>),
    Dielectric(DielectricBdf<'a>),
    Composite(CompositeBdf<'a>),
}

impl<'a> Bdf<'a> {
    pub fn pdf(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> f32 {
        match self {
            Bdf::Diffuse(b) => b.pdf(wo, wi),
            Bdf::Ggx(b) => b.pdf(wo, wi),
            Bdf::Metal(b) => b.pdf(wo, wi),
            Bdf::Dielectric(b) => b.pdf(wo, wi, lobe),
            Bdf::Composite(b) => b.pdf(wo, wi, lobe),
        }
    }

    pub fn sample_dir(&self, wo: Vec3, sampler: &mut dyn Sampler) -> Option<BdfSample> {
        match self {
            Bdf::Diffuse(b) => b.sample_dir(wo, sampler),
            Bdf::Ggx(b) => b.sample_dir(wo, sampler),
            Bdf::Metal(b) => b.sample_dir(wo, sampler),
            Bdf::Dielectric(b) => b.sample_dir(wo, sampler),
            Bdf::Composite(b) => b.sample_dir(wo, sampler),
        }
    }

    pub fn estimator(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> Color {
        match self {
            Bdf::Diffuse(b) => b.estimator(wo, wi),
            Bdf::Ggx(b) => b.estimator(wo, wi),
            Bdf::Metal(b) => b.estimator(wo, wi),
            Bdf::Dielectric(b) => b.estimator(wo, wi, lobe),
            Bdf::Composite(b) => b.estimator(wo, wi, lobe),
        }
    }
}

/// Build the model for `material` at a point with shading normal `normal`.
///
/// `sampler` is only consumed by the principled model, which picks metal or
/// dielectric here.
pub fn make_bdf<'a>(
    material: &Material,
    normal: Vec3,
    config: &ShadingConfig,
    tables: &'a EnergyTables,
    sampler: &mut dyn Sampler,
) -> Bdf<'a> {
    let roughness = material.roughness;
    let multi_scatter = || {
        if config.multi_scatter {
            MultiScatter::new(tables, roughness)
        } else {
            None
        }
    };
    let metal = || MetalBdf::new(normal, material.base_color, roughness, multi_scatter());
    let dielectric = || {
        DielectricBdf::new(
            normal,
            material.base_color,
            roughness,
            config.diffuse_model,
            tables,
            config.multi_scatter,
        )
    };

    match material.model {
        SurfaceModel::Diffuse => Bdf::Diffuse(DiffuseBdf::new(
            normal,
            material.base_color,
            roughness,
            config.diffuse_model,
        )),
        SurfaceModel::Ggx => Bdf::Ggx(GgxBdf::new(normal, roughness, multi_scatter())),
        SurfaceModel::Metal => Bdf::Metal(metal()),
        SurfaceModel::Dielectric => Bdf::Dielectric(dielectric()),
        SurfaceModel::Principled => Bdf::Composite(CompositeBdf::choose(
            material.metalness,
            sampler,
            metal,
            dielectric,
        )),
    }
}

/// `wo` and `wi` in the local frame, or `None` if either is below the
/// surface.
pub(crate) fn local_pair(frame: &Frame, wo: Vec3, wi: Vec3) -> Option<(Vec3, Vec3)> {
    let wo = frame.to_local(wo);
    let wi = frame.to_local(wi);
    (wo.z > 0.0 && wi.z > 0.0).then_some((wo, wi))
}
