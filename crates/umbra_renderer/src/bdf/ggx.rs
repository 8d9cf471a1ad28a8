//! GGX microfacet reflection.
//!
//! Isotropic Trowbridge-Reitz distribution with the height-correlated Smith
//! masking-shadowing term. Directions are sampled from the distribution of
//! visible normals (Heitz 2018, "Sampling the GGX Distribution of Visible
//! Normals"), which makes the single-scatter estimator `G2 / G1(wo)`.
//!
//! Everything on [`GgxLobe`] works in the local shading frame, normal +Z.

use super::{local_pair, BdfSample, Lobe};
use crate::energy::EnergyTables;
use crate::sampler::Sampler;
use std::f32::consts::PI;
use umbra_core::Color;
use umbra_math::{Frame, Vec2, Vec3};

/// Smallest alpha used; keeps D finite for perfectly smooth materials.
pub const MIN_ALPHA: f32 = 1e-3;

/// GGX lobe in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GgxLobe {
    alpha: f32,
}

impl GgxLobe {
    /// Lobe for a perceptual roughness, `alpha = roughness^2`.
    pub fn from_roughness(roughness: f32) -> Self {
        Self {
            alpha: (roughness * roughness).max(MIN_ALPHA),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Normal distribution `D(h)`. Zero below the surface.
    pub fn d(&self, h: Vec3) -> f32 {
        if h.z <= 0.0 {
            return 0.0;
        }
        let a2 = self.alpha * self.alpha;
        let denom = 1.0 + h.z * h.z * (a2 - 1.0);
        a2 / (PI * denom * denom)
    }

    /// Smith `Lambda(w)`.
    pub fn lambda(&self, w: Vec3) -> f32 {
        let z2 = w.z * w.z;
        if z2 == 0.0 {
            return f32::INFINITY;
        }
        let tan2 = (w.x * w.x + w.y * w.y) / z2;
        (-1.0 + (1.0 + self.alpha * self.alpha * tan2).sqrt()) * 0.5
    }

    /// Masking term for one direction.
    pub fn g1(&self, w: Vec3) -> f32 {
        1.0 / (1.0 + self.lambda(w))
    }

    /// Height-correlated masking-shadowing.
    pub fn g2(&self, wo: Vec3, wi: Vec3) -> f32 {
        1.0 / (1.0 + self.lambda(wo) + self.lambda(wi))
    }

    /// Draw a visible half vector for `wo` from two uniform numbers.
    pub fn sample_half_vector(&self, wo: Vec3, u: Vec2) -> Vec3 {
        let a = self.alpha;

        // Stretch the view vector to the hemisphere configuration
        let vh = Vec3::new(a * wo.x, a * wo.y, wo.z).normalize();

        // Orthonormal basis; +X when the view is along the normal
        let len_sq = vh.x * vh.x + vh.y * vh.y;
        let t1 = if len_sq > 0.0 {
            Vec3::new(-vh.y, vh.x, 0.0) / len_sq.sqrt()
        } else {
            Vec3::X
        };
        let t2 = vh.cross(t1);

        // Uniform disk sample, warped onto the visible half of the disk
        let r = u.x.sqrt();
        let phi = 2.0 * PI * u.y;
        let p1 = r * phi.cos();
        let p2 = r * phi.sin();
        let s = 0.5 * (1.0 + vh.z);
        let p2 = (1.0 - s) * (1.0 - p1 * p1).max(0.0).sqrt() + s * p2;

        // Reproject onto the hemisphere and unstretch
        let nh = p1 * t1 + p2 * t2 + (1.0 - p1 * p1 - p2 * p2).max(0.0).sqrt() * vh;
        Vec3::new(a * nh.x, a * nh.y, nh.z.max(0.0)).normalize()
    }

    /// Reflect `wo` about a sampled half vector. `None` below the surface.
    pub fn sample(&self, wo: Vec3, u: Vec2) -> Option<Vec3> {
        if wo.z <= 0.0 {
            return None;
        }
        let h = self.sample_half_vector(wo, u);
        let wi = 2.0 * wo.dot(h) * h - wo;
        (wi.z > 0.0).then_some(wi)
    }

    /// Solid-angle density of [`GgxLobe::sample`].
    pub fn pdf(&self, wo: Vec3, wi: Vec3) -> f32 {
        if wo.z <= 0.0 || wi.z <= 0.0 {
            return 0.0;
        }
        let h = (wo + wi).normalize();
        self.g1(wo) * self.d(h) / (4.0 * wo.z)
    }

    /// `f * cos(wi) / pdf` with unit Fresnel.
    pub fn single_scatter(&self, wo: Vec3, wi: Vec3) -> f32 {
        if wo.z <= 0.0 || wi.z <= 0.0 {
            return 0.0;
        }
        self.g2(wo, wi) / self.g1(wo)
    }
}

/// Schlick's Fresnel approximation.
pub fn schlick(f0: Color, cos_theta: f32) -> Color {
    let m = (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5);
    f0 + (Color::ONE - f0) * m
}

/// Hemispherical average of [`schlick`].
pub fn schlick_average(f0: Color) -> Color {
    (20.0 * f0 + Color::ONE) / 21.0
}

/// Kulla-Conty multiple-scattering lobe for one roughness.
#[derive(Debug, Clone, Copy)]
pub struct MultiScatter<'a> {
    tables: &'a EnergyTables,
    roughness: f32,
    e_avg: f32,
}

impl<'a> MultiScatter<'a> {
    /// `None` when the tables say there is nothing to compensate.
    pub fn new(tables: &'a EnergyTables, roughness: f32) -> Option<Self> {
        let e_avg = tables.average_albedo(roughness);
        (e_avg < 1.0).then_some(Self {
            tables,
            roughness,
            e_avg,
        })
    }

    /// Uncolored multi-scatter BRDF value `f_ms(wo, wi)`.
    pub fn brdf(&self, cos_o: f32, cos_i: f32) -> f32 {
        let e_o = self.tables.directional_albedo(self.roughness, cos_o);
        let e_i = self.tables.directional_albedo(self.roughness, cos_i);
        (1.0 - e_o) * (1.0 - e_i) / (PI * (1.0 - self.e_avg))
    }

    /// Color of the energy that bounces more than once, `F_ms`.
    pub fn fresnel(&self, f_avg: Color) -> Color {
        f_avg * f_avg * self.e_avg / (Color::ONE - f_avg * (1.0 - self.e_avg))
    }

    /// Contribution to an estimator for a direction drawn with density `pdf`.
    pub fn estimator(&self, f_avg: Color, cos_o: f32, cos_i: f32, pdf: f32) -> Color {
        if pdf <= 0.0 {
            return Color::ZERO;
        }
        self.fresnel(f_avg) * (self.brdf(cos_o, cos_i) * cos_i / pdf)
    }

    pub fn average_albedo(&self) -> f32 {
        self.e_avg
    }
}

/// Bare GGX reflection with unit Fresnel.
#[derive(Debug, Clone)]
pub struct GgxBdf<'a> {
    frame: Frame,
    lobe: GgxLobe,
    multi_scatter: Option<MultiScatter<'a>>,
}

impl<'a> GgxBdf<'a> {
    pub fn new(normal: Vec3, roughness: f32, multi_scatter: Option<MultiScatter<'a>>) -> Self {
        Self {
            frame: Frame::from_normal(normal),
            lobe: GgxLobe::from_roughness(roughness),
            multi_scatter,
        }
    }

    pub fn pdf(&self, wo: Vec3, wi: Vec3) -> f32 {
        match local_pair(&self.frame, wo, wi) {
            Some((wo, wi)) => self.lobe.pdf(wo, wi),
            None => 0.0,
        }
    }

    pub fn sample_dir(&self, wo: Vec3, sampler: &mut dyn Sampler) -> Option<BdfSample> {
        let wi = self.lobe.sample(self.frame.to_local(wo), sampler.next_2d())?;
        Some(BdfSample {
            wi: self.frame.to_world(wi),
            lobe: Lobe::Specular,
        })
    }

    pub fn estimator(&self, wo: Vec3, wi: Vec3) -> Color {
        let Some((wo, wi)) = local_pair(&self.frame, wo, wi) else {
            return Color::ZERO;
        };

        let single = Color::splat(self.lobe.single_scatter(wo, wi));
        match &self.multi_scatter {
            Some(ms) => single + ms.estimator(Color::ONE, wo.z, wi.z, self.lobe.pdf(wo, wi)),
            None => single,
        }
    }
}
