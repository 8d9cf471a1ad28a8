//! Diffuse reflection: Lambertian or Oren-Nayar.

use super::{local_pair, BdfSample, DiffuseModel, Lobe};
use crate::sampler::Sampler;
use umbra_core::Color;
use umbra_math::sampling::{cosine_hemisphere, cosine_hemisphere_pdf};
use umbra_math::{Frame, Vec2, Vec3};

/// Diffuse lobe in local space.
///
/// Oren-Nayar uses the roughness as the slope deviation `sigma` (radians);
/// at zero roughness it reduces to Lambert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuseLobe {
    a: f32,
    b: f32,
}

impl DiffuseLobe {
    pub fn new(model: DiffuseModel, roughness: f32) -> Self {
        match model {
            DiffuseModel::Lambert => Self { a: 1.0, b: 0.0 },
            DiffuseModel::OrenNayar => {
                let sigma2 = roughness * roughness;
                Self {
                    a: 1.0 - 0.5 * sigma2 / (sigma2 + 0.33),
                    b: 0.45 * sigma2 / (sigma2 + 0.09),
                }
            }
        }
    }

    /// `f * cos / pdf` divided by the albedo.
    pub fn weight(&self, wo: Vec3, wi: Vec3) -> f32 {
        if wo.z <= 0.0 || wi.z <= 0.0 {
            return 0.0;
        }
        if self.b == 0.0 {
            return self.a;
        }

        let sin_o = (1.0 - wo.z * wo.z).max(0.0).sqrt();
        let sin_i = (1.0 - wi.z * wi.z).max(0.0).sqrt();
        if sin_o == 0.0 || sin_i == 0.0 {
            return self.a;
        }

        let cos_dphi = ((wo.x * wi.x + wo.y * wi.y) / (sin_o * sin_i)).clamp(-1.0, 1.0);

        // alpha is the larger polar angle, beta the smaller
        let (sin_alpha, tan_beta) = if wi.z < wo.z {
            (sin_i, sin_o / wo.z)
        } else {
            (sin_o, sin_i / wi.z)
        };

        self.a + self.b * cos_dphi.max(0.0) * sin_alpha * tan_beta
    }

    pub fn sample(&self, wo: Vec3, u: Vec2) -> Option<Vec3> {
        if wo.z <= 0.0 {
            return None;
        }
        let wi = cosine_hemisphere(u);
        (wi.z > 0.0).then_some(wi)
    }

    pub fn pdf(&self, wo: Vec3, wi: Vec3) -> f32 {
        if wo.z <= 0.0 || wi.z <= 0.0 {
            return 0.0;
        }
        cosine_hemisphere_pdf(wi.z)
    }
}

/// Diffuse BDF.
#[derive(Debug, Clone)]
pub struct DiffuseBdf {
    frame: Frame,
    albedo: Color,
    lobe: DiffuseLobe,
}

impl DiffuseBdf {
    pub fn new(normal: Vec3, albedo: Color, roughness: f32, model: DiffuseModel) -> Self {
        Self {
            frame: Frame::from_normal(normal),
            albedo,
            lobe: DiffuseLobe::new(model, roughness),
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
            lobe: Lobe::Diffuse,
        })
    }

    pub fn estimator(&self, wo: Vec3, wi: Vec3) -> Color {
        match local_pair(&self.frame, wo, wi) {
            Some((wo, wi)) => self.albedo * self.lobe.weight(wo, wi),
            None => Color::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RandomSampler;

    #[test]
    fn test_lambert_estimator_is_albedo() {
        let albedo = Color::new(0.8, 0.5, 0.2);
        let bdf = DiffuseBdf::new(Vec3::Y, albedo, 0.7, DiffuseModel::Lambert);
        let wo = Vec3::new(0.3, 0.8, 0.1).normalize();
        let mut sampler = RandomSampler::new(1);

        for _ in 0..100 {
            let s = bdf.sample_dir(wo, &mut sampler).unwrap();
            assert_eq!(s.lobe, Lobe::Diffuse);
            assert!(s.wi.dot(Vec3::Y) > 0.0);
            assert_eq!(bdf.estimator(wo, s.wi), albedo);
            assert!((bdf.pdf(wo, s.wi) - s.wi.y / std::f32::consts::PI).abs() < 1e-5);
        }
    }

    #[test]
    fn test_oren_nayar_zero_roughness_is_lambert() {
        let lobe = DiffuseLobe::new(DiffuseModel::OrenNayar, 0.0);
        assert_eq!(lobe, DiffuseLobe::new(DiffuseModel::Lambert, 0.5));
    }

    #[test]
    fn test_oren_nayar_terms() {
        let lobe = DiffuseLobe::new(DiffuseModel::OrenNayar, 1.0);
        let wo = Vec3::new(0.6, 0.0, 0.8);

        // Same azimuth adds the retro-reflective term
        let forward = lobe.weight(wo, Vec3::new(0.8, 0.0, 0.6));
        // Opposite azimuth leaves only A
        let backward = lobe.weight(wo, Vec3::new(-0.8, 0.0, 0.6));

        let a = 1.0 - 0.5 / 1.33;
        let b = 0.45 / 1.09;
        assert!((backward - a).abs() < 1e-5);
        // sin(alpha) = 0.8, tan(beta) = 0.6 / 0.8
        assert!((forward - (a + b * 0.8 * 0.75)).abs() < 1e-5);
    }

    #[test]
    fn test_below_horizon() {
        let bdf = DiffuseBdf::new(Vec3::Z, Color::ONE, 0.5, DiffuseModel::OrenNayar);
        let up = Vec3::new(0.0, 0.6, 0.8);
        let down = Vec3::new(0.0, 0.6, -0.8);
        let mut sampler = RandomSampler::new(2);

        assert_eq!(bdf.pdf(up, down), 0.0);
        assert_eq!(bdf.estimator(up, down), Color::ZERO);
        assert_eq!(bdf.estimator(down, up), Color::ZERO);
        assert!(bdf.sample_dir(down, &mut sampler).is_none());
    }
}
