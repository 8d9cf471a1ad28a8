//! Diffuse base under a GGX specular coat.
//!
//! One lobe is drawn per sample. The specular coat is chosen with
//! probability `E_spec(wo)`, the fraction of energy it reflects, and the
//! choice travels with the sampled direction as a [`Lobe`] token. Both
//! estimators carry the constant [`LOBE_COMPENSATION`] factor.

use super::diffuse::DiffuseLobe;
use super::ggx::{schlick, schlick_average, GgxLobe, MultiScatter};
use super::{local_pair, BdfSample, DiffuseModel, Lobe};
use crate::energy::EnergyTables;
use crate::sampler::Sampler;
use umbra_core::Color;
use umbra_math::{Frame, Vec3};

/// Normal-incidence reflectance of the coat.
pub const DIELECTRIC_F0: f32 = 0.04;

/// Weight applied to whichever lobe was sampled.
pub const LOBE_COMPENSATION: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct DielectricBdf<'a> {
    frame: Frame,
    albedo: Color,
    diffuse: DiffuseLobe,
    specular: GgxLobe,
    roughness: f32,
    tables: &'a EnergyTables,
    multi_scatter: Option<MultiScatter<'a>>,
}

impl<'a> DielectricBdf<'a> {
    pub fn new(
        normal: Vec3,
        albedo: Color,
        roughness: f32,
        diffuse_model: DiffuseModel,
        tables: &'a EnergyTables,
        multi_scatter: bool,
    ) -> Self {
        Self {
            frame: Frame::from_normal(normal),
            albedo,
            diffuse: DiffuseLobe::new(diffuse_model, roughness),
            specular: GgxLobe::from_roughness(roughness),
            roughness,
            tables,
            multi_scatter: if multi_scatter {
                MultiScatter::new(tables, roughness)
            } else {
                None
            },
        }
    }

    fn f_avg() -> f32 {
        schlick_average(Color::splat(DIELECTRIC_F0)).x
    }

    /// Energy reflected by the coat towards a direction with cosine `cos`.
    fn specular_albedo(&self, cos: f32) -> f32 {
        let e = self.tables.directional_albedo(self.roughness, cos);
        Self::f_avg() * e + DIELECTRIC_F0 * (1.0 - e)
    }

    /// Hemispherical average of [`DielectricBdf::specular_albedo`].
    fn specular_albedo_average(&self) -> f32 {
        let e_avg = self.tables.average_albedo(self.roughness);
        Self::f_avg() * e_avg + DIELECTRIC_F0 * (1.0 - e_avg)
    }

    /// Probability of picking the specular lobe for `wo`.
    pub fn specular_probability(&self, wo: Vec3) -> f32 {
        let cos = self.frame.to_local(wo).z;
        if cos <= 0.0 {
            return 0.0;
        }
        self.specular_albedo(cos)
    }

    pub fn pdf(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> f32 {
        let Some((wo, wi)) = local_pair(&self.frame, wo, wi) else {
            return 0.0;
        };
        match lobe {
            Lobe::Specular => self.specular.pdf(wo, wi),
            Lobe::Diffuse => self.diffuse.pdf(wo, wi),
        }
    }

    pub fn sample_dir(&self, wo: Vec3, sampler: &mut dyn Sampler) -> Option<BdfSample> {
        let local_wo = self.frame.to_local(wo);
        if local_wo.z <= 0.0 {
            return None;
        }

        let choose = sampler.next_1d();
        let u = sampler.next_2d();
        let (wi, lobe) = if choose < self.specular_albedo(local_wo.z) {
            (self.specular.sample(local_wo, u)?, Lobe::Specular)
        } else {
            (self.diffuse.sample(local_wo, u)?, Lobe::Diffuse)
        };

        Some(BdfSample {
            wi: self.frame.to_world(wi),
            lobe,
        })
    }

    pub fn estimator(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> Color {
        let Some((wo, wi)) = local_pair(&self.frame, wo, wi) else {
            return Color::ZERO;
        };

        match lobe {
            Lobe::Specular => {
                let f0 = Color::splat(DIELECTRIC_F0);
                let h = (wo + wi).normalize();
                let mut value = schlick(f0, wo.dot(h)) * self.specular.single_scatter(wo, wi);
                if let Some(ms) = &self.multi_scatter {
                    let pdf = self.specular.pdf(wo, wi);
                    value += ms.estimator(schlick_average(f0), wo.z, wi.z, pdf);
                }
                value * LOBE_COMPENSATION
            }

            Lobe::Diffuse => {
                let base = self.albedo * self.diffuse.weight(wo, wi);

                // Light reaching the base crossed the coat twice
                let transmitted = if self.multi_scatter.is_some() {
                    (1.0 - self.specular_albedo(wo.z)) * (1.0 - self.specular_albedo(wi.z))
                        / (1.0 - self.specular_albedo_average())
                } else {
                    1.0 - self.specular_albedo(wo.z)
                };
                base * transmitted * LOBE_COMPENSATION
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RandomSampler;

    fn bdf(tables: &EnergyTables, roughness: f32, multi_scatter: bool) -> DielectricBdf<'_> {
        DielectricBdf::new(
            Vec3::Z,
            Color::splat(0.8),
            roughness,
            DiffuseModel::Lambert,
            tables,
            multi_scatter,
        )
    }

    #[test]
    fn test_lobe_token_selects_pdf() {
        let tables = EnergyTables::builtin();
        let bdf = bdf(tables, 0.3, true);
        let wo = Vec3::new(0.0, 0.6, 0.8);
        let mut sampler = RandomSampler::new(12);
        let mut seen = [false, false];

        for _ in 0..2000 {
            let Some(s) = bdf.sample_dir(wo, &mut sampler) else {
                continue;
            };
            let pdf = bdf.pdf(wo, s.wi, s.lobe);
            assert!(pdf > 0.0);
            match s.lobe {
                Lobe::Specular => {
                    seen[0] = true;
                    assert_eq!(pdf, bdf.specular.pdf(wo, s.wi));
                }
                Lobe::Diffuse => {
                    seen[1] = true;
                    assert_eq!(pdf, bdf.diffuse.pdf(wo, s.wi));
                }
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_specular_probability() {
        let tables = EnergyTables::builtin();
        let bdf = bdf(tables, 0.5, false);
        let p = bdf.specular_probability(Vec3::Z);
        assert!(p > DIELECTRIC_F0 * 0.5 && p < 0.1, "{p}");
        assert_eq!(bdf.specular_probability(Vec3::NEG_Z), 0.0);

        let mut sampler = RandomSampler::new(3);
        let wo = Vec3::Z;
        let n = 20_000;
        let specular = (0..n)
            .filter_map(|_| bdf.sample_dir(wo, &mut sampler))
            .filter(|s| s.lobe == Lobe::Specular)
            .count();
        assert!((specular as f32 / n as f32 - p).abs() < 0.01);
    }

    #[test]
    fn test_diffuse_estimator_without_multi_scatter() {
        let tables = EnergyTables::builtin();
        let bdf = bdf(tables, 0.5, false);
        let wo = Vec3::new(0.6, 0.0, 0.8);
        let wi = Vec3::new(-0.3, 0.4, 0.866).normalize();

        let transmitted = 1.0 - bdf.specular_probability(wo);
        let expected = Color::splat(0.8) * transmitted * LOBE_COMPENSATION;
        let e = bdf.estimator(wo, wi, Lobe::Diffuse);
        assert!((e - expected).length() < 1e-5, "{e:?} vs {expected:?}");
    }

    #[test]
    fn test_specular_estimator_is_compensated_fresnel() {
        let tables = EnergyTables::builtin();
        let bdf = bdf(tables, 0.5, false);
        let wo = Vec3::new(0.0, 0.6, 0.8);
        let wi = Vec3::new(0.1, -0.5, 0.86).normalize();

        let h = (wo + wi).normalize();
        let single = schlick(Color::splat(DIELECTRIC_F0), wo.dot(h))
            * bdf.specular.single_scatter(wo, wi);
        let e = bdf.estimator(wo, wi, Lobe::Specular);
        assert!(single.x > 0.0);
        assert!((e - single * LOBE_COMPENSATION).length() < 1e-6);
    }

    #[test]
    fn test_white_base_furnace() {
        // The diffuse path alone returns 2 (1 - E_spec(wo))^2 on average, the
        // coat adds a little on top and the total stays under the factor
        let tables = EnergyTables::builtin();
        let mut white = bdf(tables, tables.roughness_keys()[16], true);
        white.albedo = Color::ONE;
        let mut sampler = RandomSampler::new(77);

        for wo in [Vec3::Z, Vec3::new(0.6, 0.0, 0.8), Vec3::new(0.0, 0.9, 0.4359)] {
            let wo = wo.normalize();
            let p_specular = white.specular_probability(wo);
            let diffuse_only = LOBE_COMPENSATION * (1.0 - p_specular).powi(2);

            let n = 40_000;
            let mut sum = 0.0_f64;
            for _ in 0..n {
                if let Some(s) = white.sample_dir(wo, &mut sampler) {
                    sum += white.estimator(wo, s.wi, s.lobe).x as f64;
                }
            }
            let mean = (sum / n as f64) as f32;
            assert!(mean > diffuse_only * 0.97, "{wo:?}: {mean} vs {diffuse_only}");
            assert!(mean <= LOBE_COMPENSATION, "{wo:?}: {mean}");
        }
    }

    #[test]
    fn test_below_horizon() {
        let tables = EnergyTables::builtin();
        let bdf = bdf(tables, 0.5, true);
        let up = Vec3::new(0.0, 0.6, 0.8);
        let down = Vec3::new(0.0, 0.6, -0.8);
        let mut sampler = RandomSampler::new(1);

        for lobe in [Lobe::Diffuse, Lobe::Specular] {
            assert_eq!(bdf.pdf(up, down, lobe), 0.0);
            assert_eq!(bdf.estimator(up, down, lobe), Color::ZERO);
            assert_eq!(bdf.estimator(down, up, lobe), Color::ZERO);
        }
        assert!(bdf.sample_dir(down, &mut sampler).is_none());
    }
}
