//! Metalness-driven blend of the metal and dielectric models.

use super::dielectric::DielectricBdf;
use super::metal::MetalBdf;
use super::{BdfSample, Lobe};
use crate::sampler::Sampler;
use umbra_core::Color;
use umbra_math::Vec3;

/// Picks one of the two models when it is built.
///
/// The metal model is chosen with probability `metalness`, which makes the
/// path estimate an unbiased estimate of the linear blend
/// `metalness * metal + (1 - metalness) * dielectric` without evaluating
/// both.
#[derive(Debug, Clone)]
pub enum CompositeBdf<'a> {
    Metal(MetalBdf<'a>),
    Dielectric(DielectricBdf<'a>),
}

impl<'a> CompositeBdf<'a> {
    /// Draw the model for `metalness` from `sampler`.
    ///
    /// The constructors are only called for the side that was picked.
    pub fn choose(
        metalness: f32,
        sampler: &mut dyn Sampler,
        metal: impl FnOnce() -> MetalBdf<'a>,
        dielectric: impl FnOnce() -> DielectricBdf<'a>,
    ) -> Self {
        if sampler.next_1d() < metalness {
            CompositeBdf::Metal(metal())
        } else {
            CompositeBdf::Dielectric(dielectric())
        }
    }

    pub fn is_metal(&self) -> bool {
        matches!(self, CompositeBdf::Metal(_))
    }

    pub fn pdf(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> f32 {
        match self {
            CompositeBdf::Metal(m) => m.pdf(wo, wi),
            CompositeBdf::Dielectric(d) => d.pdf(wo, wi, lobe),
        }
    }

    pub fn sample_dir(&self, wo: Vec3, sampler: &mut dyn Sampler) -> Option<BdfSample> {
        match self {
            CompositeBdf::Metal(m) => m.sample_dir(wo, sampler),
            CompositeBdf::Dielectric(d) => d.sample_dir(wo, sampler),
        }
    }

    pub fn estimator(&self, wo: Vec3, wi: Vec3, lobe: Lobe) -> Color {
        match self {
            CompositeBdf::Metal(m) => m.estimator(wo, wi),
            CompositeBdf::Dielectric(d) => d.estimator(wo, wi, lobe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdf::DiffuseModel;
    use crate::energy::EnergyTables;
    use crate::sampler::RandomSampler;

    fn build<'a>(
        tables: &'a EnergyTables,
        metalness: f32,
        sampler: &mut dyn Sampler,
    ) -> CompositeBdf<'a> {
        CompositeBdf::choose(
            metalness,
            sampler,
            || MetalBdf::new(Vec3::Z, Color::ONE, 0.4, None),
            || DielectricBdf::new(Vec3::Z, Color::ONE, 0.4, DiffuseModel::Lambert, tables, false),
        )
    }

    #[test]
    fn test_extremes_are_deterministic() {
        let tables = EnergyTables::builtin();
        let mut sampler = RandomSampler::new(0);
        for _ in 0..100 {
            assert!(build(tables, 1.0, &mut sampler).is_metal());
            assert!(!build(tables, 0.0, &mut sampler).is_metal());
        }
    }

    #[test]
    fn test_selection_frequency_follows_metalness() {
        let tables = EnergyTables::builtin();
        let mut sampler = RandomSampler::new(4);
        let n = 20_000;
        let metals = (0..n)
            .filter(|_| build(tables, 0.3, &mut sampler).is_metal())
            .count();
        assert!((metals as f32 / n as f32 - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_delegates_to_chosen_model() {
        let tables = EnergyTables::builtin();
        let mut sampler = RandomSampler::new(9);
        let bdf = build(tables, 1.0, &mut sampler);
        let metal = MetalBdf::new(Vec3::Z, Color::ONE, 0.4, None);

        let wo = Vec3::new(0.0, 0.6, 0.8);
        let wi = Vec3::new(0.1, -0.5, 0.86).normalize();
        assert_eq!(bdf.pdf(wo, wi, Lobe::Diffuse), metal.pdf(wo, wi));
        assert_eq!(bdf.estimator(wo, wi, Lobe::Specular), metal.estimator(wo, wi));
    }
}
