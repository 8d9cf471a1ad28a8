//! GGX conductor tinted by the base color.

use super::ggx::{schlick, schlick_average, GgxLobe, MultiScatter};
use super::{local_pair, BdfSample, Lobe};
use crate::sampler::Sampler;
use umbra_core::Color;
use umbra_math::{Frame, Vec3};

/// Conductor with Schlick Fresnel (`F0` = base color) and optional
/// multiple-scattering compensation.
#[derive(Debug, Clone)]
pub struct MetalBdf<'a> {
    frame: Frame,
    lobe: GgxLobe,
    f0: Color,
    multi_scatter: Option<MultiScatter<'a>>,
}

impl<'a> MetalBdf<'a> {
    pub fn new(
        normal: Vec3,
        f0: Color,
        roughness: f32,
        multi_scatter: Option<MultiScatter<'a>>,
    ) -> Self {
        Self {
            frame: Frame::from_normal(normal),
            lobe: GgxLobe::from_roughness(roughness),
            f0,
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

        let h = (wo + wi).normalize();
        let single = schlick(self.f0, wo.dot(h)) * self.lobe.single_scatter(wo, wi);

        match &self.multi_scatter {
            Some(ms) => {
                let pdf = self.lobe.pdf(wo, wi);
                single + ms.estimator(schlick_average(self.f0), wo.z, wi.z, pdf)
            }
            None => single,
        }
    }
}
