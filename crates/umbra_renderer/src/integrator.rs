//! Unidirectional path tracing estimator.
//!
//! Each bounce asks the world for the nearest hit, binds a BDF to the hit's
//! shading normal, samples a direction from it and scales the path
//! throughput by the estimator `f * cos / pdf`.

use crate::bdf::{make_bdf, ShadingConfig};
use crate::energy::EnergyTables;
use crate::renderer::RenderConfig;
use crate::sampler::{PixelSampler, Sampler};
use crate::World;
use umbra_core::Color;
use umbra_math::Ray;

/// Largest survival probability used by Russian roulette.
const MAX_SURVIVAL: f32 = 0.95;

/// Path tracer bound to a world and the energy tables its BDFs read.
#[derive(Debug, Clone)]
pub struct PathTracer<'a> {
    world: &'a World,
    tables: &'a EnergyTables,
    shading: ShadingConfig,
    max_depth: u32,
    russian_roulette_depth: u32,
    background: Color,
}

impl<'a> PathTracer<'a> {
    pub fn new(world: &'a World, tables: &'a EnergyTables, config: &RenderConfig) -> Self {
        Self {
            world,
            tables,
            shading: config.shading,
            max_depth: config.max_depth,
            russian_roulette_depth: config.russian_roulette_depth,
            background: config.background,
        }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    /// Radiance arriving along `ray`.
    ///
    /// Bounce `n` draws from stream `n + 1` of `sampler`; stream 0 belongs
    /// to the camera. At most `max_depth` surfaces are visited; a path that
    /// is still alive after that contributes nothing more.
    pub fn radiance(&self, ray: Ray, sampler: &mut PixelSampler) -> Color {
        let mut ray = ray;
        let mut radiance = Color::ZERO;
        let mut throughput = Color::ONE;

        for bounce in 0..self.max_depth {
            let Some(rec) = self.world.intersect(&ray, f32::INFINITY) else {
                radiance += throughput * self.background;
                break;
            };

            let material = self.world.material(rec.material);
            if material.is_emissive() && rec.front_face {
                radiance += throughput * material.emissive;
            }

            sampler.start_bounce(bounce + 1);
            let wo = -ray.direction().normalize();
            let bdf = make_bdf(material, rec.shading_normal, &self.shading, self.tables, sampler);

            let Some(sample) = bdf.sample_dir(wo, sampler) else {
                break;
            };
            let weight = bdf.estimator(wo, sample.wi, sample.lobe);
            if !weight.is_finite() || weight.max_element() <= 0.0 {
                break;
            }
            throughput *= weight;

            if bounce + 1 >= self.russian_roulette_depth {
                let survival = throughput.max_element().min(MAX_SURVIVAL);
                if sampler.next_1d() >= survival {
                    break;
                }
                throughput /= survival;
            }

            ray = rec.spawn_ray(sample.wi);
        }

        radiance
    }
}
