//! Render driver: configuration, image buffer and the bucketed render loop.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bdf::ShadingConfig;
use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::energy::EnergyTables;
use crate::sampler::{PixelSampler, SampleSeed};
use crate::{Camera, PathTracer, World};
use umbra_core::Color;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of surfaces a path visits
    pub max_depth: u32,
    /// Bounce after which Russian roulette may end a path
    pub russian_roulette_depth: u32,
    /// Radiance of rays that leave the scene
    pub background: Color,
    /// Seed shared by every pixel sampler
    pub seed: u64,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    pub shading: ShadingConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 64,
            max_depth: 16,
            russian_roulette_depth: 4,
            background: Color::ZERO,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            shading: ShadingConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_russian_roulette_depth(mut self, depth: u32) -> Self {
        self.russian_roulette_depth = depth;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn with_shading(mut self, shading: ShadingConfig) -> Self {
        self.shading = shading;
        self
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (255.0 * linear_to_gamma(c).clamp(0.0, 1.0)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Average of `samples_per_pixel` path samples through pixel `(x, y)`.
///
/// Sample `s` of the pixel is seeded from `(seed, x, y, s)` alone, so the
/// value does not depend on which thread renders it.
pub fn render_pixel(
    tracer: &PathTracer,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    if config.samples_per_pixel == 0 {
        return Color::ZERO;
    }

    let mut pixel_color = Color::ZERO;
    for sample in 0..config.samples_per_pixel {
        let seed = SampleSeed::new(config.seed, x, y, sample);
        let mut sampler = PixelSampler::new(seed, config.samples_per_pixel);
        let ray = camera.get_ray(x, y, &mut sampler);
        pixel_color += tracer.radiance(ray, &mut sampler);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Linear radiance image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, line) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.offset(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + line.len()].copy_from_slice(line);
        }
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color_to_rgba(c)).collect()
    }
}

/// Render `world` through `camera`.
///
/// Buckets are traced in parallel with rayon and assembled afterwards; the
/// image is identical for any number of threads.
pub fn render(
    world: &World,
    camera: &Camera,
    tables: &EnergyTables,
    config: &RenderConfig,
) -> ImageBuffer {
    let start = Instant::now();
    if config.samples_per_pixel == 0 {
        log::warn!("samples_per_pixel is 0, the image will be black");
    }

    let tracer = PathTracer::new(world, tables, config);
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, &tracer, camera, config);
            log::debug!(
                "Bucket {} at ({}, {}) done",
                bucket.index,
                bucket.x,
                bucket.y
            );
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::Bucket;
    use umbra_core::{Material, Scene};
    use umbra_math::Vec3;

    fn scene() -> World {
        let mut scene = Scene::new("spheres");
        let ground = scene.add_material(Material::diffuse("ground", Color::splat(0.5)));
        let gold = scene.add_material(Material::metal("gold", Color::new(1.0, 0.78, 0.34), 0.3));
        let plastic = scene.add_material(
            Material::new("plastic", Color::new(0.2, 0.3, 0.8)).with_roughness(0.4),
        );
        scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
        scene.add_sphere(Vec3::new(-0.6, 0.0, -1.0), 0.5, gold);
        scene.add_sphere(Vec3::new(0.6, 0.0, -1.0), 0.5, plastic);
        World::build(scene).unwrap()
    }

    fn camera() -> Camera {
        Camera::new()
            .with_resolution(24, 16)
            .with_position(Vec3::new(0.0, 0.5, 2.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(50.0, 0.0, 1.0)
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::splat(4.0)), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(0.25, -1.0, f32::NAN)), [127, 0, 0, 255]);
    }

    #[test]
    fn test_render_pixel_sees_sphere() {
        let world = scene();
        let tables = EnergyTables::builtin();
        let config = RenderConfig::default()
            .with_samples(8)
            .with_max_depth(4)
            .with_background(Color::new(0.5, 0.7, 1.0));
        let tracer = PathTracer::new(&world, tables, &config);
        let camera = camera();

        // Center pixel hits geometry, so it is darker than the sky
        let color = render_pixel(&tracer, &camera, 12, 8, &config);
        assert!(color.length() > 0.0);
        assert!(color.z < 1.0);
    }

    #[test]
    fn test_write_bucket() {
        let mut image = ImageBuffer::new(4, 3);
        let bucket = Bucket::new(1, 1, 2, 2, 0);
        let pixels = vec![Color::X, Color::Y, Color::Z, Color::ONE];
        image.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(image.get(1, 1), Color::X);
        assert_eq!(image.get(2, 1), Color::Y);
        assert_eq!(image.get(1, 2), Color::Z);
        assert_eq!(image.get(2, 2), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.get(3, 2), Color::ZERO);
        assert_eq!(image.to_rgba().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_render_is_deterministic_across_thread_counts() {
        let world = scene();
        let tables = EnergyTables::builtin();
        let camera = camera();
        let config = RenderConfig::default()
            .with_samples(4)
            .with_max_depth(5)
            .with_russian_roulette_depth(2)
            .with_bucket_size(5)
            .with_background(Color::splat(0.8))
            .with_seed(99);

        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| render(&world, &camera, tables, &config));
        let many = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| render(&world, &camera, tables, &config));

        assert_eq!(single, many);
        assert!(single.pixels.iter().all(|c| c.is_finite()));

        let reseeded = render(&world, &camera, tables, &config.clone().with_seed(100));
        assert_ne!(single, reseeded);
    }

    #[test]
    fn test_zero_samples_renders_black() {
        let world = scene();
        let image = render(
            &world,
            &camera(),
            EnergyTables::builtin(),
            &RenderConfig::default().with_samples(0),
        );
        assert!(image.pixels.iter().all(|&c| c == Color::ZERO));
    }

    #[test]
    fn test_config_from_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "samples_per_pixel": 16, "background": [1.0, 0.5, 0.25] }"#)
                .unwrap();
        assert_eq!(config.samples_per_pixel, 16);
        assert_eq!(config.background, Color::new(1.0, 0.5, 0.25));
        assert_eq!(config.bucket_size, DEFAULT_BUCKET_SIZE);
    }
}
