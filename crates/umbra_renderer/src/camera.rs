//! Camera for primary ray generation.

use crate::sampler::Sampler;
use serde::{Deserialize, Serialize};
use umbra_math::sampling::concentric_disk;
use umbra_math::{Ray, Vec3};

/// Look-at camera with an optional thin lens.
///
/// With `defocus_angle == 0` it is a pinhole and every ray starts at
/// `look_from`. Deserializing goes through [`CameraSettings`], so a loaded
/// camera is ready to trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CameraSettings", into = "CameraSettings")]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    defocus_angle: f32, // Variation angle of rays through each pixel
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    w: Vec3,
}

/// Serialized form of a [`Camera`]: its settings without the cached viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    pub vfov: f32,
    pub defocus_angle: f32,
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Camera::new().into()
    }
}

impl From<CameraSettings> for Camera {
    fn from(settings: CameraSettings) -> Self {
        Camera::new()
            .with_resolution(settings.image_width, settings.image_height)
            .with_position(settings.look_from, settings.look_at, settings.vup)
            .with_lens(settings.vfov, settings.defocus_angle, settings.focus_dist)
    }
}

impl From<Camera> for CameraSettings {
    fn from(camera: Camera) -> Self {
        Self {
            image_width: camera.image_width,
            image_height: camera.image_height,
            look_from: camera.look_from,
            look_at: camera.look_at,
            vup: camera.vup,
            vfov: camera.vfov,
            defocus_angle: camera.defocus_angle,
            focus_dist: camera.focus_dist,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 800,
            image_height: 450,
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            w: Vec3::Z,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width.max(1);
        self.image_height = height.max(1);
        self.initialize();
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self.initialize();
        self
    }

    /// Recompute the cached viewport vectors. The builders call this.
    pub fn initialize(&mut self) {
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Camera basis
        self.w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(self.w).normalize();
        let v = self.w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.look_from - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = u * defocus_radius;
        self.defocus_disk_v = v * defocus_radius;
    }

    /// Ray through a jittered point of pixel `(i, j)`. Row 0 is the top of
    /// the image.
    pub fn get_ray(&self, i: u32, j: u32, sampler: &mut dyn Sampler) -> Ray {
        let offset = sampler.next_2d();

        let pixel_sample = self.pixel00_loc
            + (i as f32 + offset.x - 0.5) * self.pixel_delta_u
            + (j as f32 + offset.y - 0.5) * self.pixel_delta_v;

        let origin = if self.defocus_angle <= 0.0 {
            self.look_from
        } else {
            let p = concentric_disk(sampler.next_2d());
            self.look_from + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
        };

        Ray::new(origin, (pixel_sample - origin).normalize())
    }

    /// Direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        -self.w
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RandomSampler;

    #[test]
    fn test_camera_initialize() {
        let camera = Camera::new()
            .with_resolution(800, 600)
            .with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);

        assert!((camera.forward() - Vec3::NEG_Z).length() < 0.001);
    }

    #[test]
    fn test_camera_ray_direction() {
        let camera = Camera::new()
            .with_resolution(100, 100)
            .with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);
        let mut sampler = RandomSampler::new(42);

        // Center ray should point roughly towards -Z
        let ray = camera.get_ray(50, 50, &mut sampler);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!(ray.direction().z < -0.99);
        assert!((ray.direction().length() - 1.0).abs() < 1e-5);

        // Top-left pixel points up and to the left
        let ray = camera.get_ray(0, 0, &mut sampler);
        assert!(ray.direction().x < 0.0 && ray.direction().y > 0.0);
    }

    #[test]
    fn test_deserialized_camera_is_initialized() {
        let json = r#"{
            "image_width": 20,
            "image_height": 10,
            "look_from": [0.0, 0.0, 5.0],
            "look_at": [0.0, 0.0, 0.0],
            "vfov": 40.0
        }"#;
        let loaded: Camera = serde_json::from_str(json).unwrap();
        let built = Camera::new()
            .with_resolution(20, 10)
            .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .with_lens(40.0, 0.0, 1.0);

        assert_eq!(loaded.pixel00_loc, built.pixel00_loc);
        assert_eq!(loaded.pixel_delta_u, built.pixel_delta_u);
        assert_eq!(loaded.pixel_delta_v, built.pixel_delta_v);
        assert!((loaded.forward() - Vec3::NEG_Z).length() < 1e-6);

        let mut a = RandomSampler::new(5);
        let mut b = RandomSampler::new(5);
        assert_eq!(loaded.get_ray(3, 7, &mut a), built.get_ray(3, 7, &mut b));

        let round_trip: Camera =
            serde_json::from_str(&serde_json::to_string(&loaded).unwrap()).unwrap();
        assert_eq!(round_trip.pixel00_loc, loaded.pixel00_loc);
    }

    #[test]
    fn test_thin_lens_origins_stay_on_disk() {
        let camera = Camera::new()
            .with_resolution(64, 64)
            .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .with_lens(40.0, 10.0, 5.0);
        let radius = 5.0 * 5f32.to_radians().tan();
        let mut sampler = RandomSampler::new(7);

        for _ in 0..100 {
            let ray = camera.get_ray(32, 32, &mut sampler);
            let offset = ray.origin() - Vec3::new(0.0, 0.0, 5.0);
            assert!(offset.z.abs() < 1e-5);
            assert!(offset.length() <= radius * 1.0001);
        }
    }
}
