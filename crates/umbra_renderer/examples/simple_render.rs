//! Simple path tracer example.
//!
//! Renders spheres in every material model next to a triangle mesh and
//! saves the result in PPM format.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use umbra_renderer::{
    color_to_rgba, render, Camera, Color, EnergyTables, ImageBuffer, Material, Mesh, RenderConfig,
    Scene, SurfaceModel, Vec3, World,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let world = World::build(build_scene())?;

    let camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(
            Vec3::new(13.0, 2.0, 3.0), // look_from
            Vec3::new(0.0, 0.0, 0.0),  // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(20.0, 0.6, 10.0);

    let config = RenderConfig::default()
        .with_samples(64)
        .with_max_depth(12)
        .with_background(Color::new(0.5, 0.7, 1.0));

    let image = render(&world, &camera, EnergyTables::builtin(), &config);

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    log::info!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("spheres");

    // Ground
    let ground = scene.add_material(Material::diffuse("ground", Color::splat(0.5)));
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    // Three main spheres
    let plastic = scene.add_material(
        Material::new("plastic", Color::new(0.1, 0.2, 0.6))
            .with_model(SurfaceModel::Dielectric)
            .with_roughness(0.2),
    );
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, plastic);

    let clay = scene.add_material(
        Material::diffuse("clay", Color::new(0.4, 0.2, 0.1)).with_roughness(0.8),
    );
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, clay);

    let copper =
        scene.add_material(Material::metal("copper", Color::new(0.95, 0.64, 0.54), 0.25));
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, copper);

    // A light panel overhead
    let light = scene.add_material(Material::emitter("light", Color::splat(6.0)));
    scene.add_mesh(Mesh::new(
        "light panel",
        vec![
            Vec3::new(-2.0, 4.0, -2.0),
            Vec3::new(2.0, 4.0, -2.0),
            Vec3::new(2.0, 4.0, 2.0),
            Vec3::new(-2.0, 4.0, 2.0),
        ],
        // Wound to face down
        vec![0, 1, 2, 0, 2, 3],
        None,
        light,
    ));

    // Small principled spheres with random metalness and roughness
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for a in -5..5 {
        for b in -5..5 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let color = Color::new(rng.gen(), rng.gen(), rng.gen());
            let material = Material::new(format!("small {a} {b}"), color)
                .with_metalness(if rng.gen::<f32>() < 0.3 { 1.0 } else { 0.0 })
                .with_roughness(rng.gen());
            let id = scene.add_material(material);
            scene.add_sphere(center, 0.2, id);
        }
    }

    log::info!("Created {} primitives", scene.primitive_count());
    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgba = color_to_rgba(image.get(x, y));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    writer.flush()
}
