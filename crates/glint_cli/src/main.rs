//! Renders a demo scene to a PNG.
//!
//! Usage: `glint [output.png]`

use anyhow::{Context, Result};
use glint_core::{
    AmbientLight, Color, Geometry, Material, Plane, PointLight, Scene, Sphere, SpotLight,
    Triangle,
};
use glint_math::{DVec3, Point};
use glint_renderer::{Camera, RayTracer, Sampling, ThreadCount};

fn demo_scene() -> Result<Scene> {
    let mut scene = Scene::new("demo")
        .with_background(Color::new(0.02, 0.02, 0.05))
        .with_ambient(AmbientLight::new(Color::splat(0.15), 1.0));

    // A glass-like outer sphere with a smaller solid one inside it.
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(0.0, 0.0, -50.0), 25.0)?)
            .with_emission(Color::new(0.0, 0.0, 0.1))
            .with_material(
                Material::new()
                    .with_kd(0.2)
                    .with_ks(0.2)
                    .with_shininess(30)
                    .with_kt(0.6),
            ),
    );
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(0.0, 0.0, -50.0), 12.5)?)
            .with_emission(Color::new(0.4, 0.0, 0.0))
            .with_material(Material::new().with_kd(0.25).with_ks(0.25).with_shininess(20)),
    );

    // A mirrored sphere off to the side.
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(-45.0, 15.0, -40.0), 18.0)?)
            .with_emission(Color::new(0.05, 0.1, 0.05))
            .with_material(Material::new().with_kd(0.3).with_ks(0.4).with_shininess(80).with_kr(0.5)),
    );

    // Reflective floor.
    scene.add_geometry(
        Geometry::new(Plane::new(Point::new(0.0, -40.0, 0.0), DVec3::Y)?)
            .with_material(Material::new().with_kd(0.4).with_ks(0.1).with_shininess(10).with_kr(0.3)),
    );

    // An emissive triangle behind the spheres.
    scene.add_geometry(
        Geometry::new(Triangle::new(
            Point::new(30.0, -40.0, -80.0),
            Point::new(80.0, -40.0, -80.0),
            Point::new(55.0, 20.0, -80.0),
        )?)
        .with_emission(Color::new(0.1, 0.1, 0.0))
        .with_material(Material::new().with_kd(0.5).with_kr(0.2)),
    );

    scene.add_light(
        SpotLight::new(
            Color::new(0.7, 0.6, 0.6),
            Point::new(60.0, 50.0, 0.0),
            DVec3::new(0.0, 0.0, -1.0),
        )
        .with_kl(4e-5)
        .with_kq(2e-7),
    );
    scene.add_light(
        PointLight::new(Color::new(0.4, 0.4, 0.5), Point::new(-60.0, 60.0, 30.0))
            .with_kl(1e-4)
            .with_kq(1e-6),
    );

    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "glint.png".into());

    let scene = demo_scene().context("failed to assemble the demo scene")?;
    let camera = Camera::builder()
        .with_location(Point::new(0.0, 0.0, 100.0))
        .with_direction(-DVec3::Z, DVec3::Y)
        .with_view_plane(150.0, 150.0)
        .with_distance(100.0)
        .with_resolution(600, 600)
        .with_sampling(Sampling::Adaptive { depth: 3 })
        .with_threads(ThreadCount::Auto)
        .build()
        .context("invalid camera configuration")?;

    log::info!("rendering scene '{}' to {output}", scene.name);
    let tracer = RayTracer::new(&scene);
    let image = camera.render(&tracer);
    image
        .save(&output)
        .with_context(|| format!("failed to write {output}"))?;
    log::info!("wrote {output}");
    Ok(())
}
