use crate::core::{color::Color, rng::Rng};
use crate::material::{Dielectric, Lambertian, Material, Metal};
use crate::primitive::Sphere;

use super::Scene;

/// Builds the classic random-spheres scene: a huge ground sphere, a grid of
/// small spheres with randomized materials, and three large feature spheres.
pub fn random_spheres(rng: &mut Rng) -> Scene {
    let mut scene = Scene::new();

    scene.add(
        Sphere::new(
            glam::Vec3A::new(0.0, -1000.0, 0.0),
            1000.0,
            Lambertian::new(Color::new(0.5, 0.5, 0.5)).into(),
        )
        .into(),
    );

    for a in -11..11 {
        for b in -11..11 {
            let material_choice = rng.uniform_1d();
            let center = glam::Vec3A::new(
                a as f32 + 0.9 * rng.uniform_1d(),
                0.2,
                b as f32 + 0.9 * rng.uniform_1d(),
            );

            // Leave a clearing around (5, 0.2, 0).
            if (center - glam::Vec3A::new(5.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Material = if material_choice < 0.8 {
                let albedo = Color::new(
                    rng.uniform_1d() * rng.uniform_1d(),
                    rng.uniform_1d() * rng.uniform_1d(),
                    rng.uniform_1d() * rng.uniform_1d(),
                );
                Lambertian::new(albedo).into()
            } else if material_choice < 0.95 {
                let albedo = Color::new(
                    0.5 * (1.0 + rng.uniform_1d()),
                    0.5 * (1.0 + rng.uniform_1d()),
                    0.5 * (1.0 + rng.uniform_1d()),
                );
                let fuzz = 0.5 * rng.uniform_1d();
                Metal::new(albedo, fuzz).into()
            } else {
                Dielectric::new(1.5).into()
            };

            scene.add(Sphere::new(center, 0.2, material).into());
        }
    }

    scene.add(
        Sphere::new(
            glam::Vec3A::new(0.0, 1.0, 0.0),
            1.0,
            Dielectric::new(1.5).into(),
        )
        .into(),
    );
    scene.add(
        Sphere::new(
            glam::Vec3A::new(-4.0, 1.0, 0.0),
            1.0,
            Lambertian::new(Color::new(0.4, 0.2, 0.1)).into(),
        )
        .into(),
    );
    scene.add(
        Sphere::new(
            glam::Vec3A::new(4.0, 1.0, 0.0),
            1.0,
            Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into(),
        )
        .into(),
    );

    scene
}
