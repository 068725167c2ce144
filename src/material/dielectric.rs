use crate::core::{color::Color, intersection::Intersection, ray::Ray, rng::Rng};

use super::{util, MaterialT};

pub struct Dielectric {
    ior: f32,
}

impl Dielectric {
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }
}

impl MaterialT for Dielectric {
    fn scatter(&self, ray: &Ray, inter: &Intersection<'_>, rng: &mut Rng) -> Option<(Color, Ray)> {
        let ior_ratio = if inter.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit = ray.direction.normalize();
        let cos_theta = (-unit).dot(inter.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ior_ratio * sin_theta > 1.0;
        let direction =
            if cannot_refract || util::schlick_fresnel(ior_ratio, cos_theta) > rng.uniform_1d() {
                util::reflect(unit, inter.normal)
            } else {
                util::refract(unit, inter.normal, ior_ratio)
            };

        Some((Color::WHITE, Ray::new(inter.position, direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_never_absorbs_and_keeps_energy() {
        let material: Material = Dielectric::new(1.5).into();
        let incoming = glam::Vec3A::new(0.3, -1.0, 0.2).normalize();
        let ray = Ray::new(glam::Vec3A::new(0.0, 1.0, 0.0), incoming);
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, glam::Vec3A::Y, &material);

        let mut rng = Rng::for_stream(9, 0);
        for _ in 0..100 {
            let (attenuation, scattered) = material
                .scatter(&ray, &inter, &mut rng)
                .expect("glass never absorbs");
            assert_eq!(scattered.origin, inter.position);
            assert!((attenuation.r - 1.0).abs() < 1e-6);
            assert!((attenuation.g - 1.0).abs() < 1e-6);
            assert!((attenuation.b - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass at 60 degrees exceeds the critical angle, so the ray
        // must reflect back inside.
        let material: Material = Dielectric::new(1.5).into();
        let incoming = glam::Vec3A::new(3.0_f32.sqrt() * 0.5, -0.5, 0.0);
        let ray = Ray::new(glam::Vec3A::new(0.0, 0.5, 0.0), incoming);
        // Outward normal along the incoming ray means the hit is a back face.
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, -glam::Vec3A::Y, &material);
        assert!(!inter.front_face);

        let mut rng = Rng::for_stream(9, 1);
        let (_, scattered) = material.scatter(&ray, &inter, &mut rng).unwrap();
        let expected = glam::Vec3A::new(3.0_f32.sqrt() * 0.5, 0.5, 0.0);
        assert!((scattered.direction - expected).length() < 1e-5);
    }
}
