use crate::core::{color::Color, intersection::Intersection, ray::Ray, rng::Rng};

use super::{util, MaterialT};

pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl MaterialT for Metal {
    fn scatter(&self, ray: &Ray, inter: &Intersection<'_>, rng: &mut Rng) -> Option<(Color, Ray)> {
        let reflected = util::reflect(ray.direction.normalize(), inter.normal);
        let direction = reflected + self.fuzz * rng.uniform_in_sphere();
        if direction.dot(inter.normal) > 0.0 {
            Some((self.albedo, Ray::new(inter.position, direction)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_polished_metal_mirrors() {
        let material: Material = Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into();
        let incoming = glam::Vec3A::new(1.0, -1.0, 0.0).normalize();
        let ray = Ray::new(glam::Vec3A::new(-1.0, 1.0, 0.0), incoming);
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, glam::Vec3A::Y, &material);

        let mut rng = Rng::for_stream(5, 0);
        let (attenuation, scattered) = material
            .scatter(&ray, &inter, &mut rng)
            .expect("head-on reflection is never absorbed");
        let expected = glam::Vec3A::new(incoming.x, -incoming.y, 0.0);
        assert!((scattered.direction - expected).length() < 1e-6);
        assert!((attenuation.r - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_grazing_reflection_absorbed() {
        // The reflection of a ray arriving parallel to the surface stays in
        // the surface plane, which counts as absorbed.
        let material: Material = Metal::new(Color::WHITE, 0.0).into();
        let ray = Ray::new(glam::Vec3A::new(-1.0, 0.0, 0.0), glam::Vec3A::X);
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, glam::Vec3A::Y, &material);

        let mut rng = Rng::for_stream(5, 1);
        assert!(material.scatter(&ray, &inter, &mut rng).is_none());
    }

    #[test]
    fn test_fuzz_is_clamped() {
        let material: Material = Metal::new(Color::WHITE, 7.0).into();
        let incoming = glam::Vec3A::new(0.0, -1.0, 0.0);
        let ray = Ray::new(glam::Vec3A::new(0.0, 1.0, 0.0), incoming);
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, glam::Vec3A::Y, &material);
        let reflected = glam::Vec3A::Y;

        let mut rng = Rng::for_stream(5, 2);
        for _ in 0..200 {
            if let Some((_, scattered)) = material.scatter(&ray, &inter, &mut rng) {
                assert!((scattered.direction - reflected).length() < 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_fuzzy_scatter_stays_above_surface() {
        let material: Material = Metal::new(Color::WHITE, 0.8).into();
        let incoming = glam::Vec3A::new(1.0, -1.0, 0.0).normalize();
        let ray = Ray::new(glam::Vec3A::new(-1.0, 1.0, 0.0), incoming);
        let inter = Intersection::new(&ray, 1.0, glam::Vec3A::ZERO, glam::Vec3A::Y, &material);

        let mut rng = Rng::for_stream(6, 0);
        for _ in 0..200 {
            if let Some((_, scattered)) = material.scatter(&ray, &inter, &mut rng) {
                assert!(scattered.direction.dot(inter.normal) > 0.0);
            }
        }
    }
}
