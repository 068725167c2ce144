use crate::core::{color::Color, intersection::Intersection, ray::Ray, rng::Rng};

use super::MaterialT;

pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl MaterialT for Lambertian {
    fn scatter(
        &self,
        _ray: &Ray,
        inter: &Intersection<'_>,
        rng: &mut Rng,
    ) -> Option<(Color, Ray)> {
        let mut direction = inter.normal + rng.uniform_in_sphere();
        // The sample can cancel the normal almost exactly.
        if direction.length_squared() < 1e-8 {
            direction = inter.normal;
        }
        Some((self.albedo, Ray::new(inter.position, direction)))
    }
}
