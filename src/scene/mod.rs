mod random_spheres;

pub use random_spheres::*;

use crate::core::{intersection::Intersection, ray::Ray};
use crate::primitive::{Primitive, PrimitiveT};

#[derive(Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[allow(dead_code)]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Scans all primitives and keeps the nearest hit, narrowing the interval
    /// as hits are found.
    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Intersection<'_>> {
        let mut nearest = t_max;
        let mut hit = None;
        for primitive in &self.primitives {
            if let Some(inter) = primitive.intersect(ray, t_min, nearest) {
                nearest = inter.t;
                hit = Some(inter);
            }
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::material::Lambertian;
    use crate::primitive::Sphere;

    fn gray_sphere(center: glam::Vec3A, radius: f32) -> Primitive {
        Sphere::new(center, radius, Lambertian::new(Color::new(0.5, 0.5, 0.5)).into()).into()
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::Z);
        assert!(scene.intersect(&ray, 0.001, f32::MAX).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        // The far sphere is added first, the near one must still win.
        let mut scene = Scene::new();
        scene.add(gray_sphere(glam::Vec3A::new(0.0, 0.0, 10.0), 1.0));
        scene.add(gray_sphere(glam::Vec3A::new(0.0, 0.0, 5.0), 1.0));

        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::Z);
        let inter = scene.intersect(&ray, 0.001, f32::MAX).unwrap();
        assert!((inter.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_interval_limits_apply() {
        let mut scene = Scene::new();
        scene.add(gray_sphere(glam::Vec3A::new(0.0, 0.0, 5.0), 1.0));

        let ray = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::Z);
        assert!(scene.intersect(&ray, 0.001, 3.0).is_none());
        assert!(scene.intersect(&ray, 7.0, f32::MAX).is_none());
    }
}
