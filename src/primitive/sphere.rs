use crate::core::{intersection::Intersection, ray::Ray};
use crate::material::Material;

use super::PrimitiveT;

pub struct Sphere {
    center: glam::Vec3A,
    radius: f32,
    material: Material,
}

impl Sphere {
    pub fn new(center: glam::Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    #[allow(dead_code)]
    pub fn center(&self) -> glam::Vec3A {
        self.center
    }

    #[allow(dead_code)]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[allow(dead_code)]
    pub fn material(&self) -> &Material {
        &self.material
    }

    fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32)> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let delta = b * b - a * c;
        if delta >= 0.0 {
            let delta = delta.sqrt();
            let near = (-b - delta) / a;
            let far = (-b + delta) / a;
            Some((near, far))
        } else {
            None
        }
    }
}

impl PrimitiveT for Sphere {
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Intersection<'_>> {
        let (near, far) = self.intersect_ray(ray)?;
        let t = if t_min < near && near < t_max {
            near
        } else if t_min < far && far < t_max {
            far
        } else {
            return None;
        };

        let position = ray.point_at(t);
        let outward_normal = (position - self.center) / self.radius;
        Some(Intersection::new(
            ray,
            t,
            position,
            outward_normal,
            &self.material,
        ))
    }
}
