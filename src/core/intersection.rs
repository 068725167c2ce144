use crate::core::ray::Ray;
use crate::material::Material;

pub struct Intersection<'a> {
    pub t: f32,
    pub position: glam::Vec3A,
    // Oriented against the incoming ray.
    pub normal: glam::Vec3A,
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> Intersection<'a> {
    pub fn new(
        ray: &Ray,
        t: f32,
        position: glam::Vec3A,
        outward_normal: glam::Vec3A,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            t,
            position,
            normal,
            front_face,
            material,
        }
    }
}
