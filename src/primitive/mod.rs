mod sphere;

pub use sphere::*;

use crate::core::{intersection::Intersection, ray::Ray};

#[enum_dispatch::enum_dispatch(Primitive)]
pub trait PrimitiveT: Send + Sync {
    /// Returns the nearest intersection with `t` in the open interval
    /// `(t_min, t_max)`, if any.
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Intersection<'_>>;
}

#[enum_dispatch::enum_dispatch]
pub enum Primitive {
    Sphere,
}
