pub mod util;

mod dielectric;
mod lambertian;
mod metal;

pub use dielectric::*;
pub use lambertian::*;
pub use metal::*;

use crate::core::{color::Color, intersection::Intersection, ray::Ray, rng::Rng};

#[enum_dispatch::enum_dispatch(Material)]
pub trait MaterialT: Send + Sync {
    /// Returns the attenuation and the scattered ray, or `None` when the
    /// incoming ray is absorbed.
    fn scatter(&self, ray: &Ray, inter: &Intersection<'_>, rng: &mut Rng) -> Option<(Color, Ray)>;
}

#[enum_dispatch::enum_dispatch]
pub enum Material {
    Lambertian,
    Metal,
    Dielectric,
}
