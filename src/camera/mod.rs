mod thin_lens;

pub use thin_lens::*;

use crate::core::{ray::Ray, rng::Rng};

#[enum_dispatch::enum_dispatch(Camera)]
pub trait CameraT: Send + Sync {
    /// Generates the ray for viewport coordinates `(s, t)`, with `s` running
    /// left to right and `t` bottom to top, both in `[0, 1]`.
    fn get_ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray;
}

#[enum_dispatch::enum_dispatch]
pub enum Camera {
    ThinLensCamera,
}
