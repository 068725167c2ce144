pub mod color;
pub mod film;
pub mod intersection;
pub mod ray;
pub mod rng;
