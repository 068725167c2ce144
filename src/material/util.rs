pub fn reflect(v: glam::Vec3A, n: glam::Vec3A) -> glam::Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refracts a unit-length direction through a surface with the given ratio of
/// refractive indices. The caller has already ruled out total internal
/// reflection.
pub fn refract(unit: glam::Vec3A, n: glam::Vec3A, ior_ratio: f32) -> glam::Vec3A {
    let cos_theta = (-unit).dot(n).min(1.0);
    let out_perp = ior_ratio * (unit + cos_theta * n);
    let out_parallel = -(1.0 - out_perp.length_squared()).abs().sqrt() * n;
    out_perp + out_parallel
}

pub fn fresnel_r0(ior_ratio: f32) -> f32 {
    pow2((1.0 - ior_ratio) / (1.0 + ior_ratio))
}

pub fn schlick_fresnel(ior_ratio: f32, cos: f32) -> f32 {
    let r0 = fresnel_r0(ior_ratio);
    r0 + (1.0 - r0) * pow5(1.0 - cos)
}

fn pow2(x: f32) -> f32 {
    x * x
}

fn pow5(x: f32) -> f32 {
    let x2 = x * x;
    x2 * x2 * x
}
