use crate::core::{ray::Ray, rng::Rng};

use super::CameraT;

pub struct ThinLensCamera {
    origin: glam::Vec3A,
    lower_left: glam::Vec3A,
    horizontal: glam::Vec3A,
    vertical: glam::Vec3A,
    u: glam::Vec3A,
    v: glam::Vec3A,
    lens_radius: f32,
}

impl ThinLensCamera {
    pub fn new(
        look_from: glam::Vec3A,
        look_at: glam::Vec3A,
        vup: glam::Vec3A,
        vfov_deg: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov_deg.to_radians();
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let lower_left = look_from
            - half_width * focus_dist * u
            - half_height * focus_dist * v
            - focus_dist * w;

        Self {
            origin: look_from,
            lower_left,
            horizontal: 2.0 * half_width * focus_dist * u,
            vertical: 2.0 * half_height * focus_dist * v,
            u,
            v,
            lens_radius: aperture * 0.5,
        }
    }
}

impl CameraT for ThinLensCamera {
    fn get_ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray {
        // The lens sample is drawn even for a zero-radius lens so that the
        // per-pixel random stream does not depend on the aperture.
        let (disk_x, disk_y) = rng.uniform_in_disk();
        let offset = self.u * (self.lens_radius * disk_x) + self.v * (self.lens_radius * disk_y);
        let origin = self.origin + offset;
        let direction = self.lower_left + s * self.horizontal + t * self.vertical - origin;
        Ray::new(origin, direction)
    }
}
