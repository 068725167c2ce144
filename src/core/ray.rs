#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: glam::Vec3A,
    pub direction: glam::Vec3A,
}

impl Ray {
    pub fn new(origin: glam::Vec3A, direction: glam::Vec3A) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f32) -> glam::Vec3A {
        self.origin + self.direction * t
    }
}
