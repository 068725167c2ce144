use rand::SeedableRng;

pub struct Rng {
    rng: rand::rngs::SmallRng,
}

impl Rng {
    // Weyl increment, spreads consecutive stream indices across the seed space.
    const STREAM_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    pub fn for_stream(base_seed: u64, stream: u64) -> Self {
        let seed = base_seed.wrapping_add(stream.wrapping_mul(Self::STREAM_GAMMA));
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    pub fn entropy_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }

    pub fn uniform_1d(&mut self) -> f32 {
        rand::Rng::gen(&mut self.rng)
    }

    pub fn uniform_2d(&mut self) -> (f32, f32) {
        (self.uniform_1d(), self.uniform_1d())
    }

    pub fn uniform_in_disk(&mut self) -> (f32, f32) {
        loop {
            let (rand_x, rand_y) = self.uniform_2d();
            let x = rand_x * 2.0 - 1.0;
            let y = rand_y * 2.0 - 1.0;
            if x * x + y * y <= 1.0 {
                return (x, y);
            }
        }
    }

    pub fn uniform_in_sphere(&mut self) -> glam::Vec3A {
        loop {
            let sample = glam::Vec3A::new(
                self.uniform_1d() * 2.0 - 1.0,
                self.uniform_1d() * 2.0 - 1.0,
                self.uniform_1d() * 2.0 - 1.0,
            );
            if sample.length_squared() < 1.0 {
                return sample;
            }
        }
    }
}
