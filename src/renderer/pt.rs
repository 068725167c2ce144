use crate::{
    camera::{Camera, CameraT},
    core::{
        color::Color,
        film::{color_to_rgb8, Film},
        ray::Ray,
        rng::Rng,
    },
    material::MaterialT,
    scene::Scene,
};

use super::{util, RenderConfig};

pub struct PathTracer {
    config: RenderConfig,
    base_seed: u64,
}

impl PathTracer {
    // Keeps scattered rays from re-hitting the surface they left.
    const T_MIN: f32 = 0.001;

    pub fn new(config: RenderConfig, base_seed: u64) -> Self {
        Self { config, base_seed }
    }

    /// Renders the scene with one thread per row block. Each worker fills a
    /// private buffer, top row of its block first, and owns its own random
    /// stream, so workers never contend on shared state.
    pub fn render(&self, scene: &Scene, camera: &Camera) -> Film {
        let RenderConfig {
            width,
            height,
            samples_per_pixel,
            workers,
            ..
        } = self.config;

        let progress_bar = util::render_progress_bar(width, height);
        let ranges = util::block_ranges(workers, height);

        let blocks = crossbeam::scope(|scope| {
            let mut handles = Vec::with_capacity(workers as usize);
            for (t, range) in ranges.into_iter().enumerate() {
                let width_inv = 1.0 / width as f32;
                let height_inv = 1.0 / height as f32;
                let progress_bar = progress_bar.clone();
                let path_tracer = &self;
                let util::BlockRange { from, to } = range;

                handles.push(scope.spawn(move |_| {
                    let mut rng = Rng::for_stream(path_tracer.base_seed, t as u64 + 1);
                    let mut pixels = Vec::with_capacity(((to - from) * width) as usize);
                    for j in (from..to).rev() {
                        for i in 0..width {
                            let mut color = Color::BLACK;
                            for _ in 0..samples_per_pixel {
                                let (offset_x, offset_y) = rng.uniform_2d();
                                let u = (i as f32 + offset_x) * width_inv;
                                let v = (j as f32 + offset_y) * height_inv;
                                let ray = camera.get_ray(u, v, &mut rng);
                                color += path_tracer.radiance(scene, &ray, 0, &mut rng);
                            }
                            color /= samples_per_pixel as f32;
                            pixels.push(color_to_rgb8(color));
                            progress_bar.inc(1);
                        }
                    }
                    pixels
                }));
            }
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        Film::from_worker_blocks(width, height, blocks)
    }

    /// Recursive radiance estimate. Rays that survive `max_depth` scatters
    /// contribute black; rays that escape contribute the sky at any depth.
    pub fn radiance(&self, scene: &Scene, ray: &Ray, depth: u32, rng: &mut Rng) -> Color {
        if let Some(inter) = scene.intersect(ray, Self::T_MIN, f32::MAX) {
            if depth < self.config.max_depth {
                if let Some((attenuation, scattered)) = inter.material.scatter(ray, &inter, rng) {
                    return attenuation * self.radiance(scene, &scattered, depth + 1, rng);
                }
            }
            Color::BLACK
        } else {
            background(ray.direction)
        }
    }
}

fn background(direction: glam::Vec3A) -> Color {
    let unit = direction.normalize();
    let t = 0.5 * (unit.y + 1.0);
    (1.0 - t) * Color::WHITE + t * Color::new(0.5, 0.7, 1.0)
}
