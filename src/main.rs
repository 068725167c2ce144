use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::*;
use structopt::StructOpt;

mod camera;
mod core;
mod material;
mod primitive;
mod renderer;
mod scene;

use crate::camera::{Camera, ThinLensCamera};
use crate::core::rng::Rng;
use crate::renderer::{PathTracer, RenderConfig};

/// Renders the random-spheres scene with a Monte Carlo path tracer and
/// writes the result as a text PPM image.
#[derive(StructOpt, Debug)]
#[structopt(name = "weekend-path-tracer")]
struct Opt {
    /// Image width in pixels
    #[structopt(long, default_value = "800")]
    width: u32,

    /// Image height in pixels
    #[structopt(long, default_value = "400")]
    height: u32,

    /// Samples per pixel
    #[structopt(long, default_value = "100")]
    samples: u32,

    /// Maximum scatter depth per ray path
    #[structopt(long, default_value = "50")]
    max_depth: u32,

    /// Number of render threads; must divide the image height
    #[structopt(long, default_value = "8")]
    workers: u32,

    /// Camera position as "x,y,z"
    #[structopt(long, default_value = "13,2,3", parse(try_from_str = parse_vec3))]
    look_from: glam::Vec3A,

    /// Point the camera looks at as "x,y,z"
    #[structopt(long, default_value = "0,0,0", parse(try_from_str = parse_vec3))]
    look_at: glam::Vec3A,

    /// Up direction as "x,y,z"
    #[structopt(long, default_value = "0,1,0", parse(try_from_str = parse_vec3))]
    vup: glam::Vec3A,

    /// Vertical field of view in degrees
    #[structopt(long, default_value = "20")]
    vfov: f32,

    /// Lens aperture diameter
    #[structopt(long, default_value = "0.01")]
    aperture: f32,

    /// Focus distance; defaults to the distance from look-from to look-at
    #[structopt(long)]
    focus_dist: Option<f32>,

    /// Base seed for all random streams; derived from the clock when absent
    #[structopt(long)]
    seed: Option<u64>,

    /// Output PPM file
    #[structopt(short, long, default_value = "render.ppm", parse(from_os_str))]
    output: PathBuf,
}

fn parse_vec3(s: &str) -> Result<glam::Vec3A> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("expected three comma-separated numbers, got '{}'", s);
    }
    let x = parts[0].trim().parse()?;
    let y = parts[1].trim().parse()?;
    let z = parts[2].trim().parse()?;
    Ok(glam::Vec3A::new(x, y, z))
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let config = RenderConfig {
        width: opt.width,
        height: opt.height,
        samples_per_pixel: opt.samples,
        max_depth: opt.max_depth,
        workers: opt.workers,
    };
    config.validate()?;
    if config.workers as usize > num_cpus::get() {
        log::warn!(
            "{} workers on {} cpus, threads will oversubscribe",
            config.workers,
            num_cpus::get()
        );
    }

    let base_seed = opt.seed.unwrap_or_else(Rng::entropy_seed);
    log::info!("base seed: {}", base_seed);

    println!("Building scene...");
    let mut scene_rng = Rng::for_stream(base_seed, 0);
    let scene = scene::random_spheres(&mut scene_rng);
    log::info!("{} spheres", scene.len());

    let aspect = config.width as f32 / config.height as f32;
    let focus_dist = opt
        .focus_dist
        .unwrap_or_else(|| (opt.look_from - opt.look_at).length());
    let camera: Camera = ThinLensCamera::new(
        opt.look_from,
        opt.look_at,
        opt.vup,
        opt.vfov,
        aspect,
        opt.aperture,
        focus_dist,
    )
    .into();

    println!("Rendering...");
    let begin_time = std::time::SystemTime::now();
    let film = PathTracer::new(config, base_seed).render(&scene, &camera);
    let duration = std::time::SystemTime::now().duration_since(begin_time)?;

    println!(
        "Writing {}x{} image to '{}'...",
        film.width(),
        film.height(),
        opt.output.display()
    );
    let file = File::create(&opt.output)
        .with_context(|| format!("failed to create '{}'", opt.output.display()))?;
    let mut writer = BufWriter::new(file);
    film.write_ppm(&mut writer)
        .with_context(|| format!("failed to write '{}'", opt.output.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write '{}'", opt.output.display()))?;

    println!("Finished, time used: {:?}", duration);
    Ok(())
}
