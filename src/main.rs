use anyhow::Context;
use clap::Parser;
use log::info;

use lenspath::cli::Args;
use lenspath::logger::init_logger;
use lenspath::output::save_image;
use lenspath::{random, render, scene};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!(
        "LensPath {} - Git Version {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the rendering thread pool")?;
    }

    let settings = args.render_settings();
    let camera = args.camera_settings().build(settings.aspect_ratio());

    let mut rng = random::worker_rng();
    let world = scene::random_scene(&mut rng);
    info!("Scene built with {} spheres", world.len());

    let image = render(&camera, &world, &settings);

    save_image(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
