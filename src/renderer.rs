//! CPU render loop: per-pixel sample accumulation over the whole image.

use std::time::Duration;

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::integrator::ray_color;
use crate::random;
use crate::ray::Color;

/// Linear HDR image holding the per-pixel sample average.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Image and sampling parameters for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of random samples for each pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
}

impl RenderSettings {
    /// Derive the image height from a width and aspect ratio.
    ///
    /// Both axes are at least 1 pixel. A zero, negative or non-finite aspect
    /// ratio yields a single row.
    pub fn from_aspect(
        image_width: u32,
        aspect_ratio: f64,
        samples_per_pixel: u32,
        max_depth: u32,
    ) -> Self {
        let image_width = image_width.max(1);
        let height = image_width as f64 / aspect_ratio;
        let image_height = if height.is_finite() && height >= 1.0 {
            height as u32
        } else {
            1
        };
        Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
        }
    }

    /// Width over height of the output image.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }
}

/// Average `samples_per_pixel` radiance estimates for pixel `(i, j)`.
///
/// `j` counts rows upward from the bottom of the image.
pub fn render_pixel<R: Rng>(
    camera: &Camera,
    world: &dyn Hittable,
    settings: &RenderSettings,
    i: u32,
    j: u32,
    rng: &mut R,
) -> Color {
    let spp = settings.samples_per_pixel.max(1);
    let s_scale = (settings.image_width.max(2) - 1) as f64;
    let t_scale = (settings.image_height.max(2) - 1) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..spp {
        let s = (i as f64 + random::random_f64(rng)) / s_scale;
        let t = (j as f64 + random::random_f64(rng)) / t_scale;
        let r = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&r, world, settings.max_depth, rng);
    }

    pixel_color / spp as f64
}

/// Render the scene using CPU path tracing.
///
/// Pixels are processed in parallel with one ChaCha20 generator per rayon
/// worker. Returns an HDR buffer of linear averaged values, top row first.
/// A zero-sized image is returned empty without tracing.
pub fn render(camera: &Camera, world: &dyn Hittable, settings: &RenderSettings) -> HdrImage {
    let mut image: HdrImage = ImageBuffer::new(settings.image_width, settings.image_height);
    if settings.image_width == 0 || settings.image_height == 0 {
        warn!(
            "Nothing to render for a {}x{} image",
            settings.image_width, settings.image_height
        );
        return image;
    }

    info!(
        "Rendering {}x{} at {} spp, max depth {}, on {} threads",
        settings.image_width,
        settings.image_height,
        settings.samples_per_pixel,
        settings.max_depth,
        rayon::current_num_threads()
    );
    let generation_start = std::time::Instant::now();
    let pb = ProgressBar::new(settings.image_width as u64 * settings.image_height as u64);
    match ProgressStyle::default_bar().template("{bar:40} {percent}% ETA: {eta}") {
        Ok(style) => pb.set_style(style),
        Err(e) => debug!("Falling back to default progress style: {}", e),
    }

    let last_row = settings.image_height - 1;
    image
        .enumerate_pixels_mut()
        .par_bridge()
        .for_each_init(random::worker_rng, |rng, (x, y, pixel)| {
            let c = render_pixel(camera, world, settings, x, last_row - y, rng);
            *pixel = Rgb([c.x as f32, c.y as f32, c.z as f32]);
            pb.inc(1);
        });

    pb.finish_and_clear();
    info!("Image generated in {}", format_duration(generation_start.elapsed()));

    image
}

/// Human-readable duration: `1h2m3s`, `2m3s`, `3s` or `250ms`.
pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    let total_s = ms / 1000;
    let h = total_s / 3600;
    let m = (total_s / 60) % 60;
    let s = total_s % 60;

    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else if m > 0 {
        format!("{}m{}s", m, s)
    } else if s > 0 {
        format!("{}s", s)
    } else {
        format!("{}ms", ms)
    }
}
