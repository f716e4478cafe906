//! Random sampling for ray tracing.
//!
//! Every helper draws from an explicit generator so that each rendering worker
//! can own an independent stream. Workers use [`ChaCha20Rng`] seeded from the
//! thread-local system generator.

use glam::DVec3;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::ray::Color;

/// Create a fresh ChaCha20 generator for one rendering worker.
pub fn worker_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_rng(&mut rng())
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64<R: Rng>(rng: &mut R) -> f64 {
    rng.random()
}

/// Generate a random f64 in [min, max).
///
/// `min > max` is allowed and samples (max, min].
pub fn random_f64_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Generate random RGB color with components in [0.0, 1.0).
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::new(random_f64(rng), random_f64(rng), random_f64(rng))
}

/// Generate random RGB color with components in [min, max).
pub fn random_color_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Color {
    Color::new(
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
    )
}

/// Generate random unit vector uniformly distributed on unit sphere.
pub fn random_unit_vector<R: Rng>(rng: &mut R) -> DVec3 {
    // Uniform azimuth and uniform cos(polar) give a uniform sphere distribution
    let theta = 2.0 * std::f64::consts::PI * random_f64(rng);
    let cos_phi = 2.0 * random_f64(rng) - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

    DVec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Generate random point strictly inside the unit sphere using rejection sampling.
pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> DVec3 {
    loop {
        let p = DVec3::new(
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate random point inside unit disk (z = 0) using rejection sampling.
pub fn random_in_unit_disk<R: Rng>(rng: &mut R) -> DVec3 {
    loop {
        let p = DVec3::new(
            random_f64_range(rng, -1.0, 1.0),
            random_f64_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
