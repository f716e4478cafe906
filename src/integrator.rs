//! Recursive radiance estimation (unidirectional path tracing).

use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::{Color, Ray};

/// Minimum hit distance for scattered rays, avoids self-intersection acne.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Horizon color of the background gradient.
pub const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Zenith color of the background gradient.
pub const SKY_BLUE: Color = Color::new(0.5, 0.71, 1.0);

/// Trace a ray and compute one noisy estimate of the radiance it carries.
///
/// Follows at most `depth` scattering events. Exhausting the budget or being
/// absorbed contributes black; escaping the scene returns the sky gradient.
pub fn ray_color<R: Rng>(r: &Ray, world: &dyn Hittable, depth: u32, rng: &mut R) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) {
        return match rec.material.scatter(r, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        };
    }

    sky_color(r)
}

/// Vertical white-to-blue gradient keyed on the ray's unit direction.
pub fn sky_color(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * SKY_WHITE + a * SKY_BLUE
}
