//! Material system for ray tracing.
//!
//! Implements two material types: Lambertian (diffuse) and Metal (specular
//! with optional roughness).

use glam::DVec3;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::{near_zero, Color, Ray};

/// Material types for ray tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialType {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f64,
    },
}

/// Result of a successful scattering event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Per-channel fraction of radiance kept by this bounce.
    pub attenuation: Color,
    /// Continuation ray leaving the surface.
    pub scattered: Ray,
}

impl MaterialType {
    /// Metal with fuzz clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        MaterialType::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord, rng: &mut R) -> Option<Scatter> {
        match *self {
            MaterialType::Lambertian { albedo } => {
                let direction = diffuse_direction(rec.normal, random::random_unit_vector(rng));
                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, direction),
                })
            }
            MaterialType::Metal { albedo, fuzz } => {
                let reflected = reflect(r_in.direction, rec.normal);
                let direction = reflected + fuzz * random::random_in_unit_sphere(rng);

                // Fuzz can push a grazing reflection below the surface
                if direction.dot(rec.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        scattered: Ray::new(rec.p, direction),
                    })
                } else {
                    None
                }
            }
        }
    }
}

/// Lambertian scatter direction, falling back to the normal when the random
/// unit vector cancels it.
pub fn diffuse_direction(normal: DVec3, random_unit: DVec3) -> DVec3 {
    let direction = normal + random_unit;
    if near_zero(direction) {
        normal
    } else {
        direction
    }
}

/// Reflect a vector off a surface using the law of reflection.
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}
