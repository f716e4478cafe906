//! Scene population: the random sphere field with three feature metals.

use std::sync::Arc;

use glam::DVec3;
use rand::Rng;

use crate::camera::Camera;
use crate::hittable::HittableList;
use crate::material::MaterialType;
use crate::random;
use crate::ray::{Color, Point3};
use crate::sphere::Sphere;

/// Camera placement used with [`random_scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Eye position
    pub lookfrom: Point3,
    /// Look-at target
    pub lookat: Point3,
    /// Up vector
    pub vup: DVec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Lens diameter, 0 for a pinhole
    pub aperture: f64,
    /// Distance to the plane of perfect focus
    pub focus_dist: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lookfrom: Point3::new(13.0, 2.0, 3.0),
            lookat: Point3::ZERO,
            vup: DVec3::Y,
            vfov: 20.0,
            aperture: 0.1,
            focus_dist: 10.0,
        }
    }
}

impl CameraSettings {
    /// Build a camera for the given image aspect ratio.
    pub fn build(&self, aspect_ratio: f64) -> Camera {
        Camera::new(
            self.lookfrom,
            self.lookat,
            self.vup,
            self.vfov,
            aspect_ratio,
            self.aperture,
            self.focus_dist,
        )
    }
}

/// Radius of the grid spheres.
const SMALL_RADIUS: f64 = 0.2;

/// Generate the ground, a 22x22 jittered grid of small spheres and three large metals.
pub fn random_scene<R: Rng>(rng: &mut R) -> HittableList {
    let mut world = HittableList::new();

    let ground = Arc::new(MaterialType::Lambertian {
        albedo: Color::new(0.3373, 0.4902, 0.2745),
    });
    world.add(Box::new(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground)));

    let keep_clear = Point3::new(4.0, SMALL_RADIUS, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random::random_f64(rng),
                SMALL_RADIUS,
                b as f64 + 0.9 * random::random_f64(rng),
            );

            // Leave room around the large feature spheres
            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.75 {
                let albedo = random::random_color(rng) * random::random_color(rng);
                MaterialType::Lambertian { albedo }
            } else {
                let albedo = random::random_color_range(rng, 0.5, 0.1);
                let fuzz = random::random_f64_range(rng, 0.0, 0.5);
                MaterialType::metal(albedo, fuzz)
            };
            world.add(Box::new(Sphere::new(center, SMALL_RADIUS, Arc::new(material))));
        }
    }

    let gold = Arc::new(MaterialType::metal(Color::new(0.6, 0.52, 0.0), 0.1));
    let silver = Arc::new(MaterialType::metal(Color::new(0.75, 0.75, 0.75), 0.1));
    let bronze = Arc::new(MaterialType::metal(Color::new(0.6902, 0.5529, 0.3412), 0.1));

    world.add(Box::new(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, gold)));
    world.add(Box::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, silver)));
    world.add(Box::new(Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0, bronze)));

    world
}
