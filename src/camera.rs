//! Thin-lens camera for primary ray generation.

use glam::DVec3;
use rand::Rng;

use crate::random;
use crate::ray::{Point3, Ray};

/// Camera with depth of field.
///
/// All fields are derived once in [`Camera::new`] and never change, so a
/// camera can be shared freely between rendering threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space (lookfrom)
    origin: Point3,
    /// World position of the lower-left corner of the focus-plane viewport
    lower_left_corner: Point3,
    /// Full viewport width along u, scaled to the focus plane
    horizontal: DVec3,
    /// Full viewport height along v, scaled to the focus plane
    vertical: DVec3,
    /// Camera frame basis vector pointing right
    u: DVec3,
    /// Camera frame basis vector pointing up
    v: DVec3,
    /// Camera frame basis vector pointing opposite the view direction
    w: DVec3,
    /// Radius of the lens disk (aperture / 2)
    lens_radius: f64,
}

impl Camera {
    /// Build a camera.
    ///
    /// `vfov` is the vertical field of view in degrees. Collinear
    /// lookfrom/lookat/vup and non-positive aspect ratio or focus distance
    /// produce a degenerate camera.
    pub fn new(
        lookfrom: Point3,
        lookat: Point3,
        vup: DVec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = lookfrom - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin: lookfrom,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through viewport coordinates `(s, t)` in [0, 1],
    /// measured from the lower-left corner.
    pub fn get_ray<R: Rng>(&self, s: f64, t: f64, rng: &mut R) -> Ray {
        let rd = self.lens_radius * random::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }

    /// Camera position.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Orthonormal camera basis `(u, v, w)`.
    pub fn basis(&self) -> (DVec3, DVec3, DVec3) {
        (self.u, self.v, self.w)
    }

    /// Lens radius used for depth of field.
    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }
}
