//! Sphere primitive for ray tracing.
//!
//! Ray-sphere intersection using the half-b form of the quadratic formula.

use std::sync::Arc;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::{Point3, Ray};

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere. Expected to be positive.
    pub radius: f64,

    /// Material shared with any other sphere built from the same handle.
    pub material: Arc<MaterialType>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64, material: Arc<MaterialType>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // |origin + t*dir - center|^2 = radius^2 expanded into a*t^2 + 2*half_b*t + c = 0
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(HitRecord::new(r, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::Color;
    use glam::DVec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::random::{random_f64_range, random_unit_vector};

    fn unit_sphere_at(center: Point3, radius: f64) -> Sphere {
        let material = Arc::new(MaterialType::Lambertian {
            albedo: Color::splat(0.5),
        });
        Sphere::new(center, radius, material)
    }

    fn forward() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, forward()).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert!(rec.front_face);
        assert_eq!(rec.normal, DVec3::Z);
    }

    #[test]
    fn test_sphere_miss_when_closest_approach_exceeds_radius() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -5.0), 1.0);
        // Closest approach to the center is 1.5
        let ray = Ray::new(Point3::new(0.0, 1.5, 0.0), DVec3::NEG_Z);
        assert!(sphere.hit(&ray, forward()).is_none());

        let away = Ray::new(Point3::ZERO, DVec3::Y);
        assert!(sphere.hit(&away, forward()).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_rejected() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);
        assert!(sphere.hit(&ray, forward()).is_none());
    }

    #[test]
    fn test_inside_hit_uses_far_root_and_back_face() {
        let sphere = unit_sphere_at(Point3::ZERO, 2.0);
        let ray = Ray::new(Point3::ZERO, DVec3::new(1.0, 0.0, 0.0));

        let rec = sphere.hit(&ray, forward()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, DVec3::NEG_X);
        let outward = (rec.p - sphere.center) / sphere.radius;
        assert!(ray.direction.dot(outward) > 0.0);
    }

    #[test]
    fn test_tangent_ray_is_accepted() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), DVec3::NEG_Z);

        let rec = sphere.hit(&ray, forward()).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_hits_lie_on_surface_with_oriented_normals() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let center = Point3::new(0.5, -1.0, 2.0);
        let radius = 1.25;
        let sphere = unit_sphere_at(center, radius);

        let mut hits = 0;
        for _ in 0..500 {
            let offset = random_unit_vector(&mut rng) * random_f64_range(&mut rng, 0.0, 4.0);
            let direction = random_unit_vector(&mut rng) * random_f64_range(&mut rng, 0.5, 3.0);
            let origin = center + offset;
            let ray = Ray::new(origin, direction);

            if let Some(rec) = sphere.hit(&ray, forward()) {
                hits += 1;
                assert!(((rec.p - center).length() - radius).abs() < 1e-6);
                assert!((rec.normal.length() - 1.0).abs() < 1e-9);

                // Stored normal always opposes the ray; front_face tracks the outward side
                let outward = (rec.p - center) / radius;
                assert!(ray.direction.dot(rec.normal) <= 0.0);
                if rec.front_face {
                    assert!(ray.direction.dot(outward) < 0.0);
                    assert_eq!(rec.normal, outward);
                } else {
                    assert!(ray.direction.dot(outward) > 0.0);
                    assert_eq!(rec.normal, -outward);
                }
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_spheres_share_material() {
        let material = Arc::new(MaterialType::metal(Color::splat(0.7), 0.1));
        let a = Sphere::new(Point3::ZERO, 1.0, material.clone());
        let b = Sphere::new(Point3::X * 3.0, 1.0, material.clone());

        assert!(Arc::ptr_eq(&a.material, &b.material));
        assert_eq!(Arc::strong_count(&material), 3);
    }
}
