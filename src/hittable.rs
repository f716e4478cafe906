//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, the HitRecord produced
//! by a successful test, and HittableList for whole scenes.

use glam::DVec3;

use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::{Point3, Ray};

/// Ray-object intersection information.
///
/// Lives only for the duration of one query; the material is borrowed from
/// the geometry that was hit.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Unit surface normal, always pointing against the incident ray
    pub normal: DVec3,
    /// Material of the object at the hit point
    pub material: &'a MaterialType,
    /// Ray parameter of the intersection
    pub t: f64,
    /// True if the ray approaches from the outward side
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record at parameter `t`, orienting `outward_normal` against `r`.
    pub fn new(r: &Ray, t: f64, outward_normal: DVec3, material: &'a MaterialType) -> Self {
        let (front_face, normal) = face_normal(r, outward_normal);
        Self {
            p: r.at(t),
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Determine front/back face and the normal that points against the ray.
pub fn face_normal(r: &Ray, outward_normal: DVec3) -> (bool, DVec3) {
    let front_face = r.direction.dot(outward_normal) < 0.0;
    let normal = if front_face {
        outward_normal
    } else {
        -outward_normal
    };
    (front_face, normal)
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) for parallel rendering.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of objects in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialType;
    use crate::ray::Color;
    use crate::sphere::Sphere;
    use std::sync::Arc;

    fn matte(gray: f64) -> Arc<MaterialType> {
        Arc::new(MaterialType::Lambertian {
            albedo: Color::splat(gray),
        })
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);
        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_regardless_of_order() {
        let near = matte(0.2);
        let far = matte(0.8);
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);

        let mut world = HittableList::new();
        let far_center = Point3::new(0.0, 0.0, -10.0);
        let near_center = Point3::new(0.0, 0.0, -3.0);
        world.add(Box::new(Sphere::new(far_center, 1.0, far.clone())));
        world.add(Box::new(Sphere::new(near_center, 1.0, near.clone())));
        assert_eq!(world.len(), 2);

        let rec = world.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(std::ptr::eq(rec.material, &*near));

        let mut reversed = HittableList::new();
        reversed.add(Box::new(Sphere::new(near_center, 1.0, near.clone())));
        reversed.add(Box::new(Sphere::new(far_center, 1.0, far)));
        let rec = reversed.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlapping_spheres_resolve_to_nearer_surface() {
        let front = matte(0.1);
        let back = matte(0.9);
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);
        let forward = Interval::new(0.001, f64::INFINITY);

        // The spheres overlap between z = -2.8 and z = -4; the front one is entered first
        for front_first in [true, false] {
            let front_sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, front.clone());
            let back_sphere = Sphere::new(Point3::new(0.0, 0.0, -3.8), 1.0, back.clone());
            let mut world = HittableList::new();
            if front_first {
                world.add(Box::new(front_sphere));
                world.add(Box::new(back_sphere));
            } else {
                world.add(Box::new(back_sphere));
                world.add(Box::new(front_sphere));
            }

            let rec = world.hit(&ray, forward).unwrap();
            assert!((rec.t - 2.0).abs() < 1e-12);
            assert!(rec.front_face);
            assert!(std::ptr::eq(rec.material, &*front));
        }
    }

    #[test]
    fn test_max_bound_excludes_far_hits() {
        let mut world = HittableList::new();
        let far = Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, matte(0.5));
        world.add(Box::new(far));
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);

        assert!(world.hit(&ray, Interval::new(0.001, 5.0)).is_none());

        world.clear();
        assert!(world.is_empty());
    }

    #[test]
    fn test_face_normal_orientation() {
        let ray = Ray::new(Point3::ZERO, DVec3::NEG_Z);
        assert_eq!(face_normal(&ray, DVec3::Z), (true, DVec3::Z));
        assert_eq!(face_normal(&ray, DVec3::NEG_Z), (false, DVec3::Z));
    }
}
