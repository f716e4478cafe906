//! LensPath path tracer
//!
//! Renders static scenes of spheres with Lambertian and metal materials
//! through a thin-lens camera, using unidirectional Monte Carlo path tracing.
//! Outputs PNG, PPM and EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
#[allow(missing_docs)]
pub mod cli;
pub mod hittable;
pub mod integrator;
pub mod interval;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::ray_color;
pub use interval::Interval;
pub use material::{MaterialType, Scatter};
pub use ray::{Color, Point3, Ray};
pub use renderer::{render, render_pixel, HdrImage, RenderSettings};
pub use sphere::Sphere;
