//! Command line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::renderer::RenderSettings;
use crate::scene::CameraSettings;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "lenspath")]
#[command(about = "Path trace a field of spheres through a thin-lens camera")]
pub struct Args {
    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image width divided by height
    #[arg(long, default_value_t = 1.5, value_parser = parse_positive)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(
        long,
        short = 's',
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per camera ray
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 20.0, value_parser = parse_fov)]
    pub vfov: f64,

    /// Lens diameter; 0 disables depth of field
    #[arg(long, default_value_t = 0.1, value_parser = parse_non_negative)]
    pub aperture: f64,

    /// Distance from the eye to the plane of perfect focus
    #[arg(long, default_value_t = 10.0, value_parser = parse_positive)]
    pub focus_dist: f64,

    /// Worker thread count (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output file path (.png, .ppm or .exr)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{}' is not a number: {}", s, e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' must be finite", s))
    }
}

/// Finite and strictly greater than zero
fn parse_positive(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{}' must be greater than 0", s))
    }
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{}' must not be negative", s))
    }
}

/// Vertical field of view, strictly between 0 and 180 degrees
fn parse_fov(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value > 0.0 && value < 180.0 {
        Ok(value)
    } else {
        Err(format!("'{}' must be between 0 and 180 degrees", s))
    }
}

impl Args {
    /// Image and sampling parameters.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::from_aspect(
            self.width,
            self.aspect_ratio,
            self.samples_per_pixel,
            self.max_depth,
        )
    }

    /// Default camera placement with the lens overrides applied.
    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            vfov: self.vfov,
            aperture: self.aperture,
            focus_dist: self.focus_dist,
            ..CameraSettings::default()
        }
    }
}
