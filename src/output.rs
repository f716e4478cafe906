//! # Output Module
//!
//! Writes rendered HDR buffers to disk:
//! - PNG: 8-bit, gamma 2 (square root), clamped
//! - PPM: plain-text P3 with the same quantization as PNG
//! - EXR: linear f32, no tone mapping
//!
//! The format is picked from the output path's extension.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;
use thiserror::Error;

use crate::interval::Interval;
use crate::renderer::HdrImage;

/// Failure while writing an image.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem or stream error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding error
    #[error("EXR encoding failed: {0}")]
    Exr(#[from] exr::error::Error),

    /// Path has no supported extension
    #[error("unsupported output extension '{0}', expected png, ppm or exr")]
    UnsupportedExtension(String),
}

/// Quantize one linear color to display bytes.
///
/// Applies gamma 2 (square root), clamps to [0, 0.999] and scales by 256.
/// Negative and NaN channels become 0.
pub fn to_display_rgb(pixel: &Rgb<f32>) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let quantize = |linear: f32| -> u8 {
        let linear = f64::from(linear);
        let gamma = if linear > 0.0 { linear.sqrt() } else { 0.0 };
        (256.0 * intensity.clamp(gamma)) as u8
    };
    [quantize(pixel[0]), quantize(pixel[1]), quantize(pixel[2])]
}

/// Save `image` to `path`, choosing the format from the extension.
pub fn save_image(image: &HdrImage, path: &Path) -> Result<(), OutputError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(image, path)?,
        "ppm" => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer)?;
            writer.flush()?;
        }
        "exr" => save_image_as_exr(image, path)?,
        _ => return Err(OutputError::UnsupportedExtension(extension)),
    }

    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save an f32 RGB image as 8-bit gamma-corrected PNG.
pub fn save_image_as_png(image: &HdrImage, path: &Path) -> Result<(), OutputError> {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| Rgb(to_display_rgb(image.get_pixel(x, y))));
    u8_image.save(path)?;
    Ok(())
}

/// Save an f32 RGB image as EXR with full HDR precision.
pub fn save_image_as_exr(image: &HdrImage, path: &Path) -> Result<(), OutputError> {
    let (width, height) = image.dimensions();
    write_rgb_file(path, width as usize, height as usize, |x, y| {
        let p = image.get_pixel(x as u32, y as u32);
        (p[0], p[1], p[2])
    })?;
    Ok(())
}

/// Write a plain-text P3 PPM, top row first.
pub fn write_ppm<W: Write>(image: &HdrImage, writer: &mut W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(writer, "P3\n{} {}\n255", width, height)?;
    for pixel in image.pixels() {
        let [r, g, b] = to_display_rgb(pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display_rgb() {
        assert_eq!(to_display_rgb(&Rgb([0.0, 0.25, 1.0])), [0, 128, 255]);
        assert_eq!(to_display_rgb(&Rgb([4.0, -1.0, f32::NAN])), [255, 0, 0]);
    }

    #[test]
    fn test_write_ppm() {
        let mut image: HdrImage = ImageBuffer::new(2, 1);
        image.put_pixel(0, 0, Rgb([1.0, 0.0, 0.25]));
        image.put_pixel(1, 0, Rgb([0.0, 1.0, 0.0]));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n255 0 128\n0 255 0\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let image: HdrImage = ImageBuffer::new(1, 1);
        let err = save_image(&image, Path::new("render.bmp")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedExtension(ref e) if e == "bmp"));
    }
}
