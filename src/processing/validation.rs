//! Source image validation and normalization.

use image::{RgbaImage, imageops};
use tracing::debug;
use crate::utils::{FilterResult, SourceError};

/// Validates a source bitmap before a run starts.
///
/// A run must never begin on an empty image; the engine fails synchronously
/// instead of invoking the observer.
pub fn validate_source(source: &RgbaImage) -> FilterResult<()> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(SourceError::EmptyImage { width, height }.into());
    }
    Ok(())
}

/// Downscale oversized sources so preview filtering stays cheap.
///
/// Images within `max_dimension` on both axes pass through untouched;
/// larger ones are resized aspect-preserving so the longest side equals
/// `max_dimension`.
pub fn normalize_source(source: RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let longest = width.max(height);
    if longest <= max_dimension {
        return source;
    }

    let scale = max_dimension as f64 / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    debug!(
        from = %format!("{}x{}", width, height),
        to = %format!("{}x{}", new_width, new_height),
        "Downscaling oversized source"
    );

    imageops::resize(&source, new_width, new_height, imageops::FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn zero_dimension_source_is_rejected() {
        let empty = RgbaImage::new(0, 0);
        assert!(validate_source(&empty).is_err());
    }

    #[test]
    fn small_source_passes_through() {
        let img = RgbaImage::from_pixel(100, 50, Rgba([5, 5, 5, 255]));
        let out = normalize_source(img.clone(), 1000);
        assert_eq!(out, img);
    }

    #[test]
    fn oversized_source_is_downscaled_with_aspect() {
        let img = RgbaImage::from_pixel(2000, 1000, Rgba([5, 5, 5, 255]));
        let out = normalize_source(img, 1000);
        assert_eq!(out.dimensions(), (1000, 500));
    }
}
