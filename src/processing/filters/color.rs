//! Color looks: per-pixel channel remaps.

use image::RgbaImage;
use crate::processing::filters::tone;

/// Classic sepia tone via the standard channel mixing matrix.
pub(crate) fn sepia(source: &RgbaImage) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        let r = pixel[0] as f32;
        let g = pixel[1] as f32;
        let b = pixel[2] as f32;
        pixel[0] = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0) as u8;
        pixel[1] = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0) as u8;
        pixel[2] = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0) as u8;
    }
    out
}

/// Neutral grayscale using Rec. 601 luma weights.
pub(crate) fn mono(source: &RgbaImage) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        let luma =
            (0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32) as u8;
        pixel[0] = luma;
        pixel[1] = luma;
        pixel[2] = luma;
    }
    out
}

/// High-contrast black and white.
pub(crate) fn noir(source: &RgbaImage) -> RgbaImage {
    tone::adjust(&mono(source), 0.0, 1.4, 1.0)
}

/// Invert the color channels, keeping alpha.
pub(crate) fn invert(source: &RgbaImage) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }
    out
}

/// Quantize each channel to a small number of levels.
pub(crate) fn posterize(source: &RgbaImage) -> RgbaImage {
    // 4 levels per channel reads as a classic poster look
    const LEVELS: f32 = 4.0;
    let step = 255.0 / (LEVELS - 1.0);
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        for channel in 0..3 {
            let quantized = (pixel[channel] as f32 / step).round() * step;
            pixel[channel] = quantized.min(255.0) as u8;
        }
    }
    out
}
