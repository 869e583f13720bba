//! Tone looks built on a shared brightness/contrast/saturation pass.

use image::RgbaImage;

/// Apply brightness, contrast and saturation adjustments in one pass.
///
/// `brightness` is -1.0..1.0 (0.0 = no change), `contrast` and `saturation`
/// are multipliers around 1.0. Alpha is preserved.
pub(crate) fn adjust(source: &RgbaImage, brightness: f32, contrast: f32, saturation: f32) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        let r = pixel[0] as f32 + brightness * 255.0;
        let g = pixel[1] as f32 + brightness * 255.0;
        let b = pixel[2] as f32 + brightness * 255.0;

        // Contrast pivots around mid-gray
        let r = ((r - 128.0) * contrast + 128.0).clamp(0.0, 255.0);
        let g = ((g - 128.0) * contrast + 128.0).clamp(0.0, 255.0);
        let b = ((b - 128.0) * contrast + 128.0).clamp(0.0, 255.0);

        let (r, g, b) = if saturation != 1.0 {
            let gray = 0.299 * r + 0.587 * g + 0.114 * b;
            (
                (gray + (r - gray) * saturation).clamp(0.0, 255.0),
                (gray + (g - gray) * saturation).clamp(0.0, 255.0),
                (gray + (b - gray) * saturation).clamp(0.0, 255.0),
            )
        } else {
            (r, g, b)
        };

        pixel[0] = r as u8;
        pixel[1] = g as u8;
        pixel[2] = b as u8;
    }
    out
}

/// Shift color temperature by moving red and blue in opposite directions.
fn temperature(source: &RgbaImage, shift: f32) -> RgbaImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        pixel[0] = (pixel[0] as f32 + shift).clamp(0.0, 255.0) as u8;
        pixel[2] = (pixel[2] as f32 - shift).clamp(0.0, 255.0) as u8;
    }
    out
}

pub(crate) fn warm(source: &RgbaImage) -> RgbaImage {
    temperature(source, 18.0)
}

pub(crate) fn cool(source: &RgbaImage) -> RgbaImage {
    temperature(source, -18.0)
}

pub(crate) fn dramatic(source: &RgbaImage) -> RgbaImage {
    adjust(source, -0.02, 1.35, 0.9)
}

pub(crate) fn faded(source: &RgbaImage) -> RgbaImage {
    adjust(source, 0.06, 0.82, 0.72)
}

pub(crate) fn vibrant(source: &RgbaImage) -> RgbaImage {
    adjust(source, 0.0, 1.05, 1.45)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(r: u8, g: u8, b: u8) -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba([r, g, b, 255]))
    }

    #[test]
    fn identity_adjust_is_a_no_op() {
        let img = solid(120, 64, 200);
        let out = adjust(&img, 0.0, 1.0, 1.0);
        assert_eq!(img, out);
    }

    #[test]
    fn warm_raises_red_and_lowers_blue() {
        let out = warm(&solid(100, 100, 100));
        let p = out.get_pixel(0, 0);
        assert!(p[0] > 100);
        assert!(p[2] < 100);
        assert_eq!(p[1], 100);
    }

    #[test]
    fn adjust_preserves_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 77]));
        let out = adjust(&img, 0.3, 1.5, 0.5);
        assert_eq!(out.get_pixel(0, 0)[3], 77);
    }
}
