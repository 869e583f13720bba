//! Geometric and convolution effects.

use image::{RgbaImage, imageops};

/// Soft gaussian blur, sigma scaled to the image so small previews and large
/// sources read the same.
pub(crate) fn blur(source: &RgbaImage) -> RgbaImage {
    let sigma = (source.width().max(source.height()) as f32 / 200.0).clamp(1.5, 6.0);
    imageops::blur(source, sigma)
}

/// Unsharp-mask sharpening.
pub(crate) fn sharpen(source: &RgbaImage) -> RgbaImage {
    imageops::unsharpen(source, 1.8, 3)
}

/// Darken toward the corners with a smooth radial falloff.
pub(crate) fn vignette(source: &RgbaImage) -> RgbaImage {
    const STRENGTH: f32 = 0.75;
    // Falloff starts at 55% of the corner distance
    const INNER: f32 = 0.55;

    let (width, height) = source.dimensions();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let max_distance = (center_x * center_x + center_y * center_y).sqrt();

    let mut out = source.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let distance = (dx * dx + dy * dy).sqrt() / max_distance;

        let t = ((distance - INNER) / (1.0 - INNER)).clamp(0.0, 1.0);
        // Smoothstep keeps the transition free of banding
        let falloff = t * t * (3.0 - 2.0 * t);
        let scale = 1.0 - STRENGTH * falloff;

        pixel[0] = (pixel[0] as f32 * scale) as u8;
        pixel[1] = (pixel[1] as f32 * scale) as u8;
        pixel[2] = (pixel[2] as f32 * scale) as u8;
    }
    out
}

/// Kuwahara oil-paint look.
///
/// Each output pixel takes the mean of whichever of its four overlapping
/// quadrant windows has the least color variance, which flattens texture
/// while keeping edges crisp. Radius scales with the image, like `blur`.
pub(crate) fn oil_paint(source: &RgbaImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    let radius = ((width.max(height) / 200) as i64).clamp(2, 6);
    let quadrant_size = ((radius + 1) * (radius + 1)) as f32;

    let mut out = source.clone();
    for (px, py, pixel) in out.enumerate_pixels_mut() {
        let mut means = [[0.0f32; 3]; 4];
        let mut squares = [[0.0f32; 3]; 4];

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                // Clamp sampling at the borders
                let x = (px as i64 + dx).clamp(0, width as i64 - 1) as u32;
                let y = (py as i64 + dy).clamp(0, height as i64 - 1) as u32;
                let p = source.get_pixel(x, y);

                let quadrants = [
                    dx <= 0 && dy <= 0,
                    dx >= 0 && dy <= 0,
                    dx <= 0 && dy >= 0,
                    dx >= 0 && dy >= 0,
                ];
                for (q, included) in quadrants.into_iter().enumerate() {
                    if included {
                        for c in 0..3 {
                            let value = p[c] as f32 / 255.0;
                            means[q][c] += value;
                            squares[q][c] += value * value;
                        }
                    }
                }
            }
        }

        let mut chosen = [0.0f32; 3];
        let mut min_sigma = f32::MAX;
        for q in 0..4 {
            let mut sigma = 0.0;
            for c in 0..3 {
                means[q][c] /= quadrant_size;
                sigma += (squares[q][c] / quadrant_size - means[q][c] * means[q][c]).abs();
            }
            if sigma < min_sigma {
                min_sigma = sigma;
                chosen = means[q];
            }
        }

        pixel[0] = (chosen[0] * 255.0).clamp(0.0, 255.0) as u8;
        pixel[1] = (chosen[1] * 255.0).clamp(0.0, 255.0) as u8;
        pixel[2] = (chosen[2] * 255.0).clamp(0.0, 255.0) as u8;
    }
    out
}

/// Average square blocks into flat tiles.
pub(crate) fn mosaic(source: &RgbaImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    let block = (width.max(height) / 48).max(4);

    let mut out = RgbaImage::new(width, height);
    for block_y in (0..height).step_by(block as usize) {
        for block_x in (0..width).step_by(block as usize) {
            let block_w = block.min(width - block_x);
            let block_h = block.min(height - block_y);

            let mut sums = [0u64; 4];
            for y in block_y..block_y + block_h {
                for x in block_x..block_x + block_w {
                    let p = source.get_pixel(x, y);
                    for c in 0..4 {
                        sums[c] += p[c] as u64;
                    }
                }
            }

            let count = (block_w * block_h) as u64;
            let average = image::Rgba([
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
                (sums[3] / count) as u8,
            ]);

            for y in block_y..block_y + block_h {
                for x in block_x..block_x + block_w {
                    out.put_pixel(x, y, average);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn vignette_darkens_corners_not_center() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([200, 200, 200, 255]));
        let out = vignette(&img);
        let center = out.get_pixel(32, 32);
        let corner = out.get_pixel(0, 0);
        assert_eq!(center[0], 200);
        assert!(corner[0] < 150);
    }

    #[test]
    fn mosaic_flattens_blocks() {
        // Two-tone image: left half black, right half white
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 255]));
        for y in 0..32 {
            for x in 16..32 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let out = mosaic(&img);
        assert_eq!(out.dimensions(), (32, 32));
        // Pixels inside one block are identical
        assert_eq!(out.get_pixel(0, 0), out.get_pixel(1, 1));
    }

    #[test]
    fn effects_preserve_dimensions() {
        let img = RgbaImage::from_pixel(40, 30, Rgba([90, 90, 90, 255]));
        assert_eq!(blur(&img).dimensions(), (40, 30));
        assert_eq!(sharpen(&img).dimensions(), (40, 30));
        assert_eq!(mosaic(&img).dimensions(), (40, 30));
        assert_eq!(oil_paint(&img).dimensions(), (40, 30));
    }

    #[test]
    fn oil_paint_keeps_flat_regions_flat() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([60, 120, 180, 255]));
        let out = oil_paint(&img);
        let p = out.get_pixel(8, 8);
        // A solid region's quadrant means all equal the region color.
        assert!((p[0] as i16 - 60).abs() <= 1);
        assert!((p[1] as i16 - 120).abs() <= 1);
        assert!((p[2] as i16 - 180).abs() <= 1);
    }

    #[test]
    fn oil_paint_does_not_bleed_across_a_hard_edge() {
        // Left half black, right half white
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]));
        for y in 0..16 {
            for x in 8..16 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let out = oil_paint(&img);
        // A pixel hugging the edge picks its zero-variance side, not a blend.
        assert_eq!(out.get_pixel(7, 8)[0], 0);
        assert_eq!(out.get_pixel(8, 8)[0], 255);
    }
}
