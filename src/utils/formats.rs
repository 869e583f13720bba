use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use image::RgbaImage;
use crate::utils::{FilterError, FilterResult};

/// Output encodings supported when saving filtered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    JPEG,
    PNG,
    WebP,
}

impl OutputFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    /// Whether the encoding carries an alpha channel
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, Self::JPEG)
    }

    fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::PNG => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FilterError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "webp" => Ok(Self::WebP),
            _ => Err(FilterError::format(format!(
                "Unsupported output format: {}", ext
            ))),
        }
    }
}

/// Encode a filtered bitmap to `path` in the given format.
///
/// JPEG cannot carry alpha, so the bitmap is flattened to RGB first for
/// formats without alpha support.
pub fn encode_to_path(image: &RgbaImage, path: &Path, format: OutputFormat) -> FilterResult<()> {
    if format.supports_alpha() {
        image.save_with_format(path, format.image_format())?;
    } else {
        let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        rgb.save_with_format(path, format.image_format())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_extensions() {
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::JPEG);
        assert_eq!("JPEG".parse::<OutputFormat>().unwrap(), OutputFormat::JPEG);
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::PNG);
        assert!("tiff".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn jpeg_drops_alpha() {
        assert!(!OutputFormat::JPEG.supports_alpha());
        assert!(OutputFormat::PNG.supports_alpha());
    }
}
