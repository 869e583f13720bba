//! Core types for filter runs and their results.

use image::RgbaImage;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::core::FilterKind;
use crate::utils::{ConfigError, FilterResult};

lazy_static! {
    /// Default preview lineup: every known filter in its canonical order.
    static ref DEFAULT_LINEUP: Vec<FilterKind> = FilterKind::ALL.to_vec();
}

/// One filtered image produced by a run.
///
/// Immutable once created; owned by whoever received the completion callback.
/// A result is only ever built from a successful filter application, so
/// `image` always holds valid pixels.
#[derive(Debug, Clone)]
pub struct FilteredImage {
    /// The filter that produced this result
    pub kind: FilterKind,
    /// Human-readable filter name, unique within the run
    pub name: String,
    /// The filtered bitmap
    pub image: RgbaImage,
}

impl FilteredImage {
    pub fn new(kind: FilterKind, image: RgbaImage) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            image,
        }
    }
}

/// The externally supplied, ordered list of filters applied per run.
///
/// The engine never computes this list; the host configures it. Order is
/// preserved into the delivered result sequence, and duplicates are rejected
/// so result names stay unique within a run.
#[derive(Debug, Clone)]
pub struct FilterSet {
    kinds: Vec<FilterKind>,
}

impl FilterSet {
    /// Build a set from an ordered list of kinds, rejecting duplicates.
    pub fn new(kinds: Vec<FilterKind>) -> FilterResult<Self> {
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[..i].contains(kind) {
                return Err(ConfigError::DuplicateFilter(kind.name().to_string()).into());
            }
        }
        Ok(Self { kinds })
    }

    /// The full default lineup.
    pub fn default_lineup() -> Self {
        Self {
            kinds: DEFAULT_LINEUP.clone(),
        }
    }

    /// Parse a comma-separated list of filter names, e.g. `"sepia,invert"`.
    pub fn parse_list(list: &str) -> FilterResult<Self> {
        let kinds = list
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<FilterResult<Vec<FilterKind>>>()?;
        Self::new(kinds)
    }

    pub fn kinds(&self) -> &[FilterKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::default_lineup()
    }
}

/// Tunables for a filter engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Sources larger than this on either axis are downscaled before
    /// filtering, preserving aspect ratio. Preview strips do not need
    /// full-resolution inputs.
    #[serde(rename = "maxSourceDimension")]
    pub max_source_dimension: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_source_dimension: 1000,
        }
    }
}

/// Record of one filtered result written to disk.
///
/// This is the host-facing summary; the bitmap itself stays in
/// [`FilteredImage`].
#[derive(Debug, Clone, Serialize)]
pub struct SavedOutput {
    /// Filter name that produced the output
    #[serde(rename = "filterName")]
    pub filter_name: String,
    /// Path the encoded image was written to
    pub path: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Encoded file size in bytes
    #[serde(rename = "fileSize")]
    pub file_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_kinds_are_rejected() {
        let err = FilterSet::new(vec![FilterKind::Sepia, FilterKind::Sepia]);
        assert!(err.is_err());
    }

    #[test]
    fn parse_list_preserves_order() {
        let set = FilterSet::parse_list("sepia, invert").unwrap();
        assert_eq!(set.kinds(), &[FilterKind::Sepia, FilterKind::Invert]);
    }

    #[test]
    fn empty_list_parses_to_empty_set() {
        let set = FilterSet::parse_list("").unwrap();
        assert!(set.is_empty());
    }
}
