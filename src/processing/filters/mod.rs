//! Filter application: maps a [`FilterKind`] to its pixel operation.
//!
//! Every operation is pure: it takes the source bitmap and returns a new
//! bitmap of the same dimensions. The engine owns ordering, threading and
//! delivery; nothing in here knows about runs or observers.

mod color;
mod effects;
mod tone;

use image::RgbaImage;
use crate::core::FilterKind;
use crate::utils::{FilterError, FilterResult};

/// Apply one named filter to a source bitmap.
///
/// `Original` returns the source unchanged so the preview strip always
/// includes the unfiltered image as its own slot.
pub fn apply_filter(kind: FilterKind, source: &RgbaImage) -> FilterResult<RgbaImage> {
    let filtered = match kind {
        FilterKind::Original => source.clone(),
        FilterKind::OilPaint => effects::oil_paint(source),
        FilterKind::Sepia => color::sepia(source),
        FilterKind::Noir => color::noir(source),
        FilterKind::Mono => color::mono(source),
        FilterKind::Faded => tone::faded(source),
        FilterKind::Dramatic => tone::dramatic(source),
        FilterKind::Warm => tone::warm(source),
        FilterKind::Cool => tone::cool(source),
        FilterKind::Vibrant => tone::vibrant(source),
        FilterKind::Posterize => color::posterize(source),
        FilterKind::Invert => color::invert(source),
        FilterKind::Blur => effects::blur(source),
        FilterKind::Sharpen => effects::sharpen(source),
        FilterKind::Vignette => effects::vignette(source),
        FilterKind::Mosaic => effects::mosaic(source),
    };

    if filtered.dimensions() != source.dimensions() {
        return Err(FilterError::processing(format!(
            "Filter {} changed dimensions from {:?} to {:?}",
            kind.name(),
            source.dimensions(),
            filtered.dimensions()
        )));
    }

    Ok(filtered)
}
