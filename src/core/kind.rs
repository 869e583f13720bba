//! Filter identifiers.
//!
//! These are the names a configured filter set is built from. The lineup
//! mirrors a photo app's preview strip: the untouched original first, the
//! oil-paint signature look next, then color looks and geometric effects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::{ConfigError, FilterError};

/// A single named filter that can appear in a configured set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Original,
    OilPaint,
    Sepia,
    Noir,
    Mono,
    Faded,
    Dramatic,
    Warm,
    Cool,
    Vibrant,
    Posterize,
    Invert,
    Blur,
    Sharpen,
    Vignette,
    Mosaic,
}

impl FilterKind {
    /// Every known filter, in default preview order.
    pub const ALL: [FilterKind; 16] = [
        FilterKind::Original,
        FilterKind::OilPaint,
        FilterKind::Sepia,
        FilterKind::Noir,
        FilterKind::Mono,
        FilterKind::Faded,
        FilterKind::Dramatic,
        FilterKind::Warm,
        FilterKind::Cool,
        FilterKind::Vibrant,
        FilterKind::Posterize,
        FilterKind::Invert,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Vignette,
        FilterKind::Mosaic,
    ];

    /// Human-readable filter name, unique within any one run.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::OilPaint => "Oil Paint",
            Self::Sepia => "Sepia",
            Self::Noir => "Noir",
            Self::Mono => "Mono",
            Self::Faded => "Faded",
            Self::Dramatic => "Dramatic",
            Self::Warm => "Warm",
            Self::Cool => "Cool",
            Self::Vibrant => "Vibrant",
            Self::Posterize => "Posterize",
            Self::Invert => "Invert",
            Self::Blur => "Blur",
            Self::Sharpen => "Sharpen",
            Self::Vignette => "Vignette",
            Self::Mosaic => "Mosaic",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "oil paint" | "oil-paint" | "oilpaint" => Ok(Self::OilPaint),
            "sepia" => Ok(Self::Sepia),
            "noir" => Ok(Self::Noir),
            "mono" => Ok(Self::Mono),
            "faded" => Ok(Self::Faded),
            "dramatic" => Ok(Self::Dramatic),
            "warm" => Ok(Self::Warm),
            "cool" => Ok(Self::Cool),
            "vibrant" => Ok(Self::Vibrant),
            "posterize" => Ok(Self::Posterize),
            "invert" => Ok(Self::Invert),
            "blur" => Ok(Self::Blur),
            "sharpen" => Ok(Self::Sharpen),
            "vignette" => Ok(Self::Vignette),
            "mosaic" => Ok(Self::Mosaic),
            other => Err(ConfigError::UnknownFilter(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in FilterKind::ALL {
            let parsed: FilterKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("kaleidoscope".parse::<FilterKind>().is_err());
    }
}
