//! Core types shared across the crate:
//! - [`FilterKind`]: the named filters a set is configured from
//! - [`FilterSet`]: the externally supplied, ordered filter configuration
//! - [`FilteredImage`]: one result of a filter run
//! - [`EngineSettings`]: engine tunables
//! - [`FilterProgress`]: per-run progress snapshots

mod kind;
mod progress;
mod types;

pub use kind::FilterKind;
pub use progress::{FilterProgress, ProgressStage};
pub use types::{EngineSettings, FilterSet, FilteredImage, SavedOutput};
