// Module declarations in dependency order
pub mod core;
pub mod gallery;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use self::core::{EngineSettings, FilterKind, FilterProgress, FilterSet, FilteredImage, ProgressStage, SavedOutput};
pub use gallery::{FilterGallery, GalleryState};
pub use processing::{FilterEngine, FilteringObserver, apply_filter};
pub use utils::{FilterError, FilterResult, OutputFormat};

// This library file is used as a public API for consuming this crate as a library.
// The CLI entry point is in main.rs.
