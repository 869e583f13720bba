pub mod engine;
pub mod filters;
pub mod validation;

pub use engine::{FilterEngine, FilteringObserver};
pub use filters::apply_filter;
pub use validation::{normalize_source, validate_source};
