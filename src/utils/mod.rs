pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ConfigError, FilterError, FilterResult, SourceError};
pub use formats::{OutputFormat, encode_to_path};
pub use fs::{ensure_dir, file_stem_for, get_file_size};
