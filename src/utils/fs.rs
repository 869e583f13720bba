use std::path::Path;
use tokio::fs;
use crate::utils::FilterResult;

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> FilterResult<u64> {
    let metadata = fs::metadata(path.as_ref()).await?;
    Ok(metadata.len())
}

/// Create the output directory (and parents) if it does not exist
pub async fn ensure_dir(path: impl AsRef<Path>) -> FilterResult<()> {
    fs::create_dir_all(path.as_ref()).await?;
    Ok(())
}

/// Turn a human-readable filter name into a filesystem-friendly stem
pub fn file_stem_for(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_are_filesystem_friendly() {
        assert_eq!(file_stem_for("Sepia"), "sepia");
        assert_eq!(file_stem_for("Soft Focus"), "soft-focus");
        assert_eq!(file_stem_for("B&W Mono"), "b-w-mono");
    }
}
