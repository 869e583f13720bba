// CLI host for the filter engine: decodes one source image, runs the
// configured filter set, and writes one encoded output per result.

use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use photo_filters::utils::{encode_to_path, ensure_dir, file_stem_for, get_file_size};
use photo_filters::{FilterEngine, FilterGallery, FilterSet, GalleryState, OutputFormat, SavedOutput};

#[derive(Parser, Debug)]
#[command(name = "photo-filters", about = "Apply a filter lineup to a photo and save every result")]
struct Cli {
    /// Source image to filter
    input: PathBuf,

    /// Directory the filtered outputs are written to
    #[arg(long, default_value = "filtered")]
    out_dir: PathBuf,

    /// Comma-separated filter names, in order (defaults to the full lineup)
    #[arg(long)]
    filters: Option<String>,

    /// Output encoding: jpeg, png or webp
    #[arg(long, default_value = "jpeg")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();
    subscriber.init();

    let cli = Cli::parse();

    let filters = match &cli.filters {
        Some(list) => FilterSet::parse_list(list)?,
        None => FilterSet::default_lineup(),
    };
    let format: OutputFormat = cli.format.parse()?;

    let source = image::open(&cli.input)
        .with_context(|| format!("Failed to decode {}", cli.input.display()))?
        .to_rgba8();
    info!(
        input = %cli.input.display(),
        dimensions = %format!("{}x{}", source.width(), source.height()),
        filters = filters.len(),
        "Filtering image"
    );

    let engine = FilterEngine::new(filters);
    engine.set_progress_listener(|progress| {
        debug!(
            "{}/{} ({}%) {}",
            progress.completed_filters,
            progress.total_filters,
            progress.progress_percentage,
            progress.current_filter.as_deref().unwrap_or("")
        );
    });

    let gallery = FilterGallery::new();
    gallery.request_filtering(&engine, source)?;

    if gallery.wait_until_settled().await != GalleryState::Ready {
        anyhow::bail!(
            "Filter run failed: {}",
            gallery.last_error().unwrap_or_else(|| "unknown error".into())
        );
    }

    ensure_dir(&cli.out_dir).await?;

    let mut summary = Vec::new();
    for result in gallery.results() {
        let filename = format!("{}.{}", file_stem_for(&result.name), format.primary_extension());
        let path = cli.out_dir.join(filename);
        encode_to_path(&result.image, &path, format)?;

        summary.push(SavedOutput {
            filter_name: result.name.clone(),
            path: path.display().to_string(),
            width: result.image.width(),
            height: result.image.height(),
            file_size: get_file_size(&path).await?,
        });
        debug!(filter = %result.name, path = %path.display(), "Saved output");
    }

    info!(outputs = summary.len(), dir = %cli.out_dir.display(), "Done");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
