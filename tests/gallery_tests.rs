//! Integration tests for the presenter-side gallery.

use std::time::Duration;
use image::{Rgba, RgbaImage};
use photo_filters::{FilterEngine, FilterGallery, FilterKind, FilterSet, GalleryState};

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[tokio::test]
async fn walks_idle_filtering_ready() {
    let engine = FilterEngine::new(FilterSet::default_lineup());
    let gallery = FilterGallery::new();
    assert_eq!(gallery.state(), GalleryState::Idle);

    gallery.request_filtering(&engine, solid(400, 400, [140, 90, 60])).unwrap();
    assert_eq!(gallery.state(), GalleryState::Filtering);

    assert_eq!(gallery.wait_until_settled().await, GalleryState::Ready);
    assert_eq!(gallery.results().len(), FilterSet::default_lineup().len());
}

#[tokio::test]
async fn rerequest_restarts_the_cycle_with_fresh_results() {
    let set = FilterSet::parse_list("original,sepia").unwrap();
    let engine = FilterEngine::new(set);
    let gallery = FilterGallery::new();

    gallery.request_filtering(&engine, solid(32, 32, [255, 0, 0])).unwrap();
    gallery.wait_until_settled().await;
    gallery.select("Sepia").unwrap();

    // New source restarts the cycle and discards the previous display set.
    gallery.request_filtering(&engine, solid(32, 32, [0, 255, 0])).unwrap();
    assert!(gallery.selected().is_none());

    assert_eq!(gallery.wait_until_settled().await, GalleryState::Ready);
    let original = gallery.select("Original").unwrap();
    assert_eq!(original.image.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
}

#[tokio::test]
async fn selection_by_name() {
    let engine = FilterEngine::new(FilterSet::parse_list("sepia,invert").unwrap());
    let gallery = FilterGallery::new();

    gallery.request_filtering(&engine, solid(16, 16, [10, 200, 90])).unwrap();
    gallery.wait_until_settled().await;

    assert_eq!(gallery.result_names(), vec!["Sepia", "Invert"]);
    assert!(gallery.select("no such filter").is_none());
    assert!(gallery.selected().is_none());

    let chosen = gallery.select("invert").unwrap();
    assert_eq!(chosen.kind, FilterKind::Invert);
    assert_eq!(gallery.selected().unwrap().kind, FilterKind::Invert);
}

#[tokio::test]
async fn invalid_source_leaves_gallery_untouched() {
    let engine = FilterEngine::new(FilterSet::default_lineup());
    let gallery = FilterGallery::new();

    let result = gallery.request_filtering(&engine, RgbaImage::new(0, 0));
    assert!(result.is_err());
    assert_eq!(gallery.state(), GalleryState::Idle);
    assert!(gallery.results().is_empty());
}

#[tokio::test]
async fn failed_run_lands_idle_with_the_error_recorded() {
    let engine = FilterEngine::new(FilterSet::parse_list("sepia").unwrap());
    // A panicking progress listener takes the whole worker task down.
    engine.set_progress_listener(|_| panic!("listener down"));
    let gallery = FilterGallery::new();

    gallery.request_filtering(&engine, solid(8, 8, [5, 5, 5])).unwrap();

    assert_eq!(gallery.wait_until_settled().await, GalleryState::Idle);
    assert!(gallery.last_error().is_some());
    assert!(gallery.results().is_empty());
}

#[tokio::test]
async fn failed_rerequest_never_leaves_ready_with_empty_results() {
    let engine = FilterEngine::new(FilterSet::parse_list("original,sepia").unwrap());
    let gallery = FilterGallery::new();

    gallery.request_filtering(&engine, solid(16, 16, [80, 80, 80])).unwrap();
    assert_eq!(gallery.wait_until_settled().await, GalleryState::Ready);

    // A rejected source must not strand the gallery in Ready over an
    // empty display set.
    assert!(gallery.request_filtering(&engine, RgbaImage::new(0, 0)).is_err());
    assert_eq!(gallery.state(), GalleryState::Ready);
    assert_eq!(gallery.results().len(), 2);
}

#[tokio::test]
async fn teardown_mid_run_is_a_no_op() {
    let engine = FilterEngine::new(FilterSet::default_lineup());
    let gallery = FilterGallery::new();

    gallery.request_filtering(&engine, solid(800, 800, [90, 90, 90])).unwrap();
    drop(gallery);

    // The run finishes against a dead observer; nothing to assert beyond
    // "does not crash or hang".
    tokio::time::sleep(Duration::from_millis(800)).await;
}

#[tokio::test]
async fn wait_returns_immediately_when_no_run_in_flight() {
    let gallery = FilterGallery::new();
    assert_eq!(gallery.wait_until_settled().await, GalleryState::Idle);
}
