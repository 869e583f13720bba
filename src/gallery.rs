//! Presenter-side gallery: drives the engine, receives the completion
//! callback, and lets the host select one result.
//!
//! The gallery is held in an `Arc` by its host; the engine only ever keeps a
//! weak reference. Dropping the gallery while a run is in flight makes the
//! eventual delivery a no-op.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use image::RgbaImage;
use tokio::sync::watch;
use tracing::{debug, warn};
use crate::core::{FilterKind, FilteredImage};
use crate::processing::{FilterEngine, FilteringObserver};
use crate::utils::{FilterError, FilterResult};

/// Presenter lifecycle: `Idle → Filtering → Ready`, with `Ready → Filtering`
/// on a re-request. Teardown is simply dropping the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Idle,
    Filtering,
    Ready,
}

/// Holds the current run's results and selection for a host view.
pub struct FilterGallery {
    // Back-reference handed to the engine as the observer registration.
    self_ref: Weak<FilterGallery>,
    state: watch::Sender<GalleryState>,
    results: Mutex<Vec<FilteredImage>>,
    selected: Mutex<Option<FilterKind>>,
    last_error: Mutex<Option<String>>,
}

impl FilterGallery {
    pub fn new() -> Arc<Self> {
        let (state, _) = watch::channel(GalleryState::Idle);
        Arc::new_cyclic(|self_ref| Self {
            self_ref: self_ref.clone(),
            state,
            results: Mutex::new(Vec::new()),
            selected: Mutex::new(None),
            last_error: Mutex::new(None),
        })
    }

    /// Register as the engine's observer and start filtering `source`.
    ///
    /// A validation failure surfaces synchronously and leaves the gallery in
    /// its prior state. On success the gallery enters `Filtering` and any
    /// previous run's results and selection are discarded.
    pub fn request_filtering(&self, engine: &FilterEngine, source: RgbaImage) -> FilterResult<()> {
        // Reject a bad source before touching any gallery state.
        crate::processing::validate_source(&source)?;

        let this = self
            .self_ref
            .upgrade()
            .ok_or_else(|| FilterError::processing("Gallery is being torn down"))?;

        engine.set_observer(&this);

        // Enter Filtering before the run launches so a fast completion
        // cannot be overwritten by this setup.
        self.state.send_replace(GalleryState::Filtering);
        lock(&self.results).clear();
        *lock(&self.selected) = None;
        *lock(&self.last_error) = None;

        if let Err(error) = engine.filter_image(source) {
            // The display set is already cleared, so Ready would lie about
            // it; a failed launch lands in Idle like any other failed run.
            *lock(&self.last_error) = Some(error.to_string());
            self.state.send_replace(GalleryState::Idle);
            return Err(error);
        }
        Ok(())
    }

    pub fn state(&self) -> GalleryState {
        *self.state.borrow()
    }

    /// Wait until the current run settles (completes or fails).
    ///
    /// Returns immediately when no run is in flight.
    pub async fn wait_until_settled(&self) -> GalleryState {
        let mut receiver = self.state.subscribe();
        let settled = receiver
            .wait_for(|state| *state != GalleryState::Filtering)
            .await;
        match settled {
            Ok(state) => *state,
            // Sender gone means the gallery itself is being torn down.
            Err(_) => GalleryState::Idle,
        }
    }

    /// The current display set, in configured filter order.
    pub fn results(&self) -> Vec<FilteredImage> {
        lock(&self.results).clone()
    }

    /// Result names in delivery order, cheap to read for rendering.
    pub fn result_names(&self) -> Vec<String> {
        lock(&self.results).iter().map(|r| r.name.clone()).collect()
    }

    /// Select a result by its filter name; returns the chosen image.
    pub fn select(&self, name: &str) -> Option<FilteredImage> {
        let chosen = lock(&self.results)
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned()?;
        *lock(&self.selected) = Some(chosen.kind);
        Some(chosen)
    }

    /// The currently selected result, if any.
    pub fn selected(&self) -> Option<FilteredImage> {
        let kind = (*lock(&self.selected))?;
        lock(&self.results).iter().find(|r| r.kind == kind).cloned()
    }

    /// Error from the last failed run, if any.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }
}

impl FilteringObserver for FilterGallery {
    fn filtering_complete(&self, results: Vec<FilteredImage>) {
        debug!(results = results.len(), "Gallery received filter results");
        *lock(&self.results) = results;
        self.state.send_replace(GalleryState::Ready);
    }

    fn filtering_failed(&self, error: FilterError) {
        warn!(error = %error, "Gallery filter run failed");
        *lock(&self.last_error) = Some(error.to_string());
        self.state.send_replace(GalleryState::Idle);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
