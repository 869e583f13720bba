//! The filter engine: one source image in, the full ordered result set out,
//! delivered exactly once to a weakly held observer.
//!
//! Pixel work runs on blocking worker threads via `spawn_blocking`; nothing
//! here blocks the caller. Each `filter_image` call starts a new run tagged
//! with a generation number. A later call bumps the generation, so an older
//! run's completion is discarded before delivery instead of overwriting
//! newer results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use image::RgbaImage;
use tracing::{debug, info, warn};
use crate::core::{EngineSettings, FilterKind, FilterProgress, FilterSet, FilteredImage, ProgressStage};
use crate::processing::filters::apply_filter;
use crate::processing::validation::{normalize_source, validate_source};
use crate::utils::{FilterError, FilterResult};

/// Completion delegate for filter runs.
///
/// The engine holds the observer weakly: registering does not extend the
/// observer's lifetime, and an observer dropped mid-run simply never hears
/// about the result.
pub trait FilteringObserver: Send + Sync + 'static {
    /// Called exactly once per completed run with the ordered result
    /// sequence, one entry per configured filter that applied successfully.
    fn filtering_complete(&self, results: Vec<FilteredImage>);

    /// Called when a run dies after launch (worker task failure). Individual
    /// filter failures do not reach this; their slots are omitted and the
    /// run still completes.
    fn filtering_failed(&self, _error: FilterError) {}
}

type ProgressListener = dyn Fn(FilterProgress) + Send + Sync;

/// State shared between the engine handle and its in-flight run tasks.
struct RunState {
    observer: Mutex<Option<Weak<dyn FilteringObserver>>>,
    progress: Mutex<Option<Arc<ProgressListener>>>,
    // Serializes completion callbacks so the observer never sees two
    // deliveries concurrently.
    delivery: Mutex<()>,
    generation: AtomicU64,
}

impl RunState {
    fn current_observer(&self) -> Option<Arc<dyn FilteringObserver>> {
        lock(&self.observer).as_ref().and_then(Weak::upgrade)
    }

    fn emit_progress(&self, run: u64, progress: FilterProgress) {
        // Superseded runs stay silent on the progress channel too. The
        // delivery lock keeps the staleness check and the callback atomic
        // against a concurrent generation bump.
        let _serialize = lock(&self.delivery);
        if self.generation.load(Ordering::SeqCst) != run {
            return;
        }
        if let Some(listener) = lock(&self.progress).clone() {
            listener(progress);
        }
    }

    fn deliver_complete(&self, run: u64, results: Vec<FilteredImage>) {
        let _serialize = lock(&self.delivery);

        if self.generation.load(Ordering::SeqCst) != run {
            debug!(run, "Discarding stale run results");
            return;
        }
        let Some(observer) = self.current_observer() else {
            debug!(run, "Observer gone at completion, dropping delivery");
            return;
        };

        info!(run, results = results.len(), "Filter run complete");
        observer.filtering_complete(results);
    }

    fn deliver_failed(&self, run: u64, error: FilterError) {
        let _serialize = lock(&self.delivery);

        if self.generation.load(Ordering::SeqCst) != run {
            debug!(run, "Discarding stale run failure");
            return;
        }
        let Some(observer) = self.current_observer() else {
            debug!(run, "Observer gone at failure, dropping delivery");
            return;
        };

        warn!(run, error = %error, "Filter run failed");
        observer.filtering_failed(error);
    }
}

/// Applies a configured, ordered set of filters to source images.
///
/// One run is current at a time per engine instance; the most recent
/// `filter_image` call always wins.
pub struct FilterEngine {
    filters: FilterSet,
    settings: EngineSettings,
    state: Arc<RunState>,
}

impl FilterEngine {
    /// Create an engine with the given filter set and default settings.
    pub fn new(filters: FilterSet) -> Self {
        Self::with_settings(filters, EngineSettings::default())
    }

    pub fn with_settings(filters: FilterSet, settings: EngineSettings) -> Self {
        Self {
            filters,
            settings,
            state: Arc::new(RunState {
                observer: Mutex::new(None),
                progress: Mutex::new(None),
                delivery: Mutex::new(()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Register the single completion observer, replacing any previous one.
    ///
    /// Only a weak reference is stored.
    pub fn set_observer<O: FilteringObserver>(&self, observer: &Arc<O>) {
        let weak = Arc::downgrade(observer);
        // Unsize in a second step; annotating the first binding would force
        // `downgrade` itself to the trait-object type.
        let weak: Weak<dyn FilteringObserver> = weak;
        *lock(&self.state.observer) = Some(weak);
    }

    /// Attach an optional per-run progress listener.
    ///
    /// Progress carries counts only; results still arrive solely through the
    /// completion callback.
    pub fn set_progress_listener<F>(&self, listener: F)
    where
        F: Fn(FilterProgress) + Send + Sync + 'static,
    {
        *lock(&self.state.progress) = Some(Arc::new(listener));
    }

    /// Start a filtering run for `source`.
    ///
    /// Fails synchronously on an empty source, without touching the
    /// observer. Otherwise the run is computed off the caller's path and the
    /// observer is notified exactly once when the whole ordered set is
    /// ready. A call made while an earlier run is still in flight supersedes
    /// it: the stale run's delivery is discarded.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn filter_image(&self, source: RgbaImage) -> FilterResult<()> {
        validate_source(&source)?;

        // Bump the generation under the delivery lock: a delivery that has
        // already passed its staleness check finishes before the bump, so a
        // superseded run can never deliver after this call returns.
        let run = {
            let _serialize = lock(&self.state.delivery);
            self.state.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        info!(run, filters = self.filters.len(), "Starting filter run");

        let state = Arc::clone(&self.state);
        let kinds: Vec<FilterKind> = self.filters.kinds().to_vec();
        let max_dimension = self.settings.max_source_dimension;
        tokio::spawn(async move {
            match execute_run(&state, run, kinds, max_dimension, source).await {
                Ok(Some(results)) => state.deliver_complete(run, results),
                Ok(None) => debug!(run, "Run superseded before completion"),
                Err(error) => state.deliver_failed(run, error),
            }
        });

        Ok(())
    }
}

/// Apply every configured filter in order on a blocking worker thread.
///
/// Returns `Ok(None)` when the run was superseded mid-flight.
async fn execute_run(
    state: &Arc<RunState>,
    run: u64,
    kinds: Vec<FilterKind>,
    max_dimension: u32,
    source: RgbaImage,
) -> FilterResult<Option<Vec<FilteredImage>>> {
    let state = Arc::clone(state);

    tokio::task::spawn_blocking(move || {
        let total = kinds.len();
        let source = normalize_source(source, max_dimension);
        state.emit_progress(run, FilterProgress::new(ProgressStage::Start, 0, total, None));

        let mut results = Vec::with_capacity(total);
        for (index, kind) in kinds.into_iter().enumerate() {
            if state.generation.load(Ordering::SeqCst) != run {
                debug!(run, "Abandoning superseded run");
                return None;
            }

            match apply_filter(kind, &source) {
                Ok(image) => results.push(FilteredImage::new(kind, image)),
                Err(error) => {
                    // One bad filter must not kill the run; its slot is
                    // omitted from the delivered sequence.
                    warn!(filter = kind.name(), error = %error, "Filter failed, omitting its slot");
                }
            }

            state.emit_progress(
                run,
                FilterProgress::new(ProgressStage::Filtering, index + 1, total, Some(kind.name())),
            );
        }

        state.emit_progress(run, FilterProgress::new(ProgressStage::Complete, total, total, None));
        Some(results)
    })
    .await
    .map_err(|e| FilterError::processing(format!("Filter run task failed: {}", e)))
}

// A poisoned lock only means a callback panicked; the slot data is still
// sound, so recover the guard instead of propagating the panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
