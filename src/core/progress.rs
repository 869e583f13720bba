use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressStage {
    Start,
    Filtering,
    Complete,
}

/// Progress snapshot for one filter run.
///
/// This is a side channel of counts only. It never carries pixel data and
/// does not replace the single completion callback: the full result sequence
/// still arrives exactly once, at the end of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterProgress {
    /// Stage of the run (start, filtering, complete)
    pub stage: ProgressStage,
    /// Number of filter slots already handled
    pub completed_filters: usize,
    /// Total number of filters in the run
    pub total_filters: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Name of the filter most recently handled
    #[serde(default)]
    pub current_filter: Option<String>,
}

impl FilterProgress {
    pub fn new(
        stage: ProgressStage,
        completed_filters: usize,
        total_filters: usize,
        current_filter: Option<&str>,
    ) -> Self {
        let progress_percentage = if total_filters > 0 {
            (completed_filters * 100) / total_filters
        } else {
            100
        };

        Self {
            stage,
            completed_filters,
            total_filters,
            progress_percentage,
            current_filter: current_filter.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_derived_from_counts() {
        let p = FilterProgress::new(ProgressStage::Filtering, 3, 12, Some("Sepia"));
        assert_eq!(p.progress_percentage, 25);
    }

    #[test]
    fn empty_run_reports_complete() {
        let p = FilterProgress::new(ProgressStage::Complete, 0, 0, None);
        assert_eq!(p.progress_percentage, 100);
    }
}
