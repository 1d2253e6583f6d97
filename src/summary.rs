//! SummaryResult struct - the outcome of one summarisation exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title used until real video metadata lookup exists.
pub const PLACEHOLDER_TITLE: &str = "Summary Generated";

/// A completed summary for a single video.
///
/// `generated_at` is stamped client-side when the backend response is
/// received; the backend does not report a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// The generated summary text, verbatim from the backend
    pub summary_text: String,
    /// Video title (currently always [`PLACEHOLDER_TITLE`])
    pub video_title: String,
    /// The URL that was submitted
    pub video_url: String,
    /// When the response was received
    pub generated_at: DateTime<Utc>,
}

impl SummaryResult {
    /// Create a result from a backend summary, stamped with the current time
    pub fn new(summary_text: String, video_url: String) -> Self {
        Self {
            summary_text,
            video_title: PLACEHOLDER_TITLE.to_string(),
            video_url,
            generated_at: Utc::now(),
        }
    }

    /// Check if the summary has any content
    pub fn is_empty(&self) -> bool {
        self.summary_text.trim().is_empty()
    }
}
