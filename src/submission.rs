//! Submission state machine.
//!
//! Owns the lifecycle of a single summarisation request: idle, loading,
//! then success or failure. One logical request at a time, no queueing,
//! no automatic retry.

use crate::client::Summarize;
use crate::summary::SummaryResult;
use crate::validate::{validate_youtube_url, ValidationError};

/// The message shown for any failed exchange. The underlying cause is
/// logged for diagnostics and never surfaced verbatim.
pub const GENERIC_FAILURE: &str = "Failed to generate summary. Please try again.";

/// Lifecycle of one submission. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(SummaryResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Drives submissions against a transport client.
pub struct Submission<C> {
    client: C,
    state: RequestState,
}

impl<C: Summarize> Submission<C> {
    /// Create a new machine in the `Idle` state
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RequestState::Idle,
        }
    }

    /// Current state of the machine
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit a raw URL for summarisation.
    ///
    /// Validation failures are returned synchronously and leave the state
    /// untouched; no request is issued. A submit while a request is already
    /// in flight is ignored. Otherwise the machine enters `Loading`
    /// (clearing any prior result or error), issues exactly one transport
    /// call, and settles in `Success` or `Failed`.
    pub async fn submit(&mut self, raw_url: &str) -> Result<(), ValidationError> {
        let url = validate_youtube_url(raw_url)?.to_string();

        if self.state.is_loading() {
            log::warn!("submission ignored: a request is already in flight");
            return Ok(());
        }

        self.state = RequestState::Loading;

        match self.client.summarize(&url).await {
            Ok(result) => self.state = RequestState::Success(result),
            Err(err) => {
                log::error!("summarisation failed: {}", err);
                self.state = RequestState::Failed(GENERIC_FAILURE.to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport stub that counts invocations
    struct MockClient {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockClient {
        fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Summarize for MockClient {
        async fn summarize(&self, url: &str) -> Result<SummaryResult, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ClientError::Status {
                    status: 500,
                    detail: None,
                })
            } else {
                Ok(SummaryResult::new(
                    "A video about...".to_string(),
                    url.to_string(),
                ))
            }
        }
    }

    const URL: &str = "https://youtu.be/dQw4w9WgXcQ";

    #[tokio::test]
    async fn valid_url_reaches_success_with_verbatim_summary() {
        let mut submission = Submission::new(MockClient::succeeding());
        assert_eq!(*submission.state(), RequestState::Idle);

        submission.submit(URL).await.unwrap();

        match submission.state() {
            RequestState::Success(result) => {
                assert_eq!(result.summary_text, "A video about...");
                assert_eq!(result.video_url, URL);
            }
            other => panic!("expected Success, got {other:?}"),
        }
        assert_eq!(submission.client.calls(), 1);
    }

    #[tokio::test]
    async fn transport_failure_settles_in_failed_with_generic_message() {
        let mut submission = Submission::new(MockClient::failing());
        submission.submit(URL).await.unwrap();
        assert_eq!(
            *submission.state(),
            RequestState::Failed(GENERIC_FAILURE.to_string())
        );
    }

    #[tokio::test]
    async fn invalid_input_issues_no_request_and_keeps_state() {
        let mut submission = Submission::new(MockClient::succeeding());

        let err = submission.submit("not a url").await.unwrap_err();
        assert_eq!(err, ValidationError::InvalidUrl);
        assert_eq!(*submission.state(), RequestState::Idle);
        assert_eq!(submission.client.calls(), 0);

        let err = submission.submit("   ").await.unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(submission.client.calls(), 0);
    }

    #[tokio::test]
    async fn submit_while_loading_is_ignored() {
        let mut submission = Submission::new(MockClient::succeeding());
        submission.state = RequestState::Loading;

        submission.submit(URL).await.unwrap();

        assert_eq!(submission.client.calls(), 0);
        assert!(submission.state().is_loading());
    }

    #[tokio::test]
    async fn resubmission_after_failure_is_an_independent_attempt() {
        let mut submission = Submission::new(MockClient::failing());
        submission.submit(URL).await.unwrap();
        assert_eq!(
            *submission.state(),
            RequestState::Failed(GENERIC_FAILURE.to_string())
        );

        submission.client.fail = false;
        submission.submit(URL).await.unwrap();

        assert!(matches!(submission.state(), RequestState::Success(_)));
        assert_eq!(submission.client.calls(), 2);
    }

    #[tokio::test]
    async fn success_is_cleared_when_a_new_submission_starts() {
        let mut submission = Submission::new(MockClient::succeeding());
        submission.submit(URL).await.unwrap();
        assert!(matches!(submission.state(), RequestState::Success(_)));

        submission.client.fail = true;
        submission.submit(URL).await.unwrap();
        assert_eq!(
            *submission.state(),
            RequestState::Failed(GENERIC_FAILURE.to_string())
        );
    }
}
