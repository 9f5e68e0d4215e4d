use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backends::SuggestionBackend;
use crate::console::console;
use crate::suggestion::SuggestionId;

/// A learning report that did not reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFailure {
    pub suggestion_id: SuggestionId,
    pub message: String,
}

/// Sends acceptance reports on detached tasks.
///
/// Failures go to the log and to the failure channel handed out by `new`;
/// they never reach the lookup error shown to the user.
pub struct SelectionReporter {
    backend: Arc<dyn SuggestionBackend>,
    failures: mpsc::UnboundedSender<ReportFailure>,
}

impl SelectionReporter {
    pub fn new(
        backend: Arc<dyn SuggestionBackend>,
    ) -> (Self, mpsc::UnboundedReceiver<ReportFailure>) {
        let (failures, failure_rx) = mpsc::unbounded_channel();
        (Self { backend, failures }, failure_rx)
    }

    /// Best effort, no retry. The handle only matters to callers that want to
    /// wait for delivery; dropping it leaves the task running.
    pub fn report(&self, id: SuggestionId) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let failures = self.failures.clone();

        tokio::spawn(async move {
            match backend.record_selection(id).await {
                Ok(()) => console().debug(&format!("Recorded selection of suggestion {}", id)),
                Err(err) => {
                    let message = err.user_message();
                    console().warning(&format!(
                        "Failed to record selection of suggestion {}: {}",
                        id, message
                    ));
                    let _ = failures.send(ReportFailure {
                        suggestion_id: id,
                        message,
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MockBackend;
    use crate::suggestion::Suggestion;

    #[tokio::test]
    async fn successful_report_reaches_backend() {
        let backend = Arc::new(MockBackend::with_suggestions(vec![
            Suggestion::new(1, "apple").with_frequency(5),
        ]));
        let (reporter, mut failures) = SelectionReporter::new(backend.clone());

        reporter.report(1).await.unwrap();

        assert_eq!(backend.get(1).await.unwrap().frequency, 6);
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_report_is_published_not_raised() {
        let backend = Arc::new(MockBackend::empty());
        let (reporter, mut failures) = SelectionReporter::new(backend);

        reporter.report(2).await.unwrap();

        let failure = failures.try_recv().unwrap();
        assert_eq!(failure.suggestion_id, 2);
        assert!(!failure.message.is_empty());
    }
}
