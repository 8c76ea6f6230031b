use async_trait::async_trait;

/// Best-effort sink for question-selection events. Callers treat delivery
/// as fire-and-forget: a failed call is logged and never surfaced.
#[async_trait]
pub trait TrackingSink: Send + Sync {
    async fn record_selection(&self, question_id: &str) -> Result<(), TrackingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("tracking endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Default sink: logs the selection instead of calling out anywhere.
#[derive(Debug, Default)]
pub struct LoggingTracker;

#[async_trait]
impl TrackingSink for LoggingTracker {
    async fn record_selection(&self, question_id: &str) -> Result<(), TrackingError> {
        tracing::info!(%question_id, "question selected");
        Ok(())
    }
}
