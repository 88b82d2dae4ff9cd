use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::types::{Operation, RecognizeRequest, RecognizeResponse};
use crate::error::ServiceError;

/// Speech recognition interface - recognition runs in the hosted service
#[async_trait]
pub trait SpeechInterface: Send + Sync {
    /// Synchronous recognition of short audio
    async fn recognize(&self, request: &RecognizeRequest)
        -> Result<RecognizeResponse, ServiceError>;

    /// Start a long-running recognition job
    async fn long_running_recognize(
        &self,
        request: &RecognizeRequest,
    ) -> Result<Operation, ServiceError>;

    /// Fetch the current state of a long-running job
    async fn get_operation(&self, name: &str) -> Result<Operation, ServiceError>;

    /// Poll `operation` until it is done and return its recognition response.
    async fn wait_for_operation(
        &self,
        operation: Operation,
        poll_interval: Duration,
    ) -> Result<RecognizeResponse, ServiceError> {
        let mut operation = operation;
        let mut polls = 0u32;

        while !operation.done {
            if operation.name.is_empty() {
                return Err(ServiceError::Operation {
                    name: "<unnamed>".to_string(),
                    message: "pending operation has no name to poll".to_string(),
                });
            }
            tokio::time::sleep(poll_interval).await;
            polls += 1;
            debug!("Polling operation {} (attempt {})", operation.name, polls);
            operation = self.get_operation(&operation.name).await?;
        }

        if let Some(error) = operation.error {
            return Err(ServiceError::Operation {
                name: operation.name,
                message: error.describe(),
            });
        }

        info!("Operation {} finished after {} polls", operation.name, polls);
        Ok(operation.response.unwrap_or_default())
    }
}
