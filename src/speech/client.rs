use async_trait::async_trait;
use tracing::info;

use super::interface::SpeechInterface;
use super::types::{Operation, RecognizeRequest, RecognizeResponse};
use crate::config::GoogleConfig;
use crate::error::ServiceError;
use crate::google_service::GoogleServiceClient;

const API_VERSION: &str = "v1p1beta1";

/// Google Cloud Speech-to-Text REST client
pub struct GoogleSpeechClient {
    service: GoogleServiceClient,
}

impl GoogleSpeechClient {
    pub fn new(config: &GoogleConfig) -> Result<Self, ServiceError> {
        let service = GoogleServiceClient::new(&config.speech_endpoint, config)?;
        info!("Initialized GoogleSpeechClient: endpoint={}", service.base_url());
        Ok(Self { service })
    }
}

#[async_trait]
impl SpeechInterface for GoogleSpeechClient {
    async fn recognize(
        &self,
        request: &RecognizeRequest,
    ) -> Result<RecognizeResponse, ServiceError> {
        self.service
            .post_json(&format!("{API_VERSION}/speech:recognize"), request)
            .await
    }

    async fn long_running_recognize(
        &self,
        request: &RecognizeRequest,
    ) -> Result<Operation, ServiceError> {
        let operation: Operation = self
            .service
            .post_json(&format!("{API_VERSION}/speech:longrunningrecognize"), request)
            .await?;
        info!("Started long-running recognition: {}", operation.name);
        Ok(operation)
    }

    async fn get_operation(&self, name: &str) -> Result<Operation, ServiceError> {
        self.service
            .get_json(&format!("{API_VERSION}/operations/{name}"))
            .await
    }
}
