use async_trait::async_trait;
use tracing::{debug, info};

use super::interface::LanguageInterface;
use super::types::{AnalyzeEntitiesRequest, AnalyzeEntitiesResponse, Document, TextAnalysisResponse};
use crate::config::GoogleConfig;
use crate::error::ServiceError;
use crate::google_service::GoogleServiceClient;

const API_VERSION: &str = "v1";

/// Google Cloud Natural Language REST client
pub struct GoogleLanguageClient {
    service: GoogleServiceClient,
}

impl GoogleLanguageClient {
    pub fn new(config: &GoogleConfig) -> Result<Self, ServiceError> {
        let service = GoogleServiceClient::new(&config.language_endpoint, config)?;
        info!("Initialized GoogleLanguageClient: endpoint={}", service.base_url());
        Ok(Self { service })
    }
}

#[async_trait]
impl LanguageInterface for GoogleLanguageClient {
    async fn analyze_text(&self) -> Result<TextAnalysisResponse, ServiceError> {
        let empty = serde_json::json!({});
        self.service
            .post_json(&format!("{API_VERSION}/documents:annotateText"), &empty)
            .await
    }

    async fn analyze_entities(
        &self,
        content: &str,
    ) -> Result<AnalyzeEntitiesResponse, ServiceError> {
        let request = AnalyzeEntitiesRequest {
            document: Document::plain_text(content),
            encoding_type: "NONE".to_string(),
        };
        let response: AnalyzeEntitiesResponse = self
            .service
            .post_json(&format!("{API_VERSION}/documents:analyzeEntities"), &request)
            .await?;
        debug!("Entity analysis returned {} entities", response.entities.len());
        Ok(response)
    }
}
