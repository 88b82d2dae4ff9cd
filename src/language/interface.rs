use async_trait::async_trait;

use super::types::{AnalyzeEntitiesResponse, TextAnalysisResponse};
use crate::error::ServiceError;

/// Text analysis interface - NLP runs in the hosted service
#[async_trait]
pub trait LanguageInterface: Send + Sync {
    /// Request a text analysis without any document payload
    async fn analyze_text(&self) -> Result<TextAnalysisResponse, ServiceError>;

    /// Extract named entities from plain text
    async fn analyze_entities(&self, content: &str)
        -> Result<AnalyzeEntitiesResponse, ServiceError>;
}
