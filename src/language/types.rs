use serde::{Deserialize, Serialize};

use crate::speech::SpeechRecognitionResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl Document {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            doc_type: "PLAIN_TEXT".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeEntitiesRequest {
    pub document: Document,
    pub encoding_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub salience: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeEntitiesResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Response of the payload-less text analysis call; only `results` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAnalysisResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}
