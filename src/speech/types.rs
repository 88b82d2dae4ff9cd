use serde::{Deserialize, Serialize};

use crate::error::ErrorDetail;

/// Audio encodings accepted by the recognition service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEncoding {
    #[serde(rename = "ENCODING_UNSPECIFIED")]
    EncodingUnspecified,
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "FLAC")]
    Flac,
    #[serde(rename = "MULAW")]
    Mulaw,
    #[serde(rename = "AMR")]
    Amr,
    #[serde(rename = "AMR_WB")]
    AmrWb,
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
    #[serde(rename = "SPEEX_WITH_HEADER_BYTE")]
    SpeexWithHeaderByte,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "WEBM_OPUS")]
    WebmOpus,
}

/// Recognition parameters sent alongside the audio reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub language_code: String,
    pub sample_rate_hertz: u32,
    pub encoding: AudioEncoding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_word_time_offsets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_speaker_diarization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_word_confidence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_channel_count: Option<u32>,
}

/// Remote audio locator (e.g. `gs://bucket/object`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionAudio {
    pub uri: String,
}

/// Body of `speech:recognize` and `speech:longrunningrecognize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// Word-level detail of an alternative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    #[serde(default)]
    pub word: String,
    /// Protobuf-JSON duration, e.g. `"1.300s"`
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub speaker_tag: i32,
}

impl WordInfo {
    pub fn start_secs(&self) -> f64 {
        self.start_time.as_deref().and_then(parse_duration).unwrap_or(0.0)
    }

    pub fn end_secs(&self) -> f64 {
        self.end_time.as_deref().and_then(parse_duration).unwrap_or(0.0)
    }
}

/// One candidate transcription; alternatives are ordered most probable first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub words: Vec<WordInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_tag: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SpeechRecognitionResult {
    /// The most probable alternative, if the service returned any.
    pub fn best(&self) -> Option<&SpeechRecognitionAlternative> {
        self.alternatives.first()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

/// Handle of a long-running recognition job.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<RecognizeResponse>,
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Parses a protobuf-JSON duration (`"3.5s"`, `"12s"`) into seconds.
pub fn parse_duration(value: &str) -> Option<f64> {
    value.trim().strip_suffix('s')?.parse::<f64>().ok()
}
