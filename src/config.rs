use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::speech::AudioEncoding;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "STT_MERGE_CONFIG";

/// Files looked up in the working directory when no explicit path is given.
const DEFAULT_CONFIG_FILES: [&str; 3] = ["stt-merge.yaml", "stt-merge.yml", "stt-merge.json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub recognition: RecognitionSettings,
    #[serde(default)]
    pub pipeline: PipelineMode,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Endpoints and credentials for the hosted Google services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_speech_endpoint")]
    pub speech_endpoint: String,
    #[serde(default = "default_language_endpoint")]
    pub language_endpoint: String,
    /// Sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<String>,
    /// OAuth access token, sent as a bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Billing project, sent as `x-goog-user-project`
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Recognition parameters used by the `recognize` pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionSettings {
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_sample_rate_hertz")]
    pub sample_rate_hertz: u32,
    #[serde(default = "default_encoding")]
    pub encoding: AudioEncoding,
    #[serde(default)]
    pub enable_word_time_offsets: Option<bool>,
    #[serde(default)]
    pub enable_speaker_diarization: Option<bool>,
    #[serde(default)]
    pub enable_word_confidence: Option<bool>,
    #[serde(default)]
    pub audio_channel_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Build the request, then run text analysis with no payload
    #[default]
    Analyze,
    /// Submit the request for long-running recognition and list entities
    Recognize,
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_speech_endpoint() -> String {
    "https://speech.googleapis.com".to_string()
}

fn default_language_endpoint() -> String {
    "https://language.googleapis.com".to_string()
}

fn default_language_code() -> String {
    "yue-Hant-HK".to_string()
}

fn default_sample_rate_hertz() -> u32 {
    44100
}

fn default_encoding() -> AudioEncoding {
    AudioEncoding::Mp3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google: GoogleConfig::default(),
            recognition: RecognitionSettings::default(),
            pipeline: PipelineMode::default(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            speech_endpoint: default_speech_endpoint(),
            language_endpoint: default_language_endpoint(),
            api_key: None,
            access_token: None,
            project_id: None,
            timeout_secs: None,
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            language_code: default_language_code(),
            sample_rate_hertz: default_sample_rate_hertz(),
            encoding: default_encoding(),
            enable_word_time_offsets: None,
            enable_speaker_diarization: None,
            enable_word_confidence: None,
            audio_channel_count: None,
        }
    }
}

impl Config {
    /// Load a configuration file, YAML or JSON depending on the extension.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = load_text_file_with_guess_encoding(path)?;
        let content = substitute_env_vars(&content)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON configuration in {path}"))?;
            Ok(config)
        } else {
            // An empty YAML document means "all defaults"
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            let config: Config = serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML configuration in {path}"))?;
            Ok(config)
        }
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit `STT_MERGE_CONFIG` path must load. Otherwise the default
    /// file names are tried in order, and built-in defaults are used when none
    /// of them exists. Returns the path that was loaded, if any.
    pub fn discover() -> Result<(Self, Option<String>)> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let config = Config::load(&path)
                .with_context(|| format!("failed to load config from {path}"))?;
            return Ok((config, Some(path)));
        }

        for path in DEFAULT_CONFIG_FILES {
            if !Path::new(path).exists() {
                debug!("No config at {}", path);
                continue;
            }
            let config =
                Config::load(path).with_context(|| format!("failed to load config from {path}"))?;
            return Ok((config, Some(path.to_string())));
        }

        Ok((Config::default(), None))
    }
}

/// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as written.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Read a text file, stripping a UTF-8 BOM and falling back to GBK for non-UTF-8 bytes.
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let mut buffer = fs::read(file_path)?;
    if buffer.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buffer.drain(0..3);
    }

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(e) => {
            let bytes = e.into_bytes();
            let (cow, _, had_errors) = encoding_rs::GBK.decode(&bytes);
            if had_errors {
                debug!("Config file {} is neither UTF-8 nor GBK clean", file_path);
            }
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_recognition_constants() {
        let config = Config::default();
        assert_eq!(config.recognition.language_code, "yue-Hant-HK");
        assert_eq!(config.recognition.sample_rate_hertz, 44100);
        assert_eq!(config.recognition.encoding, AudioEncoding::Mp3);
        assert_eq!(config.pipeline, PipelineMode::Analyze);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.google.speech_endpoint, "https://speech.googleapis.com");
    }

    #[test]
    fn test_load_yaml_with_partial_sections() {
        let file = write_temp(
            ".yaml",
            b"pipeline: recognize\nrecognition:\n  encoding: FLAC\n  sample_rate_hertz: 48000\n  enable_word_time_offsets: true\n",
        );
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.pipeline, PipelineMode::Recognize);
        assert_eq!(config.recognition.encoding, AudioEncoding::Flac);
        assert_eq!(config.recognition.sample_rate_hertz, 48000);
        assert_eq!(config.recognition.language_code, "yue-Hant-HK");
        assert_eq!(config.recognition.enable_word_time_offsets, Some(true));
        assert_eq!(config.google.language_endpoint, "https://language.googleapis.com");
    }

    #[test]
    fn test_load_json_with_bom() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(br#"{"google": {"project_id": "nlp-stt"}, "poll_interval_ms": 50}"#);
        let file = write_temp(".json", &content);
        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.google.project_id.as_deref(), Some("nlp-stt"));
        assert_eq!(config.poll_interval_ms, 50);
    }

    #[test]
    fn test_load_empty_yaml_uses_defaults() {
        let file = write_temp(".yaml", b"");
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.pipeline, PipelineMode::Analyze);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/stt-merge.yaml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("STT_MERGE_TEST_TOKEN", "secret");
        let out = substitute_env_vars("token: ${STT_MERGE_TEST_TOKEN}").unwrap();
        assert_eq!(out, "token: secret");
    }

    #[test]
    fn test_substitute_unknown_env_var_left_untouched() {
        let out = substitute_env_vars("key: ${STT_MERGE_SURELY_UNSET_VAR}").unwrap();
        assert_eq!(out, "key: ${STT_MERGE_SURELY_UNSET_VAR}");
    }
}
