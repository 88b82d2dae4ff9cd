use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn, Level};

use crate::config::{Config, PipelineMode, RecognitionSettings};
use crate::error::ServiceError;
use crate::language::{GoogleLanguageClient, LanguageInterface};
use crate::printer::{print_transcripts, print_words};
use crate::request::{build_request, build_request_from_settings};
use crate::speech::{GoogleSpeechClient, SpeechInterface};
use crate::terms::build_terms;

/// One run: build the request, call the hosted services, print what comes back.
pub struct Pipeline {
    speech: Arc<dyn SpeechInterface>,
    language: Arc<dyn LanguageInterface>,
    mode: PipelineMode,
    recognition: RecognitionSettings,
    poll_interval: Duration,
}

impl Pipeline {
    pub fn new(
        speech: Arc<dyn SpeechInterface>,
        language: Arc<dyn LanguageInterface>,
        config: &Config,
    ) -> Self {
        Self {
            speech,
            language,
            mode: config.pipeline,
            recognition: config.recognition.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Pipeline backed by the Google REST clients.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let speech = Arc::new(GoogleSpeechClient::new(&config.google)?);
        let language = Arc::new(GoogleLanguageClient::new(&config.google)?);
        Ok(Self::new(speech, language, config))
    }

    pub async fn run<W: Write>(&self, storage_uri: &str, out: &mut W) -> Result<()> {
        info!("Running {:?} pipeline for {}", self.mode, storage_uri);
        match self.mode {
            PipelineMode::Analyze => self.run_analyze(storage_uri, out).await,
            PipelineMode::Recognize => self.run_recognize(storage_uri, out).await,
        }
    }

    async fn run_analyze<W: Write>(&self, storage_uri: &str, out: &mut W) -> Result<()> {
        // The request is built but the text analysis call takes no payload.
        let request = build_request(storage_uri);
        debug!("Recognition request (not submitted): {:?}", request);

        let response = self
            .language
            .analyze_text()
            .await
            .context("text analysis request failed")?;

        let lines = print_transcripts(out, &response.results)?;
        info!("Printed {} transcripts", lines);
        Ok(())
    }

    async fn run_recognize<W: Write>(&self, storage_uri: &str, out: &mut W) -> Result<()> {
        let request = build_request_from_settings(&self.recognition, storage_uri);

        let operation = self
            .speech
            .long_running_recognize(&request)
            .await
            .context("failed to start recognition")?;
        let response = self
            .speech
            .wait_for_operation(operation, self.poll_interval)
            .await
            .context("recognition did not complete")?;
        if tracing::enabled!(Level::DEBUG) {
            match serde_json::to_string_pretty(&response) {
                Ok(json) => debug!("Speech response: {}", json),
                Err(e) => debug!("Speech response not serializable: {}", e),
            }
        }

        for result in &response.results {
            print_transcripts(out, std::slice::from_ref(result))?;
            if let Some(best) = result.best() {
                print_words(out, best)?;
            }
        }

        let first = response.results.first().and_then(|r| r.best());
        let words = first.map(|a| a.words.as_slice()).unwrap_or(&[]);
        let terms = build_terms(words);
        writeln!(out, "Non merged output is {}", serde_json::to_string_pretty(&terms)?)?;
        writeln!(out, "MergeTemp is {}", serde_json::to_string_pretty(&terms.words())?)?;

        let transcript = first
            .map(|a| a.transcript.as_str())
            .filter(|t| !t.trim().is_empty());
        let Some(transcript) = transcript else {
            warn!("No transcript to run entity analysis on");
            return Ok(());
        };

        let analysis = self
            .language
            .analyze_entities(transcript)
            .await
            .context("entity analysis request failed")?;
        for entity in &analysis.entities {
            writeln!(
                out,
                "Entity: {} ({}, salience {})",
                entity.name, entity.entity_type, entity.salience
            )?;
        }
        Ok(())
    }
}
