use crate::config::RecognitionSettings;
use crate::speech::{AudioEncoding, RecognitionAudio, RecognitionConfig, RecognizeRequest};

/// Sample audio used when no storage URI is given on the command line.
pub const DEFAULT_STORAGE_URI: &str = "gs://cloud-samples-data/speech/brooklyn_bridge.mp3";

pub const LANGUAGE_CODE: &str = "yue-Hant-HK";
pub const SAMPLE_RATE_HERTZ: u32 = 44100;
pub const ENCODING: AudioEncoding = AudioEncoding::Mp3;

/// Fixed recognition parameters plus the storage URI, passed through as given.
pub fn build_request(storage_uri: &str) -> RecognizeRequest {
    RecognizeRequest {
        config: RecognitionConfig {
            language_code: LANGUAGE_CODE.to_string(),
            sample_rate_hertz: SAMPLE_RATE_HERTZ,
            encoding: ENCODING,
            enable_word_time_offsets: None,
            enable_speaker_diarization: None,
            enable_word_confidence: None,
            audio_channel_count: None,
        },
        audio: RecognitionAudio {
            uri: storage_uri.to_string(),
        },
    }
}

/// Same as [`build_request`] but with parameters taken from configuration.
pub fn build_request_from_settings(
    settings: &RecognitionSettings,
    storage_uri: &str,
) -> RecognizeRequest {
    RecognizeRequest {
        config: RecognitionConfig {
            language_code: settings.language_code.clone(),
            sample_rate_hertz: settings.sample_rate_hertz,
            encoding: settings.encoding,
            enable_word_time_offsets: settings.enable_word_time_offsets,
            enable_speaker_diarization: settings.enable_speaker_diarization,
            enable_word_confidence: settings.enable_word_confidence,
            audio_channel_count: settings.audio_channel_count,
        },
        audio: RecognitionAudio {
            uri: storage_uri.to_string(),
        },
    }
}
