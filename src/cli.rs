use clap::Parser;

use crate::request::DEFAULT_STORAGE_URI;

#[derive(Parser, Debug)]
#[command(
    name = "stt-merge",
    about = "Transcribe audio stored in Cloud Storage and print the transcripts"
)]
pub struct Cli {
    /// URI for audio file in Cloud Storage, e.g. gs://[BUCKET]/[FILE]
    #[arg(long = "storage_uri", default_value = DEFAULT_STORAGE_URI)]
    pub storage_uri: String,
}
