pub mod client;
pub mod interface;
pub mod types;

pub use client::GoogleSpeechClient;
pub use interface::SpeechInterface;
pub use types::*;
