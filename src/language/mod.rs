pub mod client;
pub mod interface;
pub mod types;

pub use client::GoogleLanguageClient;
pub use interface::LanguageInterface;
pub use types::*;
