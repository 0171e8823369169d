//! AI Assist
//!
//! Dictionary lookup, part-of-speech guessing and hint generation through
//! the AI proxy, with offline fallbacks.

#![warn(missing_docs)]

pub mod r#interface;
pub mod config;
pub mod dictionary;
pub mod guess;
pub mod offline;
pub mod proxy;
pub mod slot;

pub use r#interface::{AssistError, Assistant, AssistantLookup, PosGuesser, Result, WordLookup};
pub use config::AssistConfig;
pub use dictionary::StaticDictionary;
pub use guess::SuffixPosGuesser;
pub use offline::{GuardedAssistant, OfflineAssistant};
pub use proxy::{parse_word_info, ChatMessage, ProxyAssistant, ProxyReply, ProxyRequest};
pub use slot::{AssistSlot, Ticket};
