//! Client for the AI proxy.
//!
//! The proxy exposes one endpoint per provider (`/api/gemini`,
//! `/api/claude`). Both accept `{model?, messages, max_tokens?}` and answer
//! with `{content: [{type: "text", text}]}` on success or `{error}` on
//! failure.

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wordjar_core::{AiProvider, PartOfSpeech, WordInfo};
use crate::{AssistConfig, AssistError, Assistant, Result};

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// A user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Request body accepted by both proxy endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyRequest {
    /// Model override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Conversation
    pub messages: Vec<ChatMessage>,

    /// Reply budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Reply body from either endpoint.
///
/// `error` is a plain string when the proxy produced it and an object with
/// a `message` when the provider's own error is passed through.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyReply {
    /// Content blocks on success
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    /// Error on failure
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// A content block in a reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Block type; only `text` blocks are read
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Block text
    #[serde(default)]
    pub text: String,
}

impl ProxyReply {
    /// The reply text, or the error it carries.
    pub fn into_text(self) -> Result<String> {
        if let Some(error) = self.error {
            let message = match &error {
                serde_json::Value::String(s) => s.clone(),
                other => other
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| other.to_string()),
            };
            return Err(AssistError::Api(message));
        }

        let text: String = self
            .content
            .into_iter()
            .filter(|b| b.kind == "text")
            .map(|b| b.text)
            .collect::<Vec<_>>()
            .join("");
        if text.trim().is_empty() {
            return Err(AssistError::Parse("empty reply".to_string()));
        }
        Ok(text.trim().to_string())
    }
}

/// Assistant that talks to the AI proxy.
#[derive(Clone)]
pub struct ProxyAssistant {
    client: Client,
    config: AssistConfig,
    provider: AiProvider,
}

impl ProxyAssistant {
    /// Create a proxy assistant for `provider`.
    pub fn new(config: AssistConfig, provider: AiProvider) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
            config,
            provider,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/{}", self.config.proxy_url, self.provider.slug())
    }

    fn model(&self) -> Option<String> {
        match self.provider {
            AiProvider::Claude => self.config.claude_model.clone(),
            AiProvider::Gemini => self.config.gemini_model.clone(),
        }
    }

    /// Send a single-turn prompt and return the reply text.
    pub async fn complete(&self, prompt: String) -> Result<String> {
        let request = ProxyRequest {
            model: self.model(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: Some(self.config.max_tokens),
        };

        debug!("Calling AI proxy at {}", self.endpoint());

        let response = self.client.post(self.endpoint()).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ProxyReply>(&body) {
            Ok(reply) if reply.error.is_some() || status.is_success() => reply.into_text(),
            Ok(_) => Err(AssistError::Api(format!("status {}", status))),
            Err(_) if !status.is_success() => Err(AssistError::Api(format!("status {}", status))),
            Err(e) => Err(AssistError::Parse(e.to_string())),
        }
    }
}

#[async_trait]
impl Assistant for ProxyAssistant {
    async fn word_info(&self, word: &str) -> Result<Option<WordInfo>> {
        let prompt = format!(
            "For the English word \"{word}\", reply with only a JSON object like \
             {{\"meaning\": \"...\", \"pos\": \"noun|verb|adjective|adverb\", \"example\": \"...\"}}. \
             The meaning should be short and the example a simple sentence a child can read."
        );
        let reply = self.complete(prompt).await?;
        parse_word_info(&reply).map(Some)
    }

    async fn spelling_hint(&self, word: &str, meaning: &str) -> Result<String> {
        self.complete(format!(
            "Give a child one short hint to help spell the word \"{word}\" (meaning: {meaning}). \
             Do not write the word itself."
        ))
        .await
    }

    async fn sentence_example(&self, word: &str, meaning: &str) -> Result<String> {
        self.complete(format!(
            "Write one simple example sentence for a child using the word \"{word}\" (meaning: {meaning}). \
             Reply with the sentence only."
        ))
        .await
    }

    async fn sentence_starter(&self, word: &str, meaning: &str) -> Result<String> {
        self.complete(format!(
            "Write the first three or four words of a simple sentence that uses \"{word}\" (meaning: {meaning}), \
             so a child can finish it. Reply with those words only."
        ))
        .await
    }

    async fn review_sentence(&self, word: &str, sentence: &str) -> Result<Option<String>> {
        let reply = self
            .complete(format!(
                "A child wrote this sentence using the word \"{word}\": \"{sentence}\". \
                 Give one short, encouraging comment and at most one gentle correction."
            ))
            .await?;
        Ok(Some(reply))
    }
}

#[derive(Deserialize)]
struct RawWordInfo {
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    example: Option<String>,
}

fn json_object_pattern() -> Result<Regex> {
    Regex::new(r"(?s)\{.*\}").map_err(|e| AssistError::Parse(e.to_string()))
}

/// Pull the JSON object out of a model reply that may wrap it in prose or
/// code fences.
pub fn parse_word_info(reply: &str) -> Result<WordInfo> {
    let object = json_object_pattern()?
        .find(reply)
        .ok_or_else(|| AssistError::Parse("no JSON object in reply".to_string()))?;
    let raw: RawWordInfo =
        serde_json::from_str(object.as_str()).map_err(|e| AssistError::Parse(e.to_string()))?;

    let non_empty = |s: Option<String>| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    Ok(WordInfo {
        meaning: non_empty(raw.meaning),
        pos: raw.pos.and_then(|p| p.parse::<PartOfSpeech>().ok()),
        example: non_empty(raw.example),
    })
}
