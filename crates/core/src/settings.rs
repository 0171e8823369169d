//! User settings.

use serde::{Deserialize, Serialize};

/// AI assist settings chosen by a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether AI-assisted hints are used at all
    #[serde(default = "default_ai_enabled")]
    pub ai_enabled: bool,

    /// Which proxy endpoint to call
    #[serde(default)]
    pub ai_provider: AiProvider,

    /// Provider key entered by the user
    #[serde(default)]
    pub api_key: String,
}

fn default_ai_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_enabled: true,
            ai_provider: AiProvider::default(),
            api_key: String::new(),
        }
    }
}

/// Language model provider behind the proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// Google Gemini
    #[default]
    Gemini,
    /// Anthropic Claude
    Claude,
}

impl AiProvider {
    /// Proxy path segment (`/api/<slug>`).
    pub fn slug(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::Claude => "claude",
        }
    }

    /// Label for the key prompt.
    pub fn key_label(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "Gemini API Key",
            AiProvider::Claude => "Claude API Key",
        }
    }
}

impl std::str::FromStr for AiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(AiProvider::Gemini),
            "claude" => Ok(AiProvider::Claude),
            other => Err(format!("unknown AI provider: {other}")),
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.ai_enabled);
        assert_eq!(settings.ai_provider, AiProvider::Gemini);
    }

    #[test]
    fn test_settings_shape() {
        let settings = Settings {
            ai_enabled: false,
            ai_provider: AiProvider::Claude,
            api_key: "sk-ant-x".into(),
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["aiEnabled"], false);
        assert_eq!(json["aiProvider"], "claude");
        assert_eq!(json["apiKey"], "sk-ant-x");
    }
}
