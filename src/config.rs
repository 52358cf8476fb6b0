use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required but not set")]
    Missing(&'static str),
    #[error("environment variable {var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub database: DatabaseConfig,
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAI,
    Groq,
    Gemini,
    None,
}

impl AiProvider {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "openai" => Some(AiProvider::OpenAI),
            "groq" => Some(AiProvider::Groq),
            "gemini" => Some(AiProvider::Gemini),
            "none" | "off" | "template" => Some(AiProvider::None),
            _ => None,
        }
    }

    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            AiProvider::OpenAI => Some("OPENAI_API_KEY"),
            AiProvider::Groq => Some("GROQ_API_KEY"),
            AiProvider::Gemini => Some("GEMINI_API_KEY"),
            AiProvider::None => None,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::OpenAI => "gpt-3.5-turbo",
            AiProvider::Groq => "llama-3.1-8b-instant",
            AiProvider::Gemini => "gemini-1.5-flash",
            AiProvider::None => "",
        }
    }
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub provider: AiProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
    pub fallback_on_provider_error: bool,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("fallback_on_provider_error", &self.fallback_on_provider_error)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::None,
            api_key: None,
            model: String::new(),
            max_tokens: 150,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
            fallback_on_provider_error: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl AdvisorConfig {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".samsung-advisor")
    }

    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Loads the full configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup so tests can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup),
            provider: ProviderConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = non_empty(&lookup, "DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| AdvisorConfig::data_dir().join("catalog.db"));
        Self { path }
    }
}

impl ProviderConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let provider = match non_empty(&lookup, "AI_PROVIDER") {
            Some(raw) => AiProvider::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "AI_PROVIDER",
                value: raw.clone(),
                reason: "expected one of openai, groq, gemini, none".to_string(),
            })?,
            None => AiProvider::OpenAI,
        };

        let api_key = match provider.api_key_var() {
            Some(var) => Some(non_empty(&lookup, var).ok_or(ConfigError::Missing(var))?),
            None => None,
        };

        let model = non_empty(&lookup, "AI_MODEL")
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Self {
            provider,
            api_key,
            model,
            max_tokens: parse_or(&lookup, "AI_MAX_TOKENS", defaults.max_tokens)?,
            temperature: parse_or(&lookup, "AI_TEMPERATURE", defaults.temperature)?,
            timeout: Duration::from_secs(parse_or(
                &lookup,
                "AI_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )?),
            fallback_on_provider_error: parse_bool_or(
                &lookup,
                "FALLBACK_ON_PROVIDER_ERROR",
                defaults.fallback_on_provider_error,
            )?,
        })
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: non_empty(&lookup, "SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "SERVER_PORT", defaults.port)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => match raw.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                var: key,
                value: raw,
                reason: "expected true or false".to_string(),
            }),
        },
        None => Ok(default),
    }
}
