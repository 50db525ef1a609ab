//! Server configuration parsed from environment variables.

use crate::generator::types::GeneratorError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-latest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Mock,
    Anthropic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `GENERATOR_PROVIDER`: `mock` (default) or `anthropic`
    /// - `GENERATOR_MODEL`: default `claude-3-5-sonnet-latest`
    /// - `ANTHROPIC_API_KEY`: required only when the provider is `anthropic`
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown provider name, an unparseable port,
    /// or a missing API key for the Anthropic provider.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let provider = parse_provider(std::env::var("GENERATOR_PROVIDER").ok().as_deref())?;
        let model =
            std::env::var("GENERATOR_MODEL").unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string());

        let api_key = std::env::var("ANTHROPIC_API_KEY").ok().filter(|v| !v.is_empty());
        if provider == ProviderKind::Anthropic && api_key.is_none() {
            return Err(GeneratorError::MissingApiKey { var: "ANTHROPIC_API_KEY".into() });
        }

        Ok(Self { port, provider, model, api_key })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, GeneratorError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| GeneratorError::ConfigParse(format!("invalid PORT: {value}"))),
    }
}

fn parse_provider(raw: Option<&str>) -> Result<ProviderKind, GeneratorError> {
    match raw.unwrap_or("mock") {
        "mock" => Ok(ProviderKind::Mock),
        "anthropic" => Ok(ProviderKind::Anthropic),
        other => Err(GeneratorError::ConfigParse(format!("unknown GENERATOR_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
