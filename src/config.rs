use thiserror::Error;

/// Placeholder key used when a provider key is not configured. Calls made
/// with it are rejected upstream, which the fallback chain then surfaces
/// as provider unavailability.
const DEMO_KEY: &str = "demo-key";

// ============================================================================
// Config
// ============================================================================

/// Process configuration, loaded once at startup from the environment and
/// passed explicitly from there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    groq_api_key: Option<String>,
    deepseek_api_key: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables: `GROQ_API_KEY`, `DEEPSEEK_API_KEY`, `PORT`.
    /// All are optional; empty values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => default_port(),
        };

        Ok(Self {
            host: default_host(),
            port,
            groq_api_key: lookup("GROQ_API_KEY").filter(|k| !k.is_empty()),
            deepseek_api_key: lookup("DEEPSEEK_API_KEY").filter(|k| !k.is_empty()),
        })
    }

    /// Whether a real primary-provider key was supplied.
    pub fn groq_configured(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Whether a real secondary-provider key was supplied.
    pub fn deepseek_configured(&self) -> bool {
        self.deepseek_api_key.is_some()
    }

    /// Primary provider key, falling back to the demo placeholder.
    pub fn groq_api_key(&self) -> String {
        self.groq_api_key
            .clone()
            .unwrap_or_else(|| DEMO_KEY.to_string())
    }

    /// Secondary provider key, falling back to the demo placeholder.
    pub fn deepseek_api_key(&self) -> String {
        self.deepseek_api_key
            .clone()
            .unwrap_or_else(|| DEMO_KEY.to_string())
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.groq_configured());
        assert!(!config.deepseek_configured());
        assert_eq!(config.groq_api_key(), "demo-key");
        assert_eq!(config.deepseek_api_key(), "demo-key");
    }

    #[test]
    fn test_port_from_environment() {
        let config = load(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = load(&[("PORT", "")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = load(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_configured_flags_require_non_empty_keys() {
        let config = load(&[("GROQ_API_KEY", "gsk-123"), ("DEEPSEEK_API_KEY", "")]).unwrap();
        assert!(config.groq_configured());
        assert!(!config.deepseek_configured());
        assert_eq!(config.groq_api_key(), "gsk-123");
        assert_eq!(config.deepseek_api_key(), "demo-key");
    }
}
