//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{endpoints, output_formats, scores, timeouts};
use crate::core::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis server
    pub server: Option<String>,

    /// Timeout in seconds for the analysis request
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Exit non-zero when a credibility score falls below this value (0-100)
    pub fail_below: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: Some(endpoints::DEFAULT_SERVER.to_string()),
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            fail_below: None, // No threshold by default - exit code ignores the verdict
        }
    }
}

/// CLI argument values that override file-based configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub server: Option<String>,
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub fail_below: Option<f64>,
    pub config_file: Option<String>,
    pub no_config: bool,
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::CredCheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::CredCheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .credcheck.toml in current directory
        if let Ok(config) = Self::load_from_file(".credcheck.toml") {
            return config;
        }

        // Check for .credcheck.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.credcheck.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref server) = cli_config.server {
            self.server = Some(server.clone());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(threshold) = cli_config.fail_below {
            self.fail_below = Some(threshold);
        }
    }

    /// Get the configured server base URL without a trailing slash
    pub fn server_base(&self) -> String {
        let server = self
            .server
            .as_deref()
            .unwrap_or(endpoints::DEFAULT_SERVER)
            .trim();
        server.trim_end_matches('/').to_string()
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref server) = self.server {
            if server.trim().is_empty() {
                return Err(crate::core::error::CredCheckError::Config(
                    "Server URL cannot be empty.".to_string(),
                ));
            }
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(crate::core::error::CredCheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(crate::core::error::CredCheckError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>1 hour). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(crate::core::error::CredCheckError::Config(format!(
                    "Invalid output format '{}'. Valid formats: {}",
                    format,
                    output_formats::ALL.join(", ")
                )));
            }
        }

        if let Some(threshold) = self.fail_below {
            if !(scores::MIN_SCORE..=scores::MAX_SCORE).contains(&threshold) {
                return Err(crate::core::error::CredCheckError::Config(format!(
                    "fail_below threshold {threshold} is out of range. Expected a value between 0 and 100."
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.as_deref(), Some(endpoints::DEFAULT_SERVER));
        assert_eq!(config.timeout, Some(timeouts::DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.output_format.as_deref(), Some(output_formats::TEXT));
        assert_eq!(config.verbose, Some(false));
        assert_eq!(config.fail_below, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server = "http://analysis.internal:8080"
timeout = 10
output_format = "json"
fail_below = 60.0
"#,
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();

        assert_eq!(
            config.server.as_deref(),
            Some("http://analysis.internal:8080")
        );
        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert_eq!(config.fail_below, Some(60.0));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"server = [invalid").unwrap();

        let result = Config::load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from_file("/does/not/exist/.credcheck.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            server: Some("http://other:9000".to_string()),
            timeout: Some(5),
            verbose: true,
            fail_below: Some(40.0),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.server.as_deref(), Some("http://other:9000"));
        assert_eq!(config.timeout, Some(5));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.fail_below, Some(40.0));
        // Untouched CLI options leave file/default values in place
        assert_eq!(config.output_format.as_deref(), Some(output_formats::TEXT));
    }

    #[test]
    fn test_server_base_strips_trailing_slash() {
        let config = Config {
            server: Some("http://localhost:5000/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.server_base(), "http://localhost:5000");
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout: Some(7),
            ..Default::default()
        };
        assert_eq!(config.timeout_duration(), Duration::from_secs(7));

        let config = Config {
            timeout: None,
            ..Default::default()
        };
        assert_eq!(
            config.timeout_duration(),
            Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS)
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_server() {
        let config = Config {
            server: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_output_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = Config {
            fail_below: Some(140.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            fail_below: Some(-1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
