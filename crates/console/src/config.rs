use std::time::Duration;

use anyhow::{Result, bail};
use gateway::ApiConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let api_url = api_url.into();
        if api_url.trim().is_empty() {
            bail!("API URL must not be empty");
        }
        if timeout_ms == 0 {
            bail!("Request timeout must be greater than zero");
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_url.trim()).with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_api_config() {
        let config = Config::new("http://localhost:3000", 5000).unwrap();
        assert_eq!(config.api_config(), ApiConfig::default());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(Config::new("http://localhost:3000", 0).is_err());
    }

    #[test]
    fn test_rejects_blank_url() {
        assert!(Config::new("  ", 5000).is_err());
    }
}
