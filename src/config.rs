use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.getimg.ai";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct GetImgConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for GetImgConfig {
    fn default() -> Self {
        GetImgConfig {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }
}

impl GetImgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GETIMG_API_KEY").ok();
        let base_url = env::var("GETIMG_BASE_URL").ok();
        let timeout = env::var("GETIMG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        GetImgConfig {
            api_key,
            base_url,
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> String {
        let url = self
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url.trim_end_matches('/').to_string()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = GetImgConfig::new()
            .with_api_key("key-123")
            .with_base_url("https://api.getimg.ai/")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.base_url(), "https://api.getimg.ai");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_defaults() {
        let config = GetImgConfig::new();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
