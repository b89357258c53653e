use std::time::Duration;

/// Origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin of the analysis service. Empty selects [`DEFAULT_BASE_URL`].
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall deadline per request; `None` waits as long as the connection lives.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 8 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn effective_base_url(&self) -> &str {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            DEFAULT_BASE_URL
        } else {
            trimmed
        }
    }
}
