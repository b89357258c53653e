use analyzer_core::AnalyzedPaper;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{AnalyzeError, ClientSettings, FailureKind};

const ANALYZE_PATH: &str = "api/analyze";
const HEALTH_PATH: &str = "health";

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Posts `query` and returns the papers in response order.
    async fn analyze(&self, query: &str) -> Result<Vec<AnalyzedPaper>, AnalyzeError>;

    /// Reads the service's self-reported status.
    async fn health(&self) -> Result<String, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, AnalyzeError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, query: &str) -> Result<Vec<AnalyzedPaper>, AnalyzeError> {
        let endpoint = resolve_endpoint(self.settings.effective_base_url(), ANALYZE_PATH)?;
        let body = serde_json::to_vec(&AnalyzeRequest { query })
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        parse_papers(&bytes)
    }

    async fn health(&self) -> Result<String, AnalyzeError> {
        let endpoint = resolve_endpoint(self.settings.effective_base_url(), HEALTH_PATH)?;
        let client = self.build_client()?;
        let response = client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let health: HealthResponse = serde_json::from_slice(&bytes)
            .map_err(|err| AnalyzeError::new(FailureKind::MalformedResponse, err.to_string()))?;
        Ok(health.status)
    }
}

/// Appends `path` to the path of `base`, keeping any prefix the base carries.
///
/// Only absolute `http`/`https` origins are accepted.
pub fn resolve_endpoint(base: &str, path: &str) -> Result<url::Url, AnalyzeError> {
    let mut url = url::Url::parse(base.trim())
        .map_err(|err| AnalyzeError::new(FailureKind::InvalidEndpoint, format!("{base}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(AnalyzeError::new(
            FailureKind::InvalidEndpoint,
            format!("{base}: expected an http(s) origin"),
        ));
    }

    let joined = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn parse_papers(bytes: &[u8]) -> Result<Vec<AnalyzedPaper>, AnalyzeError> {
    serde_json::from_slice(bytes)
        .map_err(|err| AnalyzeError::new(FailureKind::MalformedResponse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash_and_prefix() {
        let plain = resolve_endpoint("http://localhost:8000", ANALYZE_PATH).unwrap();
        assert_eq!(plain.as_str(), "http://localhost:8000/api/analyze");

        let slash = resolve_endpoint("http://localhost:8000/", ANALYZE_PATH).unwrap();
        assert_eq!(slash.as_str(), "http://localhost:8000/api/analyze");

        let prefixed = resolve_endpoint("https://example.org/research/", ANALYZE_PATH).unwrap();
        assert_eq!(prefixed.as_str(), "https://example.org/research/api/analyze");
    }

    #[test]
    fn endpoint_rejects_non_http_origins() {
        for base in ["localhost:8000", "ftp://example.org", "not a url", "mailto:a@b.c"] {
            let err = resolve_endpoint(base, ANALYZE_PATH).unwrap_err();
            assert_eq!(err.kind, FailureKind::InvalidEndpoint, "base {base}");
        }
    }

    #[test]
    fn non_array_bodies_are_malformed() {
        let bodies: [&[u8]; 5] = [
            br#"{"error": "boom"}"#,
            b"not json",
            b"[1, 2]",
            br#"[{"title": 5}]"#,
            b"",
        ];
        for body in bodies {
            let err = parse_papers(body).unwrap_err();
            assert_eq!(err.kind, FailureKind::MalformedResponse);
        }
    }

    #[test]
    fn array_of_objects_parses_in_order() {
        let papers = parse_papers(br#"[{"title": "A"}, {}, {"title": "C", "extra": 1}]"#).unwrap();
        let titles: Vec<_> = papers.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("A"), None, Some("C")]);
    }
}
