use models::{DraftMember, Gym, Member};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{GatewayError, Result};
use crate::traits::MemberGateway;

const MEMBERS_PATH: &str = "clientes";
const GYMS_PATH: &str = "academias";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the members backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let url = Url::parse(&config.base_url).map_err(|e| GatewayError::Request {
            message: format!("invalid base URL '{}': {}", config.base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::Request {
                message: format!("unsupported URL scheme '{}'", url.scheme()),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let error = GatewayError::from(e);
            warn!("GET {} failed: {}", url, error);
            error
        })?;

        Self::handle_response(response).await.inspect_err(|error| {
            warn!("GET {} failed: {}", url, error);
        })
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let error = GatewayError::from(e);
                warn!("POST {} failed: {}", url, error);
                error
            })?;

        Self::handle_response(response).await.inspect_err(|error| {
            warn!("POST {} failed: {}", url, error);
        })
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| {
                    if text.trim().is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("unknown error")
                            .to_string()
                    } else {
                        text.trim().to_string()
                    }
                });

            return Err(GatewayError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::InvalidResponse {
            message: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MemberGateway for ApiClient {
    async fn list_members(&self) -> Result<Vec<Member>> {
        // Decoded one record at a time so a single odd row cannot hide the rest.
        let records: Vec<serde_json::Value> = self.get(MEMBERS_PATH).await?;
        let total = records.len();
        let members: Vec<Member> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                serde_json::from_value(record)
                    .inspect_err(|e| warn!("Skipping member record {}: {}", index, e))
                    .ok()
            })
            .collect();
        debug!("Fetched {} of {} members", members.len(), total);
        Ok(members)
    }

    async fn list_gyms(&self) -> Result<Vec<Gym>> {
        let gyms: Vec<Gym> = self.get(GYMS_PATH).await?;
        debug!("Fetched {} gyms", gyms.len());
        Ok(gyms)
    }

    async fn create_member(&self, draft: &DraftMember) -> Result<Member> {
        self.post(MEMBERS_PATH, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_targets_local_backend() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url(MEMBERS_PATH), "http://localhost:3000/clientes");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.local:8080/").with_timeout(Duration::from_secs(1));
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url(GYMS_PATH), "http://api.local:8080/academias");
    }

    #[test]
    fn test_malformed_base_url_is_request_error() {
        let err = ApiClient::new(&ApiConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, GatewayError::Request { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_request_error() {
        let err = ApiClient::new(&ApiConfig::new("localhost:3000")).unwrap_err();
        assert!(matches!(err, GatewayError::Request { .. }));
    }
}
