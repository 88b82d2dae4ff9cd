use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::GoogleConfig;
use crate::error::ServiceError;

/// How requests to the Google endpoints are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleAuth {
    /// No credential; the service decides whether to accept the call
    Anonymous,
    /// API key passed as the `key` query parameter
    ApiKey(String),
    /// OAuth access token passed in the `Authorization` header
    BearerToken(String),
}

impl GoogleAuth {
    /// An access token wins over an API key. Blank values and unresolved
    /// `${VAR}` placeholders count as unset.
    pub fn from_config(config: &GoogleConfig) -> Self {
        let non_blank = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty() && !s.starts_with("${"))
                .map(str::to_string)
        };

        if let Some(token) = non_blank(&config.access_token) {
            GoogleAuth::BearerToken(token)
        } else if let Some(key) = non_blank(&config.api_key) {
            GoogleAuth::ApiKey(key)
        } else {
            GoogleAuth::Anonymous
        }
    }
}

/// Thin JSON-over-HTTPS client shared by the speech and language clients.
#[derive(Debug, Clone)]
pub struct GoogleServiceClient {
    client: Client,
    base_url: String,
    auth: GoogleAuth,
    project_id: Option<String>,
}

impl GoogleServiceClient {
    pub fn new(base_url: &str, config: &GoogleConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: GoogleAuth::from_config(config),
            project_id: config.project_id.clone().filter(|p| !p.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match &self.auth {
            GoogleAuth::Anonymous => builder,
            GoogleAuth::ApiKey(key) => builder.query(&[("key", key)]),
            GoogleAuth::BearerToken(token) => builder.bearer_auth(token),
        };
        match &self.project_id {
            Some(project) => builder.header("x-goog-user-project", project),
            None => builder,
        }
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let request = self.apply_auth(self.client.post(&url).json(body));
        self.send(request, &url).await
    }

    pub async fn get_json<R>(&self, path: &str) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("GET {}", url);
        let request = self.apply_auth(self.client.get(&url));
        self.send(request, &url).await
    }

    async fn send<R>(&self, request: RequestBuilder, url: &str) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ServiceError::from_response_body(status.as_u16(), &body);
            error!("Request to {} failed: {}", url, err);
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
