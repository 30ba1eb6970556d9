//! REST API client.

use crate::multipart::{build_form, Attachment};
use crate::{error_from_parts, ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the remote Campus API.
///
/// Holds a single `reqwest::Client`; cloning is cheap and shares the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource with the bearer token attached.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        let request = self
            .http_client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json");
        self.execute(request, path).await
    }

    /// POST a JSON body with the bearer token attached.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ApiResult<T> {
        let request = self
            .http_client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .json(body);
        self.execute(request, path).await
    }

    /// POST a JSON body without authentication (login, register, reset).
    pub async fn post_json_public<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.http_client.post(self.url(path)).json(body);
        self.execute(request, path).await
    }

    /// PUT a JSON body with the bearer token attached.
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> ApiResult<T> {
        let request = self
            .http_client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .json(body);
        self.execute(request, path).await
    }

    /// POST a multipart submission: text fields plus media attachments.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        attachments: Vec<Attachment>,
        token: &str,
    ) -> ApiResult<T> {
        let form = build_form(fields, attachments)?;
        let request = self
            .http_client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .multipart(form);
        self.execute(request, path).await
    }

    /// PUT a multipart submission: text fields plus media attachments.
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        attachments: Vec<Attachment>,
        token: &str,
    ) -> ApiResult<T> {
        let form = build_form(fields, attachments)?;
        let request = self
            .http_client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .multipart(form);
        self.execute(request, path).await
    }

    /// DELETE a resource with the bearer token attached.
    pub async fn delete(&self, path: &str, token: &str) -> ApiResult<()> {
        let request = self
            .http_client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {}", token));

        let response = request.send().await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "No response received");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path = %path, status = %status, "Delete failed");
            return Err(error_from_parts(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Send a request and normalize the outcome.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> ApiResult<T> {
        tracing::debug!(path = %path, "API request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "No response received");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path = %path, status = %status, "Request failed");
            return Err(error_from_parts(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(ApiError::Network)?;
        if body.is_empty() {
            // Some endpoints answer 2xx with no body (e.g. delete, complete).
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ApiClient::new("https://api.campus.example///");
        assert_eq!(client.base_url(), "https://api.campus.example");
        assert_eq!(
            client.url("/apiCourses/abc"),
            "https://api.campus.example/apiCourses/abc"
        );
    }

    #[tokio::test]
    async fn unreachable_server_yields_network_error() {
        // Port 9 (discard) is not listening; connection is refused immediately.
        let client = ApiClient::new("http://127.0.0.1:9");
        let result: ApiResult<serde_json::Value> = client.get_json("/apiCourses", "tok").await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.to_string(), "No response from the server.");
    }

    #[tokio::test]
    async fn delete_against_unreachable_server_yields_network_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.delete("/apiCourses/c-1", "tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
