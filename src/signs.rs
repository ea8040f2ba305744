use crate::error::ApiError;
use crate::model::{NewSignRequest, SignPage};

/// Client for the remote dictionary backend serving `/api/signs`.
#[derive(Clone)]
pub struct SignsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(SignsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches one page of entries whose word starts with `prefix`; an
    /// empty prefix matches everything. `page` is one-based, as the
    /// backend expects.
    pub async fn list(&self, prefix: &str, page: usize) -> Result<SignPage, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/signs"))
            .query(&[("prefix", prefix), ("page", &page.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Creates a new entry on behalf of the operator whose bearer token
    /// is passed in. Returns the backend's response body, which callers
    /// only log.
    pub async fn create(
        &self,
        token: &str,
        sign: &NewSignRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/signs"))
            .bearer_auth(token)
            .json(sign)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = SignsClient::new("http://backend:4000").unwrap();
        assert_eq!(client.endpoint("/api/signs"), "http://backend:4000/api/signs");
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = SignsClient::new("http://backend:4000/").unwrap();
        assert_eq!(client.endpoint("/api/signs"), "http://backend:4000/api/signs");
    }
}
