//! HTTP boundary
//!
//! GET only, no custom headers, no body, no timeout beyond the transport's.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PagesError, PagesResult};

/// What the probe needs from a response
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResponse {
    pub status: u16,
    /// Lowercase header names, repeated headers joined with `", "`
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FetchedResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }

    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    /// Decode the body as JSON
    pub fn json(&self) -> PagesResult<Value> {
        serde_json::from_str(&self.body).map_err(|e| PagesError::Decode(e.to_string()))
    }
}

/// Performs one GET request
///
/// Futures are not `Send`: on wasm32 they wrap the browser's `fetch`.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> PagesResult<FetchedResponse>;
}

/// `reqwest` client, backed by `fetch` when compiled to wasm32
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> PagesResult<FetchedResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in response.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        let body = response.text().await?;
        Ok(FetchedResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: Option<&str>, body: &str) -> FetchedResponse {
        let mut headers = BTreeMap::new();
        if let Some(ct) = content_type {
            headers.insert("content-type".to_string(), ct.to_string());
        }
        FetchedResponse {
            status: 200,
            headers,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(response(Some("application/json; charset=utf-8"), "{}").is_json());
        assert!(!response(Some("text/plain"), "{}").is_json());
        assert!(!response(None, "{}").is_json());
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let err = response(None, "<html>").json().unwrap_err();
        assert!(matches!(err, PagesError::Decode(_)));
    }
}
