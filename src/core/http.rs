//! HTTP utilities for the stats API

use crate::{BbError, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Url,
};

/// Environment variable holding the stats API base URL.
pub const API_URL_ENV_VAR: &str = "BBSTATS_API_URL";

/// Base URL used when neither the flag nor the env var is set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Pick the API base URL: explicit flag, then `BBSTATS_API_URL`, then the
/// local default. The result has no trailing slash.
pub fn resolve_api_url(flag: Option<String>) -> Result<String> {
    let raw = flag
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let trimmed = raw.trim().trim_end_matches('/').to_string();

    let url = Url::parse(&trimmed).map_err(|e| BbError::InvalidApiUrl {
        url: raw.clone(),
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BbError::InvalidApiUrl {
            url: raw,
            message: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    Ok(trimmed)
}

/// Default headers sent with every API request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared reqwest client.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_header_map())
        .user_agent(concat!("bbstats/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_url_precedence() {
        std::env::set_var(API_URL_ENV_VAR, "http://stats.example:9000/api/v1/");
        assert_eq!(
            resolve_api_url(None).unwrap(),
            "http://stats.example:9000/api/v1"
        );
        assert_eq!(
            resolve_api_url(Some("https://flag.example/api".to_string())).unwrap(),
            "https://flag.example/api"
        );

        std::env::remove_var(API_URL_ENV_VAR);
        assert_eq!(resolve_api_url(None).unwrap(), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(Some("  ".to_string())).unwrap(), DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_api_url_rejects_garbage() {
        match resolve_api_url(Some("not a url".to_string())) {
            Err(BbError::InvalidApiUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidApiUrl, got {other:?}"),
        }
        assert!(resolve_api_url(Some("ftp://stats.example".to_string())).is_err());
    }

    #[test]
    fn test_default_header_map() {
        let headers = default_header_map();
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
