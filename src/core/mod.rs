//! Core utilities for the baseball statistics CLI
//!
//! - `cache`: in-memory and file system response caching
//! - `http`: API base URL resolution and the shared HTTP client

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{CacheManager, GLOBAL_CACHE};
pub use http::{build_client, resolve_api_url, API_URL_ENV_VAR, DEFAULT_API_URL};
