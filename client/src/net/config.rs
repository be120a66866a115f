//! Backend base-URL resolution.
//!
//! The WASM client has no process environment at runtime, so the backend
//! location is baked in at compile time via `SHOWCASE_API_URL`; an absent
//! value falls back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The backend base URL with any trailing slash removed.
pub fn backend_base_url() -> String {
    normalize_base_url(option_env!("SHOWCASE_API_URL").unwrap_or(DEFAULT_BASE_URL))
}

/// Join an absolute endpoint path onto the backend base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", backend_base_url())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
