//! Tab-scoped credential cache and Basic auth header construction.
//!
//! TRADE-OFFS
//! ==========
//! Credentials live as plaintext JSON in `sessionStorage`, scoped to the
//! browser tab and cleared on logout or on any 401. No client-side expiry is
//! modeled; the backend's 401 is the sole source of truth for validity.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::net::types::Credentials;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "showcase_admin_credentials";

/// Load cached credentials from `sessionStorage`, if any.
pub fn load() -> Option<Credentials> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cache credentials for the remainder of the tab session.
pub fn save(credentials: &Credentials) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten())
        else {
            return;
        };
        let Ok(raw) = serde_json::to_string(credentials) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
    }
}

/// Drop cached credentials (explicit logout or 401-forced logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Build the `Authorization` header value for a request.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let token = BASE64.encode(format!("{}:{}", credentials.username, credentials.password));
    format!("Basic {token}")
}
