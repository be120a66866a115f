//! REST API client for the showcase backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying a
//! Basic `Authorization` header built from the operator's cached credentials.
//! Server-side (SSR): stubs returning [`ApiError::ssr_unavailable`] since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call maps a 401 to [`ApiError::Unauthorized`] so the caller can
//! force a session logout; other non-2xx responses surface the backend's own
//! `detail` text. No call is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Asset, AssetKind, AudioAsset, Category, Credentials, Language, SpeakerMode};
use crate::util::files::PickedFile;

#[cfg(feature = "hydrate")]
use crate::util::credentials::basic_auth_header;

#[cfg(any(test, feature = "hydrate"))]
const CATEGORIES_PATH: &str = "/admin/examples/categories";
#[cfg(any(test, feature = "hydrate"))]
const LIST_PATH: &str = "/admin/examples/list";
#[cfg(any(test, feature = "hydrate"))]
const UPLOAD_PATH: &str = "/admin/examples/upload";
#[cfg(any(test, feature = "hydrate"))]
const AUDIO_LIST_PATH: &str = "/admin/examples/audio/list";
#[cfg(any(test, feature = "hydrate"))]
const AUDIO_UPLOAD_PATH: &str = "/admin/examples/audio/upload";

#[cfg(any(test, feature = "hydrate"))]
fn delete_asset_path(
    category: &str,
    subcategory: Option<&str>,
    kind: AssetKind,
    filename: &str,
) -> String {
    match subcategory {
        Some(subcategory) => {
            format!("/admin/examples/delete/{category}/{subcategory}/{kind}/{filename}")
        }
        None => format!("/admin/examples/delete/{category}/{kind}/{filename}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_audio_path(mode: SpeakerMode, language: Language, filename: &str) -> String {
    format!("/admin/examples/audio/delete/{mode}/{language}/{filename}")
}

/// Extract the most useful error text from a rejected response body.
///
/// The backend reports failures as `{"detail": "..."}`; fall back to the raw
/// body, then to the bare status code.
#[cfg(any(test, feature = "hydrate"))]
fn backend_detail(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<super::types::ErrorDetail>(body) {
        return parsed.detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_owned()
    }
}

/// List known example categories.
///
/// Also serves as the login probe: a 401 here means the supplied credentials
/// are not accepted.
pub async fn fetch_categories(credentials: &Credentials) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(CATEGORIES_PATH, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::ssr_unavailable())
    }
}

/// List all stored before/after assets across categories.
pub async fn fetch_assets(credentials: &Credentials) -> Result<Vec<Asset>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LIST_PATH, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::ssr_unavailable())
    }
}

/// Upload one before/after asset as `filename` (the numbered name chosen by
/// the caller, not the browser file's own name).
pub async fn upload_asset(
    credentials: &Credentials,
    file: &PickedFile,
    filename: &str,
    category: &str,
    kind: AssetKind,
    subcategory: Option<&str>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, filename).map_err(js_error)?;
        form.append_with_str("category", category).map_err(js_error)?;
        form.append_with_str("image_type", kind.as_str()).map_err(js_error)?;
        if let Some(subcategory) = subcategory {
            form.append_with_str("subcategory", subcategory).map_err(js_error)?;
        }
        post_form(UPLOAD_PATH, credentials, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, file, filename, category, kind, subcategory);
        Err(ApiError::ssr_unavailable())
    }
}

/// Delete one before/after asset.
pub async fn delete_asset(credentials: &Credentials, asset: &Asset) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = delete_asset_path(
            &asset.category,
            asset.subcategory.as_deref(),
            asset.kind,
            &asset.filename,
        );
        delete(&path, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, asset);
        Err(ApiError::ssr_unavailable())
    }
}

/// List all stored audio samples.
pub async fn fetch_audio_assets(credentials: &Credentials) -> Result<Vec<AudioAsset>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(AUDIO_LIST_PATH, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::ssr_unavailable())
    }
}

/// Upload one audio sample as `filename` into the `(mode, language)` group.
pub async fn upload_audio_asset(
    credentials: &Credentials,
    file: &PickedFile,
    filename: &str,
    mode: SpeakerMode,
    language: Language,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, filename).map_err(js_error)?;
        form.append_with_str("speaker_mode", mode.as_str()).map_err(js_error)?;
        form.append_with_str("language", language.as_str()).map_err(js_error)?;
        post_form(AUDIO_UPLOAD_PATH, credentials, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, file, filename, mode, language);
        Err(ApiError::ssr_unavailable())
    }
}

/// Delete one audio sample.
pub async fn delete_audio_asset(
    credentials: &Credentials,
    asset: &AudioAsset,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = delete_audio_path(asset.speaker_mode, asset.language, &asset.filename);
        delete(&path, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, asset);
        Err(ApiError::ssr_unavailable())
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    credentials: &Credentials,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&super::config::api_url(path))
        .header("Authorization", &basic_auth_header(credentials))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_form(
    path: &str,
    credentials: &Credentials,
    form: web_sys::FormData,
) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&super::config::api_url(path))
        .header("Authorization", &basic_auth_header(credentials))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_success(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete(path: &str, credentials: &Credentials) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(&super::config::api_url(path))
        .header("Authorization", &basic_auth_header(credentials))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    expect_success(resp).await
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(response_error(resp).await) }
}

#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response) -> ApiError {
    if resp.status() == 401 {
        return ApiError::Unauthorized;
    }
    let body = resp.text().await.unwrap_or_default();
    ApiError::Backend { status: resp.status(), detail: backend_detail(resp.status(), &body) }
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
