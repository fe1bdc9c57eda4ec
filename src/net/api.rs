//! REST API helpers for the external triage backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and tests: stubs reporting the backend as unavailable, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics. Response bodies are decoded
//! by the pure `parse_*` helpers so status/body handling is testable without
//! a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, AuthError};
use super::types::{AnalysisResult, AuditEntry, Credentials, User};
use crate::state::session::AuthBackend;

#[cfg(any(test, feature = "csr"))]
use super::types::{ErrorBody, LoginEnvelope};
#[cfg(any(test, feature = "csr"))]
use serde::de::DeserializeOwned;

pub const LOGIN_PATH: &str = "/v1/auth/login";
pub const ANALYZE_PATH: &str = "/analyze";
pub const AUDIT_HISTORY_PATH: &str = "/v1/audit/history";

/// Name sent with an analysis when the user has no display name on file.
pub const DEFAULT_CLINICIAN_NAME: &str = "Dr. Medical Professional";

/// An image selected for analysis, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    /// `image/jpeg` or `image/png`.
    pub mime: String,
    pub bytes: Vec<u8>,
    /// Object URL used for the local preview.
    pub preview_url: String,
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(api_base_url: &str, path: &str) -> String {
    format!("{}{path}", api_base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the `detail` string from an error body, if there is one.
#[cfg(any(test, feature = "csr"))]
fn error_detail(body: &str) -> Option<String> {
    let Ok(ErrorBody { detail }) = serde_json::from_str(body) else {
        return None;
    };
    detail.filter(|detail| !detail.trim().is_empty())
}

/// Decode a login response into the identity it carries.
///
/// - 2xx with a valid `{ status, data }` envelope → the identity.
/// - 2xx with any other shape → [`AuthError::MalformedResponse`].
/// - non-2xx with a string `detail` → [`AuthError::Rejected`] carrying it.
/// - non-2xx without one → [`AuthError::Unreachable`].
#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_login_response(status: u16, body: &str) -> Result<User, AuthError> {
    if is_success(status) {
        return serde_json::from_str::<LoginEnvelope>(body)
            .map(|envelope| envelope.data)
            .map_err(|err| {
                log::warn!("login: malformed success envelope: {err}");
                AuthError::MalformedResponse
            });
    }
    match error_detail(body) {
        Some(detail) => Err(AuthError::Rejected(detail)),
        None => {
            log::warn!("login: status {status} without detail");
            Err(AuthError::Unreachable)
        }
    }
}

/// Decode a JSON response body for the non-auth endpoints.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_json_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status {
            status,
            detail: error_detail(body),
        });
    }
    serde_json::from_str(body)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(feature = "csr")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Authentication against `POST /v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    api_base_url: String,
}

impl HttpBackend {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}

impl AuthBackend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.api_base_url, LOGIN_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|err| {
                    log::warn!("login: could not encode request: {err}");
                    AuthError::Unreachable
                })?
                .send()
                .await
                .map_err(|err| {
                    log::warn!("login: request failed: {err}");
                    AuthError::Unreachable
                })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|err| {
                log::warn!("login: could not read response: {err}");
                AuthError::Unreachable
            })?;
            parse_login_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.api_base_url, credentials);
            Err(AuthError::Unreachable)
        }
    }
}

/// Submit an image to `POST /analyze` as multipart `file` + `user_fullname`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, the
/// server responds with a non-2xx status, or the body does not decode.
pub async fn analyze(
    api_base_url: &str,
    upload: &PendingUpload,
    user_fullname: &str,
) -> Result<AnalysisResult, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = multipart_form(upload, user_fullname)?;
        let url = endpoint(api_base_url, ANALYZE_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network_error)?;
        parse_json_response(status, &body)
            .inspect_err(|err| log::warn!("analyze: {err}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_base_url, upload, user_fullname);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn multipart_form(
    upload: &PendingUpload,
    user_fullname: &str,
) -> Result<web_sys::FormData, ApiError> {
    let js_err = |err: wasm_bindgen::JsValue| ApiError::Network(format!("{err:?}"));

    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", &blob, &upload.file_name)
        .map_err(js_err)?;
    form.append_with_str("user_fullname", user_fullname)
        .map_err(js_err)?;
    Ok(form)
}

/// Fetch the recent audit trail from `GET /v1/audit/history`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-2xx status, or the body does not decode.
pub async fn fetch_audit_history(api_base_url: &str) -> Result<Vec<AuditEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(api_base_url, AUDIT_HISTORY_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network_error)?;
        parse_json_response(status, &body)
            .inspect_err(|err| log::warn!("audit history: {err}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api_base_url;
        Err(ApiError::Unavailable)
    }
}
