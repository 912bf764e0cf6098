//! Shared HTTP dispatch for the LEDAT API.
//!
//! One configured `reqwest::Client` per process: base address, JSON accept
//! header, and a single global timeout. The wrapper attaches two pieces of
//! cross-cutting context to outgoing requests — the bearer token (private
//! routes only) and the active language code (always) — and classifies what
//! comes back as either a response envelope or a transport failure. No
//! retries, no backoff, no per-request timeout override.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::envelope::ApiResponse;
use crate::error::{Error, Result};
use crate::i18n::TranslationStore;
use crate::storage::{keys, Storage};

/// Path prefixes reachable without an authentication token.
///
/// Matching is by prefix against the request path, so a reshaped endpoint
/// path silently lands in the wrong class; keep this list in sync with the
/// server's router.
const PUBLIC_ROUTE_PREFIXES: &[&str] = &[
    "/auth/login",
    "/auth/login-edificio",
    "/auth/recuperar-password",
    "/auth/recuperar-codigo",
    "/auth/registro",
    "/auth/validar-nif",
    "/municipios",
];

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<Storage>,
    translations: Arc<TranslationStore>,
}

impl ApiClient {
    /// Build the shared client from the configured base address and timeout.
    pub fn new(
        config: &Config,
        storage: Arc<Storage>,
        translations: Arc<TranslationStore>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            translations,
        })
    }

    /// Whether `path` is dispatched without an `Authorization` header.
    pub fn is_public_route(path: &str) -> bool {
        PUBLIC_ROUTE_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }

    /// The session store backing this client.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The translation store backing this client.
    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }

    /// GET `path`, optionally with query pairs.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>> {
        let mut builder = self.http.get(self.url(path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(path, builder).await
    }

    /// POST `body` as JSON to `path`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.http.post(self.url(path)).json(body))
            .await
    }

    /// PUT `body` as JSON to `path`.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.http.put(self.url(path)).json(body))
            .await
    }

    /// DELETE `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.execute(path, self.http.delete(self.url(path))).await
    }

    /// POST a multipart form to `path` (file uploads).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<ApiResponse<T>> {
        self.execute(path, self.http.post(self.url(path)).multipart(form))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach cross-cutting headers and dispatch.
    ///
    /// The bearer token is read from storage before every private-route
    /// request; when no token is stored the request goes out without an
    /// `Authorization` header and the server answers with its own
    /// auth-failure envelope. The active language code rides along on every
    /// request, public or not.
    ///
    /// Any body that parses as an envelope is returned to the caller
    /// unmodified, whatever the HTTP status — business failures are values.
    /// Everything else is a transport-level error.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        mut builder: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        builder = builder.header("Accept-Language", self.translations.current().code());

        if !Self::is_public_route(path) {
            if let Some(token) = self.storage.get(keys::AUTH_TOKEN).await {
                builder = builder.bearer_auth(token);
            }
        }

        debug!("Dispatching request to {}", path);
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) => Err(Error::UnexpectedResponse {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Route Classification Tests ====================

    #[test]
    fn test_every_public_prefix_is_classified_public() {
        for prefix in PUBLIC_ROUTE_PREFIXES {
            assert!(
                ApiClient::is_public_route(prefix),
                "{} should be public",
                prefix
            );
        }
    }

    #[test]
    fn test_login_with_trailing_segment_is_public() {
        assert!(ApiClient::is_public_route("/auth/login"));
        assert!(ApiClient::is_public_route("/auth/login-edificio"));
        assert!(ApiClient::is_public_route("/auth/validar-nif?nif=12345678Z"));
    }

    #[test]
    fn test_municipality_reference_data_is_public() {
        assert!(ApiClient::is_public_route("/municipios"));
        assert!(ApiClient::is_public_route("/municipios/barcelona"));
    }

    #[test]
    fn test_private_routes() {
        assert!(!ApiClient::is_public_route("/edificios"));
        assert!(!ApiClient::is_public_route("/edificios/42"));
        assert!(!ApiClient::is_public_route("/documentos/7/fichero"));
        assert!(!ApiClient::is_public_route("/notificaciones"));
        assert!(!ApiClient::is_public_route("/emails"));
    }

    #[test]
    fn test_prefix_matching_is_literal() {
        // Classification is by string prefix only; these near-misses stay private
        assert!(!ApiClient::is_public_route("/api/auth/login"));
        assert!(!ApiClient::is_public_route("/authx/login"));
    }
}
