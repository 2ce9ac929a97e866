// Klien HTTP bersama untuk semua service + pemetaan respons gagal ke
// ApiError. Semua service lain memegang clone dari ApiClient.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::dtos::ApiEnvelope;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Backend membalas amplop error; `message` langsung layak tampil.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Sesi Anda sudah berakhir, silakan login ulang")]
    Unauthorized,
    #[error("Data tidak ditemukan")]
    NotFound,
    #[error("Respons server tidak berisi data")]
    MissingData,
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Konstruktor tanpa Config, dipakai di test.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        ApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    /// Baca respons yang wajib membawa `data` di amplopnya.
    pub async fn read_data<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let envelope = Self::read_envelope::<T>(resp).await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Baca respons yang cukup diambil `message`-nya (delete, lupa
    /// password, dan sejenisnya).
    pub async fn read_message(resp: reqwest::Response) -> Result<String, ApiError> {
        let envelope = Self::read_envelope::<serde_json::Value>(resp).await?;
        Ok(envelope.message)
    }

    async fn read_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        debug!("response {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(Self::error_from(status, &text));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;
        if !envelope.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    fn error_from(status: StatusCode, text: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Unauthorized;
        }
        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound;
        }

        // coba ambil `message` dari amplop error; kalau body bukan JSON,
        // jatuhkan ke "status -> body" ala log server
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return ApiError::Api {
                    status: status.as_u16(),
                    message: message.to_string(),
                };
            }
        }
        warn!("unexpected error body for {}: {}", status, text);
        ApiError::Api {
            status: status.as_u16(),
            message: format!("{} -> {}", status.as_u16(), text),
        }
    }
}

/// Bungkus FileUpload jadi part multipart dengan nama file dan MIME-nya.
pub(crate) fn file_part(file: &crate::models::FileUpload) -> Result<reqwest::multipart::Part, ApiError> {
    let part = reqwest::multipart::Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(file.mime_type().as_ref())?;
    Ok(part)
}
