// Dekode payload JWT tanpa verifikasi signature: klien tidak memegang
// secret, jadi kebenaran token tetap dikonfirmasi ke backend lewat
// GET /users/me. Di sini cuma dibongkar untuk identitas awal dan exp.

use base64::Engine;
use chrono::Utc;
use log::debug;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("format token bukan JWT")]
    Malformed,
    #[error("payload token tidak terbaca: {0}")]
    Payload(String),
    #[error("token sudah kedaluwarsa")]
    Expired,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Ambil claims dari bagian payload token. JWT memakai base64url tanpa
/// padding; beberapa penerbit lama memakai engine standar, jadi ada
/// fallback satu kali.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed);
    }

    let decoded = match base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(parts[1]) {
        Ok(bytes) => bytes,
        Err(first) => {
            debug!("decode base64url gagal ({first}), coba engine standar");
            base64::engine::general_purpose::STANDARD
                .decode(parts[1])
                .map_err(|second| TokenError::Payload(format!("{first} / {second}")))?
        }
    };

    let payload =
        String::from_utf8(decoded).map_err(|e| TokenError::Payload(e.to_string()))?;
    let claims: TokenClaims =
        serde_json::from_str(&payload).map_err(|e| TokenError::Payload(e.to_string()))?;

    if claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}
