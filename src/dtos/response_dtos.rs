use serde::Deserialize;

/// Amplop standar semua respons backend: `{ status, message, data }`.
/// `status` berisi "success" atau "error"; saat error, `data` biasanya
/// absen dan `message` yang dipakai untuk tampilan.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
