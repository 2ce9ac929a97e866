use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sertifikat keahlian milik talent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateDetail {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub year: i32,
    /// URL berkas sertifikat di storage backend, kalau sudah di-upload.
    pub file_url: Option<String>,
}

impl CertificateDetail {
    /// Draft kosong untuk modal tambah, dengan id buatan klien.
    pub fn new_draft() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            year: 0,
            file_url: None,
        }
    }
}
