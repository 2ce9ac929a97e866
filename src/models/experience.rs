use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Satu entri riwayat pekerjaan milik talent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_year: i32,
    /// None berarti masih bekerja di sini ("Sekarang").
    pub end_year: Option<i32>,
    pub description: Option<String>,
}

impl ExperienceDetail {
    /// Draft kosong untuk modal tambah, dengan id buatan klien. Field
    /// diisi form; tahun 0 tidak akan lolos validasi submit.
    pub fn new_draft() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            company: String::new(),
            start_year: 0,
            end_year: None,
            description: None,
        }
    }
}
