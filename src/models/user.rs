use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SKK certification tiers the select box offers. The client treats the
/// value itself as opaque; daftar ini hanya untuk mengisi pilihan di UI.
const SKK_LEVELS: &[&str] = &["Operator", "Teknisi / Analis", "Ahli"];

/// Representasi user/talent seperti yang dikirim backend.
/// Catatan: password tidak pernah ada di sini; backend yang meng-handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Nomor telepon, normalized ke format "08..."
    pub phone: String,
    pub nik: String,
    pub npwp: String,
    /// URL dokumen yang sudah di-upload (diisi backend setelah register).
    pub ktp_url: Option<String>,
    pub npwp_url: Option<String>,
    pub certificate_url: Option<String>,
    pub about_me: String,
    pub skill: String,
    pub skk_level: SkkLevel,
    /// Years-of-experience bucket, stored as its integer code on the wire.
    pub experience: ExperienceBucket,
    pub current_location: String,
    pub preferred_location: String,
    /// Harga jasa dalam rupiah (tanpa sen).
    pub price: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// SKK level as an opaque enumerated string; the client passes it through
/// without interpreting the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkkLevel(pub String);

impl SkkLevel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkkLevel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for SkkLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Helper for the SKK select options (for UI dropdowns).
pub fn skk_level_options() -> Vec<&'static str> {
    SKK_LEVELS.to_vec()
}

/// Canonical years-of-experience bucket.
///
/// One bidirectional mapping between the display label ("2-3 Tahun") and the
/// integer code the backend stores. Every part of the client goes through
/// this type; there is deliberately no second table anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ExperienceBucket {
    UnderOne,
    OneToTwo,
    TwoToThree,
    ThreeToFive,
    OverFive,
}

impl ExperienceBucket {
    /// All buckets in display order.
    pub const ALL: [ExperienceBucket; 5] = [
        Self::UnderOne,
        Self::OneToTwo,
        Self::TwoToThree,
        Self::ThreeToFive,
        Self::OverFive,
    ];

    /// Integer code stored by the backend.
    pub fn code(self) -> u8 {
        match self {
            Self::UnderOne => 0,
            Self::OneToTwo => 1,
            Self::TwoToThree => 2,
            Self::ThreeToFive => 3,
            Self::OverFive => 4,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Self::UnderOne),
            1 => Ok(Self::OneToTwo),
            2 => Ok(Self::TwoToThree),
            3 => Ok(Self::ThreeToFive),
            4 => Ok(Self::OverFive),
            _ => Err(format!("kode pengalaman tidak dikenal: {code}")),
        }
    }

    /// Label yang ditampilkan di UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::UnderOne => "< 1 Tahun",
            Self::OneToTwo => "1-2 Tahun",
            Self::TwoToThree => "2-3 Tahun",
            Self::ThreeToFive => "3-5 Tahun",
            Self::OverFive => "> 5 Tahun",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == label.trim())
    }
}

impl From<ExperienceBucket> for u8 {
    fn from(bucket: ExperienceBucket) -> Self {
        bucket.code()
    }
}

impl TryFrom<u8> for ExperienceBucket {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
