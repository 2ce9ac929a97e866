use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rekomendasi yang diberikan pihak lain untuk seorang talent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    /// Talent yang direkomendasikan.
    pub user_id: Uuid,
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub status: RecommendationStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Status of a recommendation, as the talent curates their preview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RecommendationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str_api(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "status rekomendasi tidak dikenal: '{s}' (pending/approved/rejected)"
            )),
        }
    }
}
