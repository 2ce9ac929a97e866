use serde::Serialize;
use uuid::Uuid;

use crate::models::{CertificateDetail, ExperienceDetail, RecommendationStatus};

/// Payload create/update pengalaman. `id` tidak ikut; untuk update, id
/// jalan lewat path.
#[derive(Debug, Serialize)]
pub struct ExperiencePayload {
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub description: Option<String>,
}

impl ExperiencePayload {
    pub fn from_detail(user_id: Uuid, detail: &ExperienceDetail) -> Self {
        ExperiencePayload {
            user_id,
            title: detail.title.clone(),
            company: detail.company.clone(),
            start_year: detail.start_year,
            end_year: detail.end_year,
            description: detail.description.clone(),
        }
    }
}

/// Payload sertifikat tanpa file; file lampiran dikirim sebagai part
/// multipart oleh service.
#[derive(Debug, Serialize)]
pub struct CertificatePayload {
    pub user_id: Uuid,
    pub name: String,
    pub issuer: String,
    pub year: i32,
}

impl CertificatePayload {
    pub fn from_detail(user_id: Uuid, detail: &CertificateDetail) -> Self {
        CertificatePayload {
            user_id,
            name: detail.name.clone(),
            issuer: detail.issuer.clone(),
            year: detail.year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateRecommendationStatusPayload {
    pub status: RecommendationStatus,
}
