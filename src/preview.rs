// Agregat halaman preview talenta. Empat resource dimuat paralel; tidak
// ada jaminan urutan antar panggilan, satu kegagalan menggagalkan
// semuanya.

use futures::try_join;
use log::debug;
use uuid::Uuid;

use crate::models::{
    CertificateDetail, ExperienceDetail, Recommendation, RecommendationStatus, UserProfile,
};
use crate::services::api::ApiError;
use crate::services::traits::{CertificateApi, ExperienceApi, RecommendationApi, UserApi};

#[derive(Debug, Clone, PartialEq)]
pub struct TalentPreview {
    pub profile: UserProfile,
    pub experiences: Vec<ExperienceDetail>,
    pub certificates: Vec<CertificateDetail>,
    pub recommendations: Vec<Recommendation>,
}

impl TalentPreview {
    /// Rekomendasi yang tampil publik hanya yang sudah disetujui.
    pub fn approved_recommendations(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.status == RecommendationStatus::Approved)
    }
}

pub async fn load_preview<U, E, C, R>(
    user_id: Uuid,
    user_api: &U,
    experience_api: &E,
    certificate_api: &C,
    recommendation_api: &R,
) -> Result<TalentPreview, ApiError>
where
    U: UserApi,
    E: ExperienceApi,
    C: CertificateApi,
    R: RecommendationApi,
{
    debug!("muat preview talenta {}", user_id);

    let (profile, experiences, certificates, recommendations) = try_join!(
        user_api.get_user(user_id),
        experience_api.list_for_user(user_id),
        certificate_api.list_for_user(user_id),
        recommendation_api.list_for_user(user_id),
    )?;

    Ok(TalentPreview { profile, experiences, certificates, recommendations })
}
