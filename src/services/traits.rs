// Seam antara state klien dan backend. Wizard, editor, profil, preview,
// dan session store generic atas trait ini; test memakai fake in-memory,
// produksi memakai service reqwest di modul sebelah.

use uuid::Uuid;

use crate::dtos::auth::{LoginOut, LoginPayload, RegisterOut, RegisterPayload};
use crate::dtos::talent::{CertificatePayload, ExperiencePayload};
use crate::models::{
    CertificateDetail, ExperienceDetail, FileUpload, Recommendation, RecommendationStatus,
    UserProfile,
};
use crate::services::api::ApiError;

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, payload: &LoginPayload) -> Result<LoginOut, ApiError>;

    /// Satu POST multipart berisi payload lengkap plus dokumen identitas.
    async fn register(
        &self,
        payload: &RegisterPayload,
        ktp_file: &FileUpload,
        npwp_file: &FileUpload,
        certificate_file: Option<&FileUpload>,
    ) -> Result<RegisterOut, ApiError>;

    /// Whoami: konfirmasi token yang tersimpan masih diterima backend.
    async fn me(&self, token: &str) -> Result<UserProfile, ApiError>;

    async fn forgot_password(&self, email: &str) -> Result<String, ApiError>;

    async fn reset_password(&self, token: &str, password: &str) -> Result<String, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait UserApi {
    async fn get_user(&self, id: Uuid) -> Result<UserProfile, ApiError>;

    async fn update_user(&self, token: &str, profile: &UserProfile)
        -> Result<UserProfile, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ExperienceApi {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ExperienceDetail>, ApiError>;

    async fn create(
        &self,
        token: &str,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError>;

    async fn update(
        &self,
        token: &str,
        id: Uuid,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError>;

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CertificateApi {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CertificateDetail>, ApiError>;

    async fn create(
        &self,
        token: &str,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError>;

    async fn update(
        &self,
        token: &str,
        id: Uuid,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError>;

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait RecommendationApi {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recommendation>, ApiError>;

    async fn set_status(
        &self,
        token: &str,
        id: Uuid,
        status: RecommendationStatus,
    ) -> Result<Recommendation, ApiError>;
}
