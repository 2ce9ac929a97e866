// Service data talenta untuk halaman preview dan editor list:
// pengalaman, sertifikat, rekomendasi.

use log::debug;
use reqwest::header::AUTHORIZATION;
use uuid::Uuid;

use crate::dtos::talent::{
    CertificatePayload, ExperiencePayload, UpdateRecommendationStatusPayload,
};
use crate::models::{
    CertificateDetail, ExperienceDetail, FileUpload, Recommendation, RecommendationStatus,
};
use crate::services::api::{file_part, ApiClient, ApiError};
use crate::services::traits::{CertificateApi, ExperienceApi, RecommendationApi};

#[derive(Clone)]
pub struct ExperienceService {
    api: ApiClient,
}

impl ExperienceService {
    pub fn new(api: ApiClient) -> Self {
        ExperienceService { api }
    }
}

impl ExperienceApi for ExperienceService {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ExperienceDetail>, ApiError> {
        let url = self.api.url(&format!("/experiences/user/{user_id}"));
        debug!("GET {}", url);

        let resp = self.api.http().get(&url).send().await?;
        ApiClient::read_data(resp).await
    }

    async fn create(
        &self,
        token: &str,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError> {
        let url = self.api.url("/experiences");
        debug!("POST {}", url);

        let resp = self
            .api
            .http()
            .post(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .json(payload)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }

    async fn update(
        &self,
        token: &str,
        id: Uuid,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError> {
        let url = self.api.url(&format!("/experiences/{id}"));
        debug!("PUT {}", url);

        let resp = self
            .api
            .http()
            .put(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .json(payload)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        let url = self.api.url(&format!("/experiences/{id}"));
        debug!("DELETE {}", url);

        let resp = self
            .api
            .http()
            .delete(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .send()
            .await?;
        ApiClient::read_message(resp).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct CertificateService {
    api: ApiClient,
}

impl CertificateService {
    pub fn new(api: ApiClient) -> Self {
        CertificateService { api }
    }

    /// Sertifikat selalu dikirim multipart: part `payload` berisi JSON,
    /// part `file` opsional.
    fn build_form(
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("payload", serde_json::to_string(payload)?);
        if let Some(file) = file {
            form = form.part("file", file_part(file)?);
        }
        Ok(form)
    }
}

impl CertificateApi for CertificateService {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CertificateDetail>, ApiError> {
        let url = self.api.url(&format!("/certificates/user/{user_id}"));
        debug!("GET {}", url);

        let resp = self.api.http().get(&url).send().await?;
        ApiClient::read_data(resp).await
    }

    async fn create(
        &self,
        token: &str,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError> {
        let url = self.api.url("/certificates");
        debug!("POST {} (multipart)", url);

        let resp = self
            .api
            .http()
            .post(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .multipart(Self::build_form(payload, file)?)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }

    async fn update(
        &self,
        token: &str,
        id: Uuid,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError> {
        let url = self.api.url(&format!("/certificates/{id}"));
        debug!("PUT {} (multipart)", url);

        let resp = self
            .api
            .http()
            .put(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .multipart(Self::build_form(payload, file)?)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ApiError> {
        let url = self.api.url(&format!("/certificates/{id}"));
        debug!("DELETE {}", url);

        let resp = self
            .api
            .http()
            .delete(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .send()
            .await?;
        ApiClient::read_message(resp).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct RecommendationService {
    api: ApiClient,
}

impl RecommendationService {
    pub fn new(api: ApiClient) -> Self {
        RecommendationService { api }
    }
}

impl RecommendationApi for RecommendationService {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recommendation>, ApiError> {
        let url = self.api.url(&format!("/recommendations/user/{user_id}"));
        debug!("GET {}", url);

        let resp = self.api.http().get(&url).send().await?;
        ApiClient::read_data(resp).await
    }

    async fn set_status(
        &self,
        token: &str,
        id: Uuid,
        status: RecommendationStatus,
    ) -> Result<Recommendation, ApiError> {
        let url = self.api.url(&format!("/recommendations/{id}/status"));
        debug!("PUT {}", url);

        let payload = UpdateRecommendationStatusPayload { status };
        let resp = self
            .api
            .http()
            .put(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .json(&payload)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }
}
