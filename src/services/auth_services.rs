// Service auth terhadap backend Talenta: login, register multipart,
// whoami, dan alur reset password.

use log::{debug, info};
use reqwest::header::AUTHORIZATION;

use crate::dtos::auth::{
    ForgotPasswordPayload, LoginOut, LoginPayload, RegisterOut, RegisterPayload,
    ResetPasswordPayload,
};
use crate::models::{FileUpload, UserProfile};
use crate::services::api::{file_part, ApiClient, ApiError};
use crate::services::traits::AuthApi;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        AuthService { api }
    }
}

impl AuthApi for AuthService {
    async fn login(&self, payload: &LoginPayload) -> Result<LoginOut, ApiError> {
        let url = self.api.url("/auth/login");
        debug!("POST {}", url);

        let resp = self.api.http().post(&url).json(payload).send().await?;
        let out: LoginOut = ApiClient::read_data(resp).await?;
        info!("login diterima untuk user {}", out.user.id);
        Ok(out)
    }

    async fn register(
        &self,
        payload: &RegisterPayload,
        ktp_file: &FileUpload,
        npwp_file: &FileUpload,
        certificate_file: Option<&FileUpload>,
    ) -> Result<RegisterOut, ApiError> {
        let url = self.api.url("/auth/register");
        debug!("POST {} (multipart)", url);

        let mut form = reqwest::multipart::Form::new()
            .text("payload", serde_json::to_string(payload)?)
            .part("ktp_file", file_part(ktp_file)?)
            .part("npwp_file", file_part(npwp_file)?);
        if let Some(file) = certificate_file {
            form = form.part("certificate_file", file_part(file)?);
        }

        let resp = self.api.http().post(&url).multipart(form).send().await?;
        let out: RegisterOut = ApiClient::read_data(resp).await?;
        info!("register diterima, user_id {}", out.user_id);
        Ok(out)
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.api.url("/users/me");
        debug!("GET {}", url);

        let resp = self
            .api
            .http()
            .get(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }

    async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let url = self.api.url("/auth/forgot-password");
        let payload = ForgotPasswordPayload { email: email.trim().to_string() };

        let resp = self.api.http().post(&url).json(&payload).send().await?;
        ApiClient::read_message(resp).await
    }

    async fn reset_password(&self, token: &str, password: &str) -> Result<String, ApiError> {
        let url = self.api.url("/auth/reset-password");
        let payload = ResetPasswordPayload {
            token: token.to_string(),
            password: password.to_string(),
        };

        let resp = self.api.http().post(&url).json(&payload).send().await?;
        ApiClient::read_message(resp).await
    }
}
