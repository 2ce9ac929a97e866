// Service profil user: ambil dan simpan UserProfile.

use log::debug;
use reqwest::header::AUTHORIZATION;
use uuid::Uuid;

use crate::models::UserProfile;
use crate::services::api::{ApiClient, ApiError};
use crate::services::traits::UserApi;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        UserService { api }
    }
}

impl UserApi for UserService {
    async fn get_user(&self, id: Uuid) -> Result<UserProfile, ApiError> {
        let url = self.api.url(&format!("/users/{id}"));
        debug!("GET {}", url);

        let resp = self.api.http().get(&url).send().await?;
        ApiClient::read_data(resp).await
    }

    async fn update_user(
        &self,
        token: &str,
        profile: &UserProfile,
    ) -> Result<UserProfile, ApiError> {
        let url = self.api.url(&format!("/users/{}", profile.id));
        debug!("PUT {}", url);

        let resp = self
            .api
            .http()
            .put(&url)
            .header(AUTHORIZATION, ApiClient::bearer(token))
            .json(profile)
            .send()
            .await?;
        ApiClient::read_data(resp).await
    }
}
