// Sesi edit profil: salinan kerja berdampingan dengan salinan server.
// Batal membuang perubahan; simpan mem-PUT salinan kerja dan baru
// mempromosikannya setelah backend menerima.

use log::info;
use uuid::Uuid;

use crate::models::UserProfile;
use crate::services::api::ApiError;
use crate::services::traits::UserApi;

pub struct ProfileEditor {
    server: UserProfile,
    working: UserProfile,
    token: String,
    last_error: Option<String>,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile, token: impl Into<String>) -> Self {
        ProfileEditor {
            working: profile.clone(),
            server: profile,
            token: token.into(),
            last_error: None,
        }
    }

    /// Buka sesi edit dari profil yang diambil ulang dari server.
    pub async fn load<A: UserApi>(
        api: &A,
        id: Uuid,
        token: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let profile = api.get_user(id).await?;
        Ok(ProfileEditor::new(profile, token))
    }

    /// Salinan kerja, yang tampil di form.
    pub fn working(&self) -> &UserProfile {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut UserProfile {
        &mut self.working
    }

    /// Salinan terakhir yang diketahui tersimpan di server.
    pub fn saved(&self) -> &UserProfile {
        &self.server
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.server
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Buang semua perubahan yang belum disimpan.
    pub fn reset_changes(&mut self) {
        self.working = self.server.clone();
        self.last_error = None;
    }

    /// Simpan salinan kerja. Kalau backend menolak, salinan server tidak
    /// berubah dan perubahan user tetap di form untuk dicoba lagi.
    pub async fn save<A: UserApi>(&mut self, api: &A) -> Result<(), ApiError> {
        match api.update_user(&self.token, &self.working).await {
            Ok(saved) => {
                info!("profil {} tersimpan", saved.id);
                self.working = saved.clone();
                self.server = saved;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
