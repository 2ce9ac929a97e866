// Perkakas bersama test integrasi: fake service in-memory untuk semua
// trait API, builder data contoh, dan pencetak token JWT. Tidak ada HTTP
// sungguhan di suite ini.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use talenta_client::dtos::auth::{LoginOut, LoginPayload, RegisterOut, RegisterPayload};
use talenta_client::dtos::talent::{CertificatePayload, ExperiencePayload};
use talenta_client::models::{
    CertificateDetail, ExperienceBucket, ExperienceDetail, FileUpload, Recommendation,
    RecommendationStatus, SkkLevel, UserProfile,
};
use talenta_client::services::api::ApiError;
use talenta_client::services::traits::{
    AuthApi, CertificateApi, ExperienceApi, RecommendationApi, UserApi,
};
use talenta_client::session::{MemoryStorage, PersistedSession, SessionStorage};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cetak JWT HS256 untuk test sesi. `ttl_secs` negatif menghasilkan token
/// yang sudah kedaluwarsa.
pub fn mint_token(sub: Uuid, ttl_secs: i64) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: Uuid,
        exp: i64,
        email: String,
        name: String,
    }

    let claims = Claims {
        sub,
        exp: Utc::now().timestamp() + ttl_secs,
        email: "budi@talenta.id".into(),
        name: "Budi Santoso".into(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"rahasia-test"),
    )
    .expect("encode jwt")
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "Budi Santoso".into(),
        email: "budi@talenta.id".into(),
        phone: "081234567890".into(),
        nik: "3174051202900001".into(),
        npwp: "123456789012345".into(),
        ktp_url: Some("https://cdn.talenta.id/ktp/budi.pdf".into()),
        npwp_url: None,
        certificate_url: None,
        about_me: "Tukang las bersertifikat".into(),
        skill: "Pengelasan".into(),
        skk_level: SkkLevel::from("Operator"),
        experience: ExperienceBucket::ThreeToFive,
        current_location: "Jakarta".into(),
        preferred_location: "Bekasi".into(),
        price: 1_500_000,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_experience(title: &str) -> ExperienceDetail {
    ExperienceDetail {
        id: Uuid::new_v4(),
        title: title.into(),
        company: "PT Baja Utama".into(),
        start_year: 2019,
        end_year: Some(2022),
        description: None,
    }
}

pub fn sample_certificate(name: &str) -> CertificateDetail {
    CertificateDetail {
        id: Uuid::new_v4(),
        name: name.into(),
        issuer: "LPJK".into(),
        year: 2021,
        file_url: None,
    }
}

pub fn sample_recommendation(author: &str, status: RecommendationStatus) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        author_name: author.into(),
        author_title: Some("Project Manager".into()),
        company: Some("PT Baja Utama".into()),
        message: "Kerjanya rapi dan tepat waktu".into(),
        status,
        created_at: None,
    }
}

pub fn pdf_upload(name: &str) -> FileUpload {
    FileUpload::new(name, vec![0u8; 512])
}

fn server_down() -> ApiError {
    ApiError::Api { status: 500, message: "Server sedang bermasalah".into() }
}

/// Storage memori yang tetap bisa dibaca test setelah dipindah ke dalam
/// store; semua clone menunjuk isi yang sama.
#[derive(Clone, Default)]
pub struct SharedStorage(Arc<MemoryStorage>);

impl SessionStorage for SharedStorage {
    fn load(&self) -> Option<PersistedSession> {
        self.0.load()
    }

    fn save(&self, session: &PersistedSession) {
        self.0.save(session)
    }

    fn clear(&self) {
        self.0.clear()
    }
}

/// Fake backend auth. Flag gagal dipegang lewat Arc supaya test tetap
/// bisa membalik kondisinya setelah fake dipindah ke store/wizard.
#[derive(Clone)]
pub struct FakeAuthApi {
    pub profile: UserProfile,
    pub token: String,
    pub fail_login: Arc<AtomicBool>,
    pub fail_me: Arc<AtomicBool>,
    pub fail_register: Arc<AtomicBool>,
    pub register_calls: Arc<AtomicUsize>,
}

impl FakeAuthApi {
    pub fn new(profile: UserProfile, token: impl Into<String>) -> Self {
        FakeAuthApi {
            profile,
            token: token.into(),
            fail_login: Arc::new(AtomicBool::new(false)),
            fail_me: Arc::new(AtomicBool::new(false)),
            fail_register: Arc::new(AtomicBool::new(false)),
            register_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, _payload: &LoginPayload) -> Result<LoginOut, ApiError> {
        if self.fail_login.load(Ordering::SeqCst) {
            return Err(ApiError::Api {
                status: 401,
                message: "Email atau password salah".into(),
            });
        }
        Ok(LoginOut { token: self.token.clone(), user: self.profile.clone() })
    }

    async fn register(
        &self,
        _payload: &RegisterPayload,
        _ktp_file: &FileUpload,
        _npwp_file: &FileUpload,
        _certificate_file: Option<&FileUpload>,
    ) -> Result<RegisterOut, ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_register.load(Ordering::SeqCst) {
            return Err(ApiError::Api {
                status: 409,
                message: "Email sudah terdaftar".into(),
            });
        }
        Ok(RegisterOut {
            user_id: Uuid::new_v4(),
            message: "Pendaftaran berhasil".into(),
            next_step: "/login".into(),
        })
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        if self.fail_me.load(Ordering::SeqCst) || token != self.token {
            return Err(ApiError::Unauthorized);
        }
        Ok(self.profile.clone())
    }

    async fn forgot_password(&self, _email: &str) -> Result<String, ApiError> {
        Ok("Email reset password terkirim".into())
    }

    async fn reset_password(&self, _token: &str, _password: &str) -> Result<String, ApiError> {
        Ok("Password berhasil diubah".into())
    }
}

#[derive(Clone, Default)]
pub struct FakeExperienceApi {
    pub items: Arc<Mutex<Vec<ExperienceDetail>>>,
    pub fail: Arc<AtomicBool>,
}

impl FakeExperienceApi {
    pub fn with_items(items: Vec<ExperienceDetail>) -> Self {
        FakeExperienceApi {
            items: Arc::new(Mutex::new(items)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        Ok(())
    }
}

impl ExperienceApi for FakeExperienceApi {
    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<ExperienceDetail>, ApiError> {
        self.check()?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(
        &self,
        _token: &str,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError> {
        self.check()?;
        let created = ExperienceDetail {
            id: Uuid::new_v4(),
            title: payload.title.clone(),
            company: payload.company.clone(),
            start_year: payload.start_year,
            end_year: payload.end_year,
            description: payload.description.clone(),
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        _token: &str,
        id: Uuid,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceDetail, ApiError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ApiError::NotFound)?;
        slot.title = payload.title.clone();
        slot.company = payload.company.clone();
        slot.start_year = payload.start_year;
        slot.end_year = payload.end_year;
        slot.description = payload.description.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, _token: &str, id: Uuid) -> Result<(), ApiError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeCertificateApi {
    pub items: Arc<Mutex<Vec<CertificateDetail>>>,
    pub fail: Arc<AtomicBool>,
}

impl FakeCertificateApi {
    pub fn with_items(items: Vec<CertificateDetail>) -> Self {
        FakeCertificateApi {
            items: Arc::new(Mutex::new(items)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        Ok(())
    }
}

impl CertificateApi for FakeCertificateApi {
    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<CertificateDetail>, ApiError> {
        self.check()?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(
        &self,
        _token: &str,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError> {
        self.check()?;
        let created = CertificateDetail {
            id: Uuid::new_v4(),
            name: payload.name.clone(),
            issuer: payload.issuer.clone(),
            year: payload.year,
            file_url: file.map(|f| format!("https://cdn.talenta.id/sertifikat/{}", f.file_name)),
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        _token: &str,
        id: Uuid,
        payload: &CertificatePayload,
        file: Option<&FileUpload>,
    ) -> Result<CertificateDetail, ApiError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ApiError::NotFound)?;
        slot.name = payload.name.clone();
        slot.issuer = payload.issuer.clone();
        slot.year = payload.year;
        if let Some(f) = file {
            slot.file_url = Some(format!("https://cdn.talenta.id/sertifikat/{}", f.file_name));
        }
        Ok(slot.clone())
    }

    async fn delete(&self, _token: &str, id: Uuid) -> Result<(), ApiError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct FakeUserApi {
    pub stored: Arc<Mutex<UserProfile>>,
    pub fail: Arc<AtomicBool>,
}

impl FakeUserApi {
    pub fn new(profile: UserProfile) -> Self {
        FakeUserApi {
            stored: Arc::new(Mutex::new(profile)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl UserApi for FakeUserApi {
    async fn get_user(&self, _id: Uuid) -> Result<UserProfile, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn update_user(
        &self,
        _token: &str,
        profile: &UserProfile,
    ) -> Result<UserProfile, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        *self.stored.lock().unwrap() = profile.clone();
        Ok(profile.clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeRecommendationApi {
    pub items: Arc<Mutex<Vec<Recommendation>>>,
    pub fail: Arc<AtomicBool>,
}

impl FakeRecommendationApi {
    pub fn with_items(items: Vec<Recommendation>) -> Self {
        FakeRecommendationApi {
            items: Arc::new(Mutex::new(items)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl RecommendationApi for FakeRecommendationApi {
    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<Recommendation>, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn set_status(
        &self,
        _token: &str,
        id: Uuid,
        status: RecommendationStatus,
    ) -> Result<Recommendation, ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(server_down());
        }
        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ApiError::NotFound)?;
        slot.status = status;
        Ok(slot.clone())
    }
}
