// Store sesi auth: satu objek eksplisit yang dipegang shell aplikasi,
// bukan singleton. State berjalan lewat kanal watch; widget ambil
// snapshot atau subscribe untuk dapat perubahan.

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::dtos::auth::LoginPayload;
use crate::models::UserProfile;
use crate::services::api::ApiError;
use crate::services::traits::AuthApi;
use crate::session::storage::{PersistedSession, SessionStorage};
use crate::session::token::{decode_claims, TokenClaims, TokenError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("token dari server tidak valid: {0}")]
    Token(#[from] TokenError),
}

/// Identitas ringkas yang dibawa sesi. Profil lengkap tetap lewat
/// UserApi; sesi cukup tahu siapa yang sedang login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl SessionUser {
    /// User default sebelum/"sesudah" login: id nil, field kosong.
    pub fn anonymous() -> Self {
        SessionUser {
            id: Uuid::nil(),
            name: String::new(),
            email: String::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_nil()
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        SessionUser {
            id: profile.id,
            name: profile.name.clone(),
            email: profile.email.clone(),
        }
    }

    pub fn from_claims(claims: &TokenClaims) -> Self {
        SessionUser {
            id: claims.sub,
            name: claims.name.clone().unwrap_or_default(),
            email: claims.email.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: SessionUser,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        AuthSession {
            user: SessionUser::anonymous(),
            token: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    fn loading() -> Self {
        AuthSession { is_loading: true, ..AuthSession::anonymous() }
    }

    fn authenticated(user: SessionUser, token: String) -> Self {
        AuthSession {
            user,
            token: Some(token),
            is_authenticated: true,
            is_loading: false,
        }
    }
}

pub struct SessionStore<S, A> {
    state: Arc<watch::Sender<AuthSession>>,
    storage: Arc<S>,
    auth_api: Arc<A>,
}

// derive(Clone) akan menuntut S: Clone dan A: Clone; semua field Arc,
// jadi clone ditulis manual.
impl<S, A> Clone for SessionStore<S, A> {
    fn clone(&self) -> Self {
        SessionStore {
            state: Arc::clone(&self.state),
            storage: Arc::clone(&self.storage),
            auth_api: Arc::clone(&self.auth_api),
        }
    }
}

impl<S: SessionStorage, A: AuthApi> SessionStore<S, A> {
    pub fn new(storage: S, auth_api: A) -> Self {
        SessionStore {
            state: Arc::new(watch::Sender::new(AuthSession::anonymous())),
            storage: Arc::new(storage),
            auth_api: Arc::new(auth_api),
        }
    }

    pub fn snapshot(&self) -> AuthSession {
        self.state.borrow().clone()
    }

    /// Receiver watch untuk widget yang mau dengar perubahan sesi.
    pub fn subscribe(&self) -> watch::Receiver<AuthSession> {
        self.state.subscribe()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    fn set(&self, next: AuthSession) {
        self.state.send_replace(next);
    }

    /// Hidrasi saat aplikasi dibuka: baca sesi tersimpan, dekode token,
    /// tampilkan optimis, lalu konfirmasi whoami ke backend. Semua jalur
    /// gagal berakhir anonim; tidak ada error yang menjalar keluar.
    pub async fn initialize(&self) {
        self.set(AuthSession::loading());

        let Some(persisted) = self.storage.load() else {
            self.set(AuthSession::anonymous());
            return;
        };

        if let Err(e) = decode_claims(&persisted.token) {
            warn!("sesi tersimpan ditolak: {}", e);
            self.storage.clear();
            self.set(AuthSession::anonymous());
            return;
        }

        // tampil dulu dari cache, whoami menyusul
        self.set(AuthSession {
            user: SessionUser::from_profile(&persisted.user),
            token: Some(persisted.token.clone()),
            is_authenticated: true,
            is_loading: true,
        });

        match self.auth_api.me(&persisted.token).await {
            Ok(profile) => {
                self.storage.save(&PersistedSession {
                    token: persisted.token.clone(),
                    user: profile.clone(),
                });
                info!("sesi dipulihkan untuk {}", profile.email);
                self.set(AuthSession::authenticated(
                    SessionUser::from_profile(&profile),
                    persisted.token,
                ));
            }
            Err(e) => {
                warn!("whoami menolak sesi tersimpan: {}", e);
                self.storage.clear();
                self.set(AuthSession::anonymous());
            }
        }
    }

    /// Login: satu panggilan API, lalu token disimpan, didekode, dan
    /// state berpindah ke terautentikasi dalam satu siklus update.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, SessionError> {
        self.set(AuthSession::loading());

        let payload = LoginPayload {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let out = match self.auth_api.login(&payload).await {
            Ok(out) => out,
            Err(e) => {
                self.set(AuthSession::anonymous());
                return Err(e.into());
            }
        };

        // token yang tidak bisa didekode tidak dipakai sama sekali
        if let Err(e) = decode_claims(&out.token) {
            warn!("token login tidak terbaca: {}", e);
            self.set(AuthSession::anonymous());
            return Err(e.into());
        }

        self.storage.save(&PersistedSession {
            token: out.token.clone(),
            user: out.user.clone(),
        });
        let next = AuthSession::authenticated(SessionUser::from_profile(&out.user), out.token);
        info!("login {}", next.user.email);
        self.set(next.clone());
        Ok(next)
    }

    /// Logout murni lokal: hapus persistensi, balik ke anonim. Tidak ada
    /// panggilan server.
    pub fn logout(&self) {
        self.storage.clear();
        self.set(AuthSession::anonymous());
        info!("logout");
    }
}
