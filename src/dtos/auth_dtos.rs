use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UserProfile;
use crate::validation::fields::normalize_phone;
use crate::wizard::RegisterFormData;

#[derive(Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Isi `data` dari respons login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginOut {
    pub token: String,
    pub user: UserProfile,
}

/// Payload register lengkap hasil akumulasi empat step. File identitas
/// tidak di sini; dikirim sebagai part multipart terpisah.
#[derive(Debug, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nik: String,
    pub npwp: String,
    pub about_me: String,
    pub skill: String,
    pub skk_level: String,
    /// kode bucket pengalaman 0..=4
    pub experience: u8,
    pub current_location: String,
    pub preferred_location: String,
    pub price: i64,
    pub password: String,
}

impl RegisterPayload {
    /// Bentuk payload dari form yang sudah lolos validasi semua step.
    /// `None` kalau masih ada field wajib yang kosong; telepon dan
    /// NIK/NPWP dinormalisasi di sini supaya backend terima bentuk baku.
    pub fn from_form(form: &RegisterFormData) -> Option<Self> {
        Some(RegisterPayload {
            name: form.name.clone()?,
            email: form.email.clone()?,
            phone: normalize_phone(form.phone.as_deref()?),
            nik: compact_digits(form.nik.as_deref()?),
            npwp: compact_digits(form.npwp.as_deref()?),
            about_me: form.about_me.clone()?,
            skill: form.skill.clone()?,
            skk_level: form.skk_level.as_ref()?.as_str().to_string(),
            experience: form.experience?.code(),
            current_location: form.current_location.clone()?,
            preferred_location: form.preferred_location.clone()?,
            price: form.price?,
            password: form.password.clone()?,
        })
    }
}

fn compact_digits(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct RegisterOut {
    pub user_id: Uuid,
    pub message: String,
    pub next_step: String,
}

#[derive(Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

#[derive(Serialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub password: String,
}
