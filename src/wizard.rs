// Orkestrator form register empat step. Wizard memegang satu superset
// data yang diisi bertahap; validasi step aktif dihitung ulang setiap
// dibaca, jadi tombol Next selalu mengikuti keadaan form terkini.

use log::{info, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::dtos::auth::{RegisterOut, RegisterPayload};
use crate::models::{ExperienceBucket, FileUpload, SkkLevel};
use crate::services::api::ApiError;
use crate::services::traits::AuthApi;
use crate::validation::steps::{self, StepValidation};

pub const TOTAL_STEPS: u8 = 4;
pub const MIN_STEP: u8 = 1;
pub const MAX_STEP: u8 = 4;

/// Empat step pendaftaran talenta, nomor 1-based seperti di indikator
/// progres UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStep {
    Biodata,
    Pekerjaan,
    Harga,
    Akun,
}

impl RegisterStep {
    pub fn from_number(n: u8) -> Result<Self, WizardError> {
        match n {
            1 => Ok(Self::Biodata),
            2 => Ok(Self::Pekerjaan),
            3 => Ok(Self::Harga),
            4 => Ok(Self::Akun),
            _ => Err(WizardError::StepOutOfRange(n)),
        }
    }

    pub fn to_number(self) -> u8 {
        match self {
            Self::Biodata => 1,
            Self::Pekerjaan => 2,
            Self::Harga => 3,
            Self::Akun => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Biodata => "Biodata",
            Self::Pekerjaan => "Pekerjaan",
            Self::Harga => "Harga Jasa",
            Self::Akun => "Akun",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Biodata => Some(Self::Pekerjaan),
            Self::Pekerjaan => Some(Self::Harga),
            Self::Harga => Some(Self::Akun),
            Self::Akun => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Biodata => None,
            Self::Pekerjaan => Some(Self::Biodata),
            Self::Harga => Some(Self::Pekerjaan),
            Self::Akun => Some(Self::Harga),
        }
    }

    pub fn is_final(self) -> bool {
        self == Self::Akun
    }
}

/// Superset isian keempat step. Semua field Option: None berarti belum
/// pernah disentuh, Some("") berarti sudah disentuh lalu dikosongkan.
#[derive(Debug, Clone, Default)]
pub struct RegisterFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nik: Option<String>,
    pub npwp: Option<String>,
    pub ktp_file: Option<FileUpload>,
    pub npwp_file: Option<FileUpload>,
    pub about_me: Option<String>,
    pub skill: Option<String>,
    pub skk_level: Option<SkkLevel>,
    pub experience: Option<ExperienceBucket>,
    pub certificate_file: Option<FileUpload>,
    pub current_location: Option<String>,
    pub preferred_location: Option<String>,
    pub price: Option<i64>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub terms_accepted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardPhase {
    Editing,
    Submitting,
    /// Terminal; membawa petunjuk redirect dari backend.
    Done { user_id: Uuid, next_step: String },
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Step {0} di luar rentang {MIN_STEP}..={MAX_STEP}")]
    StepOutOfRange(u8),
    #[error("Masih ada isian yang belum valid di step {}", .step.label())]
    StepInvalid {
        step: RegisterStep,
        validation: StepValidation,
    },
    #[error("Sudah di step terakhir")]
    OnFinalStep,
    #[error("Submit hanya bisa dari step terakhir")]
    NotOnFinalStep,
    #[error("Pendaftaran sedang diproses")]
    AlreadySubmitting,
    #[error("Pendaftaran sudah selesai")]
    AlreadyDone,
    #[error("Form belum lengkap")]
    Incomplete,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug)]
pub struct RegisterWizard {
    step: RegisterStep,
    form: RegisterFormData,
    phase: WizardPhase,
    last_error: Option<String>,
}

impl Default for RegisterWizard {
    fn default() -> Self {
        RegisterWizard::new()
    }
}

impl RegisterWizard {
    pub fn new() -> Self {
        RegisterWizard {
            step: RegisterStep::Biodata,
            form: RegisterFormData::default(),
            phase: WizardPhase::Editing,
            last_error: None,
        }
    }

    pub fn step(&self) -> RegisterStep {
        self.step
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    pub fn form(&self) -> &RegisterFormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegisterFormData {
        &mut self.form
    }

    /// Pesan kegagalan submit terakhir, untuk banner di step Akun.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Validasi step aktif terhadap isi form saat ini.
    pub fn validate_active(&self) -> StepValidation {
        self.validate_step(self.step())
    }

    pub fn validate_step(&self, step: RegisterStep) -> StepValidation {
        match step {
            RegisterStep::Biodata => steps::validate_biodata(&self.form),
            RegisterStep::Pekerjaan => steps::validate_pekerjaan(&self.form),
            RegisterStep::Harga => steps::validate_harga(&self.form),
            RegisterStep::Akun => steps::validate_akun(&self.form),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.validate_active().is_valid
    }

    /// Maju satu step. Ditolak selama step aktif belum valid; error
    /// validasinya dibawa supaya UI bisa menampilkan inline.
    pub fn next(&mut self) -> Result<RegisterStep, WizardError> {
        self.ensure_editing()?;

        let current = self.step();
        let validation = self.validate_step(current);
        if !validation.is_valid {
            return Err(WizardError::StepInvalid { step: current, validation });
        }

        let next = current.next().ok_or(WizardError::OnFinalStep)?;
        self.step = next;
        Ok(next)
    }

    /// Mundur satu step; isian tetap tersimpan. Di step pertama atau di
    /// luar fase edit, tidak bergeser.
    pub fn prev(&mut self) -> RegisterStep {
        if matches!(self.phase, WizardPhase::Editing) {
            if let Some(prev) = self.step.prev() {
                self.step = prev;
            }
        }
        self.step
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Editing => Ok(()),
            WizardPhase::Submitting => Err(WizardError::AlreadySubmitting),
            WizardPhase::Done { .. } => Err(WizardError::AlreadyDone),
        }
    }

    /// Submit final: hanya dari step Akun, satu POST per klik, tanpa
    /// retry otomatis. Gagal berarti tetap di step Akun dengan pesan
    /// error tersimpan; sukses mengunci wizard di fase Done.
    pub async fn submit<A: AuthApi>(&mut self, auth: &A) -> Result<RegisterOut, WizardError> {
        self.ensure_editing()?;

        let current = self.step();
        if !current.is_final() {
            return Err(WizardError::NotOnFinalStep);
        }

        let validation = self.validate_step(current);
        if !validation.is_valid {
            return Err(WizardError::StepInvalid { step: current, validation });
        }

        let payload = RegisterPayload::from_form(&self.form).ok_or(WizardError::Incomplete)?;
        let ktp_file = self.form.ktp_file.clone().ok_or(WizardError::Incomplete)?;
        let npwp_file = self.form.npwp_file.clone().ok_or(WizardError::Incomplete)?;
        let certificate_file = self.form.certificate_file.clone();

        self.phase = WizardPhase::Submitting;
        self.last_error = None;

        let result = auth
            .register(&payload, &ktp_file, &npwp_file, certificate_file.as_ref())
            .await;

        match result {
            Ok(out) => {
                info!("pendaftaran selesai, user_id {}", out.user_id);
                self.phase = WizardPhase::Done {
                    user_id: out.user_id,
                    next_step: out.next_step.clone(),
                };
                Ok(out)
            }
            Err(e) => {
                warn!("pendaftaran gagal: {}", e);
                self.last_error = Some(e.to_string());
                self.phase = WizardPhase::Editing;
                Err(e.into())
            }
        }
    }

    // setter per field; dipanggil widget setiap kali input berubah

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = Some(value.into());
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = Some(value.into());
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = Some(value.into());
    }

    pub fn set_nik(&mut self, value: impl Into<String>) {
        self.form.nik = Some(value.into());
    }

    pub fn set_npwp(&mut self, value: impl Into<String>) {
        self.form.npwp = Some(value.into());
    }

    pub fn set_ktp_file(&mut self, file: FileUpload) {
        self.form.ktp_file = Some(file);
    }

    pub fn set_npwp_file(&mut self, file: FileUpload) {
        self.form.npwp_file = Some(file);
    }

    pub fn set_about_me(&mut self, value: impl Into<String>) {
        self.form.about_me = Some(value.into());
    }

    pub fn set_skill(&mut self, value: impl Into<String>) {
        self.form.skill = Some(value.into());
    }

    pub fn set_skk_level(&mut self, level: SkkLevel) {
        self.form.skk_level = Some(level);
    }

    pub fn set_experience(&mut self, bucket: ExperienceBucket) {
        self.form.experience = Some(bucket);
    }

    pub fn set_certificate_file(&mut self, file: FileUpload) {
        self.form.certificate_file = Some(file);
    }

    pub fn set_current_location(&mut self, value: impl Into<String>) {
        self.form.current_location = Some(value.into());
    }

    pub fn set_preferred_location(&mut self, value: impl Into<String>) {
        self.form.preferred_location = Some(value.into());
    }

    pub fn set_price(&mut self, value: i64) {
        self.form.price = Some(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = Some(value.into());
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.form.password_confirmation = Some(value.into());
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.form.terms_accepted = Some(accepted);
    }
}

/// Format angka ke tampilan rupiah: 1500000 -> "Rp 1.500.000".
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Balikan dari [`format_rupiah`]: terima input user dengan atau tanpa
/// "Rp" dan titik ribuan. None kalau tidak ada digit atau ada karakter
/// lain.
pub fn parse_rupiah(text: &str) -> Option<i64> {
    let cleaned = text.trim().trim_start_matches("Rp").trim();
    if cleaned.is_empty() {
        return None;
    }
    let mut digits = String::new();
    for c in cleaned.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' | ',' | ' ' => {}
            _ => return None,
        }
    }
    digits.parse().ok()
}
