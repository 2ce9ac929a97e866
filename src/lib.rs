//! Inti sisi klien aplikasi Talenta: form register multi-step, login dan
//! sesi auth, edit profil, serta data halaman preview talenta. Rendering
//! dan routing tinggal di shell; crate ini yang pegang state, validasi,
//! dan komunikasi ke backend.

pub mod config;
pub mod dtos;
pub mod editors;
pub mod models;
pub mod preview;
pub mod profile;
pub mod services;
pub mod session;
pub mod validation;
pub mod wizard;

pub use config::Config;
pub use editors::{CertificateEditor, EditorModal, ExperienceEditor, ListEditorState};
pub use preview::{load_preview, TalentPreview};
pub use profile::ProfileEditor;
pub use services::{ApiClient, ApiError};
pub use session::{AuthSession, SessionStore};
pub use wizard::{RegisterStep, RegisterWizard, WizardPhase};
