// Agregasi validator field menjadi hasil per step. Key error hanya muncul
// kalau field-nya sudah diisi; key yang absen berarti "belum dicek",
// bukan "valid". `is_valid` baru true kalau semua field wajib terisi DAN
// semua yang terisi lolos.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};

use crate::models::{CertificateDetail, ExperienceDetail, FileUpload};
use crate::validation::fields::{self, FieldError};
use crate::validation::files::validate_upload;
use crate::wizard::RegisterFormData;

/// Batas bawah tahun untuk riwayat pengalaman/sertifikat.
const MIN_YEAR: i32 = 1950;

#[derive(Debug, Clone, PartialEq)]
pub struct StepValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<&'static str, String>,
}

impl StepValidation {
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }
}

/// Akumulator internal: jalankan rule hanya untuk field yang terisi,
/// catat kelengkapan field wajib secara terpisah.
struct Checks {
    errors: BTreeMap<&'static str, String>,
    complete: bool,
}

impl Checks {
    fn new() -> Self {
        Checks { errors: BTreeMap::new(), complete: true }
    }

    /// Field wajib: None menurunkan kelengkapan tanpa memasang error.
    fn field<T: ?Sized>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
        rule: impl FnOnce(&T) -> Result<(), FieldError>,
    ) {
        match value {
            None => self.complete = false,
            Some(v) => {
                if let Err(e) = rule(v) {
                    self.errors.insert(key, e.to_string());
                }
            }
        }
    }

    /// Field wajib yang cukup dipilih (dropdown): tidak ada rule nilai.
    fn require<T>(&mut self, value: Option<&T>) {
        if value.is_none() {
            self.complete = false;
        }
    }

    /// Field opsional: dicek hanya kalau ada, tidak pernah menurunkan
    /// kelengkapan.
    fn optional<T: ?Sized>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
        rule: impl FnOnce(&T) -> Result<(), FieldError>,
    ) {
        if let Some(v) = value {
            if let Err(e) = rule(v) {
                self.errors.insert(key, e.to_string());
            }
        }
    }

    fn finish(self) -> StepValidation {
        StepValidation {
            is_valid: self.complete && self.errors.is_empty(),
            errors: self.errors,
        }
    }
}

fn validate_name(value: &str) -> Result<(), FieldError> {
    fields::validate_required("Nama", value)?;
    fields::validate_letters_only("Nama", value)?;
    fields::validate_min_length("Nama", value, 3)
}

fn validate_year(label: &'static str, year: i32) -> Result<(), FieldError> {
    if year < MIN_YEAR || year > Utc::now().year() {
        return Err(FieldError::InvalidYear(label));
    }
    Ok(())
}

/// Step 1: biodata dan dokumen identitas.
pub fn validate_biodata(form: &RegisterFormData) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("name", form.name.as_deref(), validate_name);
    checks.field("email", form.email.as_deref(), |v| fields::validate_email(v));
    checks.field("phone", form.phone.as_deref(), |v| fields::validate_phone(v));
    checks.field("nik", form.nik.as_deref(), |v| fields::validate_nik(v));
    checks.field("npwp", form.npwp.as_deref(), |v| fields::validate_npwp(v));
    checks.field("ktp_file", form.ktp_file.as_ref(), validate_upload);
    checks.field("npwp_file", form.npwp_file.as_ref(), validate_upload);
    checks.finish()
}

/// Step 2: profil pekerjaan. Sertifikat pendukung opsional.
pub fn validate_pekerjaan(form: &RegisterFormData) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("about_me", form.about_me.as_deref(), |v| {
        fields::validate_required("Tentang saya", v)
    });
    checks.field("skill", form.skill.as_deref(), |v| {
        fields::validate_required("Keahlian", v)
    });
    checks.require(form.skk_level.as_ref());
    checks.require(form.experience.as_ref());
    checks.field("current_location", form.current_location.as_deref(), |v| {
        fields::validate_required("Lokasi saat ini", v)
    });
    checks.field("preferred_location", form.preferred_location.as_deref(), |v| {
        fields::validate_required("Lokasi yang diinginkan", v)
    });
    checks.optional("certificate_file", form.certificate_file.as_ref(), validate_upload);
    checks.finish()
}

/// Step 3: harga jasa.
pub fn validate_harga(form: &RegisterFormData) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("price", form.price.as_ref(), |p| {
        if *p > 0 { Ok(()) } else { Err(FieldError::InvalidPrice) }
    });
    checks.finish()
}

/// Step 4: kredensial akun. Password memakai varian register.
pub fn validate_akun(form: &RegisterFormData) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("password", form.password.as_deref(), |v| {
        fields::validate_password(v)
    });
    checks.field(
        "password_confirmation",
        form.password_confirmation.as_deref(),
        |v| fields::validate_password_confirmation(form.password.as_deref().unwrap_or(""), v),
    );
    checks.field("terms", form.terms_accepted.as_ref(), |accepted| {
        if *accepted { Ok(()) } else { Err(FieldError::TermsNotAccepted) }
    });
    checks.finish()
}

/// State form login. Umurnya sebatas layar login; tidak ikut wizard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validator login: email + password varian login (wajib, minimal 8).
pub fn validate_login(form: &LoginForm) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("email", form.email.as_deref(), |v| fields::validate_email(v));
    checks.field("password", form.password.as_deref(), |v| {
        fields::validate_login_password(v)
    });
    checks.finish()
}

/// Validator modal tambah/ubah pengalaman. Modal divalidasi saat submit,
/// jadi semua field dicek sekaligus.
pub fn validate_experience_form(draft: &ExperienceDetail) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("title", Some(draft.title.as_str()), |v| {
        fields::validate_required("Posisi", v)
    });
    checks.field("company", Some(draft.company.as_str()), |v| {
        fields::validate_required("Perusahaan", v)
    });
    checks.field("start_year", Some(&draft.start_year), |y| {
        validate_year("Tahun mulai", *y)
    });
    checks.optional("end_year", draft.end_year.as_ref(), |end| {
        validate_year("Tahun selesai", *end)?;
        if *end < draft.start_year {
            return Err(FieldError::YearOrder);
        }
        Ok(())
    });
    checks.finish()
}

/// Validator modal sertifikat; file lampiran dicek kalau ada.
pub fn validate_certificate_form(
    draft: &CertificateDetail,
    file: Option<&FileUpload>,
) -> StepValidation {
    let mut checks = Checks::new();
    checks.field("name", Some(draft.name.as_str()), |v| {
        fields::validate_required("Nama sertifikat", v)
    });
    checks.field("issuer", Some(draft.issuer.as_str()), |v| {
        fields::validate_required("Penerbit", v)
    });
    checks.field("year", Some(&draft.year), |y| validate_year("Tahun", *y));
    checks.optional("file", file, validate_upload);
    checks.finish()
}
