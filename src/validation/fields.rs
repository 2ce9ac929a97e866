// Validator per-field untuk form register/login. Semua fungsi di sini pure:
// satu nilai masuk, Ok(()) atau FieldError keluar, tanpa side effect.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

static LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^08[0-9]{8,11}$").unwrap());

/// Hasil gagal dari satu rule. `Display` adalah pesan yang tampil inline di
/// bawah input, makanya semua pesan dalam bahasa Indonesia.
///
/// Tidak ada varian untuk "belum dicek"; itu diekspresikan dengan tidak
/// adanya key di peta error step, bukan dengan string kosong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} wajib diisi")]
    Required(&'static str),
    #[error("{0} minimal {1} karakter")]
    TooShort(&'static str, usize),
    #[error("{0} hanya boleh berisi huruf")]
    LettersOnly(&'static str),
    #[error("Email yang dimasukkan tidak valid")]
    InvalidEmail,
    #[error("Nomor telepon tidak valid")]
    InvalidPhone,
    #[error("{label} harus terdiri dari {expected} digit angka")]
    DigitsExact { label: &'static str, expected: usize },
    #[error("Password minimal 8 karakter")]
    PasswordTooShort,
    #[error("Password tidak boleh mengandung spasi")]
    PasswordHasWhitespace,
    #[error("Password harus mengandung huruf besar, huruf kecil, dan angka")]
    PasswordComplexity,
    #[error("Konfirmasi password tidak sama")]
    ConfirmationMismatch,
    #[error("Format file harus PDF, JPG, JPEG, atau PNG")]
    FileType,
    #[error("Ukuran file maksimal {0} MB")]
    FileTooLarge(usize),
    #[error("Anda harus menyetujui syarat dan ketentuan")]
    TermsNotAccepted,
    #[error("Harga jasa harus lebih dari 0")]
    InvalidPrice,
    #[error("{0} tidak valid")]
    InvalidYear(&'static str),
    #[error("Tahun selesai tidak boleh sebelum tahun mulai")]
    YearOrder,
}

pub fn validate_required(label: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required(label));
    }
    Ok(())
}

pub fn validate_min_length(
    label: &'static str,
    value: &str,
    min: usize,
) -> Result<(), FieldError> {
    if value.trim().chars().count() < min {
        return Err(FieldError::TooShort(label, min));
    }
    Ok(())
}

pub fn validate_letters_only(label: &'static str, value: &str) -> Result<(), FieldError> {
    if !LETTERS_RE.is_match(value.trim()) {
        return Err(FieldError::LettersOnly(label));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let email = value.trim();
    if email.is_empty() {
        return Err(FieldError::Required("Email"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Normalize nomor telepon ke bentuk "08...": menerima awalan `08`, `62`,
/// atau `+62`; spasi, titik, dan strip diabaikan.
pub fn normalize_phone(value: &str) -> String {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect();

    if let Some(rest) = compact.strip_prefix("+62") {
        format!("0{rest}")
    } else if let Some(rest) = compact.strip_prefix("62") {
        format!("0{rest}")
    } else {
        compact
    }
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required("Nomor telepon"));
    }
    if !PHONE_RE.is_match(&normalize_phone(value)) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

fn validate_digits_exact(
    label: &'static str,
    value: &str,
    expected: usize,
    strip: &[char],
) -> Result<(), FieldError> {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !strip.contains(c))
        .collect();

    if digits.len() != expected || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::DigitsExact { label, expected });
    }
    Ok(())
}

/// NIK: tepat 16 digit setelah whitespace dibuang.
pub fn validate_nik(value: &str) -> Result<(), FieldError> {
    validate_digits_exact("NIK", value, 16, &[])
}

/// NPWP: tepat 15 digit; format bertitik "99.999.999.9-999.999" diterima.
pub fn validate_npwp(value: &str) -> Result<(), FieldError> {
    validate_digits_exact("NPWP", value, 15, &['.', '-'])
}

/// Varian register: panjang >= 8, ada huruf besar, huruf kecil, angka, dan
/// tanpa whitespace. Lolos persis ketika kelima syarat terpenuhi.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < 8 {
        return Err(FieldError::PasswordTooShort);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::PasswordHasWhitespace);
    }
    let has_upper = value.chars().any(char::is_uppercase);
    let has_lower = value.chars().any(char::is_lowercase);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_upper && has_lower && has_digit) {
        return Err(FieldError::PasswordComplexity);
    }
    Ok(())
}

/// Varian login: hanya wajib diisi dan minimal 8 karakter. Sengaja lebih
/// longgar dari varian register; layar login tidak menolak password lama
/// yang dibuat sebelum aturan kompleksitas berlaku.
pub fn validate_login_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Password"));
    }
    if value.chars().count() < 8 {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), FieldError> {
    if password != confirmation {
        return Err(FieldError::ConfirmationMismatch);
    }
    Ok(())
}
