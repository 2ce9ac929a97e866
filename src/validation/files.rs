// Pemeriksaan file upload (KTP, NPWP, sertifikat) sebelum dikirim ke API.

use crate::models::FileUpload;
use crate::validation::fields::FieldError;

pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

pub const MAX_UPLOAD_MB: usize = 5;

pub const MAX_UPLOAD_BYTES: usize = MAX_UPLOAD_MB * 1024 * 1024;

/// Cek ekstensi (case-insensitive) lalu ukuran. File tanpa ekstensi ditolak
/// sebagai salah format, bukan salah ukuran.
pub fn validate_upload(file: &FileUpload) -> Result<(), FieldError> {
    match file.extension() {
        Some(ext) if ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(FieldError::FileType),
    }
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(FieldError::FileTooLarge(MAX_UPLOAD_MB));
    }
    Ok(())
}
