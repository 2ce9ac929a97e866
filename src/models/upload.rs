use mime::Mime;

/// File yang dipilih user di form (KTP, NPWP, sertifikat) sebelum dikirim
/// sebagai bagian multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased extension, tanpa titik. None kalau nama file tidak punya.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name.rsplit_once('.')?;
        if name.1.is_empty() {
            return None;
        }
        Some(name.1.to_ascii_lowercase())
    }

    /// Content type untuk part multipart, ditentukan dari extension.
    pub fn mime_type(&self) -> Mime {
        match self.extension().as_deref() {
            Some("pdf") => mime::APPLICATION_PDF,
            Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
            Some("png") => mime::IMAGE_PNG,
            _ => mime::APPLICATION_OCTET_STREAM,
        }
    }
}
