// Penyimpanan sesi di sisi klien. Di shell web perannya dimainkan cookie;
// di sini trait-nya, plus implementasi memori (test) dan file JSON
// (shell desktop / tool lokal).

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::{fs, io};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// Blob yang bertahan antar sesi: token plus profil hasil login terakhir
/// supaya render pertama tidak menunggu whoami.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: UserProfile,
}

/// Kontrak penyimpanan sesi. Gagal tulis/baca tidak pernah menggagalkan
/// alur auth; cukup dicatat dan dianggap kosong.
pub trait SessionStorage {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: &PersistedSession);
    fn clear(&self);
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Option<PersistedSession>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<PersistedSession> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, session: &PersistedSession) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Option<PersistedSession> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("gagal baca file sesi {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("file sesi {} korup: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, session: &PersistedSession) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                warn!("gagal serialisasi sesi: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!("gagal tulis file sesi {}: {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("gagal hapus file sesi {}: {}", self.path.display(), e),
        }
    }
}
