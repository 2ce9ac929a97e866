// Editor list pengalaman dan sertifikat. Inti state-nya murni dan
// dipakai dua arah: berdiri sendiri untuk draft lokal saat register
// (id dibuat di klien), atau dibungkus editor ber-service yang
// menerapkan transisi lokal hanya setelah server menerima.

use log::warn;
use thiserror::Error;
use uuid::Uuid;

use crate::dtos::talent::{CertificatePayload, ExperiencePayload};
use crate::models::{CertificateDetail, ExperienceDetail, FileUpload};
use crate::services::api::ApiError;
use crate::services::traits::{CertificateApi, ExperienceApi};
use crate::validation::steps::{self, StepValidation};

pub trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for ExperienceDetail {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for CertificateDetail {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Satu modal dipakai bergantian untuk tambah dan ubah.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorModal {
    Closed,
    Add,
    Edit(Uuid),
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Periksa kembali isian modal")]
    Validation(StepValidation),
    #[error("Tidak ada modal yang terbuka")]
    ModalClosed,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// State murni list + modal + mode edit. Tidak tahu apa-apa soal server;
/// `apply_*` hanya transisi array.
#[derive(Debug, Clone)]
pub struct ListEditorState<T> {
    items: Vec<T>,
    edit_mode: bool,
    modal: EditorModal,
    last_error: Option<String>,
}

impl<T: HasId> Default for ListEditorState<T> {
    fn default() -> Self {
        ListEditorState::new()
    }
}

impl<T: HasId> ListEditorState<T> {
    pub fn new() -> Self {
        ListEditorState {
            items: Vec::new(),
            edit_mode: false,
            modal: EditorModal::Closed,
            last_error: None,
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        ListEditorState { items, ..ListEditorState::new() }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Empty-state tampil persis ketika list kosong.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    pub fn modal(&self) -> EditorModal {
        self.modal
    }

    pub fn open_add(&mut self) {
        self.modal = EditorModal::Add;
    }

    /// Buka modal ubah untuk entri yang ada; id tak dikenal dibiarkan.
    pub fn open_edit(&mut self, id: Uuid) -> bool {
        if self.get(id).is_none() {
            warn!("open_edit untuk id yang tidak ada di list: {}", id);
            return false;
        }
        self.modal = EditorModal::Edit(id);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = EditorModal::Closed;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Ganti isi list (hasil load ulang); modal dan mode edit bertahan.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn apply_add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Map-replace berdasarkan id; posisi entri tidak berubah.
    pub fn apply_update(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn apply_remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}

/// Editor pengalaman yang terhubung backend. Setiap mutasi menunggu
/// jawaban server dulu; kalau ditolak, list lokal tidak berubah dan
/// pesannya tampil sebagai error inline. Tidak ada rollback karena tidak
/// ada yang dioptimiskan.
pub struct ExperienceEditor<S> {
    service: S,
    token: String,
    user_id: Uuid,
    state: ListEditorState<ExperienceDetail>,
}

impl<S: ExperienceApi> ExperienceEditor<S> {
    pub fn new(service: S, token: impl Into<String>, user_id: Uuid) -> Self {
        ExperienceEditor {
            service,
            token: token.into(),
            user_id,
            state: ListEditorState::new(),
        }
    }

    pub fn state(&self) -> &ListEditorState<ExperienceDetail> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListEditorState<ExperienceDetail> {
        &mut self.state
    }

    pub async fn load(&mut self) -> Result<(), EditorError> {
        match self.service.list_for_user(self.user_id).await {
            Ok(items) => {
                self.state.set_items(items);
                self.state.clear_error();
                Ok(())
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Submit isi modal: validasi lokal, lalu create/update mengikuti
    /// modal yang terbuka. Modal baru ditutup setelah server menerima.
    pub async fn submit_modal(&mut self, draft: ExperienceDetail) -> Result<(), EditorError> {
        let validation = steps::validate_experience_form(&draft);
        if !validation.is_valid {
            return Err(EditorError::Validation(validation));
        }

        let payload = ExperiencePayload::from_detail(self.user_id, &draft);
        match self.state.modal() {
            EditorModal::Closed => Err(EditorError::ModalClosed),
            EditorModal::Add => match self.service.create(&self.token, &payload).await {
                Ok(created) => {
                    self.state.apply_add(created);
                    self.state.close_modal();
                    self.state.clear_error();
                    Ok(())
                }
                Err(e) => {
                    self.state.set_error(e.to_string());
                    Err(e.into())
                }
            },
            EditorModal::Edit(id) => match self.service.update(&self.token, id, &payload).await {
                Ok(updated) => {
                    self.state.apply_update(updated);
                    self.state.close_modal();
                    self.state.clear_error();
                    Ok(())
                }
                Err(e) => {
                    self.state.set_error(e.to_string());
                    Err(e.into())
                }
            },
        }
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<(), EditorError> {
        match self.service.delete(&self.token, id).await {
            Ok(()) => {
                self.state.apply_remove(id);
                self.state.clear_error();
                Ok(())
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e.into())
            }
        }
    }
}

/// Kembaran [`ExperienceEditor`] untuk sertifikat; bedanya modal bisa
/// membawa file lampiran.
pub struct CertificateEditor<S> {
    service: S,
    token: String,
    user_id: Uuid,
    state: ListEditorState<CertificateDetail>,
}

impl<S: CertificateApi> CertificateEditor<S> {
    pub fn new(service: S, token: impl Into<String>, user_id: Uuid) -> Self {
        CertificateEditor {
            service,
            token: token.into(),
            user_id,
            state: ListEditorState::new(),
        }
    }

    pub fn state(&self) -> &ListEditorState<CertificateDetail> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListEditorState<CertificateDetail> {
        &mut self.state
    }

    pub async fn load(&mut self) -> Result<(), EditorError> {
        match self.service.list_for_user(self.user_id).await {
            Ok(items) => {
                self.state.set_items(items);
                self.state.clear_error();
                Ok(())
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e.into())
            }
        }
    }

    pub async fn submit_modal(
        &mut self,
        draft: CertificateDetail,
        file: Option<FileUpload>,
    ) -> Result<(), EditorError> {
        let validation = steps::validate_certificate_form(&draft, file.as_ref());
        if !validation.is_valid {
            return Err(EditorError::Validation(validation));
        }

        let payload = CertificatePayload::from_detail(self.user_id, &draft);
        match self.state.modal() {
            EditorModal::Closed => Err(EditorError::ModalClosed),
            EditorModal::Add => {
                match self.service.create(&self.token, &payload, file.as_ref()).await {
                    Ok(created) => {
                        self.state.apply_add(created);
                        self.state.close_modal();
                        self.state.clear_error();
                        Ok(())
                    }
                    Err(e) => {
                        self.state.set_error(e.to_string());
                        Err(e.into())
                    }
                }
            }
            EditorModal::Edit(id) => {
                match self.service.update(&self.token, id, &payload, file.as_ref()).await {
                    Ok(updated) => {
                        self.state.apply_update(updated);
                        self.state.close_modal();
                        self.state.clear_error();
                        Ok(())
                    }
                    Err(e) => {
                        self.state.set_error(e.to_string());
                        Err(e.into())
                    }
                }
            }
        }
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<(), EditorError> {
        match self.service.delete(&self.token, id).await {
            Ok(()) => {
                self.state.apply_remove(id);
                self.state.clear_error();
                Ok(())
            }
            Err(e) => {
                self.state.set_error(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(title: &str) -> ExperienceDetail {
        let mut draft = ExperienceDetail::new_draft();
        draft.title = title.into();
        draft.company = "PT Baja".into();
        draft.start_year = 2020;
        draft
    }

    #[test]
    fn remove_first_of_two_leaves_second() {
        let x = experience("Welder");
        let y = experience("Supervisor");
        let x_id = x.id;
        let y_id = y.id;

        let mut state = ListEditorState::from_items(vec![x, y]);
        assert!(!state.is_empty());

        assert!(state.apply_remove(x_id));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id, y_id);
        assert!(!state.is_empty());

        assert!(state.apply_remove(y_id));
        assert!(state.is_empty());

        // hapus id yang sudah tidak ada: no-op
        assert!(!state.apply_remove(y_id));
    }

    #[test]
    fn update_replaces_in_place() {
        let first = experience("Welder");
        let second = experience("Supervisor");
        let second_id = second.id;

        let mut state = ListEditorState::from_items(vec![first, second]);
        let mut changed = state.get(second_id).cloned().unwrap();
        changed.company = "PT Beton".into();

        assert!(state.apply_update(changed));
        // posisi tetap, isi berubah
        assert_eq!(state.items()[1].id, second_id);
        assert_eq!(state.items()[1].company, "PT Beton");

        let orphan = experience("Orphan");
        assert!(!state.apply_update(orphan));
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn modal_open_close_transitions() {
        let item = experience("Welder");
        let id = item.id;
        let mut state = ListEditorState::from_items(vec![item]);

        assert_eq!(state.modal(), EditorModal::Closed);
        state.open_add();
        assert_eq!(state.modal(), EditorModal::Add);
        state.close_modal();

        assert!(state.open_edit(id));
        assert_eq!(state.modal(), EditorModal::Edit(id));

        // id asing tidak mengubah modal
        state.close_modal();
        assert!(!state.open_edit(Uuid::new_v4()));
        assert_eq!(state.modal(), EditorModal::Closed);
    }

    #[test]
    fn edit_mode_toggles() {
        let mut state: ListEditorState<ExperienceDetail> = ListEditorState::new();
        assert!(!state.is_edit_mode());
        state.toggle_edit_mode();
        assert!(state.is_edit_mode());
        state.toggle_edit_mode();
        assert!(!state.is_edit_mode());
    }

    #[test]
    fn local_draft_flow_for_register() {
        // saat register belum ada server; list editor dipakai langsung
        // dengan id buatan klien
        let mut state: ListEditorState<ExperienceDetail> = ListEditorState::new();
        assert!(state.is_empty());

        state.open_add();
        let draft = experience("Welder");
        assert!(steps::validate_experience_form(&draft).is_valid);
        state.apply_add(draft);
        state.close_modal();

        assert_eq!(state.items().len(), 1);
        assert!(!state.is_empty());
    }
}
