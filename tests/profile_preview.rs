// Edit profil dengan salinan kerja vs salinan server, dan agregasi
// halaman preview talenta dari empat sumber sekaligus.

mod common;

use std::sync::atomic::Ordering;

use common::{
    init_logging, sample_certificate, sample_experience, sample_profile, sample_recommendation,
    FakeCertificateApi, FakeExperienceApi, FakeRecommendationApi, FakeUserApi,
};
use talenta_client::models::RecommendationStatus;
use talenta_client::{load_preview, ProfileEditor};

#[tokio::test]
async fn save_promotes_working_copy_to_server_copy() {
    init_logging();
    let profile = sample_profile();
    let id = profile.id;
    let api = FakeUserApi::new(profile);

    let mut editor = ProfileEditor::load(&api, id, "token").await.unwrap();
    assert!(!editor.is_dirty());

    editor.working_mut().about_me = "Sekarang juga melayani proyek luar kota".into();
    editor.working_mut().price = 2_000_000;
    assert!(editor.is_dirty());
    // salinan server belum tersentuh sebelum save
    assert_eq!(editor.saved().price, 1_500_000);

    editor.save(&api).await.unwrap();
    assert!(!editor.is_dirty());
    assert_eq!(editor.saved().price, 2_000_000);
    assert_eq!(api.stored.lock().unwrap().price, 2_000_000);
}

#[tokio::test]
async fn rejected_save_keeps_edits_in_the_form() {
    init_logging();
    let profile = sample_profile();
    let id = profile.id;
    let api = FakeUserApi::new(profile);

    let mut editor = ProfileEditor::load(&api, id, "token").await.unwrap();
    editor.working_mut().skill = "Pengelasan bawah air".into();

    api.fail.store(true, Ordering::SeqCst);
    assert!(editor.save(&api).await.is_err());

    // isian user tetap di form, server tetap pada versi lama
    assert!(editor.is_dirty());
    assert_eq!(editor.working().skill, "Pengelasan bawah air");
    assert_eq!(editor.saved().skill, "Pengelasan");
    assert_eq!(editor.last_error(), Some("Server sedang bermasalah"));
    assert_eq!(api.stored.lock().unwrap().skill, "Pengelasan");

    // server pulih, klik simpan lagi
    api.fail.store(false, Ordering::SeqCst);
    editor.save(&api).await.unwrap();
    assert!(!editor.is_dirty());
    assert_eq!(editor.last_error(), None);
}

#[tokio::test]
async fn reset_discards_unsaved_changes() {
    init_logging();
    let profile = sample_profile();
    let id = profile.id;
    let api = FakeUserApi::new(profile);

    let mut editor = ProfileEditor::load(&api, id, "token").await.unwrap();
    editor.working_mut().name = "Nama Iseng".into();
    assert!(editor.is_dirty());

    editor.reset_changes();
    assert!(!editor.is_dirty());
    assert_eq!(editor.working().name, "Budi Santoso");
}

#[tokio::test]
async fn preview_aggregates_all_four_sections() {
    init_logging();
    let profile = sample_profile();
    let user_id = profile.id;

    let users = FakeUserApi::new(profile);
    let experiences =
        FakeExperienceApi::with_items(vec![sample_experience("Welder"), sample_experience("Mandor")]);
    let certificates = FakeCertificateApi::with_items(vec![sample_certificate("SKK Jenjang 4")]);
    let recommendations = FakeRecommendationApi::with_items(vec![
        sample_recommendation("Andi", RecommendationStatus::Approved),
        sample_recommendation("Citra", RecommendationStatus::Pending),
        sample_recommendation("Dewi", RecommendationStatus::Rejected),
    ]);

    let preview = load_preview(user_id, &users, &experiences, &certificates, &recommendations)
        .await
        .unwrap();

    assert_eq!(preview.profile.id, user_id);
    assert_eq!(preview.experiences.len(), 2);
    assert_eq!(preview.certificates.len(), 1);
    assert_eq!(preview.recommendations.len(), 3);

    // halaman publik hanya menampilkan rekomendasi yang disetujui
    let approved: Vec<_> = preview.approved_recommendations().collect();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].author_name, "Andi");
}

#[tokio::test]
async fn preview_fails_when_any_section_fails() {
    init_logging();
    let profile = sample_profile();
    let user_id = profile.id;

    let users = FakeUserApi::new(profile);
    let experiences = FakeExperienceApi::default();
    experiences.fail.store(true, Ordering::SeqCst);
    let certificates = FakeCertificateApi::default();
    let recommendations = FakeRecommendationApi::default();

    let result = load_preview(user_id, &users, &experiences, &certificates, &recommendations).await;
    assert!(result.is_err());
}
