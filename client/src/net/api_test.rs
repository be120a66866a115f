use super::*;

#[test]
fn endpoint_paths_match_the_backend_contract() {
    assert_eq!(CATEGORIES_PATH, "/admin/examples/categories");
    assert_eq!(LIST_PATH, "/admin/examples/list");
    assert_eq!(UPLOAD_PATH, "/admin/examples/upload");
    assert_eq!(AUDIO_LIST_PATH, "/admin/examples/audio/list");
    assert_eq!(AUDIO_UPLOAD_PATH, "/admin/examples/audio/upload");
}

#[test]
fn delete_asset_path_includes_subcategory_segment() {
    assert_eq!(
        delete_asset_path("comic-translation", Some("japanese"), AssetKind::Before, "3.png"),
        "/admin/examples/delete/comic-translation/japanese/before/3.png"
    );
}

#[test]
fn delete_asset_path_omits_subcategory_when_absent() {
    assert_eq!(
        delete_asset_path("photo-restoration", None, AssetKind::After, "1.jpg"),
        "/admin/examples/delete/photo-restoration/after/1.jpg"
    );
}

#[test]
fn delete_audio_path_encodes_mode_and_language() {
    assert_eq!(
        delete_audio_path(SpeakerMode::Multi, Language::Hindi, "2.mp3"),
        "/admin/examples/audio/delete/multi/hindi/2.mp3"
    );
}

#[test]
fn backend_detail_prefers_detail_field() {
    assert_eq!(backend_detail(422, r#"{"detail": "unsupported file type"}"#), "unsupported file type");
}

#[test]
fn backend_detail_falls_back_to_raw_body() {
    assert_eq!(backend_detail(500, "internal error"), "internal error");
}

#[test]
fn backend_detail_falls_back_to_status_for_empty_body() {
    assert_eq!(backend_detail(502, "  "), "request failed with status 502");
}
