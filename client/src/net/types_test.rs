use super::*;

#[test]
fn asset_deserializes_image_type_into_kind() {
    let json = r#"{
        "key": "examples/comic-translation/japanese/before/1.png",
        "url": "https://cdn.example.com/1.png",
        "size": 1024,
        "last_modified": "2025-06-01T12:00:00Z",
        "category": "comic-translation",
        "subcategory": "japanese",
        "image_type": "before",
        "filename": "1.png"
    }"#;
    let asset: Asset = serde_json::from_str(json).expect("asset should parse");
    assert_eq!(asset.kind, AssetKind::Before);
    assert_eq!(asset.subcategory.as_deref(), Some("japanese"));
    assert_eq!(asset.filename, "1.png");
}

#[test]
fn asset_subcategory_defaults_to_none_when_missing() {
    let json = r#"{
        "key": "examples/photo-restoration/after/2.jpg",
        "url": "https://cdn.example.com/2.jpg",
        "size": 2048,
        "last_modified": "2025-06-02T08:30:00Z",
        "category": "photo-restoration",
        "image_type": "after",
        "filename": "2.jpg"
    }"#;
    let asset: Asset = serde_json::from_str(json).expect("asset should parse");
    assert_eq!(asset.subcategory, None);
    assert_eq!(asset.kind, AssetKind::After);
}

#[test]
fn audio_asset_parses_mode_and_language() {
    let json = r#"{
        "key": "examples/audio/single/english/1.mp3",
        "url": "https://cdn.example.com/1.mp3",
        "size": 4096,
        "last_modified": "2025-06-03T10:00:00Z",
        "speaker_mode": "single",
        "language": "english",
        "filename": "1.mp3"
    }"#;
    let asset: AudioAsset = serde_json::from_str(json).expect("audio asset should parse");
    assert_eq!(asset.speaker_mode, SpeakerMode::Single);
    assert_eq!(asset.language, Language::English);
}

#[test]
fn enums_serialize_lowercase() {
    assert_eq!(AssetKind::Before.as_str(), "before");
    assert_eq!(AssetKind::After.to_string(), "after");
    assert_eq!(SpeakerMode::Multi.as_str(), "multi");
    assert_eq!(Language::Hindi.to_string(), "hindi");
}

#[test]
fn error_detail_parses_backend_body() {
    let body: ErrorDetail =
        serde_json::from_str(r#"{"detail": "file too large"}"#).expect("detail should parse");
    assert_eq!(body.detail, "file too large");
}
