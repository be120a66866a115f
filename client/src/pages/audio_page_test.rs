use super::*;

#[test]
fn audio_delete_prompt_names_the_group() {
    let asset = AudioAsset {
        key: "examples/audio/multi/hindi/2.mp3".to_owned(),
        url: String::new(),
        size: 1,
        last_modified: "2025-06-01T00:00:00Z".to_owned(),
        speaker_mode: SpeakerMode::Multi,
        language: Language::Hindi,
        filename: "2.mp3".to_owned(),
    };
    assert_eq!(
        audio_delete_prompt(&asset),
        "Delete 2.mp3 from multi/hindi? This cannot be undone."
    );
}

#[test]
fn selector_constants_cover_every_group() {
    assert_eq!(SPEAKER_MODES.len(), 2);
    assert_eq!(LANGUAGES.len(), 2);
}
