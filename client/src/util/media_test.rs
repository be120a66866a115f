use super::*;

#[test]
fn video_extensions_are_detected_case_insensitively() {
    assert!(is_video_filename("3.mp4"));
    assert!(is_video_filename("3.WEBM"));
    assert!(is_video_filename("clip.MoV"));
}

#[test]
fn images_and_bare_names_are_not_videos() {
    assert!(!is_video_filename("3.png"));
    assert!(!is_video_filename("3.jpg"));
    assert!(!is_video_filename("mp4"));
    assert!(!is_video_filename(""));
}

#[test]
fn format_size_picks_sensible_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2 KB");
    assert_eq!(format_size(3 * 1024 * 1024 + 200 * 1024), "3.2 MB");
}
