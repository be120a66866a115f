use super::*;
use crate::net::types::AssetKind;

fn asset(filename: &str) -> Asset {
    Asset {
        key: format!("examples/x/before/{filename}"),
        url: String::new(),
        size: 1,
        last_modified: "2025-06-01T00:00:00Z".to_owned(),
        category: "x".to_owned(),
        subcategory: None,
        kind: AssetKind::Before,
        filename: filename.to_owned(),
    }
}

#[test]
fn finish_applies_matching_fetch() {
    let mut state = AssetsState::default();
    let seq = state.begin_fetch();
    assert!(state.loading);

    state.finish(seq, Ok(vec![asset("1.png")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = AssetsState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    // The slow first response lands after the second fetch started.
    state.finish(first, Ok(vec![asset("1.png")]));
    assert!(state.items.is_empty());
    assert!(state.loading);

    state.finish(second, Ok(vec![asset("2.png")]));
    assert_eq!(state.items[0].filename, "2.png");
    assert!(!state.loading);
}

#[test]
fn errors_keep_previous_items() {
    let mut state = AssetsState::default();
    let seq = state.begin_fetch();
    state.finish(seq, Ok(vec![asset("1.png")]));

    let seq = state.begin_fetch();
    state.finish(seq, Err("boom".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn success_clears_a_previous_error() {
    let mut state = AssetsState::default();
    let seq = state.begin_fetch();
    state.finish(seq, Err("boom".to_owned()));

    let seq = state.begin_fetch();
    state.finish(seq, Ok(vec![]));
    assert_eq!(state.error, None);
}
