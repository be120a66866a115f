use super::*;

fn asset(kind: AssetKind, filename: &str) -> Asset {
    Asset {
        key: format!("examples/comic-translation/{}/{filename}", kind.as_str()),
        url: format!("https://cdn.example.com/{filename}"),
        size: 100,
        last_modified: "2025-06-01T00:00:00Z".to_owned(),
        category: "comic-translation".to_owned(),
        subcategory: Some("japanese".to_owned()),
        kind,
        filename: filename.to_owned(),
    }
}

#[test]
fn pairs_matching_ordinals_and_surfaces_incomplete_sides() {
    let assets = vec![
        asset(AssetKind::Before, "1.jpg"),
        asset(AssetKind::Before, "2.jpg"),
        asset(AssetKind::After, "1.jpg"),
    ];
    let pairs = reconcile_pairs(&assets);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].ordinal, 1);
    assert!(pairs[0].is_complete());
    assert_eq!(pairs[1].ordinal, 2);
    assert!(pairs[1].before.is_some());
    assert!(pairs[1].after.is_none());
    assert!(!pairs[1].is_complete());
}

#[test]
fn output_is_sorted_regardless_of_input_order() {
    let assets = vec![
        asset(AssetKind::After, "9.png"),
        asset(AssetKind::Before, "2.png"),
        asset(AssetKind::Before, "9.png"),
        asset(AssetKind::After, "1.png"),
    ];
    let ordinals: Vec<u32> = reconcile_pairs(&assets).iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 9]);
}

#[test]
fn gaps_are_tolerated_not_filled() {
    let assets = vec![asset(AssetKind::Before, "1.png"), asset(AssetKind::Before, "5.png")];
    let ordinals: Vec<u32> = reconcile_pairs(&assets).iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, vec![1, 5]);
}

#[test]
fn assets_without_ordinals_are_excluded() {
    let assets = vec![
        asset(AssetKind::Before, "cover.png"),
        asset(AssetKind::Before, "0.png"),
        asset(AssetKind::After, "2.png"),
    ];
    let pairs = reconcile_pairs(&assets);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].ordinal, 2);
}

#[test]
fn reconciliation_is_idempotent() {
    let assets = vec![
        asset(AssetKind::Before, "1.jpg"),
        asset(AssetKind::After, "1.jpg"),
        asset(AssetKind::After, "3.jpg"),
    ];
    assert_eq!(reconcile_pairs(&assets), reconcile_pairs(&assets));
}

#[test]
fn duplicate_ordinal_resolves_to_newest_last_modified() {
    let mut older = asset(AssetKind::Before, "3.png");
    older.key = "examples/a/3.png".to_owned();
    older.last_modified = "2025-01-01T00:00:00Z".to_owned();
    let mut newer = asset(AssetKind::Before, "3.webp");
    newer.key = "examples/b/3.webp".to_owned();
    newer.last_modified = "2025-05-01T00:00:00Z".to_owned();

    // Same result whichever order the listing returns them in.
    let forward = reconcile_pairs(&[older.clone(), newer.clone()]);
    let reverse = reconcile_pairs(&[newer.clone(), older]);
    assert_eq!(forward, reverse);
    assert_eq!(forward[0].before.as_ref().map(|a| a.key.as_str()), Some("examples/b/3.webp"));
}

#[test]
fn duplicate_ordinal_ties_break_on_key() {
    let mut first = asset(AssetKind::After, "4.png");
    first.key = "examples/a/4.png".to_owned();
    let mut second = asset(AssetKind::After, "4.jpg");
    second.key = "examples/z/4.jpg".to_owned();

    let pairs = reconcile_pairs(&[first, second]);
    assert_eq!(pairs[0].after.as_ref().map(|a| a.key.as_str()), Some("examples/z/4.jpg"));
}

#[test]
fn next_pair_ordinal_is_one_past_highest() {
    let assets = vec![asset(AssetKind::Before, "2.png"), asset(AssetKind::After, "7.png")];
    let pairs = reconcile_pairs(&assets);
    assert_eq!(next_pair_ordinal(&pairs), 8);
    assert_eq!(next_pair_ordinal(&[]), 1);
}
