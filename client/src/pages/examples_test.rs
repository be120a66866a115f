use super::*;
use crate::net::types::AssetKind;

fn asset(category: &str, subcategory: Option<&str>, kind: AssetKind, filename: &str) -> Asset {
    Asset {
        key: format!("examples/{category}/{filename}"),
        url: String::new(),
        size: 1,
        last_modified: "2025-06-01T00:00:00Z".to_owned(),
        category: category.to_owned(),
        subcategory: subcategory.map(ToOwned::to_owned),
        kind,
        filename: filename.to_owned(),
    }
}

#[test]
fn subcategory_options_are_distinct_sorted_and_scoped() {
    let items = vec![
        asset("comic-translation", Some("korean"), AssetKind::Before, "1.png"),
        asset("comic-translation", Some("japanese"), AssetKind::Before, "1.png"),
        asset("comic-translation", Some("japanese"), AssetKind::After, "1.png"),
        asset("photo-restoration", Some("studio"), AssetKind::Before, "1.png"),
        asset("comic-translation", None, AssetKind::Before, "2.png"),
    ];
    assert_eq!(subcategory_options(&items, "comic-translation"), vec!["japanese", "korean"]);
}

#[test]
fn assets_in_view_filters_by_category_and_subcategory() {
    let items = vec![
        asset("comic-translation", Some("japanese"), AssetKind::Before, "1.png"),
        asset("comic-translation", Some("korean"), AssetKind::Before, "2.png"),
        asset("photo-restoration", None, AssetKind::Before, "3.png"),
    ];
    let all = assets_in_view(&items, "comic-translation", None);
    assert_eq!(all.len(), 2);

    let japanese = assets_in_view(&items, "comic-translation", Some("japanese"));
    assert_eq!(japanese.len(), 1);
    assert_eq!(japanese[0].filename, "1.png");
}

#[test]
fn upload_subcategory_prefers_typed_value() {
    let options = vec!["japanese".to_owned()];
    assert_eq!(
        upload_subcategory(&options, Some("japanese"), " chinese "),
        Ok(Some("chinese".to_owned()))
    );
}

#[test]
fn upload_subcategory_uses_selected_filter() {
    let options = vec!["japanese".to_owned()];
    assert_eq!(upload_subcategory(&options, Some("japanese"), ""), Ok(Some("japanese".to_owned())));
}

#[test]
fn upload_subcategory_requires_choice_when_category_has_subcategories() {
    let options = vec!["japanese".to_owned()];
    assert_eq!(upload_subcategory(&options, None, ""), Err("Select a subcategory before uploading."));
}

#[test]
fn upload_subcategory_allows_flat_categories() {
    assert_eq!(upload_subcategory(&[], None, ""), Ok(None));
}

#[test]
fn delete_prompt_includes_full_location() {
    let with_sub = asset("comic-translation", Some("japanese"), AssetKind::Before, "3.png");
    assert_eq!(
        delete_prompt(&with_sub),
        "Delete 3.png from comic-translation/japanese/before? This cannot be undone."
    );

    let flat = asset("photo-restoration", None, AssetKind::After, "1.jpg");
    assert_eq!(
        delete_prompt(&flat),
        "Delete 1.jpg from photo-restoration/after? This cannot be undone."
    );
}
