use super::*;

#[test]
fn nav_item_class_marks_exact_match_active() {
    assert_eq!(nav_item_class("/dashboard", "/dashboard"), "sidebar__link sidebar__link--active");
    assert_eq!(nav_item_class("/dashboard/", "/dashboard"), "sidebar__link sidebar__link--active");
}

#[test]
fn nav_item_class_leaves_other_links_plain() {
    assert_eq!(nav_item_class("/skills", "/dashboard"), "sidebar__link");
    assert_eq!(nav_item_class("/skills/arrays", "/skills"), "sidebar__link");
}

#[test]
fn nav_items_are_gated_routes() {
    for item in NAV_ITEMS {
        assert!(!session::routes::is_public(item.href), "{} should be gated", item.href);
        assert!(item.href.starts_with('/'));
    }
}
