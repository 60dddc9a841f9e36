use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn anchor_on_home_scrolls_in_place() {
    assert_eq!(resolve("/#about", "/"), NavTarget::ScrollTo("about".to_owned()));
}

#[test]
fn anchor_off_home_navigates_then_scrolls() {
    assert_eq!(
        resolve("/#contact", "/proyectos/infraestructura"),
        NavTarget::RouteThenScroll {
            path: "/#contact".to_owned(),
            anchor: "contact".to_owned(),
        }
    );
}

#[test]
fn plain_paths_are_routes() {
    assert_eq!(resolve("/", "/"), NavTarget::Route("/".to_owned()));
    assert_eq!(
        resolve("/proyectos/obras-civiles", "/"),
        NavTarget::Route("/proyectos/obras-civiles".to_owned())
    );
}

#[test]
fn bare_fragment_is_a_route() {
    assert_eq!(resolve("/#", "/"), NavTarget::Route("/#".to_owned()));
}

#[test]
fn fragment_not_at_root_is_a_route() {
    assert_eq!(
        resolve("/proyectos#top", "/"),
        NavTarget::Route("/proyectos#top".to_owned())
    );
}

// =============================================================
// anchor_from_hash
// =============================================================

#[test]
fn anchor_from_hash_strips_leading_hash() {
    assert_eq!(anchor_from_hash("#about"), Some("about"));
    assert_eq!(anchor_from_hash("about"), Some("about"));
}

#[test]
fn anchor_from_hash_empty_is_none() {
    assert_eq!(anchor_from_hash(""), None);
    assert_eq!(anchor_from_hash("#"), None);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn category_path_nests_under_proyectos() {
    assert_eq!(category_path("infraestructura"), "/proyectos/infraestructura");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_anchor_is_noop_without_browser() {
    assert!(!scroll_to_anchor("about"));
}
