//! Navigation target resolution and in-page anchor scrolling.
//!
//! Header links are either routes (`/proyectos/obras-civiles`) or anchors on
//! the home page (`/#about`). Anchors scroll in place when the home page is
//! already showing; from any other page they navigate home and the home page
//! scrolls once it has mounted (see `pages::home`).

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub const HOME_PATH: &str = "/";

const ANCHOR_PREFIX: &str = "/#";

/// What a header link should do given the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Smooth-scroll to the element with this id; no route change.
    ScrollTo(String),
    /// Navigate to `path`, then scroll to `anchor` after the page mounts.
    RouteThenScroll { path: String, anchor: String },
    /// Plain route change.
    Route(String),
}

/// Decide how to reach `path` from `current_path`.
pub fn resolve(path: &str, current_path: &str) -> NavTarget {
    match path.strip_prefix(ANCHOR_PREFIX) {
        Some(anchor) if !anchor.is_empty() => {
            if current_path == HOME_PATH {
                NavTarget::ScrollTo(anchor.to_owned())
            } else {
                NavTarget::RouteThenScroll {
                    path: path.to_owned(),
                    anchor: anchor.to_owned(),
                }
            }
        }
        _ => NavTarget::Route(path.to_owned()),
    }
}

/// Element id named by a location fragment, with or without the leading `#`.
pub fn anchor_from_hash(hash: &str) -> Option<&str> {
    let anchor = hash.strip_prefix('#').unwrap_or(hash);
    (!anchor.is_empty()).then_some(anchor)
}

pub fn category_path(category_id: &str) -> String {
    format!("/proyectos/{category_id}")
}

/// Smooth-scroll the element with id `anchor` into view.
///
/// Returns `false` if there is no such element (or no browser), which callers
/// treat as a no-op.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            log::debug!("anchor #{anchor} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
        false
    }
}
