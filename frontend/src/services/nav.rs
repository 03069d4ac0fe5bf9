//! Active navigation highlighting.
//!
//! Exactly one `[data-pf="nav-link"]` carries `active` and
//! `aria-current="page"` after each resolution; every link is cleared
//! before the match is marked.

use crate::config::{HOME_FILE, HOME_KEY};
use crate::dom::{Element, Hook, Surface};
use crate::types::{NavKey, Notification};

/// Key of a navigation link: `data-nav-key`, else derived from `href`.
pub fn link_key<E: Element>(link: &E) -> NavKey {
    match link.non_empty_attr("data-nav-key") {
        Some(key) => NavKey::new(key),
        None => NavKey::from_href(&link.attr("href").unwrap_or_default()),
    }
}

/// Trailing segment of the location, `index.html` when the path ends in `/`.
fn location_segment<S: Surface>(root: &S) -> String {
    let file = root.location_file();
    if file.is_empty() {
        HOME_FILE.to_string()
    } else {
        file
    }
}

/// Key for the page currently loaded in `root`.
pub fn current_page_key<S: Surface>(root: &S) -> NavKey {
    let key = NavKey::from_file(&location_segment(root));
    if key.as_str().is_empty() {
        NavKey::new(HOME_KEY)
    } else {
        key
    }
}

/// Mark the navigation link for `desired` as active.
///
/// Falls back to matching the location's file name against raw `href`
/// values when no link carries the key. Returns the activated key.
pub fn resolve<S: Surface>(root: &S, desired: Option<&str>) -> Option<NavKey> {
    let links = root.query_all(Hook::NavLink);
    for link in &links {
        link.remove_class("active");
        link.remove_attr("aria-current");
    }

    let desired = desired.filter(|k| !k.is_empty()).unwrap_or(HOME_KEY);

    let activated = match links.iter().find(|link| link_key(*link) == desired) {
        Some(link) => {
            mark(link);
            Some(link_key(link))
        }
        None => resolve_by_href(root, &links),
    };

    if let Some(key) = &activated {
        log::debug!("Navigation highlight -> {}", key);
        root.emit(&Notification::NavActivated { key: key.clone() });
    }
    activated
}

fn resolve_by_href<S: Surface>(root: &S, links: &[S::Element]) -> Option<NavKey> {
    let file = location_segment(root);
    let link = links
        .iter()
        .find(|link| link.attr("href").is_some_and(|href| href == file))?;

    mark(link);
    let key = match link.non_empty_attr("data-nav-key") {
        Some(key) => NavKey::new(key),
        None => NavKey::from_file(&link.attr("href").unwrap_or_default()),
    };
    Some(key)
}

fn mark<E: Element>(link: &E) {
    link.add_class("active");
    link.set_attr("aria-current", "page");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn nav(doc: &MemoryDocument, key: Option<&str>, href: &str) -> MemoryElement {
        let mut link = MemoryElement::new("a")
            .with_attr("data-pf", "nav-link")
            .with_attr("href", href);
        if let Some(key) = key {
            link = link.with_attr("data-nav-key", key);
        }
        doc.append(link)
    }

    fn active(links: &[&MemoryElement]) -> Vec<bool> {
        links.iter().map(|l| l.has_class("active")).collect()
    }

    #[test]
    fn test_explicit_key_wins() {
        let doc = MemoryDocument::new("/create.html");
        let home = nav(&doc, Some("home"), "index.html");
        let create = nav(&doc, Some("create"), "create.html");
        let gallery = nav(&doc, Some("gallery"), "gallery.html");

        for key in ["home", "create", "gallery"] {
            assert_eq!(resolve(&doc, Some(key)), Some(NavKey::new(key)));
        }
        assert_eq!(active(&[&home, &create, &gallery]), vec![false, false, true]);
        assert_eq!(gallery.attr("aria-current").as_deref(), Some("page"));
        assert_eq!(home.attr("aria-current"), None);
    }

    #[test]
    fn test_key_derived_from_href() {
        let doc = MemoryDocument::new("/");
        let link = nav(&doc, None, "/pages/studio.html");
        assert_eq!(resolve(&doc, Some("studio")), Some(NavKey::new("studio")));
        assert!(link.has_class("active"));
    }

    #[test]
    fn test_empty_nav_key_attribute_falls_back_to_href() {
        let doc = MemoryDocument::new("/");
        let link = nav(&doc, Some(""), "gallery.html");
        assert_eq!(link_key(&link), "gallery");
    }

    #[test]
    fn test_duplicate_keys_first_in_order_wins() {
        let doc = MemoryDocument::new("/");
        let first = nav(&doc, Some("create"), "create.html");
        let second = nav(&doc, Some("create"), "create.html#top");

        resolve(&doc, Some("create"));
        assert_eq!(active(&[&first, &second]), vec![true, false]);
    }

    #[test]
    fn test_missing_key_defaults_to_home() {
        let doc = MemoryDocument::new("/gallery.html");
        let home = nav(&doc, None, "index.html");
        nav(&doc, None, "gallery.html");

        assert_eq!(resolve(&doc, None), Some(NavKey::new("index")));
        assert!(home.has_class("active"));
        assert_eq!(resolve(&doc, Some("")), Some(NavKey::new("index")));
    }

    #[test]
    fn test_fallback_matches_raw_href() {
        let doc = MemoryDocument::new("/site/about.html");
        let about = nav(&doc, Some("company"), "about.html");

        assert_eq!(resolve(&doc, Some("missing")), Some(NavKey::new("company")));
        assert!(about.has_class("active"));
    }

    #[test]
    fn test_fallback_empty_segment_matches_home_file() {
        let doc = MemoryDocument::new("/site/");
        let home = nav(&doc, Some("home"), "index.html");

        assert_eq!(resolve(&doc, Some("missing")), Some(NavKey::new("home")));
        assert!(home.has_class("active"));
    }

    #[test]
    fn test_fallback_ignores_links_without_href_at_directory_path() {
        let doc = MemoryDocument::new("/site/");
        let about = doc.append(
            MemoryElement::new("a")
                .with_attr("data-pf", "nav-link")
                .with_attr("data-nav-key", "about"),
        );
        let blank = nav(&doc, Some("blank"), "");

        assert_eq!(resolve(&doc, Some("missing")), None);
        assert_eq!(active(&[&about, &blank]), vec![false, false]);
        assert!(doc.notifications().is_empty());
    }

    #[test]
    fn test_fallback_compares_full_href_not_key() {
        let doc = MemoryDocument::new("/create.html");
        let link = nav(&doc, Some("make"), "/pages/create.html");

        assert_eq!(resolve(&doc, Some("missing")), None);
        assert!(!link.has_class("active"));
    }

    #[test]
    fn test_no_match_clears_and_stays_silent() {
        let doc = MemoryDocument::new("/unknown.html");
        let link = nav(&doc, Some("home"), "index.html");
        resolve(&doc, Some("home"));
        doc.take_notifications();

        assert_eq!(resolve(&doc, Some("missing")), None);
        assert!(!link.has_class("active"));
        assert!(doc.notifications().is_empty());
    }

    #[test]
    fn test_emits_nav_activated() {
        let doc = MemoryDocument::new("/");
        nav(&doc, Some("gallery"), "gallery.html");
        resolve(&doc, Some("gallery"));
        assert_eq!(
            doc.notifications(),
            vec![Notification::NavActivated { key: NavKey::new("gallery") }]
        );
    }

    #[test]
    fn test_current_page_key() {
        assert_eq!(current_page_key(&MemoryDocument::new("/create.html")), "create");
        assert_eq!(current_page_key(&MemoryDocument::new("/")), "index");
        assert_eq!(current_page_key(&MemoryDocument::new("/app/studio")), "studio");
        assert_eq!(current_page_key(&MemoryDocument::new("/.hidden")), "index");
    }
}
