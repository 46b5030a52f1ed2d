//! Same-page anchor scrolling.

/// The selector to resolve for an anchor's `href`, or `None` when the link
/// should not be intercepted (a bare `#`, or not a fragment link at all).
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Decide what a click on an anchor does. `locate` resolves a selector to the
/// target's viewport-relative top, returning `None` when no element matches or
/// the selector is rejected.
///
/// Returns the target's top when the click should be intercepted, `None` when
/// default navigation should proceed. `locate` is not called for links that
/// are never intercepted.
pub fn resolve_click<F>(href: Option<&str>, locate: F) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    let selector = anchor_selector(href?)?;
    locate(selector)
}

/// Document-space scroll position that puts an element just below the nav.
///
/// `element_top` is the element's viewport-relative top, `scroll_y` the current
/// offset, `nav_height` the nav bar's rendered height (0 when absent).
pub fn scroll_target(element_top: f64, scroll_y: f64, nav_height: f64, gap: f64) -> f64 {
    element_top + scroll_y - nav_height - gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_intercepted() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/pricing"), None);
        assert_eq!(anchor_selector("#features"), Some("#features"));
    }

    #[test]
    fn click_on_existing_target_is_intercepted() {
        let top = resolve_click(Some("#pricing"), |sel| {
            assert_eq!(sel, "#pricing");
            Some(420.0)
        });
        assert_eq!(top, Some(420.0));
    }

    #[test]
    fn missing_target_keeps_default_navigation() {
        assert_eq!(resolve_click(Some("#nowhere"), |_| None), None);
    }

    #[test]
    fn rejected_selector_counts_as_missing() {
        // "#1st" is not a valid CSS selector; the browser lookup fails.
        let lookup = |sel: &str| -> Result<Option<f64>, ()> {
            if sel.as_bytes().get(1).is_some_and(u8::is_ascii_digit) {
                Err(())
            } else {
                Ok(Some(10.0))
            }
        };
        assert_eq!(resolve_click(Some("#1st"), |sel| lookup(sel).ok().flatten()), None);
        assert_eq!(resolve_click(Some("#first"), |sel| lookup(sel).ok().flatten()), Some(10.0));
    }

    #[test]
    fn bare_hash_and_missing_href_skip_lookup() {
        let never = |_: &str| -> Option<f64> { panic!("lookup should not run") };
        assert_eq!(resolve_click(Some("#"), never), None);
        assert_eq!(resolve_click(None, never), None);
        assert_eq!(resolve_click(Some("/about"), never), None);
    }

    #[test]
    fn target_offsets_by_nav_and_gap() {
        assert_eq!(scroll_target(400.0, 1200.0, 72.0, 16.0), 1512.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 0.0, 16.0), 884.0);
    }
}
