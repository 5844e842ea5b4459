//! Selection repair after the set of open tabs changes.
//!
//! Every closure policy only computes a new visible list; this is the single
//! place that decides what becomes selected and where to navigate.

use crate::domain::page::{Page, PageIndex};

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub selected: Option<PageIndex>,
    pub navigate_to: Option<String>,
}

/// Decide the selection after `prev_visible` became `new_visible`.
///
/// * no tabs left: home
/// * selected tab removed and it sat above every remaining index: the
///   highest remaining index
/// * selected tab removed otherwise: the lowest remaining index
/// * selected tab still open: unchanged
pub fn reconcile(
    prev_selected: Option<PageIndex>,
    prev_visible: &[PageIndex],
    new_visible: &[PageIndex],
    pages: &[Page],
) -> Reconciled {
    let (Some(&min), Some(&max)) = (new_visible.iter().min(), new_visible.iter().max()) else {
        return Reconciled {
            selected: None,
            navigate_to: Some(HOME_PATH.to_string()),
        };
    };

    let removed = prev_selected
        .filter(|sel| prev_visible.contains(sel) && !new_visible.contains(sel));

    let Some(sel) = removed else {
        return Reconciled {
            selected: prev_selected,
            navigate_to: None,
        };
    };

    let target = if sel > max { max } else { min };
    Reconciled {
        selected: Some(target),
        navigate_to: pages.iter().find(|p| p.index == target).map(Page::path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::builtin::builtin_pages;
    use crate::shared::i18n::Language;

    fn pages() -> Vec<Page> {
        builtin_pages(Language::En)
    }

    #[test]
    fn closing_selected_highest_selects_new_max() {
        let r = reconcile(Some(2), &[0, 1, 2], &[0, 1], &pages());
        assert_eq!(r.selected, Some(1));
        assert_eq!(r.navigate_to.as_deref(), Some("/skills"));
    }

    #[test]
    fn closing_selected_in_the_middle_selects_min() {
        let r = reconcile(Some(2), &[1, 2, 3], &[1, 3], &pages());
        assert_eq!(r.selected, Some(1));
        assert_eq!(r.navigate_to.as_deref(), Some("/skills"));
    }

    #[test]
    fn min_follows_index_order_not_strip_order() {
        let r = reconcile(Some(3), &[4, 3, 0], &[4, 0], &pages());
        assert_eq!(r.selected, Some(0));
    }

    #[test]
    fn empty_goes_home() {
        let r = reconcile(Some(0), &[0], &[], &pages());
        assert_eq!(r.selected, None);
        assert_eq!(r.navigate_to.as_deref(), Some(HOME_PATH));
    }

    #[test]
    fn unaffected_selection_is_kept() {
        let r = reconcile(Some(1), &[0, 1, 2], &[1, 2], &pages());
        assert_eq!(r.selected, Some(1));
        assert_eq!(r.navigate_to, None);

        let home = reconcile(None, &[0, 1], &[1], &pages());
        assert_eq!(home.selected, None);
        assert_eq!(home.navigate_to, None);
    }

    #[test]
    fn missing_page_selects_without_navigation() {
        let r = reconcile(Some(50), &[40, 50], &[40], &pages());
        assert_eq!(r.selected, Some(40));
        assert_eq!(r.navigate_to, None);
    }
}
