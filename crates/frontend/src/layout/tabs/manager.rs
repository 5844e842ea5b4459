//! Open tabs, selection and the page list behind the editor.
//!
//! Pure state; the reactive wrapper lives in `AppGlobalContext`. Operations
//! that move the user return the path to navigate to.

use super::reconcile::{reconcile, HOME_PATH};
use crate::domain::page::builtin::FALLBACK_INDEX;
use crate::domain::page::{normalize_file_name, Page, PageError, PageIndex, PageRef, PageStore};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabManager {
    pages: Vec<Page>,
    visible: Vec<PageIndex>,
    selected: Option<PageIndex>,
}

impl TabManager {
    /// Every page starts open, nothing selected (home).
    pub fn new(pages: Vec<Page>) -> Self {
        let visible = pages.iter().map(|p| p.index).collect();
        Self {
            pages,
            visible,
            selected: None,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn visible(&self) -> &[PageIndex] {
        &self.visible
    }

    pub fn selected(&self) -> Option<PageIndex> {
        self.selected
    }

    pub fn page(&self, index: PageIndex) -> Option<&Page> {
        self.pages.iter().find(|p| p.index == index)
    }

    pub fn page_by_route(&self, route: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.route == route)
    }

    pub fn is_open(&self, index: PageIndex) -> bool {
        self.visible.contains(&index)
    }

    /// Open (if needed) and select a page. Unknown indices are ignored.
    pub fn open_tab(&mut self, index: PageIndex) -> Option<String> {
        let path = self.page(index)?.path();
        if !self.is_open(index) {
            self.visible.push(index);
        }
        self.selected = Some(index);
        Some(path)
    }

    pub fn close_tab(&mut self, index: PageIndex) -> Option<String> {
        let next = self.visible.iter().copied().filter(|&i| i != index).collect();
        self.apply_visible(next)
    }

    /// Leave only `index` open, reopening it if it was closed.
    pub fn close_others(&mut self, index: PageIndex) -> Option<String> {
        self.page(index)?;
        self.apply_visible(vec![index])
    }

    pub fn close_to_right(&mut self, index: PageIndex) -> Option<String> {
        let pos = self.position(index)?;
        let next = self.visible[..=pos].to_vec();
        self.apply_visible(next)
    }

    pub fn close_to_left(&mut self, index: PageIndex) -> Option<String> {
        let pos = self.position(index)?;
        let next = self.visible[pos..].to_vec();
        self.apply_visible(next)
    }

    pub fn close_all(&mut self) -> Option<String> {
        self.apply_visible(Vec::new())
    }

    pub fn go_home(&mut self) -> String {
        self.selected = None;
        HOME_PATH.to_string()
    }

    /// Align the selection with a path typed into the address bar or
    /// reached through history. Unknown routes select nothing.
    pub fn sync_with_path(&mut self, path: &str) {
        let route = path.trim_start_matches('/');
        match self.page_by_route(route).map(|p| p.index) {
            Some(index) => {
                self.open_tab(index);
            }
            None => self.selected = None,
        }
    }

    /// Create a user page, or reuse the page that already owns the route.
    pub fn create_file(
        &mut self,
        name: &str,
        store: &mut impl PageStore,
    ) -> Result<String, PageError> {
        let route = normalize_file_name(name);
        if route.is_empty() {
            return Err(PageError::EmptyName);
        }

        if let Some(index) = self.page_by_route(&route).map(|p| p.index) {
            log::info!("File '{}' already exists, opening it", route);
            return self.open_tab(index).ok_or(PageError::UnknownPage(index));
        }

        let page = store.create_file(name, "")?;
        store.save_or_update_data(&page)?;
        let index = page.index;
        log::info!("Created file '{}' ({})", page.name, index);
        self.pages.push(page);
        self.open_tab(index).ok_or(PageError::UnknownPage(index))
    }

    /// Delete a user page and fall back to the first built-in page.
    pub fn delete_file(
        &mut self,
        index: PageIndex,
        store: &mut impl PageStore,
    ) -> Result<String, PageError> {
        let page = self.page(index).ok_or(PageError::UnknownPage(index))?;
        if !page.is_user_page() {
            return Err(PageError::BuiltinPage(index));
        }

        store.delete_file(PageRef::Index(index))?;
        self.pages.retain(|p| p.index != index);
        self.visible.retain(|&i| i != index);
        log::info!("Deleted file {}", index);

        Ok(self
            .open_tab(FALLBACK_INDEX)
            .unwrap_or_else(|| self.go_home()))
    }

    /// Edit a user page in memory, marking it unsaved.
    pub fn update_content(&mut self, index: PageIndex, content: &str) -> Result<(), PageError> {
        let page = self.user_page_mut(index)?;
        page.content = Some(content.to_string());
        page.is_saved = Some(false);
        Ok(())
    }

    pub fn save_page(
        &mut self,
        index: PageIndex,
        store: &mut impl PageStore,
    ) -> Result<(), PageError> {
        let page = self.user_page_mut(index)?;
        page.is_saved = Some(true);
        let snapshot = page.clone();
        store.save_or_update_data(&snapshot)
    }

    /// Swap built-in pages for another language, keeping order, tabs and selection.
    pub fn set_builtin_pages(&mut self, builtins: Vec<Page>) {
        for page in self.pages.iter_mut() {
            if let Some(localized) = builtins.iter().find(|b| b.index == page.index) {
                if !page.is_user_page() {
                    *page = localized.clone();
                }
            }
        }
    }

    fn user_page_mut(&mut self, index: PageIndex) -> Result<&mut Page, PageError> {
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.index == index)
            .ok_or(PageError::UnknownPage(index))?;
        if page.is_user_page() {
            Ok(page)
        } else {
            Err(PageError::BuiltinPage(index))
        }
    }

    fn position(&self, index: PageIndex) -> Option<usize> {
        self.visible.iter().position(|&i| i == index)
    }

    fn apply_visible(&mut self, next: Vec<PageIndex>) -> Option<String> {
        let prev = std::mem::replace(&mut self.visible, next);
        let result = reconcile(self.selected, &prev, &self.visible, &self.pages);
        self.selected = result.selected;
        result.navigate_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::builtin::builtin_pages;
    use crate::domain::page::store::MemoryPageStore;
    use crate::shared::i18n::Language;

    fn manager() -> TabManager {
        TabManager::new(builtin_pages(Language::En))
    }

    fn with_visible(visible: &[PageIndex], selected: Option<PageIndex>) -> TabManager {
        let mut m = manager();
        m.visible = visible.to_vec();
        m.selected = selected;
        m
    }

    fn assert_invariants(m: &TabManager) {
        for i in m.visible() {
            assert!(m.page(*i).is_some(), "visible index {} has no page", i);
        }
        let mut dedup = m.visible().to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), m.visible().len());
        if let Some(sel) = m.selected() {
            assert!(m.page(sel).is_some());
        }
    }

    #[test]
    fn starts_with_all_pages_open_and_home_selected() {
        let m = manager();
        assert_eq!(m.visible(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(m.selected(), None);
    }

    #[test]
    fn open_tab_is_idempotent() {
        let mut m = with_visible(&[0], None);
        assert_eq!(m.open_tab(2).as_deref(), Some("/projects"));
        assert_eq!(m.open_tab(2).as_deref(), Some("/projects"));
        assert_eq!(m.visible(), &[0, 2]);
        assert_eq!(m.selected(), Some(2));
        assert_eq!(m.open_tab(99), None);
        assert_invariants(&m);
    }

    #[test]
    fn closing_selected_last_tab_moves_left() {
        let mut m = with_visible(&[0, 1, 2], Some(2));
        assert_eq!(m.close_tab(2).as_deref(), Some("/skills"));
        assert_eq!(m.selected(), Some(1));
        assert_invariants(&m);
    }

    #[test]
    fn closing_unselected_tab_keeps_selection() {
        let mut m = with_visible(&[0, 1, 2], Some(0));
        assert_eq!(m.close_tab(2), None);
        assert_eq!(m.visible(), &[0, 1]);
        assert_eq!(m.selected(), Some(0));
    }

    #[test]
    fn close_to_right_and_left() {
        let mut m = with_visible(&[0, 1, 2, 3], Some(1));
        m.close_to_right(1);
        assert_eq!(m.visible(), &[0, 1]);
        assert_eq!(m.selected(), Some(1));

        let mut m = with_visible(&[0, 1, 2, 3], Some(3));
        m.close_to_left(2);
        assert_eq!(m.visible(), &[2, 3]);
        assert_eq!(m.selected(), Some(3));

        let mut m = with_visible(&[0, 1, 2, 3], Some(0));
        assert_eq!(m.close_to_left(2).as_deref(), Some("/projects"));
        assert_eq!(m.selected(), Some(2));
        assert_invariants(&m);
    }

    #[test]
    fn close_others_keeps_target() {
        let mut m = with_visible(&[0, 1, 2], Some(0));
        assert_eq!(m.close_others(1).as_deref(), Some("/skills"));
        assert_eq!(m.visible(), &[1]);
        assert_eq!(m.selected(), Some(1));
    }

    #[test]
    fn close_others_reopens_a_closed_target() {
        let mut m = with_visible(&[0, 1, 2, 3], Some(1));
        m.close_tab(3);
        assert_eq!(m.close_others(3).as_deref(), Some("/experience"));
        assert_eq!(m.visible(), &[3]);
        assert_eq!(m.selected(), Some(3));
        assert_invariants(&m);

        assert_eq!(m.close_others(42), None);
        assert_eq!(m.visible(), &[3]);
    }

    #[test]
    fn close_all_goes_home() {
        let mut m = with_visible(&[0, 1], Some(1));
        assert_eq!(m.close_all().as_deref(), Some("/"));
        assert!(m.visible().is_empty());
        assert_eq!(m.selected(), None);
    }

    #[test]
    fn directional_close_on_closed_tab_is_noop() {
        let mut m = with_visible(&[0, 1], Some(1));
        assert_eq!(m.close_to_right(4), None);
        assert_eq!(m.visible(), &[0, 1]);
    }

    #[test]
    fn create_file_opens_new_page() {
        let mut store = MemoryPageStore::new(1_700_000_000_000);
        let mut m = with_visible(&[0], Some(0));
        let path = m.create_file("Minhas Notas", &mut store).unwrap();
        assert_eq!(path, "/minhas-notas");
        assert_eq!(m.selected(), Some(1_700_000_000_000));
        assert_eq!(m.visible(), &[0, 1_700_000_000_000]);
        assert_eq!(store.get_data().len(), 1);
        assert_invariants(&m);
    }

    #[test]
    fn create_file_reuses_existing_route() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = with_visible(&[0], Some(0));
        m.create_file("notes", &mut store).unwrap();
        let count = m.pages().len();
        m.close_tab(1_000);

        assert_eq!(m.create_file("Notes.md", &mut store).unwrap(), "/notes");
        assert_eq!(m.pages().len(), count);
        assert_eq!(store.get_data().len(), 1);
        assert_eq!(m.selected(), Some(1_000));
        assert!(m.is_open(1_000));
    }

    #[test]
    fn create_file_rejects_empty_name() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = manager();
        assert_eq!(m.create_file("!!!", &mut store), Err(PageError::EmptyName));
        assert_eq!(m.pages().len(), 6);
    }

    #[test]
    fn delete_file_falls_back_to_first_page() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = with_visible(&[1], Some(1));
        m.create_file("draft", &mut store).unwrap();

        assert_eq!(m.delete_file(1_000, &mut store).unwrap(), "/about-me");
        assert!(m.page(1_000).is_none());
        assert!(!m.is_open(1_000));
        assert_eq!(m.selected(), Some(FALLBACK_INDEX));
        assert!(m.is_open(FALLBACK_INDEX));
        assert!(store.get_data().is_empty());
        assert_invariants(&m);
    }

    #[test]
    fn builtin_pages_cannot_be_deleted_or_edited() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = manager();
        assert_eq!(m.delete_file(2, &mut store), Err(PageError::BuiltinPage(2)));
        assert_eq!(m.update_content(2, "x"), Err(PageError::BuiltinPage(2)));
        assert_eq!(m.delete_file(77, &mut store), Err(PageError::UnknownPage(77)));
        assert_eq!(m.pages().len(), 6);
    }

    #[test]
    fn edit_then_save_tracks_dirty_state() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = manager();
        m.create_file("todo", &mut store).unwrap();

        m.update_content(1_000, "- [ ] write tests").unwrap();
        assert!(m.page(1_000).is_some_and(Page::is_dirty));
        assert_eq!(store.get_data()[0].content.as_deref(), Some(""));

        m.save_page(1_000, &mut store).unwrap();
        assert!(!m.page(1_000).is_some_and(Page::is_dirty));
        assert_eq!(store.get_data()[0].content.as_deref(), Some("- [ ] write tests"));
        assert_eq!(store.get_data()[0].is_saved, Some(true));
    }

    #[test]
    fn language_swap_renames_builtins_only() {
        let mut store = MemoryPageStore::new(1_000);
        let mut m = manager();
        m.create_file("notes", &mut store).unwrap();
        m.open_tab(3);

        m.set_builtin_pages(builtin_pages(Language::Pt));
        assert_eq!(m.page(0).map(|p| p.name.as_str()), Some("sobre-mim.html"));
        assert_eq!(m.page(1_000).map(|p| p.name.as_str()), Some("notes.md"));
        assert_eq!(m.selected(), Some(3));
        assert_eq!(m.visible().len(), 7);
    }

    #[test]
    fn sync_with_path_selects_matching_page() {
        let mut m = with_visible(&[0], None);
        m.sync_with_path("/skills");
        assert_eq!(m.selected(), Some(1));
        assert!(m.is_open(1));

        m.sync_with_path("/");
        assert_eq!(m.selected(), None);
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Open(PageIndex),
        Close(PageIndex),
        Others(PageIndex),
        Right(PageIndex),
        Left(PageIndex),
        All,
        Home,
        Create(&'static str),
        Delete(PageIndex),
        Sync(&'static str),
    }

    #[test]
    fn invariants_hold_across_mixed_operations() {
        use Step::*;

        let steps = [
            Open(2),
            Close(2),
            Close(0),
            Others(4),
            Create("notes"),
            Create("Draft Ideas"),
            Open(1),
            Right(4),
            Left(1_000),
            Close(99),
            Open(99),
            Delete(3),
            Delete(1_000),
            Others(1),
            Close(1),
            All,
            Close(0),
            Right(0),
            Left(0),
            Others(2),
            Create("Notes.md"),
            Sync("/skills"),
            Sync("/nowhere"),
            Open(5),
            Right(2),
            Delete(1_001),
            Home,
            Close(0),
            Close(2),
            Create("olá mundo"),
            All,
            Sync("/projects"),
            Close(2),
        ];

        let mut store = MemoryPageStore::new(1_000);
        let mut m = manager();
        let mut path = HOME_PATH.to_string();

        for (n, step) in steps.iter().enumerate() {
            let target = match *step {
                Open(i) => m.open_tab(i),
                Close(i) => m.close_tab(i),
                Others(i) => m.close_others(i),
                Right(i) => m.close_to_right(i),
                Left(i) => m.close_to_left(i),
                All => m.close_all(),
                Home => Some(m.go_home()),
                Create(name) => m.create_file(name, &mut store).ok(),
                Delete(i) => m.delete_file(i, &mut store).ok(),
                Sync(p) => {
                    m.sync_with_path(p);
                    Some(p.to_string())
                }
            };
            if let Some(target) = target {
                path = target;
            }

            assert_invariants(&m);
            if let Some(sel) = m.selected() {
                assert!(m.is_open(sel), "step {} {:?}: selected {} is closed", n, step, sel);
            }
            if m.visible().is_empty() {
                assert_eq!(m.selected(), None, "step {} {:?}", n, step);
                assert_eq!(path, HOME_PATH, "step {} {:?}", n, step);
            }
        }
    }

    #[test]
    fn go_home_clears_selection() {
        let mut m = with_visible(&[0, 1], Some(1));
        assert_eq!(m.go_home(), "/");
        assert_eq!(m.selected(), None);
        assert_eq!(m.visible(), &[0, 1]);
    }
}
