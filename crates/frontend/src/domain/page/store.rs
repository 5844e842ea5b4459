//! Persistence of user pages. Built-in pages are never written.

use super::error::PageError;
use super::model::{format_file_name, normalize_file_name, Page, PageIndex};
use crate::shared::storage;

pub const STORAGE_KEY: &str = "markdown-editor-data";

/// Which stored page to remove.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageRef<'a> {
    Index(PageIndex),
    Name(&'a str),
}

impl PageRef<'_> {
    fn matches(&self, page: &Page) -> bool {
        match self {
            PageRef::Index(index) => page.index == *index,
            PageRef::Name(name) => page.name == *name,
        }
    }
}

pub trait PageStore {
    fn get_data(&self) -> Vec<Page>;

    /// Replace the stored page with the same index, or append it.
    fn save_or_update_data(&mut self, page: &Page) -> Result<(), PageError>;

    /// Allocate a fresh, not yet persisted, user page.
    fn create_file(&self, name: &str, content: &str) -> Result<Page, PageError>;

    fn delete_file(&mut self, page: PageRef<'_>) -> Result<(), PageError>;
}

/// Index for a new user page: the current time in milliseconds, bumped past
/// any stored index so allocations never collide.
pub fn allocate_index(now_ms: PageIndex, existing: &[Page]) -> PageIndex {
    existing
        .iter()
        .map(|p| p.index + 1)
        .fold(now_ms, PageIndex::max)
}

fn new_user_page(index: PageIndex, name: &str, content: &str) -> Result<Page, PageError> {
    let route = normalize_file_name(name);
    if route.is_empty() {
        return Err(PageError::EmptyName);
    }
    Ok(Page {
        index,
        name: format_file_name(name),
        route,
        content: Some(content.to_string()),
        is_saved: None,
    })
}

fn upsert(pages: &mut Vec<Page>, page: &Page) {
    match pages.iter_mut().find(|p| p.index == page.index) {
        Some(existing) => *existing = page.clone(),
        None => pages.push(page.clone()),
    }
}

/// Pages kept as a JSON array under [`STORAGE_KEY`] in localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPageStore;

impl LocalPageStore {
    fn write(pages: &[Page]) -> Result<(), PageError> {
        let json =
            serde_json::to_string(pages).map_err(|e| PageError::Serialization(e.to_string()))?;
        storage::set_item(STORAGE_KEY, &json).map_err(PageError::Storage)
    }
}

impl PageStore for LocalPageStore {
    fn get_data(&self) -> Vec<Page> {
        let Some(raw) = storage::get_item(STORAGE_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::error!("Failed to parse stored pages: {}", e);
            Vec::new()
        })
    }

    fn save_or_update_data(&mut self, page: &Page) -> Result<(), PageError> {
        let mut pages = self.get_data();
        upsert(&mut pages, page);
        Self::write(&pages)
    }

    fn create_file(&self, name: &str, content: &str) -> Result<Page, PageError> {
        let now = js_sys::Date::now() as PageIndex;
        new_user_page(allocate_index(now, &self.get_data()), name, content)
    }

    fn delete_file(&mut self, page: PageRef<'_>) -> Result<(), PageError> {
        let mut pages = self.get_data();
        pages.retain(|p| !page.matches(p));
        Self::write(&pages)
    }
}

/// In-memory store with a fixed clock.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    pub pages: Vec<Page>,
    pub now_ms: PageIndex,
}

impl MemoryPageStore {
    pub fn new(now_ms: PageIndex) -> Self {
        Self {
            pages: Vec::new(),
            now_ms,
        }
    }
}

impl PageStore for MemoryPageStore {
    fn get_data(&self) -> Vec<Page> {
        self.pages.clone()
    }

    fn save_or_update_data(&mut self, page: &Page) -> Result<(), PageError> {
        upsert(&mut self.pages, page);
        Ok(())
    }

    fn create_file(&self, name: &str, content: &str) -> Result<Page, PageError> {
        new_user_page(allocate_index(self.now_ms, &self.pages), name, content)
    }

    fn delete_file(&mut self, page: PageRef<'_>) -> Result<(), PageError> {
        self.pages.retain(|p| !page.matches(p));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_formats_name_and_route() {
        let store = MemoryPageStore::new(1_000);
        let page = store.create_file("Meu Arquivo", "").unwrap();
        assert_eq!(page.index, 1_000);
        assert_eq!(page.name, "meu-arquivo.md");
        assert_eq!(page.route, "meu-arquivo");
        assert_eq!(page.content.as_deref(), Some(""));
        assert_eq!(page.is_saved, None);
    }

    #[test]
    fn create_file_rejects_empty_route() {
        let store = MemoryPageStore::new(1_000);
        assert_eq!(store.create_file("@@@.md", ""), Err(PageError::EmptyName));
    }

    #[test]
    fn allocated_indices_do_not_collide() {
        let mut store = MemoryPageStore::new(1_000);
        let first = store.create_file("a", "").unwrap();
        store.save_or_update_data(&first).unwrap();
        let second = store.create_file("b", "").unwrap();
        assert_eq!(second.index, 1_001);
    }

    #[test]
    fn save_replaces_by_index() {
        let mut store = MemoryPageStore::new(5_000);
        let mut page = store.create_file("notes", "").unwrap();
        store.save_or_update_data(&page).unwrap();
        page.content = Some("# Title".into());
        page.is_saved = Some(true);
        store.save_or_update_data(&page).unwrap();

        let stored = store.get_data();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content.as_deref(), Some("# Title"));
    }

    #[test]
    fn delete_by_index_or_name() {
        let mut store = MemoryPageStore::new(5_000);
        for name in ["one", "two"] {
            let page = store.create_file(name, "").unwrap();
            store.save_or_update_data(&page).unwrap();
        }
        store.delete_file(PageRef::Name("one.md")).unwrap();
        assert_eq!(store.get_data().len(), 1);
        store.delete_file(PageRef::Index(5_001)).unwrap();
        assert!(store.get_data().is_empty());
    }
}
