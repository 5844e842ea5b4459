use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

use crate::domain::page::builtin::{builtin_pages, merge_pages};
use crate::domain::page::{LocalPageStore, Page, PageError, PageIndex, PageStore};
use crate::layout::tabs::{TabManager, HOME_PATH};
use crate::shared::i18n::Language;

/// Which view of the bottom panel is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TerminalTab {
    Problems,
    Output,
    Debug,
    #[default]
    Terminal,
}

impl TerminalTab {
    pub fn all() -> [TerminalTab; 4] {
        [
            TerminalTab::Problems,
            TerminalTab::Output,
            TerminalTab::Debug,
            TerminalTab::Terminal,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TerminalTab::Problems => "terminal.tabs.problems",
            TerminalTab::Output => "terminal.tabs.output",
            TerminalTab::Debug => "terminal.tabs.debug",
            TerminalTab::Terminal => "terminal.tabs.terminal",
        }
    }
}

/// Workbench state shared by every region: pages and tabs, the current
/// path, and panel visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabManager>,
    pub path: RwSignal<String>,
    pub explorer_open: RwSignal<bool>,
    pub terminal_open: RwSignal<bool>,
    pub terminal_tab: RwSignal<TerminalTab>,
}

impl AppGlobalContext {
    pub fn new(lang: Language) -> Self {
        let pages = merge_pages(builtin_pages(lang), LocalPageStore.get_data());
        Self {
            tabs: RwSignal::new(TabManager::new(pages)),
            path: RwSignal::new(HOME_PATH.to_string()),
            explorer_open: RwSignal::new(true),
            terminal_open: RwSignal::new(true),
            terminal_tab: RwSignal::new(TerminalTab::default()),
        }
    }

    /// Pick up the address-bar path on load, follow back/forward, and keep
    /// the selected tab in line with whatever path is shown.
    pub fn init_router_integration(&self) {
        let this = *self;
        this.path.set(current_pathname());

        let handle = window_event_listener(ev::popstate, move |_| {
            this.path.set(current_pathname());
        });
        on_cleanup(move || handle.remove());

        Effect::new(move |_| {
            let path = this.path.get();
            let stale = this.tabs.with_untracked(|m| {
                let wanted = m.page_by_route(path.trim_start_matches('/')).map(|p| p.index);
                wanted != m.selected()
            });
            if stale {
                leptos::logging::log!("sync selection with {}", path);
                this.tabs.update(|m| m.sync_with_path(&path));
            }
        });
    }

    /// Push `path` onto history and render it.
    pub fn navigate(&self, path: &str) {
        if self.path.get_untracked() == path {
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
        log::debug!("navigate: {}", path);
        self.path.set(path.to_string());
    }

    fn follow(&self, target: Option<Option<String>>) {
        if let Some(path) = target.flatten() {
            self.navigate(&path);
        }
    }

    pub fn open_tab(&self, index: PageIndex) {
        log::debug!("open_tab: {}", index);
        self.follow(self.tabs.try_update(|m| m.open_tab(index)));
    }

    pub fn close_tab(&self, index: PageIndex) {
        log::debug!("close_tab: {}", index);
        self.follow(self.tabs.try_update(|m| m.close_tab(index)));
    }

    pub fn close_others(&self, index: PageIndex) {
        self.follow(self.tabs.try_update(|m| m.close_others(index)));
    }

    pub fn close_to_right(&self, index: PageIndex) {
        self.follow(self.tabs.try_update(|m| m.close_to_right(index)));
    }

    pub fn close_to_left(&self, index: PageIndex) {
        self.follow(self.tabs.try_update(|m| m.close_to_left(index)));
    }

    pub fn close_all(&self) {
        log::debug!("close_all");
        self.follow(self.tabs.try_update(|m| m.close_all()));
    }

    pub fn go_home(&self) {
        let target = self.tabs.try_update(|m| m.go_home());
        self.follow(target.map(Some));
    }

    pub fn create_file(&self, name: &str) -> Result<(), PageError> {
        let result = self
            .tabs
            .try_update(|m| m.create_file(name, &mut LocalPageStore))
            .unwrap_or_else(|| Err(PageError::Storage("workbench disposed".into())))?;
        self.navigate(&result);
        Ok(())
    }

    pub fn delete_file(&self, index: PageIndex) {
        match self
            .tabs
            .try_update(|m| m.delete_file(index, &mut LocalPageStore))
        {
            Some(Ok(path)) => self.navigate(&path),
            Some(Err(e)) => log::warn!("delete_file({}): {}", index, e),
            None => {}
        }
    }

    pub fn update_content(&self, index: PageIndex, content: &str) {
        if let Some(Err(e)) = self.tabs.try_update(|m| m.update_content(index, content)) {
            log::warn!("update_content({}): {}", index, e);
        }
    }

    /// Persist the selected page if it is a user page.
    pub fn save_selected(&self) {
        let Some(index) = self.tabs.with_untracked(|m| m.selected()) else {
            return;
        };
        match self.tabs.try_update(|m| m.save_page(index, &mut LocalPageStore)) {
            Some(Ok(())) => log::info!("Saved page {}", index),
            Some(Err(PageError::BuiltinPage(_))) => {}
            Some(Err(e)) => log::error!("Failed to save page {}: {}", index, e),
            None => {}
        }
    }

    pub fn set_language(&self, lang: Language) {
        self.tabs.update(|m| m.set_builtin_pages(builtin_pages(lang)));
    }

    /// Page rendered for the current path, if any.
    pub fn current_page(&self) -> Option<Page> {
        let path = self.path.get();
        let route = path.trim_start_matches('/');
        self.tabs.with(|m| m.page_by_route(route).cloned())
    }

    pub fn toggle_explorer(&self) {
        self.explorer_open.update(|v| *v = !*v);
    }

    pub fn toggle_terminal(&self) {
        self.terminal_open.update(|v| *v = !*v);
    }
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

pub fn use_global() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
