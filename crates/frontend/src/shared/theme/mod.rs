//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The preference is persisted in
//! localStorage; without one the OS colour-scheme preference decides.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS class and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse theme from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

/// Load theme from localStorage, then from `prefers-color-scheme`.
fn load_theme() -> Theme {
    if let Some(theme) = storage::get_item(THEME_STORAGE_KEY).and_then(|s| Theme::parse(&s)) {
        return theme;
    }
    let prefers_dark = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(true);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Apply theme as a class on the root element and a data attribute on body.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Loads the stored theme and applies it to the document.
    pub fn new() -> Self {
        let initial = load_theme();
        apply_theme(initial);
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = storage::set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("{}", e);
        }
        apply_theme(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn toggle_theme(&self) {
        let next = self.get_theme().toggled();
        log::debug!("theme changed to {}", next.as_str());
        self.set_theme(next);
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found")
}
