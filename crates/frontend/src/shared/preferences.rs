//! Theme and language as one service object handed to the terminal dispatcher.

use leptos::prelude::*;

use crate::shared::i18n::{Language, LanguageContext};
use crate::shared::theme::{Theme, ThemeContext};

pub trait Preferences {
    fn get_theme(&self) -> Theme;
    fn toggle_theme(&self);
    fn get_language(&self) -> Language;
    fn change_language(&self);
}

#[derive(Clone, Copy)]
pub struct AppPreferences {
    pub theme: ThemeContext,
    pub language: LanguageContext,
}

impl Preferences for AppPreferences {
    fn get_theme(&self) -> Theme {
        self.theme.get_theme()
    }

    fn toggle_theme(&self) {
        self.theme.toggle_theme();
    }

    fn get_language(&self) -> Language {
        self.language.get_language()
    }

    fn change_language(&self) {
        self.language.change_language();
    }
}

pub fn use_preferences() -> AppPreferences {
    AppPreferences {
        theme: use_context::<ThemeContext>().expect("ThemeContext not found"),
        language: use_context::<LanguageContext>().expect("LanguageContext not found"),
    }
}
