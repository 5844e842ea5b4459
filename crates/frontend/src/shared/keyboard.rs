//! Global Ctrl+<key> shortcuts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTerminal,
    ToggleTheme,
    ChangeLanguage,
    ToggleExplorer,
    GoHome,
    SavePage,
}

impl Shortcut {
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key.to_ascii_lowercase().as_str() {
            "j" => Some(Shortcut::ToggleTerminal),
            "d" => Some(Shortcut::ToggleTheme),
            "l" => Some(Shortcut::ChangeLanguage),
            "b" => Some(Shortcut::ToggleExplorer),
            "h" => Some(Shortcut::GoHome),
            "s" => Some(Shortcut::SavePage),
            _ => None,
        }
    }

    pub fn keys(&self) -> &'static str {
        match self {
            Shortcut::ToggleTerminal => "Ctrl + J",
            Shortcut::ToggleTheme => "Ctrl + D",
            Shortcut::ChangeLanguage => "Ctrl + L",
            Shortcut::ToggleExplorer => "Ctrl + B",
            Shortcut::GoHome => "Ctrl + H",
            Shortcut::SavePage => "Ctrl + S",
        }
    }

    /// i18n key of the description.
    pub fn label_key(&self) -> &'static str {
        match self {
            Shortcut::ToggleTerminal => "shortcuts.terminal",
            Shortcut::ToggleTheme => "shortcuts.theme",
            Shortcut::ChangeLanguage => "shortcuts.language",
            Shortcut::ToggleExplorer => "shortcuts.sidebar",
            Shortcut::GoHome => "shortcuts.home",
            Shortcut::SavePage => "shortcuts.save",
        }
    }

    pub fn all() -> [Shortcut; 6] {
        [
            Shortcut::ToggleTerminal,
            Shortcut::ToggleTheme,
            Shortcut::ChangeLanguage,
            Shortcut::ToggleExplorer,
            Shortcut::GoHome,
            Shortcut::SavePage,
        ]
    }
}
