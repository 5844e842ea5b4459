//! Application shell: wires routing and global shortcuts around the workbench.

use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_global, AppGlobalContext};
use crate::layout::Shell;
use crate::shared::i18n::{use_language, LanguageContext};
use crate::shared::keyboard::Shortcut;
use crate::shared::theme::{use_theme, ThemeContext};

fn run_shortcut(
    shortcut: Shortcut,
    ctx: AppGlobalContext,
    theme: ThemeContext,
    lang: LanguageContext,
) {
    log::debug!("shortcut: {:?}", shortcut);
    match shortcut {
        Shortcut::ToggleTerminal => ctx.toggle_terminal(),
        Shortcut::ToggleTheme => theme.toggle_theme(),
        Shortcut::ChangeLanguage => lang.change_language(),
        Shortcut::ToggleExplorer => ctx.toggle_explorer(),
        Shortcut::GoHome => ctx.go_home(),
        Shortcut::SavePage => ctx.save_selected(),
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_global();
    let theme = use_theme();
    let lang = use_language();

    ctx.init_router_integration();

    // Built-in page names follow the language.
    Effect::new(move |_| ctx.set_language(lang.language.get()));

    let handle = window_event_listener(ev::keydown, move |e: web_sys::KeyboardEvent| {
        if let Some(shortcut) = Shortcut::from_key(e.ctrl_key(), &e.key()) {
            e.prevent_default();
            run_shortcut(shortcut, ctx, theme, lang);
        }
    });
    on_cleanup(move || handle.remove());

    view! { <Shell /> }
}
