use leptos::prelude::*;

use crate::layout::global_context::use_global;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;

/// Save state of a user page, `None` for built-in pages and home.
fn save_state_key(is_user_page: bool, is_dirty: bool) -> Option<&'static str> {
    match (is_user_page, is_dirty) {
        (false, _) => None,
        (true, true) => Some("footer.unsaved"),
        (true, false) => Some("footer.saved"),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();
    let theme = use_theme();

    let save_state = Memo::new(move |_| {
        ctx.current_page()
            .and_then(|p| save_state_key(p.is_user_page(), p.is_dirty()))
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__item" on:click=move |_| ctx.toggle_terminal()>
                {icon("terminal")}
            </span>
            <span class="status-bar__spacer"></span>
            {move || save_state.get().map(|key| view! {
                <span
                    class="status-bar__item"
                    class:status-bar__item--unsaved={key == "footer.unsaved"}
                >
                    {lang.t(key)}
                </span>
            })}
            <span class="status-bar__item" on:click=move |_| lang.change_language()>
                {move || lang.language.get().code().to_uppercase()}
            </span>
            <span class="status-bar__item" on:click=move |_| theme.toggle_theme()>
                {move || theme.theme.get().as_str()}
            </span>
        </footer>
    }
}
