use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::ModalService;
use crate::shared::i18n::LanguageContext;
use crate::shared::theme::ThemeContext;

#[component]
pub fn App() -> impl IntoView {
    let language = LanguageContext::new();
    provide_context(ThemeContext::new());
    provide_context(language);

    // Workbench state: pages, tabs and panel visibility.
    provide_context(AppGlobalContext::new(language.get_language()));

    provide_context(ModalService::new());

    view! {
        <AppShell />
    }
}
