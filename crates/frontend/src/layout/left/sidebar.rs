//! Activity bar: the icon column at the far left of the workbench.

use leptos::prelude::*;

use crate::layout::global_context::use_global;
use crate::layout::modal_service::{use_modals, ModalKind};
use crate::shared::config::config;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global();
    let theme = use_theme();
    let lang = use_language();
    let modals = use_modals();

    view! {
        <nav class="activity-bar">
            <div class="activity-bar__top">
                <button
                    class="activity-bar__item"
                    class:activity-bar__item--active=move || ctx.explorer_open.get()
                    title=move || lang.t("sidebar.explorer")
                    on:click=move |_| ctx.toggle_explorer()
                >
                    {icon("files")}
                </button>
                <button
                    class="activity-bar__item"
                    title=move || lang.t("pages.home")
                    on:click=move |_| ctx.go_home()
                >
                    {icon("home")}
                </button>
                <button
                    class="activity-bar__item"
                    class:activity-bar__item--active=move || ctx.terminal_open.get()
                    title=move || lang.t("shortcuts.terminal")
                    on:click=move |_| ctx.toggle_terminal()
                >
                    {icon("terminal")}
                </button>
                <button
                    class="activity-bar__item"
                    title=move || lang.t("rating.evaluate")
                    on:click=move |_| modals.show(ModalKind::Rating)
                >
                    {icon("star")}
                </button>
                <a
                    class="activity-bar__item"
                    href=config().site.github_url.clone()
                    target="_blank"
                    rel="noreferrer"
                >
                    {icon("github")}
                </a>
            </div>
            <div class="activity-bar__bottom">
                <button
                    class="activity-bar__item"
                    title=move || lang.t("shortcuts.language")
                    on:click=move |_| lang.change_language()
                >
                    {icon("globe")}
                </button>
                <button
                    class="activity-bar__item"
                    title=move || lang.t("shortcuts.theme")
                    on:click=move |_| theme.toggle_theme()
                >
                    {icon("theme")}
                </button>
            </div>
        </nav>
    }
}
