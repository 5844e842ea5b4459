//! File tree with the "new file" input and the file context menu.

use leptos::ev;
use leptos::prelude::*;

use crate::domain::page::PageIndex;
use crate::layout::context_menu::{ContextMenu, MenuAnchor, MenuItem};
use crate::layout::global_context::use_global;
use crate::shared::config::config;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

fn open_in_new_window(url: &str) {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

#[component]
fn FileItem(index: PageIndex, menu: RwSignal<Option<MenuAnchor>>) -> impl IntoView {
    let ctx = use_global();
    let name = Memo::new(move |_| {
        ctx.tabs
            .with(|m| m.page(index).map(|p| p.display_name()))
            .unwrap_or_default()
    });
    let is_active = Memo::new(move |_| ctx.tabs.with(|m| m.selected() == Some(index)));

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=is_active
            on:click=move |_| ctx.open_tab(index)
            on:contextmenu=move |ev: ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                menu.set(Some(MenuAnchor::at(&ev, index)));
            }
        >
            <div class="app-sidebar__item-content">
                {icon("markdown")}
                <span>{move || name.get()}</span>
            </div>
        </div>
    }
}

#[component]
fn NewFileInput(creating: RwSignal<bool>) -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();
    let name = RwSignal::new(String::new());

    let finish = move || {
        creating.set(false);
        name.set(String::new());
    };

    view! {
        <div class="app-sidebar__item app-sidebar__new-file">
            {icon("markdown")}
            <input
                class="app-sidebar__input"
                autofocus=true
                placeholder=move || lang.t("explorer.newFilePlaceholder")
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => {
                        if let Err(e) = ctx.create_file(&name.get_untracked()) {
                            log::warn!("Cannot create file: {}", e);
                        }
                        finish();
                    }
                    "Escape" => finish(),
                    _ => {}
                }
                on:blur=move |_| finish()
            />
        </div>
    }
}

#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();
    let menu = RwSignal::new(None::<MenuAnchor>);
    let creating = RwSignal::new(false);

    let target = move || menu.get_untracked().map(|a| a.index);
    let target_is_builtin = Signal::derive(move || {
        menu.get()
            .map(|a| ctx.tabs.with(|m| m.page(a.index).is_some_and(|p| !p.is_user_page())))
            .unwrap_or(true)
    });
    let label = move |key: &'static str| Signal::derive(move || lang.t(key).to_string());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <span>{move || lang.t("sidebar.explorer")}</span>
                <button
                    class="app-sidebar__action"
                    title=move || lang.t("explorer.newFile")
                    on:click=move |_| creating.set(true)
                >
                    {icon("plus")}
                </button>
            </div>

            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.tabs.with(|m| m.selected().is_none())
                on:click=move |_| ctx.go_home()
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>{move || lang.t("pages.home")}</span>
                </div>
            </div>

            <For
                each=move || ctx.tabs.with(|m| m.pages().iter().map(|p| p.index).collect::<Vec<_>>())
                key=|index| *index
                children=move |index| view! { <FileItem index=index menu=menu /> }
            />

            <Show when=move || creating.get()>
                <NewFileInput creating=creating />
            </Show>
        </div>

        <ContextMenu anchor=menu>
            <MenuItem
                label=label("contextMenu.open")
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.open_tab(i) }
                })
            />
            <MenuItem
                label=label("contextMenu.delete")
                disabled=target_is_builtin
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.delete_file(i) }
                })
            />
            <MenuItem
                label=label("contextMenu.openOnGithub")
                on_select=Callback::new(move |_| open_in_new_window(&config().site.github_url))
            />
        </ContextMenu>
    }
}
