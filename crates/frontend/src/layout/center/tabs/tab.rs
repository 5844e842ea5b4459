use leptos::ev;
use leptos::prelude::*;

use crate::domain::page::PageIndex;
use crate::layout::context_menu::MenuAnchor;
use crate::layout::global_context::use_global;
use crate::shared::icons::icon;

#[component]
pub fn Tab(index: PageIndex, menu: RwSignal<Option<MenuAnchor>>) -> impl IntoView {
    let ctx = use_global();

    let is_active = Memo::new(move |_| ctx.tabs.with(|m| m.selected() == Some(index)));
    let label = Memo::new(move |_| {
        ctx.tabs
            .with(|m| m.page(index).map(|p| (p.display_name(), p.is_dirty())))
            .unwrap_or_default()
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(index);
    };

    let on_context = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        menu.set(Some(MenuAnchor::at(&ev, index)));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| ctx.open_tab(index)
            on:contextmenu=on_context
        >
            {icon("markdown")}
            <span>{move || label.get().0}</span>
            {move || label.get().1.then(|| view! { <span class="tab-dirty">"●"</span> })}
            <button class="tab-close" on:click=on_close>{icon("close")}</button>
        </div>
    }
}
