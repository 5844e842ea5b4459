use leptos::ev;
use leptos::prelude::*;

use crate::domain::page::PageIndex;

/// Where a context menu was opened and for which page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuAnchor {
    pub x: i32,
    pub y: i32,
    pub index: PageIndex,
}

impl MenuAnchor {
    pub fn at(ev: &ev::MouseEvent, index: PageIndex) -> Self {
        Self {
            x: ev.client_x(),
            y: ev.client_y(),
            index,
        }
    }
}

/// Floating menu shown while `anchor` is set; any click elsewhere closes it.
#[component]
pub fn ContextMenu(anchor: RwSignal<Option<MenuAnchor>>, children: ChildrenFn) -> impl IntoView {
    let handle = window_event_listener(ev::click, move |_| anchor.set(None));
    on_cleanup(move || handle.remove());

    view! {
        {move || anchor.get().map(|a| view! {
            <ul
                class="context-menu"
                style=format!("top: {}px; left: {}px;", a.y, a.x)
                on:contextmenu=|e| e.prevent_default()
            >
                {children()}
            </ul>
        })}
    }
}

/// One entry; disabled entries render greyed out and ignore clicks.
#[component]
pub fn MenuItem(
    #[prop(into)] label: Signal<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <li
            class="context-menu__item"
            class:context-menu__item--disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| {
                if !disabled.get_untracked().unwrap_or(false) {
                    on_select.run(());
                }
            }
        >
            {move || label.get()}
        </li>
    }
}
