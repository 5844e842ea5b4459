use leptos::prelude::*;

use crate::layout::context_menu::{ContextMenu, MenuAnchor, MenuItem};
use crate::layout::global_context::use_global;
use crate::layout::tabs::TabMenu;
use crate::shared::i18n::use_language;

/// Close / Close Others / Close to the Right / Close to the Left / Close All
#[component]
pub fn TabContextMenu(anchor: RwSignal<Option<MenuAnchor>>) -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();

    let target = move || anchor.get_untracked().map(|a| a.index);
    let availability = Memo::new(move |_| {
        anchor.get().map(|a| ctx.tabs.with(|m| TabMenu::for_tab(m.visible(), a.index)))
    });
    let disabled_unless = move |pick: fn(&TabMenu) -> bool| {
        Signal::derive(move || !availability.get().as_ref().is_some_and(pick))
    };
    let label = move |key: &'static str| Signal::derive(move || lang.t(key).to_string());

    view! {
        <ContextMenu anchor=anchor>
            <MenuItem
                label=label("tabContextMenu.close")
                disabled=disabled_unless(|m| m.close)
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.close_tab(i) }
                })
            />
            <MenuItem
                label=label("tabContextMenu.closeOthers")
                disabled=disabled_unless(|m| m.close_others)
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.close_others(i) }
                })
            />
            <MenuItem
                label=label("tabContextMenu.closeToRight")
                disabled=disabled_unless(|m| m.close_to_right)
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.close_to_right(i) }
                })
            />
            <MenuItem
                label=label("tabContextMenu.closeToLeft")
                disabled=disabled_unless(|m| m.close_to_left)
                on_select=Callback::new(move |_| {
                    if let Some(i) = target() { ctx.close_to_left(i) }
                })
            />
            <MenuItem
                label=label("tabContextMenu.closeAll")
                disabled=disabled_unless(|m| m.close_all)
                on_select=Callback::new(move |_| ctx.close_all())
            />
        </ContextMenu>
    }
}
