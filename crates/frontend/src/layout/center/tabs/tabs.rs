use leptos::prelude::*;

use super::tab::Tab;
use crate::layout::center::context_menu::TabContextMenu;
use crate::layout::context_menu::MenuAnchor;
use crate::layout::global_context::use_global;

/// Tab strip in open order.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_global();
    let menu = RwSignal::new(None::<MenuAnchor>);

    view! {
        <div class="tabs-bar">
            <For
                each=move || ctx.tabs.with(|m| m.visible().to_vec())
                key=|index| *index
                children=move |index| view! { <Tab index=index menu=menu /> }
            />
        </div>
        <TabContextMenu anchor=menu />
    }
}
