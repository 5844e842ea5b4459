use leptos::prelude::*;

use crate::layout::global_context::use_global;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global();
    let is_open = move || ctx.explorer_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
