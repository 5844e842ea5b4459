use leptos::prelude::*;

use super::editor::PageView;
use super::home::Home;
use super::tabs::Tabs;
use crate::layout::global_context::use_global;

/// Tab strip above the document for the current path; home when the path
/// names no page.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global();
    let current = Memo::new(move |_| ctx.current_page().map(|p| p.index));

    view! {
        <div data-zone="center" class="app-main">
            <Tabs />
            <div class="app-main__content">
                {move || match current.get() {
                    Some(index) => view! { <PageView index=index /> }.into_any(),
                    None => view! { <Home /> }.into_any(),
                }}
            </div>
        </div>
    }
}
