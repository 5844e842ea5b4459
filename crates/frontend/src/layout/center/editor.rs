//! Document view. Built-in pages are read-only static assets, user pages
//! are edited in place and saved with Ctrl+S.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::page::{Page, PageIndex};
use crate::layout::global_context::use_global;
use crate::shared::api_utils::get_text;
use crate::shared::config::config;
use crate::shared::i18n::{use_language, Language};

fn asset_url(lang: Language, page: &Page) -> String {
    format!(
        "{}/{}/{}",
        config().site.pages_path.trim_end_matches('/'),
        lang.code(),
        page.name
    )
}

#[component]
pub fn PageView(index: PageIndex) -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();

    let page = Memo::new(move |_| ctx.tabs.with(|m| m.page(index).cloned()));
    let is_user_page = Memo::new(move |_| page.get().is_some_and(|p| p.is_user_page()));
    let asset = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(page) = page.get().filter(|p| !p.is_user_page()) else {
            return;
        };
        let url = asset_url(lang.language.get(), &page);
        asset.set(None);
        spawn_local(async move {
            let text = get_text(&url).await.unwrap_or_else(|e| {
                log::error!("Failed to load {}: {}", url, e);
                String::new()
            });
            let _ = asset.try_set(Some(text));
        });
    });

    view! {
        <div class="page-view">
            {move || {
                if is_user_page.get() {
                    view! {
                        <textarea
                            class="page-view__editor"
                            spellcheck="false"
                            prop:value=move || page.get().and_then(|p| p.content).unwrap_or_default()
                            on:input=move |ev| ctx.update_content(index, &event_target_value(&ev))
                        ></textarea>
                    }
                    .into_any()
                } else {
                    view! {
                        <pre class="page-view__markdown">
                            {move || asset.get().unwrap_or_default()}
                        </pre>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
