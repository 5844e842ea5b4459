use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{api_base, get_text};
use crate::shared::cache::HomeCache;
use crate::shared::config::config;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

const LOADING_MS: u32 = 2_500;

const CONTACTS: [(&str, &str, &str); 3] = [
    ("github", "contact.github.title", "https://github.com/GabrielFeijo"),
    ("linkedin", "contact.linkedin.title", "https://www.linkedin.com/in/gabriel-feijo/"),
    ("mail", "contact.email.title", "mailto:feijo6622@gmail.com"),
];

/// The API sleeps when idle; wake it at most once per cache window.
fn warm_up_api(loading: RwSignal<bool>) {
    let ttl = config().cache.home_ttl_hours;
    if !HomeCache::has_expired(HomeCache::load().as_ref(), Utc::now(), ttl) {
        return;
    }

    loading.set(true);
    spawn_local(async move {
        TimeoutFuture::new(LOADING_MS).await;
        let _ = loading.try_set(false);
    });
    spawn_local(async move {
        match get_text(&api_base()).await {
            Ok(_) => HomeCache { last_fetch: Utc::now() }.store(),
            Err(e) => log::error!("API warm-up failed: {}", e),
        }
    });
}

#[component]
pub fn Home() -> impl IntoView {
    let lang = use_language();
    let loading = RwSignal::new(false);

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&config().site.name);
    }
    warm_up_api(loading);

    view! {
        <div class="home">
            <Show when=move || loading.get()>
                <div class="home__loading"><div class="spinner"></div></div>
            </Show>
            <h1 class="home__title">{move || lang.t("header.title")}</h1>
            <h2 class="home__subtitle">{move || lang.t("header.subtitle")}</h2>
            <div class="home__links">
                {CONTACTS
                    .into_iter()
                    .map(|(icon_name, title_key, href)| view! {
                        <a
                            class="home__link"
                            href=href
                            target="_blank"
                            rel="noreferrer"
                            title=move || lang.t(title_key)
                        >
                            {icon(icon_name)}
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
