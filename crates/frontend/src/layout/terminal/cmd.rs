use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::dispatcher::dispatch;
use super::input::{on_input, InputDecision};
use super::services::LiveTerminalServices;
use super::transcript::{Transcript, TranscriptEntry};
use crate::layout::global_context::use_global;
use crate::layout::modal_service::use_modals;
use crate::shared::config::config;
use crate::shared::i18n::use_language;
use crate::shared::preferences::use_preferences;

const CONSOLE_VERSION: &str = "1.0.0.19045.2728";

/// Interactive terminal. The transcript is owned by the panel so it
/// survives switching sub-tabs.
#[component]
pub fn Cmd(transcript: RwSignal<Transcript>) -> impl IntoView {
    let lang = use_language();
    let prefs = use_preferences();
    let services = LiveTerminalServices {
        global: use_global(),
        modals: use_modals(),
    };
    let prompt = config().terminal.prompt.as_str();
    let buffer = RwSignal::new(String::new());

    let handle_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let (input_type, data) = ev
            .dyn_ref::<web_sys::InputEvent>()
            .map(|ie| (ie.input_type(), ie.data()))
            .unwrap_or_default();

        match on_input(&buffer.get_untracked(), &input_type, data.as_deref(), &value) {
            InputDecision::Commit(line) => {
                buffer.set(String::new());
                spawn_local(async move {
                    let outcome = dispatch(&line, &services, &prefs).await;
                    // The panel may be gone by the time the request settles.
                    let _ = transcript.try_update(|t| t.apply(outcome));
                });
            }
            InputDecision::Update(next) => buffer.set(next),
        }
    };

    let render_entry = move |entry: &TranscriptEntry| {
        let style = entry
            .color
            .as_ref()
            .map(|c| format!("color: {};", c))
            .unwrap_or_default();
        let lines = entry.response.clone();
        view! {
            <div class="cmd__entry">
                <p>{prompt}" "{entry.command.clone()}</p>
                <div style=style>
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                    <br />
                </div>
            </div>
        }
    };

    view! {
        <div class="cmd">
            <div class="cmd__banner">
                <p>{move || format!("GG Console [{} {}]", lang.t("terminal.info.version"), CONSOLE_VERSION)}</p>
                <p>{move || format!("(c) {}. {}", config().site.name, lang.t("terminal.info.allRightsReserved"))}</p>
            </div>
            <div class="cmd__transcript">
                {move || transcript.with(|t| t.entries().iter().map(render_entry).collect_view())}
            </div>
            <div class="cmd__prompt">
                <span>{prompt}</span>
                <textarea
                    class="cmd__input"
                    rows=1
                    spellcheck="false"
                    placeholder=move || lang.t("terminal.info.placeholder")
                    prop:value=move || buffer.get()
                    on:input=handle_input
                ></textarea>
            </div>
        </div>
    }
}
