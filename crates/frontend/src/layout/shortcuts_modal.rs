use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::modal_service::{use_modals, Modal, ModalKind};
use crate::shared::i18n::use_language;
use crate::shared::keyboard::Shortcut;

const SHOW_AFTER_MS: u32 = 2_500;
const HIDE_AFTER_MS: u32 = 5_000;

/// Keyboard shortcut hint shown briefly after start-up.
#[component]
pub fn ShortcutsModal() -> impl IntoView {
    let modals = use_modals();
    let lang = use_language();

    spawn_local(async move {
        TimeoutFuture::new(SHOW_AFTER_MS).await;
        modals.show(ModalKind::Shortcuts);
        TimeoutFuture::new(HIDE_AFTER_MS).await;
        modals.hide(ModalKind::Shortcuts);
    });

    view! {
        <Modal kind=ModalKind::Shortcuts>
            <div class="shortcuts">
                <h3 class="shortcuts__title">{move || lang.t("shortcuts.title")}</h3>
                <ul class="shortcuts__list">
                    {Shortcut::all()
                        .into_iter()
                        .map(|s| view! {
                            <li class="shortcuts__row">
                                <span>{move || lang.t(s.label_key())}</span>
                                <kbd>{s.keys()}</kbd>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </Modal>
    }
}
