//! Rating form opened by the `evaluate` terminal command.

use contracts::domain::review::{CreateReviewRequest, STARS_MAX};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::review::api;
use crate::domain::review::messages::{error_message, star_label_key, violation_key};
use crate::layout::modal_service::{use_modals, Modal, ModalKind};
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

const ERROR_VISIBLE_MS: u32 = 1_500;

#[component]
pub fn BoxRating() -> impl IntoView {
    let modals = use_modals();
    let lang = use_language();

    let username = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let stars = RwSignal::new(0.0_f64);
    let hovered = RwSignal::new(None::<f64>);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let show_error = move |message: String| {
        error.set(Some(message));
        spawn_local(async move {
            TimeoutFuture::new(ERROR_VISIBLE_MS).await;
            let _ = error.try_set(None);
        });
    };

    let reset = move || {
        username.set(String::new());
        comment.set(String::new());
        stars.set(0.0);
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let request = CreateReviewRequest::new(
            &username.get_untracked(),
            &comment.get_untracked(),
            stars.get_untracked(),
        );
        if let Err(violation) = request.validate() {
            show_error(lang.t(violation_key(violation)).to_string());
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            let result = api::create(&request).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(review) => {
                    log::info!("Review {} created", review.id);
                    reset();
                    modals.hide(ModalKind::Rating);
                }
                Err(e) => {
                    log::warn!("Failed to create review: {}", e);
                    show_error(error_message(lang.get_language(), &e));
                }
            }
        });
    };

    let shown = move || hovered.get().unwrap_or_else(|| stars.get());

    view! {
        <Modal kind=ModalKind::Rating>
            <div class="box-rating">
                <div class="box-rating__header">
                    <span class="box-rating__title">{move || lang.t("rating.evaluate")}</span>
                    <button
                        class="box-rating__close"
                        aria-label=move || lang.t("rating.close")
                        on:click=move |_| modals.hide(ModalKind::Rating)
                    >
                        {icon("close")}
                    </button>
                </div>

                <Flex vertical=true gap=FlexGap::Medium>
                    <Input
                        value=username
                        placeholder=Signal::derive(move || lang.t("rating.name").to_string())
                    />
                    <textarea
                        class="box-rating__comment"
                        rows=4
                        placeholder=move || lang.t("rating.comment")
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>

                    <div class="box-rating__stars" on:mouseleave=move |_| hovered.set(None)>
                        {(1..=(STARS_MAX as u32 * 2))
                            .map(|step| {
                                let value = step as f64 / 2.0;
                                let is_left = step % 2 == 1;
                                view! {
                                    <span
                                        class="box-rating__half"
                                        class:box-rating__half--left=is_left
                                        class:box-rating__half--filled={move || shown() >= value}
                                        on:mouseenter=move |_| hovered.set(Some(value))
                                        on:click=move |_| stars.set(value)
                                    >
                                        {icon("star")}
                                    </span>
                                }
                            })
                            .collect_view()}
                        <span class="box-rating__label">
                            {move || {
                                let value = shown();
                                if value > 0.0 { lang.t(&star_label_key(value)) } else { "" }
                            }}
                        </span>
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="box-rating__error">{message}</div>
                    })}

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submitting
                        on_click=on_submit
                    >
                        {move || lang.t("rating.submit")}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
