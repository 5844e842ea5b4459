use leptos::prelude::*;

use super::cmd::Cmd;
use super::transcript::Transcript;
use crate::layout::global_context::{use_global, TerminalTab};
use crate::shared::i18n::output::{debug_lines, output_lines};
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

#[component]
pub fn TerminalPanel() -> impl IntoView {
    let ctx = use_global();
    let lang = use_language();
    let transcript = RwSignal::new(Transcript::default());

    let body = move || match ctx.terminal_tab.get() {
        TerminalTab::Problems => view! {
            <p class="terminal-panel__text">{move || lang.t("terminal.problems")}</p>
        }
        .into_any(),
        TerminalTab::Output => view! {
            <div class="terminal-panel__text">
                {move || output_lines(lang.language.get()).iter().map(|l| view! { <p>{*l}</p> }).collect_view()}
            </div>
        }
        .into_any(),
        TerminalTab::Debug => view! {
            <div class="terminal-panel__text">
                {move || debug_lines(lang.language.get()).iter().map(|l| view! { <p>{*l}</p> }).collect_view()}
            </div>
        }
        .into_any(),
        TerminalTab::Terminal => view! { <Cmd transcript=transcript /> }.into_any(),
    };

    view! {
        <div data-zone="terminal" class="terminal-panel" class:hidden=move || !ctx.terminal_open.get()>
            <div class="terminal-panel__header">
                <div class="terminal-panel__tabs">
                    {TerminalTab::all()
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <div
                                    class="terminal-panel__tab"
                                    class:terminal-panel__tab--active=move || ctx.terminal_tab.get() == tab
                                    role="button"
                                    on:click=move |_| ctx.terminal_tab.set(tab)
                                >
                                    {move || lang.t(tab.label_key()).to_uppercase()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="terminal-panel__close" on:click=move |_| ctx.toggle_terminal()>
                    {icon("close")}
                </button>
            </div>
            <div class="terminal-panel__body">{body}</div>
        </div>
    }
}
