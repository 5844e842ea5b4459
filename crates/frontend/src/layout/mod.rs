pub mod center;
pub mod context_menu;
pub mod footer;
pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod shortcuts_modal;
pub mod tabs;
pub mod terminal;

use leptos::prelude::*;

use crate::domain::review::ui::BoxRating;

/// Workbench shell.
///
/// ```text
/// +----------+-----------+------------------------------+
/// | Activity | Explorer  |  Tabs                        |
/// |   bar    |  (Left)   |  Page / Home      (Center)   |
/// |          |           +------------------------------+
/// |          |           |  Terminal panel              |
/// +----------+-----------+------------------------------+
/// |                     Footer                          |
/// +-----------------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Sidebar />
                <left::Left>
                    <left::Explorer />
                </left::Left>
                <div class="app-workspace">
                    <center::Center />
                    <terminal::TerminalPanel />
                </div>
            </div>
            <footer::Footer />
            <BoxRating />
            <shortcuts_modal::ShortcutsModal />
        </div>
    }
}
