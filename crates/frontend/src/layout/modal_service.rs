use leptos::prelude::*;

/// Overlays that can be shown above the workbench. One at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Rating,
    Shortcuts,
}

/// Central switch for modal overlays
#[derive(Clone, Copy)]
pub struct ModalService {
    active: RwSignal<Option<ModalKind>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    pub fn show(&self, kind: ModalKind) {
        self.active.set(Some(kind));
    }

    /// Hide `kind` if it is the one showing.
    pub fn hide(&self, kind: ModalKind) {
        if self.active.get_untracked() == Some(kind) {
            self.active.set(None);
        }
    }

    /// Reactive
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active.get() == Some(kind)
    }
}

pub fn use_modals() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Overlay for one modal kind; clicking outside the content closes it.
#[component]
pub fn Modal(kind: ModalKind, children: ChildrenFn) -> impl IntoView {
    let modals = use_modals();

    view! {
        {move || {
            if modals.is_open(kind) {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modals.hide(kind)
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
