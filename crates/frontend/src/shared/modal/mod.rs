use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use web_sys::KeyboardEvent;

#[component]
pub fn Modal(
    title: String,
    /// Escape, overlay click and the close button all end up here
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Detached when the modal unmounts
    let handle = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/No dialog in front of a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    open: Signal<bool>,
    /// Confirm in progress: buttons disabled, closing ignored
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let close = Callback::new(move |_: ()| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    });
    let title = StoredValue::new(title);
    let message = StoredValue::new(message);

    view! {
        <Show when=move || open.get()>
            <Modal title=title.get_value() on_close=close>
                <p class="modal-message">{message.get_value()}</p>
                <div class="modal-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| close.run(())
                    >
                        "No"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Yes, delete" }}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
