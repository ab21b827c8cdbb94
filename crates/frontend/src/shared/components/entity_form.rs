//! Generic add/edit screen.
//!
//! Simplified MVVM:
//! - `FormController` holds fields, errors and status (no I/O)
//! - `EntityFormViewModel` runs the requests and owns the signal
//! - `entity_form` renders the frame; entities render their own inputs

use contracts::shared::entity::EntityResource;
use contracts::shared::list_query::ListQuery;
use contracts::shared::validation::FormMode;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{use_app_context, EntityKind, Screen};
use crate::shared::api::client::EntityClient;
use crate::shared::components::page_header::{Banner, BannerView, PageHeader};
use crate::shared::form_controller::{
    FormController, FormStatus, ResetAction, SUCCESS_REDIRECT_DELAY_MS,
};
use crate::shared::icons::icon;

pub struct EntityFormViewModel<E: EntityResource> {
    pub form: RwSignal<FormController<E>>,
}

impl<E: EntityResource> Clone for EntityFormViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EntityResource> Copy for EntityFormViewModel<E> {}

impl<E: EntityResource> EntityFormViewModel<E> {
    pub fn new(id: Option<String>) -> Self {
        let mode = match id {
            Some(id) => FormMode::Update { id },
            None => FormMode::Create,
        };
        Self {
            form: RwSignal::new(FormController::for_mode(mode)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| !f.mode().is_create())
    }

    /// Load the entity when editing
    pub fn load_if_needed(&self) {
        let mode = self.form.with_untracked(|f| f.mode().clone());
        if let FormMode::Update { id } = mode {
            self.fetch(id);
        }
    }

    fn fetch(&self, id: String) {
        let form = self.form;
        spawn_local(async move {
            match EntityClient::<E>::new().get(&id).await {
                Ok(row) => form.update(|f| f.load(E::form_from_row(&row))),
                Err(err) => form.update(|f| f.load_failed(&err)),
            }
        });
    }

    /// Validate, send, and call `on_saved` after the success delay
    pub fn save_command(&self, on_saved: Callback<()>) {
        let Some(submission) = self.form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        let form = self.form;
        spawn_local(async move {
            let result = EntityClient::<E>::new()
                .save(&submission.mode, &submission.payload)
                .await;
            let saved = result.is_ok();
            form.update(|f| f.finish(result));
            if saved {
                TimeoutFuture::new(SUCCESS_REDIRECT_DELAY_MS).await;
                on_saved.run(());
            }
        });
    }

    pub fn reset_command(&self) {
        if let Some(ResetAction::Reload(id)) = self.form.try_update(|f| f.reset()) {
            self.fetch(id);
        }
    }
}

/// `(id, label)` pairs for a reference picker, filled from the first page of
/// another entity's list.
pub fn reference_options<E: EntityResource>(
    option: fn(&E::Row) -> (String, String),
) -> RwSignal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::new());
    spawn_local(async move {
        match EntityClient::<E>::new().list(&ListQuery::first_page()).await {
            Ok(page) => options.set(page.items.iter().map(option).collect()),
            Err(err) => log::warn!("picker: could not load {}: {}", E::PLURAL, err),
        }
    });
    options
}

pub struct FormOptions {
    pub kind: EntityKind,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub create_label: &'static str,
    pub edit_label: &'static str,
}

pub fn entity_form<E: EntityResource>(
    id: Option<String>,
    options: FormOptions,
    fields: fn(RwSignal<FormController<E>>) -> AnyView,
) -> impl IntoView {
    let ctx = use_app_context();
    let vm = EntityFormViewModel::<E>::new(id);
    vm.load_if_needed();

    let kind = options.kind;
    let editing = vm.is_edit_mode();
    let title = if editing { options.edit_title } else { options.create_title };
    let submit_label = if editing { options.edit_label } else { options.create_label };

    let back_to_list = move || ctx.navigate(Screen::List(kind));
    let on_saved = Callback::new(move |_: ()| back_to_list());

    let banner = Signal::derive(move || {
        vm.form.with(|f| match f.status() {
            FormStatus::Success(text) => Some(Banner::Success(text.clone())),
            FormStatus::Failed(text) => Some(Banner::Error(text.clone())),
            _ => None,
        })
    });
    let locked = Signal::derive(move || vm.form.with(|f| f.is_locked()));
    let loading = move || vm.form.with(|f| *f.status() == FormStatus::Loading);
    let has_errors = move || vm.form.with(|f| !f.errors().is_empty());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <div class="page page--form">
            <PageHeader title=title>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| back_to_list()>
                    {icon("arrow-left")}
                    "Back to list"
                </Button>
            </PageHeader>

            <BannerView banner=banner />
            {move || loading().then(|| view! { <div class="form__loading">"Loading..."</div> })}

            <form class="form" on:submit=on_submit novalidate=true>
                {fields(vm.form)}

                {move || has_errors().then(|| view! {
                    <div class="form__summary">"Please correct the highlighted fields."</div>
                })}

                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        prop:disabled=move || locked.get()
                        on:click=move |_| vm.reset_command()
                    >
                        "Reset"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        prop:disabled=move || locked.get()
                    >
                        {move || {
                            if vm.form.with(|f| *f.status() == FormStatus::Submitting) {
                                "Saving..."
                            } else {
                                submit_label
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
