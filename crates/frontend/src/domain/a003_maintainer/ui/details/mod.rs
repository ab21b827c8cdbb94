use contracts::domain::a003_maintainer::MaintainerResource;
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_form::{entity_form, FormOptions};
use crate::shared::components::form_field::{check_field, text_field, typed_field};
use crate::shared::form_controller::FormController;

fn maintainer_fields(form: RwSignal<FormController<MaintainerResource>>) -> AnyView {
    view! {
        <div class="form__grid">
            {text_field(form, "Name", "name", |f| f.name.as_str(), |f, v| f.name = v)}
            {typed_field(form, "Email", "email", "email", |f| f.email.as_str(), |f, v| f.email = v)}
            {typed_field(
                form,
                "Phone Number",
                "phoneNumber",
                "tel",
                |f| f.phone_number.as_str(),
                |f, v| f.phone_number = v,
            )}
            {text_field(form, "City", "city", |f| f.city.as_str(), |f, v| f.city = v)}
            {check_field(form, "Active", |f| f.active, |f, v| f.active = v)}
        </div>
    }
    .into_any()
}

#[component]
pub fn MaintainerDetails(id: Option<String>) -> impl IntoView {
    entity_form::<MaintainerResource>(
        id,
        FormOptions {
            kind: EntityKind::Maintainer,
            create_title: "Add Maintainer",
            edit_title: "Edit Maintainer",
            create_label: "Add Maintainer",
            edit_label: "Update Maintainer",
        },
        maintainer_fields,
    )
}
