use contracts::domain::a004_supplier::SupplierResource;
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_form::{entity_form, FormOptions};
use crate::shared::components::form_field::{check_field, text_field, typed_field};
use crate::shared::form_controller::FormController;

fn supplier_fields(form: RwSignal<FormController<SupplierResource>>) -> AnyView {
    view! {
        <div class="form__grid">
            {text_field(form, "Supplier Name", "name", |f| f.name.as_str(), |f, v| f.name = v)}
            {typed_field(form, "Email", "email", "email", |f| f.email.as_str(), |f, v| f.email = v)}
            {typed_field(
                form,
                "Phone Number",
                "phoneNumber",
                "tel",
                |f| f.phone_number.as_str(),
                |f, v| f.phone_number = v,
            )}
            {check_field(form, "Active", |f| f.active, |f, v| f.active = v)}
        </div>
    }
    .into_any()
}

#[component]
pub fn SupplierDetails(id: Option<String>) -> impl IntoView {
    entity_form::<SupplierResource>(
        id,
        FormOptions {
            kind: EntityKind::Supplier,
            create_title: "Add Supplier",
            edit_title: "Edit Supplier",
            create_label: "Add Supplier",
            edit_label: "Update Supplier",
        },
        supplier_fields,
    )
}
