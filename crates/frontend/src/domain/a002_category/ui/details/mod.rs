use contracts::domain::a002_category::CategoryResource;
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_form::{entity_form, FormOptions};
use crate::shared::components::form_field::{check_field, text_field};
use crate::shared::form_controller::FormController;

fn category_fields(form: RwSignal<FormController<CategoryResource>>) -> AnyView {
    view! {
        <div class="form__grid">
            {text_field(form, "Category Name", "name", |f| f.name.as_str(), |f, v| f.name = v)}
            {text_field(
                form,
                "Created By",
                "createdBy",
                |f| f.created_by.as_str(),
                |f, v| f.created_by = v,
            )}
            {text_field(form, "Kilogram", "kilogram", |f| f.kilogram.as_str(), |f, v| f.kilogram = v)}
            {check_field(form, "Active", |f| f.active, |f, v| f.active = v)}
        </div>
    }
    .into_any()
}

#[component]
pub fn CategoryDetails(id: Option<String>) -> impl IntoView {
    entity_form::<CategoryResource>(
        id,
        FormOptions {
            kind: EntityKind::Category,
            create_title: "Add Category",
            edit_title: "Edit Category",
            create_label: "Add Category",
            edit_label: "Update Category",
        },
        category_fields,
    )
}
