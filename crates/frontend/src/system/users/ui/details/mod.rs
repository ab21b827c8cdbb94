use contracts::system::users::UserResource;
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_form::{entity_form, FormOptions};
use crate::shared::components::form_field::{check_field, text_field, typed_field};
use crate::shared::form_controller::FormController;

fn user_fields(form: RwSignal<FormController<UserResource>>) -> AnyView {
    let editing = form.with_untracked(|f| !f.mode().is_create());
    view! {
        <div class="form__grid">
            {text_field(form, "User Name", "name", |f| f.name.as_str(), |f, v| f.name = v)}
            {typed_field(form, "Email", "email", "email", |f| f.email.as_str(), |f, v| f.email = v)}
            {typed_field(
                form,
                "Password",
                "password",
                "password",
                |f| f.password.as_str(),
                |f, v| f.password = v,
            )}
            {editing.then(|| view! {
                <span class="form__hint">"Leave blank to keep the current password."</span>
            })}
            {text_field(form, "User Role", "role", |f| f.role.as_str(), |f, v| f.role = v)}
            {check_field(form, "Active", |f| f.active, |f, v| f.active = v)}
        </div>
    }
    .into_any()
}

#[component]
pub fn UserDetails(id: Option<String>) -> impl IntoView {
    entity_form::<UserResource>(
        id,
        FormOptions {
            kind: EntityKind::User,
            create_title: "Add User",
            edit_title: "Edit User",
            create_label: "Add User",
            edit_label: "Update User",
        },
        user_fields,
    )
}
