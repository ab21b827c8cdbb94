use contracts::system::users::{User, UserResource};
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_list::{
    active_badge, entity_list, text_cell, Column, ListOptions,
};
use crate::shared::date_utils::format_date;

fn user_info_cell(user: &User) -> AnyView {
    view! {
        <div class="user-info">
            <div class="user-info__name">{user.name.clone()}</div>
            <div class="user-info__email">{user.email.clone()}</div>
        </div>
    }
    .into_any()
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("User Info", user_info_cell),
        Column::new("Role", |u: &User| text_cell(&u.role)),
        Column::new("Status", |u: &User| active_badge(u.active)),
        Column::new("Created", |u: &User| text_cell(&format_date(u.created_at.as_deref()))),
    ]
}

#[component]
pub fn UserList() -> impl IntoView {
    entity_list::<UserResource>(
        columns(),
        ListOptions {
            kind: EntityKind::User,
            title: "Users",
            add_label: "Add New User",
            server_search: true,
            local: None,
        },
    )
}
