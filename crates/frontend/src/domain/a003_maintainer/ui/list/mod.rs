use contracts::domain::a003_maintainer::{Maintainer, MaintainerResource};
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_list::{
    active_badge, entity_list, text_cell, Column, ListOptions,
};

fn columns() -> Vec<Column<Maintainer>> {
    vec![
        Column::new("Name", |m: &Maintainer| text_cell(&m.name)),
        Column::new("Email", |m: &Maintainer| text_cell(&m.email)),
        Column::new("Phone Number", |m: &Maintainer| text_cell(&m.phone_number)),
        Column::new("City", |m: &Maintainer| text_cell(&m.city)),
        Column::new("Active", |m: &Maintainer| active_badge(m.active)),
    ]
}

#[component]
pub fn MaintainerList() -> impl IntoView {
    entity_list::<MaintainerResource>(
        columns(),
        ListOptions {
            kind: EntityKind::Maintainer,
            title: "Maintainers",
            add_label: "Add New Maintainer",
            server_search: true,
            local: None,
        },
    )
}
