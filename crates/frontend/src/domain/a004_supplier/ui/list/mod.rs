use contracts::domain::a004_supplier::{Supplier, SupplierResource};
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_list::{
    active_badge, entity_list, text_cell, Column, ListOptions,
};

fn columns() -> Vec<Column<Supplier>> {
    vec![
        Column::new("Name", |s: &Supplier| text_cell(&s.name)),
        Column::new("Email", |s: &Supplier| text_cell(&s.email)),
        Column::new("Phone Number", |s: &Supplier| text_cell(&s.phone_number)),
        Column::new("Active", |s: &Supplier| active_badge(s.active)),
    ]
}

#[component]
pub fn SupplierList() -> impl IntoView {
    entity_list::<SupplierResource>(
        columns(),
        ListOptions {
            kind: EntityKind::Supplier,
            title: "Suppliers",
            add_label: "Add New Supplier",
            server_search: false,
            local: None,
        },
    )
}
