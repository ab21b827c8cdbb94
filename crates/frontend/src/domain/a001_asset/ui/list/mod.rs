use contracts::domain::a001_asset::{Asset, AssetResource};
use leptos::prelude::*;

use crate::layout::global_context::EntityKind;
use crate::shared::components::entity_list::{
    active_badge, entity_list, text_cell, Column, ListOptions,
};
use crate::shared::date_utils::format_date;

fn optional_cell(value: &Option<String>) -> AnyView {
    text_cell(value.as_deref().filter(|s| !s.is_empty()).unwrap_or("-"))
}

fn warranty_cell(asset: &Asset) -> AnyView {
    if !asset.have_warranty {
        return text_cell("No");
    }
    text_cell(&format!(
        "{} - {}",
        format_date(asset.warranty_start_date.as_deref()),
        format_date(asset.warranty_end_date.as_deref())
    ))
}

fn image_cell(asset: &Asset) -> AnyView {
    match asset.image_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => view! { <img class="table__thumb" src=url.to_string() alt="" /> }.into_any(),
        None => text_cell("-"),
    }
}

fn columns() -> Vec<Column<Asset>> {
    vec![
        Column::new("Image", image_cell),
        Column::new("Name", |a: &Asset| text_cell(&a.name)),
        Column::new("Serial Number", |a: &Asset| text_cell(&a.serial_number)),
        Column::new("Owner", |a: &Asset| text_cell(&a.owner)),
        Column::new("Status", |a: &Asset| optional_cell(&a.status)),
        Column::new("Warranty", warranty_cell),
        Column::new("Category", |a: &Asset| optional_cell(&a.category_name)),
        Column::new("Supplier", |a: &Asset| optional_cell(&a.supplier_name)),
        Column::new("Active", |a: &Asset| active_badge(a.active)),
    ]
}

#[component]
pub fn AssetList() -> impl IntoView {
    entity_list::<AssetResource>(
        columns(),
        ListOptions {
            kind: EntityKind::Asset,
            title: "Assets",
            add_label: "Add New Asset",
            server_search: true,
            local: None,
        },
    )
}
