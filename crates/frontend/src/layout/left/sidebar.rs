//! Navigation sidebar: the dashboard plus one entry per managed entity

use crate::layout::global_context::{use_app_context, EntityKind, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<EntityKind>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Inventory",
            items: vec![EntityKind::Asset, EntityKind::Category],
        },
        MenuGroup {
            label: "Partners",
            items: vec![EntityKind::Maintainer, EntityKind::Supplier],
        },
        MenuGroup {
            label: "Administration",
            items: vec![EntityKind::User],
        },
    ]
}

fn item_class(active: bool) -> &'static str {
    if active {
        "app-sidebar__item app-sidebar__item--active"
    } else {
        "app-sidebar__item"
    }
}

#[component]
fn MenuItem(kind: EntityKind) -> impl IntoView {
    let ctx = use_app_context();
    let is_active = move || ctx.screen.with(|s| s.kind() == Some(kind));

    view! {
        <div
            class=move || item_class(is_active())
            on:click=move |_| ctx.navigate(Screen::List(kind))
        >
            <span class="app-sidebar__icon">{icon(kind.icon())}</span>
            <span class="app-sidebar__label">{kind.title()}</span>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let on_dashboard = move || ctx.screen.with(|s| *s == Screen::Dashboard);

    view! {
        <div class="app-sidebar__content">
            <div
                class=move || item_class(on_dashboard())
                on:click=move |_| ctx.navigate(Screen::Dashboard)
            >
                <span class="app-sidebar__icon">{icon("dashboard")}</span>
                <span class="app-sidebar__label">"Dashboard"</span>
            </div>
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|kind| view! { <MenuItem kind=kind /> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
