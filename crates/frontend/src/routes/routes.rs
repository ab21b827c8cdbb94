use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_asset::ui::details::AssetDetails;
use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_maintainer::ui::details::MaintainerDetails;
use crate::domain::a003_maintainer::ui::list::MaintainerList;
use crate::domain::a004_supplier::ui::details::SupplierDetails;
use crate::domain::a004_supplier::ui::list::SupplierList;
use crate::layout::global_context::{use_app_context, EntityKind, Screen};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::users::ui::details::UserDetails;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

fn list_view(kind: EntityKind) -> AnyView {
    match kind {
        EntityKind::Asset => view! { <AssetList /> }.into_any(),
        EntityKind::Category => view! { <CategoryList /> }.into_any(),
        EntityKind::User => view! { <UserList /> }.into_any(),
        EntityKind::Maintainer => view! { <MaintainerList /> }.into_any(),
        EntityKind::Supplier => view! { <SupplierList /> }.into_any(),
    }
}

/// Add form when `id` is None, edit form otherwise
fn details_view(kind: EntityKind, id: Option<String>) -> AnyView {
    match kind {
        EntityKind::Asset => view! { <AssetDetails id=id /> }.into_any(),
        EntityKind::Category => view! { <CategoryDetails id=id /> }.into_any(),
        EntityKind::User => view! { <UserDetails id=id /> }.into_any(),
        EntityKind::Maintainer => view! { <MaintainerDetails id=id /> }.into_any(),
        EntityKind::Supplier => view! { <SupplierDetails id=id /> }.into_any(),
    }
}

fn screen_view(screen: Screen) -> AnyView {
    match screen {
        Screen::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Screen::List(kind) => list_view(kind),
        Screen::Create(kind) => details_view(kind, None),
        Screen::Edit(kind, id) => details_view(kind, Some(id)),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! { <div class="app-content">{move || screen_view(ctx.screen.get())}</div> }
                    .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
