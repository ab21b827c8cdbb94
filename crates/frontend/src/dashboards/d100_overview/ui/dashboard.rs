use contracts::dashboards::d100_overview::OverviewSummary;
use contracts::domain::a001_asset::Asset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d100_overview::api;
use crate::layout::global_context::{use_app_context, EntityKind, Screen};
use crate::shared::components::entity_list::active_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{BarRow, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn recent_row(asset: Asset) -> impl IntoView {
    let updated = asset
        .activity_timestamp()
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string());
    view! {
        <TableRow>
            <TableCell>{asset.name}</TableCell>
            <TableCell>{asset.serial_number}</TableCell>
            <TableCell>{asset.category_name.unwrap_or_else(|| "-".to_string())}</TableCell>
            <TableCell>{active_badge(asset.active)}</TableCell>
            <TableCell>{updated}</TableCell>
        </TableRow>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let summary = RwSignal::new(None::<OverviewSummary>);
    let loading = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            let data = api::load_overview().await;
            summary.set(Some(data));
            loading.set(false);
        });
    };
    load();

    let count_of = move |kind: EntityKind| {
        Signal::derive(move || {
            summary.with(|s| {
                s.as_ref().map(|s| match kind {
                    EntityKind::Asset => s.counts.assets,
                    EntityKind::Category => s.counts.categories,
                    EntityKind::User => s.counts.users,
                    EntityKind::Maintainer => s.counts.maintainers,
                    EntityKind::Supplier => s.counts.suppliers,
                })
            })
        })
    };

    let cards = EntityKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <StatCard
                    label=kind.title()
                    icon_name=kind.icon()
                    value=count_of(kind)
                    on_click=Callback::new(move |_: ()| ctx.navigate(Screen::List(kind)))
                />
            }
        })
        .collect_view();

    let charts = move || {
        summary.get().map(|s| {
            let category_max = s.max_category_count();
            let month_max = s.max_month_count();
            let status_max = s.by_status.iter().map(|c| c.count).max().unwrap_or(0);
            view! {
                <div class="dashboard__charts">
                    <section class="dashboard__panel">
                        <h3>"Assets by Category"</h3>
                        {if s.by_category.is_empty() {
                            view! { <p class="dashboard__empty">"No categories yet."</p> }.into_any()
                        } else {
                            s.by_category
                                .iter()
                                .map(|c| view! { <BarRow label=c.name.clone() count=c.count max=category_max /> })
                                .collect_view()
                                .into_any()
                        }}
                    </section>
                    <section class="dashboard__panel">
                        <h3>"Assets by Status"</h3>
                        {s.by_status
                            .iter()
                            .map(|c| view! { <BarRow label=c.status.clone() count=c.count max=status_max /> })
                            .collect_view()}
                    </section>
                    <section class="dashboard__panel">
                        <h3>"Monthly Activity"</h3>
                        {s.monthly
                            .iter()
                            .map(|m| {
                                let label = format!("{} {}", m.label, m.year);
                                view! { <BarRow label=label count=m.count max=month_max /> }
                            })
                            .collect_view()}
                    </section>
                </div>
                <section class="dashboard__panel">
                    <h3>"Recently Updated Assets"</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Serial Number"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>"Updated"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {s.recent.into_iter().map(recent_row).collect_view()}
                        </TableBody>
                    </Table>
                </section>
            }
        })
    };

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard" subtitle="Overview of the asset inventory">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>
            <div class="dashboard__cards">{cards}</div>
            {move || (loading.get() && summary.with(|s| s.is_none()))
                .then(|| view! { <div class="dashboard__loading">"Loading..."</div> })}
            {charts}
        </div>
    }
}
