//! Generic paged list screen.
//!
//! Each entity contributes its columns and a few options; fetching, search,
//! pagination and the delete dialog are the same for all of them.

use contracts::shared::entity::EntityResource;
use contracts::shared::list_query::SearchField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{use_app_context, EntityKind, Screen};
use crate::shared::api::client::EntityClient;
use crate::shared::api::ApiAction;
use crate::shared::components::page_header::{Banner, BannerView, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::confirm_gate::ConfirmationGate;
use crate::shared::icons::icon;
use crate::shared::list_controller::{Applied, FetchTicket, ListController, ListState};
use crate::shared::list_utils::{get_sort_indicator, visible_rows, Searchable, SortState, Sortable};
use crate::shared::modal::ConfirmDialog;

pub struct Column<R> {
    pub title: &'static str,
    /// Column key for local sorting
    pub sort_key: Option<&'static str>,
    pub render: fn(&R) -> AnyView,
}

impl<R> Column<R> {
    pub fn new(title: &'static str, render: fn(&R) -> AnyView) -> Self {
        Self {
            title,
            sort_key: None,
            render,
        }
    }

    pub fn sortable(mut self, key: &'static str) -> Self {
        self.sort_key = Some(key);
        self
    }
}

/// Filter box and column sort over the loaded page
pub struct LocalTools<R> {
    pub default_sort: &'static str,
    pub view: fn(&[R], &str, &SortState) -> Vec<R>,
}

impl<R> Clone for LocalTools<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for LocalTools<R> {}

impl<R: Searchable + Sortable + Clone> LocalTools<R> {
    pub fn new(default_sort: &'static str) -> Self {
        Self {
            default_sort,
            view: visible_rows::<R>,
        }
    }
}

pub struct ListOptions<R> {
    pub kind: EntityKind,
    pub title: &'static str,
    pub add_label: &'static str,
    /// Search box sent to the server as `searchTerm`
    pub server_search: bool,
    pub local: Option<LocalTools<R>>,
}

/// Signals behind one list screen
pub struct EntityListViewModel<E: EntityResource> {
    pub list: RwSignal<ListController<E>>,
    pub gate: RwSignal<ConfirmationGate>,
    pub banner: RwSignal<Option<Banner>>,
}

impl<E: EntityResource> Clone for EntityListViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EntityResource> Copy for EntityListViewModel<E> {}

impl<E: EntityResource> EntityListViewModel<E> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ListController::new()),
            gate: RwSignal::new(ConfirmationGate::default()),
            banner: RwSignal::new(None),
        }
    }

    /// Run a controller trigger and fetch if it issued a ticket
    pub fn dispatch(
        &self,
        action: impl FnOnce(&mut ListController<E>) -> Option<FetchTicket<E::SearchField>>,
    ) {
        if let Some(ticket) = self.list.try_update(action).flatten() {
            run_fetch(self.list, ticket);
        }
    }

    pub fn mount(&self) {
        self.dispatch(|c| Some(c.mount()));
    }

    pub fn refresh(&self) {
        self.banner.set(None);
        self.dispatch(|c| Some(c.refresh()));
    }

    pub fn request_delete(&self, id: String) {
        self.gate.update(|g| {
            g.request(id);
        });
    }

    pub fn delete_confirmed(&self) {
        let Some(id) = self.gate.try_update(|g| g.confirm()).flatten() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = EntityClient::<E>::new().delete(&id).await;
            this.gate.update(|g| g.finish());
            match result {
                Ok(()) => {
                    log::info!("{} {} deleted", E::SINGULAR, id);
                    this.banner.set(Some(Banner::Success(format!(
                        "The {} has been deleted.",
                        E::SINGULAR
                    ))));
                    this.dispatch(|c| Some(c.refresh()));
                }
                Err(err) => {
                    this.banner.set(Some(Banner::Error(
                        err.user_message(ApiAction::Delete, E::SINGULAR),
                    )));
                }
            }
        });
    }
}

impl<E: EntityResource> Default for EntityListViewModel<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn run_fetch<E: EntityResource>(
    list: RwSignal<ListController<E>>,
    ticket: FetchTicket<E::SearchField>,
) {
    spawn_local(async move {
        let result = EntityClient::<E>::new().list(&ticket.query).await;
        if let Some(Applied::Redirect(next)) = list.try_update(|c| c.apply(ticket, result)) {
            run_fetch(list, next);
        }
    });
}

/// "Active"/"Inactive" badge for the `active` flag every entity carries
pub fn active_badge(active: bool) -> AnyView {
    if active {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }
            .into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge> }
            .into_any()
    }
}

/// Plain text cell
pub fn text_cell(value: &str) -> AnyView {
    view! { <span>{value.to_string()}</span> }.into_any()
}

fn message_row(colspan: usize, text: String, class: &'static str) -> AnyView {
    view! {
        <TableRow>
            <td class=class colspan=colspan.to_string()>{text}</td>
        </TableRow>
    }
    .into_any()
}

pub fn entity_list<E: EntityResource>(
    columns: Vec<Column<E::Row>>,
    options: ListOptions<E::Row>,
) -> impl IntoView {
    let ctx = use_app_context();
    let vm = EntityListViewModel::<E>::new();
    vm.mount();

    let ListOptions {
        kind,
        title,
        add_label,
        server_search,
        local,
    } = options;

    let colspan = columns.len() + 1;
    let columns = StoredValue::new(columns);
    let local_filter = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new(
        local.map(|tools| tools.default_sort).unwrap_or(""),
    ));

    let search_bar = server_search.then(|| {
        let fields = E::SearchField::ALL;
        view! {
            <div class="list-toolbar">
                <input
                    class="form__input list-toolbar__search"
                    type="search"
                    placeholder=format!("Search {}...", E::PLURAL)
                    prop:value=move || vm.list.with(|c| c.query().search_term.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        vm.dispatch(move |c| c.set_search_term(term));
                    }
                />
                {(!fields.is_empty()).then(|| view! {
                    <select
                        class="form__input list-toolbar__field"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.dispatch(move |c| {
                                c.set_search_by(E::SearchField::from_query_value(&value))
                            });
                        }
                    >
                        <option value="">"All Fields"</option>
                        {fields
                            .iter()
                            .map(|f| view! { <option value=f.query_value()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                })}
            </div>
        }
    });

    let filter_bar = local.map(|_| {
        view! {
            <div class="list-toolbar">
                <input
                    class="form__input list-toolbar__search"
                    type="search"
                    placeholder="Filter this page..."
                    prop:value=move || local_filter.get()
                    on:input=move |ev| local_filter.set(event_target_value(&ev))
                />
            </div>
        }
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let title = col.title;
                match col.sort_key.filter(|_| local.is_some()) {
                    Some(key) => view! {
                        <TableHeaderCell>
                            <span
                                class="table__sortable"
                                on:click=move |_| sort.update(|s| s.toggle(key))
                            >
                                {title}
                                " "
                                {move || sort.with(|s| get_sort_indicator(s, key))}
                            </span>
                        </TableHeaderCell>
                    }
                    .into_any(),
                    None => view! { <TableHeaderCell>{title}</TableHeaderCell> }.into_any(),
                }
            })
            .collect_view()
    });

    let rows_view = move || {
        let state = vm.list.with(|c| c.state().clone());
        match state {
            ListState::Loading => {
                message_row(colspan, "Loading...".to_string(), "table__cell table__cell--muted")
            }
            ListState::Failed { message } => {
                message_row(colspan, message, "table__cell table__cell--error")
            }
            ListState::Ready { items, .. } => {
                let rows = match local {
                    Some(tools) => sort.with(|s| (tools.view)(&items, &local_filter.get(), s)),
                    None => items,
                };
                if rows.is_empty() {
                    return message_row(
                        colspan,
                        format!("No {} found.", E::PLURAL),
                        "table__cell table__cell--muted",
                    );
                }
                rows.into_iter()
                    .map(|row| row_view::<E>(row, columns, vm, kind))
                    .collect_view()
                    .into_any()
            }
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(Screen::Create(kind))
                >
                    {icon("plus")}
                    {add_label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.list.with(|c| c.is_loading()))
                    on_click=move |_| vm.refresh()
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            {search_bar}
            {filter_bar}
            <BannerView banner=vm.banner />

            <Table>
                <TableHeader>
                    <TableRow>
                        {header_cells}
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows_view}</TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || {
                    vm.list.with(|c| c.meta().map(|m| m.current_page).unwrap_or(c.query().page))
                })
                total_pages=Signal::derive(move || {
                    vm.list.with(|c| c.meta().map(|m| m.total_pages).unwrap_or(1))
                })
                total_count=Signal::derive(move || {
                    vm.list.with(|c| c.meta().map(|m| m.total_count).unwrap_or(0))
                })
                disabled=Signal::derive(move || vm.list.with(|c| c.is_loading()))
                on_page_change=Callback::new(move |page: u32| vm.dispatch(move |c| c.set_page(page)))
            />

            <ConfirmDialog
                open=Signal::derive(move || vm.gate.with(|g| g.is_open()))
                busy=Signal::derive(move || vm.gate.with(|g| g.is_deleting()))
                title=format!("Delete {}", E::SINGULAR)
                message=format!("Are you sure you want to delete this {}?", E::SINGULAR)
                on_confirm=Callback::new(move |_: ()| vm.delete_confirmed())
                on_cancel=Callback::new(move |_: ()| vm.gate.update(|g| g.decline()))
            />
        </div>
    }
}

fn row_view<E: EntityResource>(
    row: E::Row,
    columns: StoredValue<Vec<Column<E::Row>>>,
    vm: EntityListViewModel<E>,
    kind: EntityKind,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = E::row_id(&row).to_string();
    let edit_id = id.clone();
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let cell = (col.render)(&row);
                view! {
                    <TableCell>
                        <TableCellLayout>{cell}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view()
    });

    view! {
        <TableRow>
            {cells}
            <TableCell>
                <TableCellLayout>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.navigate(Screen::Edit(kind, edit_id.clone()))
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.request_delete(id.clone())
                    >
                        {icon("trash")}
                    </Button>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
