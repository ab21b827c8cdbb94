//! Paged list state machine.
//!
//! The controller owns no I/O. Every trigger hands back a [`FetchTicket`];
//! the screen runs the request and feeds the result to [`ListController::apply`].
//! Only the most recently issued ticket is applied, so a slow response to an
//! old query can never overwrite a newer one.

use contracts::shared::entity::EntityResource;
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::{Page, PageMeta};

use crate::shared::api::{ApiAction, ApiError};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<R> {
    Loading,
    Ready { items: Vec<R>, meta: PageMeta },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<F> {
    pub generation: u64,
    pub query: ListQuery<F>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied<F> {
    /// A newer ticket was issued meanwhile; the result was dropped
    Stale,
    Updated,
    /// Requested page no longer exists; fetch this one instead
    Redirect(FetchTicket<F>),
}

pub struct ListController<E: EntityResource> {
    query: ListQuery<E::SearchField>,
    state: ListState<E::Row>,
    generation: u64,
}

impl<E: EntityResource> Clone for ListController<E> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            state: self.state.clone(),
            generation: self.generation,
        }
    }
}

impl<E: EntityResource> Default for ListController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityResource> ListController<E> {
    pub fn new() -> Self {
        Self {
            query: ListQuery::first_page(),
            state: ListState::Loading,
            generation: 0,
        }
    }

    pub fn query(&self) -> &ListQuery<E::SearchField> {
        &self.query
    }

    pub fn state(&self) -> &ListState<E::Row> {
        &self.state
    }

    pub fn items(&self) -> &[E::Row] {
        match &self.state {
            ListState::Ready { items, .. } => items,
            _ => &[],
        }
    }

    pub fn meta(&self) -> Option<&PageMeta> {
        match &self.state {
            ListState::Ready { meta, .. } => Some(meta),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Initial fetch when the screen opens
    pub fn mount(&mut self) -> FetchTicket<E::SearchField> {
        self.issue()
    }

    /// Re-fetch the current query (Refresh button, after a delete)
    pub fn refresh(&mut self) -> FetchTicket<E::SearchField> {
        self.issue()
    }

    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket<E::SearchField>> {
        if page == 0 || page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.issue())
    }

    /// New search term; always back to page 1
    pub fn set_search_term(&mut self, term: String) -> Option<FetchTicket<E::SearchField>> {
        if term == self.query.search_term {
            return None;
        }
        self.query.search_term = term;
        self.query.page = 1;
        Some(self.issue())
    }

    pub fn set_search_by(
        &mut self,
        field: Option<E::SearchField>,
    ) -> Option<FetchTicket<E::SearchField>> {
        if field == self.query.search_by {
            return None;
        }
        self.query.search_by = field;
        self.query.page = 1;
        Some(self.issue())
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket<E::SearchField>,
        result: Result<Page<E::Row>, ApiError>,
    ) -> Applied<E::SearchField> {
        if ticket.generation != self.generation {
            log::debug!(
                "{}: dropping stale response #{} (current #{})",
                E::RESOURCE,
                ticket.generation,
                self.generation
            );
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                let requested = ticket.query.page;
                if page.is_empty() && requested > 1 && page.meta.total_pages < requested {
                    self.query.page = page.meta.total_pages.max(1);
                    log::debug!(
                        "{}: page {} is empty, moving to {}",
                        E::RESOURCE,
                        requested,
                        self.query.page
                    );
                    return Applied::Redirect(self.issue());
                }
                self.query.page = page.meta.current_page.max(1);
                self.state = ListState::Ready {
                    items: page.items,
                    meta: page.meta,
                };
                Applied::Updated
            }
            Err(err) => {
                self.state = ListState::Failed {
                    message: err.user_message(ApiAction::Fetch, E::PLURAL),
                };
                Applied::Updated
            }
        }
    }

    fn issue(&mut self) -> FetchTicket<E::SearchField> {
        self.generation += 1;
        self.state = ListState::Loading;
        log::debug!(
            "{}: fetch #{} page={} term={:?}",
            E::RESOURCE,
            self.generation,
            self.query.page,
            self.query.search_term
        );
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::client::EntityClient;
    use crate::shared::api::HttpMethod;
    use crate::shared::confirm_gate::ConfirmationGate;
    use crate::shared::testing::FakeTransport;
    use contracts::domain::a001_asset::{AssetResource, AssetSearchField};
    use futures::executor::block_on;

    type Assets = ListController<AssetResource>;

    fn page_headers<'a>(current: &'a str, total: &'a str) -> [(&'a str, &'a str); 4] {
        [
            ("X-Total-Pages", total),
            ("X-Current-Page", current),
            ("X-Page-Size", "5"),
            ("X-Total-Count", "13"),
        ]
    }

    fn run(
        controller: &mut Assets,
        client: &EntityClient<AssetResource, FakeTransport>,
        ticket: FetchTicket<AssetSearchField>,
    ) -> Applied<AssetSearchField> {
        let result = block_on(client.list(&ticket.query));
        controller.apply(ticket, result)
    }

    fn setup() -> (FakeTransport, EntityClient<AssetResource, FakeTransport>) {
        let fake = FakeTransport::default();
        let client = EntityClient::with_transport(fake.clone(), "http://api");
        (fake, client)
    }

    #[test]
    fn test_mount_loads_first_page() {
        let (fake, client) = setup();
        fake.push_json(200, r#"[{"id":1,"name":"Laptop-1"}]"#, &page_headers("1", "3"));
        let mut list = Assets::new();
        assert!(list.is_loading());

        let ticket = list.mount();
        assert_eq!(run(&mut list, &client, ticket), Applied::Updated);
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.meta().map(|m| m.total_pages), Some(3));
        assert_eq!(fake.requests()[0].url, "http://api/api/assets?page=1");
    }

    #[test]
    fn test_search_resets_page() {
        let (fake, client) = setup();
        let mut list = Assets::new();
        let ticket = list.mount();
        run(&mut list, &client, ticket);

        fake.push_json(200, "[]", &page_headers("3", "3"));
        let ticket = list.set_page(3).unwrap();
        run(&mut list, &client, ticket);
        assert_eq!(list.query().page, 3);

        let ticket = list.set_search_term("dell".to_string()).unwrap();
        assert_eq!(ticket.query.page, 1);
        let ticket = list.set_search_by(Some(AssetSearchField::Owner)).unwrap();
        assert_eq!(ticket.query.page, 1);
        run(&mut list, &client, ticket);

        let last = fake.requests().pop().unwrap();
        assert_eq!(
            last.url,
            "http://api/api/assets?page=1&searchTerm=dell&searchBy=owner"
        );
    }

    #[test]
    fn test_unchanged_trigger_issues_nothing() {
        let mut list = Assets::new();
        list.mount();
        assert!(list.set_page(1).is_none());
        assert!(list.set_page(0).is_none());
        assert!(list.set_search_term(String::new()).is_none());
        assert!(list.set_search_by(None).is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (fake, client) = setup();
        let mut list = Assets::new();
        let first = list.mount();
        let second = list.set_search_term("x".to_string()).unwrap();

        fake.push_json(200, r#"[{"id":2,"name":"new"}]"#, &[]);
        assert_eq!(run(&mut list, &client, second), Applied::Updated);

        fake.push_json(200, r#"[{"id":1,"name":"old"}]"#, &[]);
        assert_eq!(run(&mut list, &client, first), Applied::Stale);
        assert_eq!(list.items()[0].name, "new");
    }

    #[test]
    fn test_failure_shows_generic_message() {
        let (fake, client) = setup();
        fake.push_json(503, "", &[]);
        let mut list = Assets::new();
        let ticket = list.mount();
        run(&mut list, &client, ticket);
        assert_eq!(list.error(), Some("Failed to fetch assets."));
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_empty_page_past_end_redirects_to_last() {
        let (fake, client) = setup();
        let mut list = Assets::new();
        list.mount();
        let ticket = list.set_page(4).unwrap();

        fake.push_json(200, "[]", &page_headers("4", "3"));
        let redirect = match run(&mut list, &client, ticket) {
            Applied::Redirect(t) => t,
            other => panic!("expected redirect, got {:?}", other),
        };
        assert_eq!(redirect.query.page, 3);
        assert!(list.is_loading());

        fake.push_json(200, r#"[{"id":9,"name":"z"}]"#, &page_headers("3", "3"));
        assert_eq!(run(&mut list, &client, redirect), Applied::Updated);
        assert_eq!(list.query().page, 3);
    }

    #[test]
    fn test_delete_declined_sends_nothing() {
        let (fake, client) = setup();
        fake.push_json(
            200,
            r#"[{"id":1,"name":"Laptop-1"},{"id":2,"name":"Desk"}]"#,
            &page_headers("2", "3"),
        );
        let mut list = Assets::new();
        let ticket = list.set_search_term("lap".to_string()).unwrap();
        run(&mut list, &client, ticket);
        let state_before = list.state().clone();
        let query_before = list.query().clone();

        let mut gate = ConfirmationGate::default();
        gate.request("1".to_string());
        gate.decline();
        assert!(gate.confirm().is_none());

        assert_eq!(fake.requests().len(), 1);
        assert_eq!(list.state(), &state_before);
        assert_eq!(list.query(), &query_before);
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.query().page, 2);
    }

    #[test]
    fn test_delete_accepted_refetches_once() {
        let (fake, client) = setup();
        let mut list = Assets::new();
        let ticket = list.mount();
        run(&mut list, &client, ticket);

        let mut gate = ConfirmationGate::default();
        gate.request("1".to_string());
        let id = gate.confirm().unwrap();
        block_on(client.delete(&id)).unwrap();
        gate.finish();
        let ticket = list.refresh();
        run(&mut list, &client, ticket);

        let methods: Vec<HttpMethod> = fake.requests().iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![HttpMethod::Get, HttpMethod::Delete, HttpMethod::Get]
        );
        assert_eq!(fake.requests()[1].url, "http://api/api/assets/1");
    }
}
