use std::marker::PhantomData;

use contracts::shared::entity::EntityResource;
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::{Page, PageMeta};
use contracts::shared::validation::FormMode;
use serde::Deserialize;

use super::gloo::GlooTransport;
use super::{ApiError, ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::shared::api_utils::api_base;

/// REST client for one entity resource under `<base>/api/<RESOURCE>`.
///
/// Every method issues exactly one request. Error bodies are never read.
pub struct EntityClient<E, T = GlooTransport> {
    transport: T,
    base: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EntityResource> EntityClient<E, GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(GlooTransport, api_base())
    }
}

impl<E: EntityResource> Default for EntityClient<E, GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T: Clone> Clone for EntityClient<E, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityResource, T: Transport> EntityClient<E, T> {
    pub fn with_transport(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into().trim_end_matches('/').to_string(),
            _entity: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base, E::RESOURCE)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    pub fn list_url(&self, query: &ListQuery<E::SearchField>) -> String {
        let query_string = query
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.collection_url(), query_string)
    }

    pub async fn list(&self, query: &ListQuery<E::SearchField>) -> Result<Page<E::Row>, ApiError> {
        let response = self.execute(ApiRequest::get(self.list_url(query))).await?;
        let items: Vec<E::Row> = decode(&response.body)?;
        let meta = PageMeta::from_headers(
            |name| response.header(name),
            query.page,
            E::DEFAULT_PAGE_SIZE,
        );
        log::debug!(
            "{}: page {}/{} ({} rows)",
            E::RESOURCE,
            meta.current_page,
            meta.total_pages,
            items.len()
        );
        Ok(Page { items, meta })
    }

    pub async fn get(&self, id: &str) -> Result<E::Row, ApiError> {
        let response = self.execute(ApiRequest::get(self.item_url(id))).await?;
        decode(&response.body)
    }

    pub async fn create(&self, form: &E::Form) -> Result<(), ApiError> {
        let body = encode(form)?;
        self.execute(ApiRequest::with_json(HttpMethod::Post, self.collection_url(), body))
            .await
            .map(|_| ())
    }

    pub async fn update(&self, id: &str, form: &E::Form) -> Result<(), ApiError> {
        let body = encode(form)?;
        self.execute(ApiRequest::with_json(HttpMethod::Put, self.item_url(id), body))
            .await
            .map(|_| ())
    }

    /// `create` or `update`, depending on the form mode
    pub async fn save(&self, mode: &FormMode, form: &E::Form) -> Result<(), ApiError> {
        match mode {
            FormMode::Create => self.create(form).await,
            FormMode::Update { id } => self.update(id, form).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(self.item_url(id)))
            .await
            .map(|_| ())
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("{} {} -> {}", method.as_str(), url, response.status);
            return Err(ApiError::Http {
                status: response.status,
            });
        }
        Ok(response)
    }
}

fn decode<R: serde::de::DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<F: serde::Serialize>(form: &F) -> Result<String, ApiError> {
    serde_json::to_string(form).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_url: String,
}

/// Extract `fileUrl` from the body of `POST /api/image`
pub fn parse_upload_response(body: &str) -> Result<String, ApiError> {
    let parsed: UploadResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Upload(e.to_string()))?;
    if parsed.file_url.trim().is_empty() {
        return Err(ApiError::Upload("empty fileUrl".to_string()));
    }
    Ok(parsed.file_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakeTransport;
    use contracts::domain::a001_asset::{AssetForm, AssetResource, AssetSearchField};
    use contracts::domain::a002_category::CategoryResource;
    use contracts::system::users::UserResource;
    use futures::executor::block_on;

    const BASE: &str = "http://localhost:5119";

    fn client<E: EntityResource>(fake: &FakeTransport) -> EntityClient<E, FakeTransport> {
        EntityClient::with_transport(fake.clone(), BASE)
    }

    #[test]
    fn test_list_url_omits_empty_search() {
        let fake = FakeTransport::default();
        let assets = client::<AssetResource>(&fake);
        assert_eq!(
            assets.list_url(&ListQuery::first_page()),
            "http://localhost:5119/api/assets?page=1"
        );

        let query = ListQuery {
            page: 2,
            search_term: "dell xps".to_string(),
            search_by: Some(AssetSearchField::SerialNumber),
        };
        assert_eq!(
            assets.list_url(&query),
            "http://localhost:5119/api/assets?page=2&searchTerm=dell%20xps&searchBy=serialnumber"
        );
    }

    #[test]
    fn test_resource_casing_preserved() {
        let fake = FakeTransport::default();
        assert_eq!(
            client::<CategoryResource>(&fake).item_url("7"),
            "http://localhost:5119/api/Categories/7"
        );
        assert_eq!(
            client::<UserResource>(&fake).collection_url(),
            "http://localhost:5119/api/users"
        );
    }

    #[test]
    fn test_list_decodes_rows_and_headers() {
        let fake = FakeTransport::default();
        fake.push_json(
            200,
            r#"[{"id":1,"name":"Laptops","createdBy":"ann","kilogram":"2kg","active":true}]"#,
            &[
                ("x-total-pages", "3"),
                ("X-Current-Page", "2"),
                ("X-Page-Size", "5"),
                ("X-Total-Count", "13"),
            ],
        );
        let page = block_on(client::<CategoryResource>(&fake).list(&ListQuery {
            page: 2,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.meta.total_count, 13);
        assert_eq!(fake.requests().len(), 1);
    }

    #[test]
    fn test_list_without_headers_uses_defaults() {
        let fake = FakeTransport::default();
        fake.push_json(200, "[]", &[]);
        let page = block_on(client::<AssetResource>(&fake).list(&ListQuery {
            page: 4,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.current_page, 4);
        assert_eq!(page.meta.page_size, 5);
        assert_eq!(page.meta.total_count, 0);
    }

    #[test]
    fn test_non_success_is_http_error() {
        let fake = FakeTransport::default();
        fake.push_json(500, r#"{"message":"boom"}"#, &[]);
        let result = block_on(client::<AssetResource>(&fake).get("9"));
        assert_eq!(result, Err(ApiError::Http { status: 500 }));
    }

    #[test]
    fn test_malformed_list_is_decode_error() {
        let fake = FakeTransport::default();
        fake.push_json(200, r#"{"items":[]}"#, &[]);
        let result = block_on(client::<AssetResource>(&fake).list(&ListQuery::first_page()));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_network_error_passes_through() {
        let fake = FakeTransport::default();
        fake.push_error(ApiError::Network("offline".to_string()));
        let result = block_on(client::<AssetResource>(&fake).delete("1"));
        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
    }

    #[test]
    fn test_save_picks_method_by_mode() {
        let fake = FakeTransport::default();
        let assets = client::<AssetResource>(&fake);
        let form = AssetForm {
            name: "Laptop-1".to_string(),
            ..Default::default()
        };
        block_on(assets.save(&FormMode::Create, &form)).unwrap();
        block_on(assets.save(&FormMode::Update { id: "a b".to_string() }, &form)).unwrap();

        let requests = fake.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://localhost:5119/api/assets");
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].url, "http://localhost:5119/api/assets/a%20b");
        let body: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Laptop-1");
    }

    #[test]
    fn test_delete_ignores_response_body() {
        let fake = FakeTransport::default();
        fake.push_json(200, "not json", &[]);
        assert!(block_on(client::<AssetResource>(&fake).delete("3")).is_ok());
        assert_eq!(fake.requests()[0].method, HttpMethod::Delete);
        assert!(fake.requests()[0].body.is_none());
    }

    #[test]
    fn test_parse_upload_response() {
        assert_eq!(
            parse_upload_response(r#"{"fileUrl":"/uploads/a.png"}"#),
            Ok("/uploads/a.png".to_string())
        );
        assert!(matches!(
            parse_upload_response(r#"{"url":"x"}"#),
            Err(ApiError::Upload(_))
        ));
        assert!(matches!(
            parse_upload_response(r#"{"fileUrl":""}"#),
            Err(ApiError::Upload(_))
        ));
    }
}
