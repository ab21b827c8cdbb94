use crate::shared::list_query::SearchField;
use crate::shared::validation::FormModel;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Page size the list screens assume until the server says otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// A server-owned record type with its own REST resource.
///
/// Implemented by zero-sized markers (`AssetResource`, `UserResource`, ...) so
/// the generic list/form machinery can be parameterised by entity.
pub trait EntityResource: 'static {
    /// Read model returned by `GET` (list rows and single items)
    type Row: DeserializeOwned + Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Body of `POST`/`PUT`
    type Form: FormModel;
    type SearchField: SearchField;

    /// Path segment under `/api/`; casing differs per resource on the server
    const RESOURCE: &'static str;
    /// Lower-case singular noun for messages ("asset")
    const SINGULAR: &'static str;
    /// Lower-case plural noun for messages ("assets")
    const PLURAL: &'static str;
    const DEFAULT_PAGE_SIZE: u32 = DEFAULT_PAGE_SIZE;

    fn row_id(row: &Self::Row) -> &str;

    /// Edit-form values for a fetched row
    fn form_from_row(row: &Self::Row) -> Self::Form;
}
