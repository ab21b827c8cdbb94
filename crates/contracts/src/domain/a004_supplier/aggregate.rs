use serde::{Deserialize, Serialize};

use crate::domain::a004_supplier::form::SupplierForm;
use crate::shared::entity::EntityResource;
use crate::shared::list_query::NoSearchField;
use crate::shared::serde_ids::string_or_number;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub active: bool,
}

pub struct SupplierResource;

impl EntityResource for SupplierResource {
    type Row = Supplier;
    type Form = SupplierForm;
    type SearchField = NoSearchField;

    const RESOURCE: &'static str = "Supplier";
    const SINGULAR: &'static str = "supplier";
    const PLURAL: &'static str = "suppliers";

    fn row_id(row: &Supplier) -> &str {
        &row.id
    }

    fn form_from_row(row: &Supplier) -> SupplierForm {
        SupplierForm::from(row)
    }
}
