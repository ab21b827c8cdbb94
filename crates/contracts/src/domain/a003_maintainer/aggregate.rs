use serde::{Deserialize, Serialize};

use crate::domain::a003_maintainer::form::MaintainerForm;
use crate::shared::entity::EntityResource;
use crate::shared::list_query::NoSearchField;
use crate::shared::serde_ids::string_or_number;

/// External maintenance contact
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintainer {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub active: bool,
}

/// Maintainers accept a search term but no `searchBy` field
pub struct MaintainerResource;

impl EntityResource for MaintainerResource {
    type Row = Maintainer;
    type Form = MaintainerForm;
    type SearchField = NoSearchField;

    const RESOURCE: &'static str = "Maintainer";
    const SINGULAR: &'static str = "maintainer";
    const PLURAL: &'static str = "maintainers";

    fn row_id(row: &Maintainer) -> &str {
        &row.id
    }

    fn form_from_row(row: &Maintainer) -> MaintainerForm {
        MaintainerForm::from(row)
    }
}
