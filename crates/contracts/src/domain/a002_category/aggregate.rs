use serde::{Deserialize, Serialize};

use crate::domain::a002_category::form::CategoryForm;
use crate::shared::entity::EntityResource;
use crate::shared::list_query::NoSearchField;
use crate::shared::serde_ids::string_or_number;

/// Asset category
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_by: String,
    /// Weight as typed by the user, e.g. "10kg" or "10"
    #[serde(default)]
    pub kilogram: String,
    #[serde(default)]
    pub active: bool,
}

/// The categories endpoint has no server-side search; the list screen
/// filters and sorts the loaded page locally.
pub struct CategoryResource;

impl EntityResource for CategoryResource {
    type Row = Category;
    type Form = CategoryForm;
    type SearchField = NoSearchField;

    const RESOURCE: &'static str = "Categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn row_id(row: &Category) -> &str {
        &row.id
    }

    fn form_from_row(row: &Category) -> CategoryForm {
        CategoryForm::from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_category() {
        let json = r#"{"id": 2, "name": "Laptops", "createdBy": "Bob", "kilogram": "3kg", "active": true}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "2");
        assert_eq!(c.created_by, "Bob");
        assert_eq!(c.kilogram, "3kg");
        assert!(c.active);
    }
}
