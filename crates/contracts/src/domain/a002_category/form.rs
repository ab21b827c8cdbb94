use serde::Serialize;

use crate::domain::a002_category::aggregate::Category;
use crate::shared::validation::{FieldSpec, FormModel, Pattern, ValidationRules};

/// Body of `POST /api/Categories` and `PUT /api/Categories/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: String,
    pub created_by: String,
    pub kilogram: String,
    pub active: bool,
}

impl FormModel for CategoryForm {
    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::new(
                "name",
                |f: &CategoryForm| f.name.as_str(),
                ValidationRules::required("Category name is required.")
                    .with_min_length(2, "Name must be at least 2 characters."),
            ),
            FieldSpec::new(
                "createdBy",
                |f: &CategoryForm| f.created_by.as_str(),
                ValidationRules::required("Created By is required."),
            ),
            FieldSpec::new(
                "kilogram",
                |f: &CategoryForm| f.kilogram.as_str(),
                ValidationRules::required("Weight is required.")
                    .with_pattern(Pattern::Weight, "Enter a valid weight (e.g. 10kg or 10)."),
            ),
        ]
    }
}

impl From<&Category> for CategoryForm {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            created_by: c.created_by.clone(),
            kilogram: c.kilogram.clone(),
            active: c.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FormMode;

    fn valid() -> CategoryForm {
        CategoryForm {
            name: "Laptops".to_string(),
            created_by: "Bob".to_string(),
            kilogram: "10kg".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_valid_category() {
        assert!(valid().validate(&FormMode::Create).is_empty());
        let plain = CategoryForm {
            kilogram: "10".to_string(),
            ..valid()
        };
        assert!(plain.validate(&FormMode::Create).is_empty());
    }

    #[test]
    fn test_short_name() {
        let form = CategoryForm {
            name: "L".to_string(),
            ..valid()
        };
        let errors = form.validate(&FormMode::Create);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters."));
    }

    #[test]
    fn test_bad_weights() {
        for weight in ["10 kg", "kg10"] {
            let form = CategoryForm {
                kilogram: weight.to_string(),
                ..valid()
            };
            let errors = form.validate(&FormMode::Create);
            assert_eq!(
                errors.get("kilogram"),
                Some("Enter a valid weight (e.g. 10kg or 10)."),
                "weight {:?}",
                weight
            );
        }

        let blank = CategoryForm {
            kilogram: String::new(),
            ..valid()
        };
        assert_eq!(
            blank.validate(&FormMode::Create).get("kilogram"),
            Some("Weight is required.")
        );
    }
}
