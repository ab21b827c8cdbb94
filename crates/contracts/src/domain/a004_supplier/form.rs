use serde::Serialize;

use crate::domain::a004_supplier::aggregate::Supplier;
use crate::shared::validation::{FieldSpec, FormModel, Pattern, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub active: bool,
}

impl FormModel for SupplierForm {
    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::new(
                "name",
                |f: &SupplierForm| f.name.as_str(),
                ValidationRules::required("Supplier name is required."),
            ),
            FieldSpec::new(
                "email",
                |f: &SupplierForm| f.email.as_str(),
                ValidationRules::required("Email is required.")
                    .with_pattern(Pattern::Email, "Invalid email format."),
            ),
            FieldSpec::new(
                "phoneNumber",
                |f: &SupplierForm| f.phone_number.as_str(),
                ValidationRules::required("Phone number is required."),
            ),
        ]
    }
}

impl From<&Supplier> for SupplierForm {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            email: s.email.clone(),
            phone_number: s.phone_number.clone(),
            active: s.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FormMode;

    #[test]
    fn test_valid_supplier() {
        let form = SupplierForm {
            name: "Acme".to_string(),
            email: "sales@acme.io".to_string(),
            phone_number: "+47 555 000".to_string(),
            active: true,
        };
        assert!(form.validate(&FormMode::Create).is_empty());
    }

    #[test]
    fn test_email_shapes() {
        for (email, expected) in [
            ("a@b.co", None),
            ("a@b", Some("Invalid email format.")),
            ("a.b@", Some("Invalid email format.")),
            ("", Some("Email is required.")),
        ] {
            let form = SupplierForm {
                name: "Acme".to_string(),
                email: email.to_string(),
                phone_number: "1".to_string(),
                active: false,
            };
            assert_eq!(form.validate(&FormMode::Create).get("email"), expected, "{email:?}");
        }
    }
}
