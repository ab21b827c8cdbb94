use serde::Serialize;

use crate::domain::a003_maintainer::aggregate::Maintainer;
use crate::shared::validation::{FieldSpec, FormModel, Pattern, ValidationRules};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintainerForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub active: bool,
}

impl FormModel for MaintainerForm {
    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::new(
                "name",
                |f: &MaintainerForm| f.name.as_str(),
                ValidationRules::required("Maintainer name is required."),
            ),
            FieldSpec::new(
                "email",
                |f: &MaintainerForm| f.email.as_str(),
                ValidationRules::required("Email is required.")
                    .with_pattern(Pattern::Email, "Invalid email format."),
            ),
            FieldSpec::new(
                "phoneNumber",
                |f: &MaintainerForm| f.phone_number.as_str(),
                ValidationRules::required("Phone number is required."),
            ),
            FieldSpec::new(
                "city",
                |f: &MaintainerForm| f.city.as_str(),
                ValidationRules::required("City is required."),
            ),
        ]
    }
}

impl From<&Maintainer> for MaintainerForm {
    fn from(m: &Maintainer) -> Self {
        Self {
            name: m.name.clone(),
            email: m.email.clone(),
            phone_number: m.phone_number.clone(),
            city: m.city.clone(),
            active: m.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FormMode;

    #[test]
    fn test_blank_maintainer() {
        let errors = MaintainerForm::default().validate(&FormMode::Create);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("city"), Some("City is required."));
    }

    #[test]
    fn test_invalid_email() {
        let form = MaintainerForm {
            name: "Fixit".to_string(),
            email: "a@b".to_string(),
            phone_number: "555".to_string(),
            city: "Oslo".to_string(),
            active: true,
        };
        let errors = form.validate(&FormMode::Create);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email format."));
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(MaintainerForm::default()).unwrap();
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("phone_number").is_none());
    }
}
