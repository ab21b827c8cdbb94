use serde::{Deserialize, Serialize};

use crate::shared::entity::EntityResource;
use crate::shared::list_query::SearchField;
use crate::shared::serde_ids::string_or_number;
use crate::shared::validation::{FieldSpec, FormMode, FormModel, Pattern, ValidationRules};

/// Back-office user. The password is write-only and never part of the read model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Free text ("admin", "technician", ...)
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Sent only when typed; an update without a password keeps the old one
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub role: String,
    pub active: bool,
}

fn creating(_form: &UserForm, mode: &FormMode) -> bool {
    mode.is_create()
}

impl FormModel for UserForm {
    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::new(
                "name",
                |f: &UserForm| f.name.as_str(),
                ValidationRules::required("User name is required."),
            ),
            FieldSpec::new(
                "email",
                |f: &UserForm| f.email.as_str(),
                ValidationRules::required("Email is required.")
                    .with_pattern(Pattern::Email, "Invalid email format."),
            ),
            FieldSpec::new(
                "password",
                |f: &UserForm| f.password.as_str(),
                ValidationRules::required("Password is required."),
            )
            .when(creating),
            FieldSpec::new(
                "role",
                |f: &UserForm| f.role.as_str(),
                ValidationRules::required("Role is required."),
            ),
        ]
    }
}

impl From<&User> for UserForm {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            password: String::new(),
            role: u.role.clone(),
            active: u.active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSearchField {
    Name,
    Email,
    Role,
    Active,
}

impl SearchField for UserSearchField {
    const ALL: &'static [Self] = &[
        UserSearchField::Name,
        UserSearchField::Email,
        UserSearchField::Role,
        UserSearchField::Active,
    ];

    fn query_value(self) -> &'static str {
        match self {
            UserSearchField::Name => "name",
            UserSearchField::Email => "email",
            UserSearchField::Role => "role",
            UserSearchField::Active => "active",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UserSearchField::Name => "Name",
            UserSearchField::Email => "Email",
            UserSearchField::Role => "Role",
            UserSearchField::Active => "Status",
        }
    }
}

pub struct UserResource;

impl EntityResource for UserResource {
    type Row = User;
    type Form = UserForm;
    type SearchField = UserSearchField;

    const RESOURCE: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn row_id(row: &User) -> &str {
        &row.id
    }

    fn form_from_row(row: &User) -> UserForm {
        UserForm::from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> UserForm {
        UserForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "s3cret".to_string(),
            role: "admin".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_password_required_on_create_only() {
        let form = UserForm {
            password: String::new(),
            ..valid()
        };
        assert_eq!(
            form.validate(&FormMode::Create).get("password"),
            Some("Password is required.")
        );
        assert!(form
            .validate(&FormMode::Update { id: "u1".to_string() })
            .is_empty());
    }

    #[test]
    fn test_password_not_redisplayed() {
        let row = User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            ..Default::default()
        };
        assert_eq!(UserForm::from(&row).password, "");
    }

    #[test]
    fn test_blank_password_not_serialized() {
        let json = serde_json::to_value(UserForm {
            password: String::new(),
            ..valid()
        })
        .unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(serde_json::to_value(valid()).unwrap()["password"], "s3cret");
    }

    #[test]
    fn test_user_row_ignores_password() {
        let json = r#"{"id":"u1","name":"A","email":"a@b.co","password":"x","role":"r","active":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, "r");
    }
}
