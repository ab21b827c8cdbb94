//! Client-side form validation.
//!
//! A form is described by a list of [`FieldSpec`]s (field name, value accessor,
//! rules, optional conditional requiredness). Validation is pure and
//! synchronous; the resulting [`FieldErrors`] never leave the client.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

static WEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(kg)?$").expect("weight pattern compiles"));

/// Regex-backed value shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `local@domain.tld`, no whitespace
    Email,
    /// Digits with an optional `kg` suffix, checked on the trimmed value
    Weight,
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_RE.is_match(value),
            Pattern::Weight => WEIGHT_RE.is_match(value.trim()),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    /// Message when a required value is blank
    pub required_error: &'static str,
    /// Message when length or pattern checks fail
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            required_error: "",
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required(message: &'static str) -> Self {
        Self {
            required: true,
            required_error: message,
            ..Self::none()
        }
    }

    pub const fn with_min_length(self, min: usize, message: &'static str) -> Self {
        Self {
            min_length: Some(min),
            custom_error: Some(message),
            ..self
        }
    }

    pub const fn with_pattern(self, pattern: Pattern, message: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules; the first failing rule wins
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            if self.required {
                return Err(self.required_error.to_string());
            }
            return Ok(());
        }

        let invalid = || self.custom_error.unwrap_or("Invalid value.").to_string();

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(invalid());
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(invalid());
            }
        }
        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(invalid());
            }
        }

        Ok(())
    }
}

/// Whether a form creates a new record or replaces an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: String },
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

/// Predicate deciding whether a field is validated at all
pub type RequiredWhen<F> = fn(&F, &FormMode) -> bool;

/// One entry of a form schema
pub struct FieldSpec<F> {
    /// JSON/field name used as error key
    pub name: &'static str,
    pub value: fn(&F) -> &str,
    pub rules: ValidationRules,
    /// When set, the field is only validated if the predicate holds
    pub required_when: Option<RequiredWhen<F>>,
}

impl<F> FieldSpec<F> {
    pub fn new(name: &'static str, value: fn(&F) -> &str, rules: ValidationRules) -> Self {
        Self {
            name,
            value,
            rules,
            required_when: None,
        }
    }

    pub fn when(mut self, predicate: RequiredWhen<F>) -> Self {
        self.required_when = Some(predicate);
        self
    }

    fn check(&self, form: &F, mode: &FormMode) -> Result<(), String> {
        if let Some(applies) = self.required_when {
            if !applies(form, mode) {
                return Ok(());
            }
        }
        self.rules.validate_string((self.value)(form))
    }
}

/// Field-level validation errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; an existing error for the same field is kept.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A validated form whose fields are serialised as the request body
pub trait FormModel: Clone + Default + PartialEq + Serialize + Send + Sync + 'static {
    fn fields() -> Vec<FieldSpec<Self>>;

    /// Rules spanning several fields, run after the per-field checks
    fn cross_check(&self, _mode: &FormMode, _errors: &mut FieldErrors) {}

    fn validate(&self, mode: &FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for spec in Self::fields() {
            if let Err(message) = spec.check(self, mode) {
                errors.insert(spec.name, message);
            }
        }
        self.cross_check(mode, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_pattern() {
        assert!(Pattern::Weight.is_match("10kg"));
        assert!(Pattern::Weight.is_match("10"));
        assert!(Pattern::Weight.is_match(" 25kg "));
        assert!(!Pattern::Weight.is_match("10 kg"));
        assert!(!Pattern::Weight.is_match("kg10"));
        assert!(!Pattern::Weight.is_match(""));
        assert!(!Pattern::Weight.is_match("10KG"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(Pattern::Email.is_match("a@b.co"));
        assert!(!Pattern::Email.is_match("a@b"));
        assert!(!Pattern::Email.is_match("a.b@"));
        assert!(!Pattern::Email.is_match(""));
        assert!(!Pattern::Email.is_match("a b@c.de"));
    }

    #[test]
    fn test_required_then_pattern() {
        let rules = ValidationRules::required("Email is required.")
            .with_pattern(Pattern::Email, "Invalid email format.");
        assert_eq!(rules.validate_string("  "), Err("Email is required.".to_string()));
        assert_eq!(rules.validate_string("nope"), Err("Invalid email format.".to_string()));
        assert_eq!(rules.validate_string("x@y.io"), Ok(()));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required("Required.").with_min_length(2, "Too short.");
        assert_eq!(rules.validate_string("a"), Err("Too short.".to_string()));
        assert_eq!(rules.validate_string("ab"), Ok(()));
        assert_eq!(rules.validate_string("éé"), Ok(()));
    }

    #[test]
    fn test_optional_blank_passes() {
        let rules = ValidationRules::none().with_pattern(Pattern::Email, "Invalid email format.");
        assert_eq!(rules.validate_string(""), Ok(()));
        assert!(!rules.is_required());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }
}
