pub mod entity;
pub mod list_query;
pub mod pagination;
pub mod serde_ids;
pub mod validation;

/// Date-only part of an ISO date or timestamp ("2024-03-15T10:00:00Z" -> "2024-03-15").
///
/// Edit forms bind `<input type="date">`, which only accepts the first 10 characters.
pub fn date_only(value: &str) -> String {
    value.chars().take(10).collect()
}
