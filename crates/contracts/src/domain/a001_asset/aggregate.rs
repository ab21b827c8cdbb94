use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::form::AssetForm;
use crate::shared::entity::EntityResource;
use crate::shared::list_query::SearchField;
use crate::shared::serde_ids::{opt_string_or_number, string_or_number};

// ============================================================================
// Read model
// ============================================================================

/// Asset as returned by `GET /api/assets`
///
/// The list and detail endpoints disagree on the warranty field names
/// (`haveWarranty` vs `hasWarranty`, ...), both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub owner: String,
    /// Free text; the dashboard recognises `active`, `maintenance`, `retired`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, alias = "hasWarranty")]
    pub have_warranty: bool,
    #[serde(default, alias = "warrantyStart")]
    pub warranty_start_date: Option<String>,
    #[serde(default, alias = "warrantyEnd")]
    pub warranty_end_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl Asset {
    /// Timestamp used for "recent" ordering and monthly buckets
    pub fn activity_timestamp(&self) -> Option<&str> {
        non_empty(&self.last_updated).or(non_empty(&self.created_at))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSearchField {
    Name,
    SerialNumber,
    Owner,
    Status,
    HaveWarranty,
    WarrantyStart,
    WarrantyEnd,
    Active,
}

impl SearchField for AssetSearchField {
    const ALL: &'static [Self] = &[
        AssetSearchField::Name,
        AssetSearchField::SerialNumber,
        AssetSearchField::Owner,
        AssetSearchField::Status,
        AssetSearchField::HaveWarranty,
        AssetSearchField::WarrantyStart,
        AssetSearchField::WarrantyEnd,
        AssetSearchField::Active,
    ];

    fn query_value(self) -> &'static str {
        match self {
            AssetSearchField::Name => "name",
            AssetSearchField::SerialNumber => "serialnumber",
            AssetSearchField::Owner => "owner",
            AssetSearchField::Status => "status",
            AssetSearchField::HaveWarranty => "havewarranty",
            AssetSearchField::WarrantyStart => "warrantystart",
            AssetSearchField::WarrantyEnd => "warrantyend",
            AssetSearchField::Active => "active",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AssetSearchField::Name => "Name",
            AssetSearchField::SerialNumber => "Serial Number",
            AssetSearchField::Owner => "Owner",
            AssetSearchField::Status => "Status",
            AssetSearchField::HaveWarranty => "Has Warranty",
            AssetSearchField::WarrantyStart => "Warranty Start",
            AssetSearchField::WarrantyEnd => "Warranty End",
            AssetSearchField::Active => "Active",
        }
    }
}

// ============================================================================
// Resource
// ============================================================================

pub struct AssetResource;

impl EntityResource for AssetResource {
    type Row = Asset;
    type Form = AssetForm;
    type SearchField = AssetSearchField;

    const RESOURCE: &'static str = "assets";
    const SINGULAR: &'static str = "asset";
    const PLURAL: &'static str = "assets";

    fn row_id(row: &Asset) -> &str {
        &row.id
    }

    fn form_from_row(row: &Asset) -> AssetForm {
        AssetForm::from(row)
    }
}
