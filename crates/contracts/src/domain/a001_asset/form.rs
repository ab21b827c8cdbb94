use serde::{Serialize, Serializer};

use crate::domain::a001_asset::aggregate::Asset;
use crate::shared::date_only;
use crate::shared::validation::{FieldErrors, FieldSpec, FormMode, FormModel, ValidationRules};

/// Body of `POST /api/assets` and `PUT /api/assets/{id}`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetForm {
    pub name: String,
    pub serial_number: String,
    pub owner: String,
    pub status: String,
    pub have_warranty: bool,
    /// `YYYY-MM-DD`, only sent when `have_warranty` is set
    pub warranty_start_date: String,
    pub warranty_end_date: String,
    pub active: bool,
    pub category_id: String,
    pub supplier_id: String,
    pub location: String,
    pub image_url: String,
}

/// Wire shape of `AssetForm`: blank optionals are left out, and so are
/// the warranty dates while the flag is off.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetPayload<'a> {
    name: &'a str,
    serial_number: &'a str,
    owner: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    have_warranty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warranty_start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warranty_end_date: Option<&'a str>,
    active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

fn present(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl Serialize for AssetForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AssetPayload {
            name: &self.name,
            serial_number: &self.serial_number,
            owner: &self.owner,
            status: present(&self.status),
            have_warranty: self.have_warranty,
            warranty_start_date: present(&self.warranty_start_date).filter(|_| self.have_warranty),
            warranty_end_date: present(&self.warranty_end_date).filter(|_| self.have_warranty),
            active: self.active,
            category_id: present(&self.category_id),
            supplier_id: present(&self.supplier_id),
            location: present(&self.location),
            image_url: present(&self.image_url),
        }
        .serialize(serializer)
    }
}

pub const WARRANTY_ORDER_ERROR: &str = "Warranty end date must not be before the start date.";

fn has_warranty(form: &AssetForm, _mode: &FormMode) -> bool {
    form.have_warranty
}

impl FormModel for AssetForm {
    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::new(
                "name",
                |f: &AssetForm| f.name.as_str(),
                ValidationRules::required("Asset name is required."),
            ),
            FieldSpec::new(
                "serialNumber",
                |f: &AssetForm| f.serial_number.as_str(),
                ValidationRules::required("Serial number is required."),
            ),
            FieldSpec::new(
                "owner",
                |f: &AssetForm| f.owner.as_str(),
                ValidationRules::required("Owner is required."),
            ),
            FieldSpec::new(
                "warrantyStartDate",
                |f: &AssetForm| f.warranty_start_date.as_str(),
                ValidationRules::required("Warranty start date required."),
            )
            .when(has_warranty),
            FieldSpec::new(
                "warrantyEndDate",
                |f: &AssetForm| f.warranty_end_date.as_str(),
                ValidationRules::required("Warranty end date required."),
            )
            .when(has_warranty),
        ]
    }

    fn cross_check(&self, _mode: &FormMode, errors: &mut FieldErrors) {
        if !self.have_warranty
            || self.warranty_start_date.is_empty()
            || self.warranty_end_date.is_empty()
        {
            return;
        }
        // ISO dates order lexicographically
        if date_only(&self.warranty_end_date) < date_only(&self.warranty_start_date) {
            errors.insert("warrantyEndDate", WARRANTY_ORDER_ERROR);
        }
    }
}

impl From<&Asset> for AssetForm {
    fn from(a: &Asset) -> Self {
        let date = |v: &Option<String>| v.as_deref().map(date_only).unwrap_or_default();
        Self {
            name: a.name.clone(),
            serial_number: a.serial_number.clone(),
            owner: a.owner.clone(),
            status: a.status.clone().unwrap_or_default(),
            have_warranty: a.have_warranty,
            warranty_start_date: date(&a.warranty_start_date),
            warranty_end_date: date(&a.warranty_end_date),
            active: a.active,
            category_id: a.category_id.clone().unwrap_or_default(),
            supplier_id: a.supplier_id.clone().unwrap_or_default(),
            location: a.location.clone().unwrap_or_default(),
            image_url: a.image_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> AssetForm {
        AssetForm {
            name: "Laptop-1".to_string(),
            serial_number: "SN001".to_string(),
            owner: "Alice".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_form_reports_required_fields() {
        let errors = AssetForm::default().validate(&FormMode::Create);
        assert_eq!(errors.get("name"), Some("Asset name is required."));
        assert_eq!(errors.get("serialNumber"), Some("Serial number is required."));
        assert_eq!(errors.get("owner"), Some("Owner is required."));
        assert!(!errors.contains("warrantyStartDate"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_missing_warranty_end_date() {
        let form = AssetForm {
            have_warranty: true,
            warranty_start_date: "2024-01-01".to_string(),
            ..laptop()
        };
        let errors = form.validate(&FormMode::Create);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("warrantyEndDate"), Some("Warranty end date required."));
    }

    #[test]
    fn test_warranty_dates_ignored_without_flag() {
        let form = AssetForm {
            have_warranty: false,
            warranty_start_date: "2024-01-01".to_string(),
            ..laptop()
        };
        assert!(form.validate(&FormMode::Create).is_empty());
    }

    #[test]
    fn test_warranty_end_before_start() {
        let form = AssetForm {
            have_warranty: true,
            warranty_start_date: "2024-06-01".to_string(),
            warranty_end_date: "2024-01-01".to_string(),
            ..laptop()
        };
        let errors = form.validate(&FormMode::Update { id: "1".to_string() });
        assert_eq!(errors.get("warrantyEndDate"), Some(WARRANTY_ORDER_ERROR));
    }

    #[test]
    fn test_payload_is_camel_case_and_skips_blanks() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["serialNumber"], "SN001");
        assert_eq!(json["haveWarranty"], false);
        assert!(json.get("warrantyStartDate").is_none());
        assert!(json.get("categoryId").is_none());
    }

    #[test]
    fn test_unticked_warranty_drops_dates_from_payload() {
        let form = AssetForm {
            have_warranty: false,
            warranty_start_date: "2024-01-01".to_string(),
            warranty_end_date: "2023-01-01".to_string(),
            ..laptop()
        };
        assert!(form.validate(&FormMode::Create).is_empty());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["haveWarranty"], false);
        assert!(json.get("warrantyStartDate").is_none());
        assert!(json.get("warrantyEndDate").is_none());

        let ticked = AssetForm {
            have_warranty: true,
            warranty_end_date: "2025-01-01".to_string(),
            ..form
        };
        let json = serde_json::to_value(&ticked).unwrap();
        assert_eq!(json["warrantyStartDate"], "2024-01-01");
        assert_eq!(json["warrantyEndDate"], "2025-01-01");
    }

    #[test]
    fn test_from_row_truncates_dates() {
        let row = Asset {
            id: "1".to_string(),
            name: "Printer".to_string(),
            have_warranty: true,
            warranty_start_date: Some("2024-02-01T00:00:00".to_string()),
            warranty_end_date: Some("2025-02-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let form = AssetForm::from(&row);
        assert_eq!(form.warranty_start_date, "2024-02-01");
        assert_eq!(form.warranty_end_date, "2025-02-01");
        assert_eq!(form.category_id, "");
    }
}
