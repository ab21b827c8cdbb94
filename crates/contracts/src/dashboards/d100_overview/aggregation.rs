//! Dashboard aggregation over the rows the overview screen fetched

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::dto::{CategoryCount, MonthCount, StatusCount};
use crate::domain::a001_asset::Asset;
use crate::domain::a002_category::Category;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Status buckets in display order: (stored value, label)
const STATUSES: [(&str, &str); 3] = [
    ("active", "Active"),
    ("maintenance", "Maintenance"),
    ("retired", "Retired"),
];

const MONTH_WINDOW: i32 = 6;

/// Parse an API timestamp: RFC 3339, a naive ISO datetime, or a bare date
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    let date_part: String = value.chars().take(10).collect();
    NaiveDate::parse_from_str(&date_part, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn assets_by_category(categories: &[Category], assets: &[Asset]) -> Vec<CategoryCount> {
    categories
        .iter()
        .map(|category| CategoryCount {
            name: category.name.clone(),
            count: assets
                .iter()
                .filter(|a| a.category_id.as_deref() == Some(category.id.as_str()))
                .count(),
        })
        .collect()
}

pub fn assets_by_status(assets: &[Asset]) -> Vec<StatusCount> {
    STATUSES
        .iter()
        .map(|(value, label)| StatusCount {
            status: label.to_string(),
            count: assets
                .iter()
                .filter(|a| {
                    a.status
                        .as_deref()
                        .map(|s| s.trim().eq_ignore_ascii_case(value))
                        .unwrap_or(false)
                })
                .count(),
        })
        .collect()
}

/// Assets per calendar month for the six months ending with `today`'s month,
/// oldest first.
pub fn monthly_assets(assets: &[Asset], today: NaiveDate) -> Vec<MonthCount> {
    let stamps: Vec<NaiveDateTime> = assets
        .iter()
        .filter_map(|a| a.activity_timestamp().and_then(parse_timestamp))
        .collect();

    let current = today.year() * 12 + today.month0() as i32;
    ((current - MONTH_WINDOW + 1)..=current)
        .map(|index| {
            let year = index.div_euclid(12);
            let month0 = index.rem_euclid(12) as u32;
            MonthCount {
                label: MONTH_LABELS[month0 as usize].to_string(),
                year,
                month: month0 + 1,
                count: stamps
                    .iter()
                    .filter(|ts| ts.year() == year && ts.month0() == month0)
                    .count(),
            }
        })
        .collect()
}

/// The `limit` most recently updated assets, newest first.
/// Assets without a parseable timestamp sort last.
pub fn recent_assets(assets: &[Asset], limit: usize) -> Vec<Asset> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &Asset)> = assets
        .iter()
        .map(|a| (a.activity_timestamp().and_then(parse_timestamp), a))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().take(limit).map(|(_, a)| a.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_overview::dto::{EntityCounts, OverviewSummary};

    fn asset(id: &str, category: Option<&str>, status: &str, updated: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: format!("asset-{}", id),
            category_id: category.map(str::to_string),
            status: Some(status.to_string()),
            last_updated: Some(updated.to_string()),
            ..Default::default()
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        assert!(parse_timestamp("2024-03-15T14:02:26Z").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26.123").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_assets_by_category() {
        let cats = vec![category("1", "Laptops"), category("2", "Printers")];
        let assets = vec![
            asset("a", Some("1"), "active", "2024-01-01"),
            asset("b", Some("1"), "active", "2024-01-01"),
            asset("c", None, "active", "2024-01-01"),
        ];
        let counts = assets_by_category(&cats, &assets);
        assert_eq!(counts[0], CategoryCount { name: "Laptops".to_string(), count: 2 });
        assert_eq!(counts[1].count, 0);
    }

    #[test]
    fn test_assets_by_status_ignores_case() {
        let assets = vec![
            asset("a", None, "Active", "2024-01-01"),
            asset("b", None, "maintenance", "2024-01-01"),
            asset("c", None, "lost", "2024-01-01"),
        ];
        let counts = assets_by_status(&assets);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].count, 1);
        assert_eq!(counts[2].count, 0);
    }

    #[test]
    fn test_monthly_window_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let assets = vec![
            asset("a", None, "active", "2023-09-30T10:00:00Z"),
            asset("b", None, "active", "2024-02-01"),
            asset("c", None, "active", "2023-02-01"),
        ];
        let months = monthly_assets(&assets, today);
        let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(months[0].year, 2023);
        assert_eq!(months[0].count, 1);
        assert_eq!(months[5].count, 1);
        assert_eq!(months.iter().map(|m| m.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_recent_assets_newest_first() {
        let assets = vec![
            asset("old", None, "active", "2023-01-01"),
            asset("none", None, "active", ""),
            asset("new", None, "active", "2024-06-01T08:00:00Z"),
            asset("mid", None, "active", "2024-01-01"),
        ];
        let ids: Vec<String> = recent_assets(&assets, 3).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_summary_build() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let counts = EntityCounts {
            assets: 13,
            ..Default::default()
        };
        let summary = OverviewSummary::build(
            counts,
            &[category("1", "Laptops")],
            &[asset("a", Some("1"), "retired", "2024-06-01")],
            today,
        );
        assert_eq!(summary.counts.assets, 13);
        assert_eq!(summary.max_category_count(), 1);
        assert_eq!(summary.max_month_count(), 1);
        assert_eq!(summary.recent.len(), 1);
        assert_eq!(summary.by_status[2].count, 1);
    }
}
