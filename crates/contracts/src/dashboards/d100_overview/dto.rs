use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboards::d100_overview::aggregation::{
    assets_by_category, assets_by_status, monthly_assets, recent_assets,
};
use crate::domain::a001_asset::Asset;
use crate::domain::a002_category::Category;

/// Number of assets shown in the "recent" table
pub const RECENT_ASSETS: usize = 5;

/// Totals per entity, shown as stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub assets: u64,
    pub categories: u64,
    pub users: u64,
    pub maintainers: u64,
    pub suppliers: u64,
}

/// Bar chart row: assets per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Doughnut chart slice: assets per status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Line chart point: assets touched in a calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    /// Short month name ("Jan")
    pub label: String,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub count: usize,
}

/// Everything the home screen renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub counts: EntityCounts,
    pub by_category: Vec<CategoryCount>,
    pub by_status: Vec<StatusCount>,
    pub monthly: Vec<MonthCount>,
    pub recent: Vec<Asset>,
}

impl OverviewSummary {
    pub fn build(
        counts: EntityCounts,
        categories: &[Category],
        assets: &[Asset],
        today: NaiveDate,
    ) -> Self {
        Self {
            counts,
            by_category: assets_by_category(categories, assets),
            by_status: assets_by_status(assets),
            monthly: monthly_assets(assets, today),
            recent: recent_assets(assets, RECENT_ASSETS),
        }
    }

    /// Largest bar value, used to scale the HTML charts
    pub fn max_category_count(&self) -> usize {
        self.by_category.iter().map(|c| c.count).max().unwrap_or(0)
    }

    pub fn max_month_count(&self) -> usize {
        self.monthly.iter().map(|m| m.count).max().unwrap_or(0)
    }
}
