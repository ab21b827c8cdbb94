pub mod aggregation;
pub mod dto;

pub use aggregation::{assets_by_category, assets_by_status, monthly_assets, recent_assets};
pub use dto::{CategoryCount, EntityCounts, MonthCount, OverviewSummary, StatusCount};
