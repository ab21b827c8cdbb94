//! Wire contracts shared by the asset back-office screens.
//!
//! - `domain`: assets, categories, maintainers, suppliers
//! - `system`: users
//! - `dashboards`: overview aggregation for the home screen
//! - `shared`: pagination, list queries, form validation

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
