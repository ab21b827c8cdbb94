pub mod a001_asset;
pub mod a002_category;
pub mod a003_maintainer;
pub mod a004_supplier;
