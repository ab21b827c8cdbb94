pub mod aggregate;
pub mod form;

pub use aggregate::{Asset, AssetResource, AssetSearchField};
pub use form::AssetForm;
