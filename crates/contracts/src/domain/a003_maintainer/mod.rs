pub mod aggregate;
pub mod form;

pub use aggregate::{Maintainer, MaintainerResource};
pub use form::MaintainerForm;
