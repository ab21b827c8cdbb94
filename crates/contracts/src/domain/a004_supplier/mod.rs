pub mod aggregate;
pub mod form;

pub use aggregate::{Supplier, SupplierResource};
pub use form::SupplierForm;
