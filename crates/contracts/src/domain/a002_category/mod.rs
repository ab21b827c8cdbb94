pub mod aggregate;
pub mod form;

pub use aggregate::{Category, CategoryResource};
pub use form::CategoryForm;
