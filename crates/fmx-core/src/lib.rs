pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::*;
