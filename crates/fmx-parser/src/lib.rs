pub mod catalog;

pub use catalog::parse_catalog;
