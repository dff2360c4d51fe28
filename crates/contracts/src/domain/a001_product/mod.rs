pub mod aggregate;

pub use aggregate::{parse_catalog_payload, ProductRecord};
