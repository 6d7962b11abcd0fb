//! Asset loading and validation for card catalogs and runtime settings.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;

pub use oracle_core::{Catalog, ImageExt, ImageHost, OracleConfig};
