//! # Storekit Catalog
//!
//! Generates and reconciles the combinatorial product-variant matrix the
//! catalog editor shows whenever a product's option list changes.
//!
//! The matrix is the Cartesian product of the option value-lists in
//! odometer order (last option changes fastest). Rows are identified by
//! their derived `title`; rows whose title survives a regeneration keep
//! their edited price/stock/sku, new rows are seeded from the product's
//! base price and SKU.

mod matrix;
mod slug;

pub use matrix::generate;
pub use slug::slugify;
