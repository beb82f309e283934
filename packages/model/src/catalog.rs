//! Catalog variant types backing the product variant matrix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One user-defined option axis (e.g. `Size: [S, M, L]`). Value order is
/// meaningful: it fixes the enumeration order of the generated matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariantOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// One row of the generated variant matrix.
///
/// `title` is derived — the option values joined with `" / "` in option
/// order — and is the identity key used to preserve edited rows across
/// regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub stock: u32,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Option name → chosen value, rebuilt on every regeneration.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}
