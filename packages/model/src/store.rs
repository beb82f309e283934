//! Store-wide configuration: theme tokens and default variant selections.

use crate::page::BlockFamily;
use serde::{Deserialize, Serialize};

/// Global store settings. Read-only from the engine's perspective; supplied
/// as a snapshot by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub name: String,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Fallback variant keys, one per system block family.
    pub header_style: String,
    pub hero_style: String,
    pub product_card_style: String,
    pub footer_style: String,
}

impl StoreConfig {
    /// The store-configured default variant for a family, if it has one.
    pub fn default_variant(&self, family: BlockFamily) -> Option<&str> {
        match family {
            BlockFamily::Hero => Some(&self.hero_style),
            BlockFamily::Grid => Some(&self.product_card_style),
            BlockFamily::Footer => Some(&self.footer_style),
            _ => None,
        }
    }
}
