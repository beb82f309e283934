//! The variant registry: `(family, variant key)` → renderer capability.
//!
//! Built once at startup from the style library's static registrations.
//! Resolution never fails and never halts composition: a key that cannot
//! be satisfied walks a fallback chain ending at an inert placeholder.

use crate::render::RenderNode;
use std::collections::HashMap;
use std::sync::Arc;
use storekit_model::{Block, BlockFamily, StoreConfig};
use storekit_style::Directive;
use thiserror::Error;
use tracing::debug;

/// An opaque renderer capability. The composer hands it the block and the
/// block's compiled directives and takes whatever comes back; it never
/// inspects the renderer itself.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, block: &Block, directives: &[Directive]) -> RenderNode;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Variant '{key}' already registered for family '{family}'")]
    AlreadyRegistered { family: BlockFamily, key: String },

    #[error("Cannot set default for family '{family}': variant '{key}' is not registered")]
    UnknownDefault { family: BlockFamily, key: String },
}

/// How a resolution was satisfied, in fallback-chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    /// Exact `(family, key)` match.
    Exact,
    /// The store config's default variant for the family.
    StoreDefault,
    /// The family's registry-designated default variant.
    FamilyDefault,
    /// The inert placeholder; renders nothing observable.
    Placeholder,
}

/// Outcome of a registry lookup.
#[derive(Clone)]
pub struct Resolved {
    pub renderer: Arc<dyn BlockRenderer>,
    /// The variant key that actually satisfied the lookup, if any.
    pub key: Option<String>,
    pub via: ResolvedVia,
}

/// Renders nothing observable; the composer records a diagnostic when it
/// is reached.
struct PlaceholderRenderer;

impl BlockRenderer for PlaceholderRenderer {
    fn render(&self, _block: &Block, _directives: &[Directive]) -> RenderNode {
        RenderNode::empty()
    }
}

/// Build-time-populated lookup table for block renderers.
pub struct Registry {
    entries: HashMap<(BlockFamily, String), Arc<dyn BlockRenderer>>,
    defaults: HashMap<BlockFamily, String>,
    placeholder: Arc<dyn BlockRenderer>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            defaults: HashMap::new(),
            placeholder: Arc::new(PlaceholderRenderer),
        }
    }

    /// Register a renderer for `(family, key)`. Double registration of the
    /// same key is a wiring bug in the style library, so it errors rather
    /// than silently replacing.
    pub fn register(
        &mut self,
        family: BlockFamily,
        key: impl Into<String>,
        renderer: Arc<dyn BlockRenderer>,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        if self.entries.contains_key(&(family, key.clone())) {
            return Err(RegistryError::AlreadyRegistered { family, key });
        }
        self.entries.insert((family, key), renderer);
        Ok(())
    }

    /// Designate the family's default variant. The key must already be
    /// registered.
    pub fn set_default(
        &mut self,
        family: BlockFamily,
        key: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        if !self.entries.contains_key(&(family, key.clone())) {
            return Err(RegistryError::UnknownDefault { family, key });
        }
        self.defaults.insert(family, key);
        Ok(())
    }

    fn lookup(&self, family: BlockFamily, key: &str) -> Option<Arc<dyn BlockRenderer>> {
        self.entries.get(&(family, key.to_string())).cloned()
    }

    /// Resolve a renderer for `(family, requested)`.
    ///
    /// Chain: exact match → store-config default → family default →
    /// placeholder. Total: always returns a renderer.
    pub fn resolve(
        &self,
        family: BlockFamily,
        requested: Option<&str>,
        config: &StoreConfig,
    ) -> Resolved {
        if let Some(key) = requested {
            if let Some(renderer) = self.lookup(family, key) {
                return Resolved {
                    renderer,
                    key: Some(key.to_string()),
                    via: ResolvedVia::Exact,
                };
            }
        }

        if let Some(key) = config.default_variant(family) {
            if let Some(renderer) = self.lookup(family, key) {
                debug!(family = %family, key, "resolved via store default");
                return Resolved {
                    renderer,
                    key: Some(key.to_string()),
                    via: ResolvedVia::StoreDefault,
                };
            }
        }

        if let Some(key) = self.defaults.get(&family) {
            if let Some(renderer) = self.lookup(family, key) {
                debug!(family = %family, key, "resolved via family default");
                return Resolved {
                    renderer,
                    key: Some(key.clone()),
                    via: ResolvedVia::FamilyDefault,
                };
            }
        }

        Resolved {
            renderer: self.placeholder.clone(),
            key: None,
            via: ResolvedVia::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static str);

    impl BlockRenderer for Tagged {
        fn render(&self, block: &Block, _directives: &[Directive]) -> RenderNode {
            RenderNode::element(self.0, &block.id).into_node()
        }
    }

    fn config() -> StoreConfig {
        StoreConfig {
            name: "Acme".to_string(),
            primary_color: None,
            logo_url: None,
            header_style: "minimal".to_string(),
            hero_style: "impact".to_string(),
            product_card_style: "classic".to_string(),
            footer_style: "slim".to_string(),
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let mut registry = Registry::new();
        registry
            .register(BlockFamily::Hero, "impact", Arc::new(Tagged("impact")))
            .unwrap();
        registry
            .register(BlockFamily::Hero, "minimal", Arc::new(Tagged("minimal")))
            .unwrap();

        let resolved = registry.resolve(BlockFamily::Hero, Some("minimal"), &config());
        assert_eq!(resolved.via, ResolvedVia::Exact);
        assert_eq!(resolved.key.as_deref(), Some("minimal"));
    }

    #[test]
    fn test_missing_key_falls_back_to_store_default() {
        let mut registry = Registry::new();
        registry
            .register(BlockFamily::Hero, "impact", Arc::new(Tagged("impact")))
            .unwrap();

        let resolved = registry.resolve(BlockFamily::Hero, Some("no-such"), &config());
        assert_eq!(resolved.via, ResolvedVia::StoreDefault);
        assert_eq!(resolved.key.as_deref(), Some("impact"));
    }

    #[test]
    fn test_family_default_when_store_has_none() {
        let mut registry = Registry::new();
        registry
            .register(BlockFamily::RichText, "serif", Arc::new(Tagged("serif")))
            .unwrap();
        registry.set_default(BlockFamily::RichText, "serif").unwrap();

        // RichText has no StoreConfig entry.
        let resolved = registry.resolve(BlockFamily::RichText, None, &config());
        assert_eq!(resolved.via, ResolvedVia::FamilyDefault);
    }

    #[test]
    fn test_placeholder_never_fails() {
        let registry = Registry::new();
        let resolved = registry.resolve(BlockFamily::Gallery, Some("anything"), &config());

        assert_eq!(resolved.via, ResolvedVia::Placeholder);
        assert!(resolved.key.is_none());
    }

    #[test]
    fn test_double_registration_errors() {
        let mut registry = Registry::new();
        registry
            .register(BlockFamily::Hero, "impact", Arc::new(Tagged("a")))
            .unwrap();

        let err = registry
            .register(BlockFamily::Hero, "impact", Arc::new(Tagged("b")))
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_default_must_be_registered() {
        let mut registry = Registry::new();
        let err = registry.set_default(BlockFamily::Hero, "ghost").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownDefault { .. }));
    }
}
