//! Render tree definitions for composed output.
//!
//! This is what the composer produces - a platform-agnostic representation
//! that can be:
//! 1. Rendered directly in the storefront preview
//! 2. Diffed for incremental updates
//! 3. Serialized for the designer canvas

use serde::{Deserialize, Serialize};

/// One node of the composed render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderNode {
    Element(RenderElement),
    Text(String),
    Fragment(Vec<RenderNode>),
}

impl RenderNode {
    /// An element node with no attributes or children yet.
    pub fn element(tag: impl Into<String>, source_id: impl Into<String>) -> RenderElement {
        RenderElement {
            tag: tag.into(),
            source_id: source_id.into(),
            attributes: Vec::new(),
            class_names: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A fragment rendering nothing observable.
    pub fn empty() -> RenderNode {
        RenderNode::Fragment(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderNode::Fragment(children) if children.is_empty())
    }
}

/// Element node with source mapping back to its block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderElement {
    /// HTML tag name
    pub tag: String,

    /// ID of the block this element was rendered from (designer selection
    /// maps back through this)
    pub source_id: String,

    /// HTML attributes
    pub attributes: Vec<(String, String)>,

    /// Utility class names attached by directives and chrome
    pub class_names: Vec<String>,

    /// Child nodes
    pub children: Vec<RenderNode>,
}

impl RenderElement {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    pub fn child(mut self, node: RenderNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::Element(self)
    }
}
