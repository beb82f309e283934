//! The page composition engine.
//!
//! Walks `page.blocks` in order, resolves each block's renderer, compiles
//! its style directives, and assembles the render tree. Editing mode wraps
//! every block in selection chrome; a preview block composes after the
//! committed blocks without ever touching `page.blocks`.

use crate::diagnostics::Diagnostic;
use crate::registry::{Registry, ResolvedVia};
use crate::render::RenderNode;
use storekit_model::{Block, Page, StoreConfig};
use storekit_style::compile;
use tracing::{debug, warn};

/// Knobs for one composition pass.
#[derive(Default, Clone, Copy)]
pub struct ComposeOptions<'a> {
    /// When true, every block is wrapped with editor instrumentation and
    /// hidden blocks render dimmed instead of being skipped.
    pub editing: bool,

    /// ID of the currently selected block, if any. Pure render input; the
    /// editing state machine owns the actual selection.
    pub selected: Option<&'a str>,

    /// An uncommitted block to render provisionally after the page's
    /// committed blocks. Never inserted into `page.blocks`.
    pub preview: Option<&'a Block>,
}

/// Output of one composition pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub root: RenderNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compose a page into a render tree. Total: broken blocks degrade to
/// diagnostics, an empty page yields the documented empty-state
/// placeholder, and the rest of the page always renders.
pub fn compose(
    page: &Page,
    config: &StoreConfig,
    registry: &Registry,
    options: ComposeOptions<'_>,
) -> Composition {
    let mut diagnostics = Vec::new();
    let mut nodes = Vec::new();

    for block in &page.blocks {
        if block.hidden && !options.editing {
            debug!(block = %block.id, "skipping hidden block");
            continue;
        }

        let rendered = compose_block(block, config, registry, &mut diagnostics);
        if options.editing {
            nodes.push(wrap_editing(block, options.selected, rendered));
        } else {
            nodes.push(rendered);
        }
    }

    let preview = options
        .preview
        .map(|block| wrap_preview(block, compose_block(block, config, registry, &mut diagnostics)));

    let root = if page.blocks.is_empty() {
        empty_state(&page.id, preview)
    } else {
        if let Some(preview) = preview {
            nodes.push(preview);
        }
        RenderNode::Fragment(nodes)
    };

    Composition { root, diagnostics }
}

fn compose_block(
    block: &Block,
    config: &StoreConfig,
    registry: &Registry,
    diagnostics: &mut Vec<Diagnostic>,
) -> RenderNode {
    let family = block.family();
    let resolved = registry.resolve(family, block.variant.as_deref(), config);

    match resolved.via {
        ResolvedVia::Placeholder => {
            warn!(block = %block.id, %family, requested = ?block.variant,
                "no renderer available, emitting placeholder");
            diagnostics.push(Diagnostic::warning(
                &block.id,
                family,
                block.variant.clone(),
                format!("no renderer registered for family '{family}'"),
            ));
        }
        ResolvedVia::Exact => {}
        via => {
            // A requested key that missed is worth surfacing; silent
            // default selection for variant-less blocks is normal.
            if let Some(requested) = &block.variant {
                diagnostics.push(Diagnostic::info(
                    &block.id,
                    family,
                    Some(requested.clone()),
                    format!(
                        "variant '{requested}' not registered, fell back to '{}' ({via:?})",
                        resolved.key.as_deref().unwrap_or("?"),
                    ),
                ));
            }
        }
    }

    let directives = match block.data.style() {
        Some(style) => compile(style),
        None => Vec::new(),
    };

    resolved.renderer.render(block, &directives)
}

/// Wrap a rendered block with designer instrumentation: a stable
/// `data-block-id` hook, state markers, and selection chrome.
fn wrap_editing(block: &Block, selected: Option<&str>, rendered: RenderNode) -> RenderNode {
    let is_selected = selected == Some(block.id.as_str());

    let mut wrapper = RenderNode::element("div", &block.id)
        .attr("data-block-id", &block.id)
        .attr("data-family", block.family().as_str())
        .class("editor-block");

    if is_selected {
        wrapper = wrapper.class("is-selected");
    }
    if block.locked {
        wrapper = wrapper.attr("data-locked", "true").class("is-locked");
    }
    if block.hidden {
        wrapper = wrapper.attr("data-hidden", "true").class("is-hidden");
    }

    wrapper.child(rendered).into_node()
}

/// Mark a preview block's render as provisional.
fn wrap_preview(block: &Block, rendered: RenderNode) -> RenderNode {
    RenderNode::element("div", &block.id)
        .attr("data-preview", "true")
        .class("block-preview")
        .child(rendered)
        .into_node()
}

/// The documented empty-state placeholder: shown instead of an empty
/// render tree so the designer always has something to target.
fn empty_state(page_id: &str, preview: Option<RenderNode>) -> RenderNode {
    let mut placeholder = RenderNode::element("div", page_id)
        .attr("data-empty-state", "true")
        .class("page-empty-state")
        .child(RenderNode::Text(
            "This page is currently empty. Add your first section to bring it to life."
                .to_string(),
        ));

    if let Some(preview) = preview {
        placeholder = placeholder.child(preview);
    }

    placeholder.into_node()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BlockRenderer;
    use std::sync::Arc;
    use storekit_model::{BlockData, BlockFamily, HeroData, PageKind, RichTextData};
    use storekit_style::Directive;

    struct Echo;

    impl BlockRenderer for Echo {
        fn render(&self, block: &Block, directives: &[Directive]) -> RenderNode {
            let mut el = RenderNode::element("section", &block.id);
            for directive in directives {
                el = el.class(directive.class_token());
            }
            el.into_node()
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

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(BlockFamily::Hero, "impact", Arc::new(Echo))
            .unwrap();
        registry
    }

    fn hero(id: &str) -> Block {
        Block {
            id: id.to_string(),
            name: "Hero".to_string(),
            variant: None,
            hidden: false,
            locked: false,
            content: None,
            data: BlockData::Hero(HeroData::default()),
        }
    }

    fn page(blocks: Vec<Block>) -> Page {
        Page {
            id: "p-1".to_string(),
            title: "Home".to_string(),
            slug: "home".to_string(),
            kind: PageKind::Home,
            blocks,
        }
    }

    #[test]
    fn test_empty_page_emits_placeholder() {
        let composition = compose(
            &page(vec![]),
            &config(),
            &registry(),
            ComposeOptions::default(),
        );

        match composition.root {
            RenderNode::Element(el) => {
                assert!(el
                    .attributes
                    .contains(&("data-empty-state".to_string(), "true".to_string())));
            }
            other => panic!("expected empty-state element, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_block_skipped_outside_editing() {
        let mut block = hero("b-1");
        block.hidden = true;

        let composition = compose(
            &page(vec![block.clone()]),
            &config(),
            &registry(),
            ComposeOptions::default(),
        );
        assert_eq!(composition.root, RenderNode::Fragment(vec![]));

        let editing = compose(
            &page(vec![block]),
            &config(),
            &registry(),
            ComposeOptions {
                editing: true,
                ..Default::default()
            },
        );
        match editing.root {
            RenderNode::Fragment(nodes) => assert_eq!(nodes.len(), 1),
            other => panic!("expected fragment, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolvable_block_degrades_to_diagnostic() {
        // RichText has no renderer at all: placeholder + warning, but the
        // hero before it still renders.
        let rich = Block {
            id: "b-2".to_string(),
            name: "Text".to_string(),
            variant: Some("serif".to_string()),
            hidden: false,
            locked: false,
            content: None,
            data: BlockData::RichText(RichTextData::default()),
        };

        let composition = compose(
            &page(vec![hero("b-1"), rich]),
            &config(),
            &registry(),
            ComposeOptions::default(),
        );

        assert_eq!(composition.diagnostics.len(), 1);
        assert_eq!(composition.diagnostics[0].block_id, "b-2");
        match composition.root {
            RenderNode::Fragment(nodes) => {
                assert_eq!(nodes.len(), 2);
                assert!(nodes[1].is_empty());
            }
            other => panic!("expected fragment, got {other:?}"),
        }
    }
}
