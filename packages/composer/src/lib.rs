//! # Storekit Composer
//!
//! Resolves abstract content blocks to concrete renderers and emits a
//! render tree for a page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry: (family, variant) → renderer      │
//! │  - graceful fallback chain, never fails     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ composer: Page → RenderNode tree            │
//! │  - compiles each block's style directives   │
//! │  - wraps blocks with editing chrome         │
//! │  - appends uncommitted preview blocks       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Contract
//!
//! Composing the same `(page, store config, options)` twice yields
//! structurally identical output. Renderer resolution is map lookup over
//! explicit registrations, block iteration follows list order, and broken
//! blocks degrade to diagnostics instead of halting the page.

mod composer;
mod diagnostics;
mod registry;
mod render;

pub use composer::{compose, ComposeOptions, Composition};
pub use diagnostics::{Diagnostic, DiagnosticLevel};
pub use registry::{BlockRenderer, Registry, RegistryError, Resolved, ResolvedVia};
pub use render::{RenderElement, RenderNode};
