//! Composition diagnostics.
//!
//! Resolution fallbacks never fail a page; they record one of these
//! instead so the designer can surface broken variant keys.

use serde::{Deserialize, Serialize};
use storekit_model::BlockFamily;

/// Severity of a composition diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Info,
}

/// One recorded fallback or degradation during composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,

    /// Block id the diagnostic applies to.
    pub block_id: String,

    pub family: BlockFamily,

    /// The variant key the block asked for, if any.
    pub requested: Option<String>,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        block_id: impl Into<String>,
        family: BlockFamily,
        requested: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            block_id: block_id.into(),
            family,
            requested,
            message: message.into(),
        }
    }

    pub fn info(
        block_id: impl Into<String>,
        family: BlockFamily,
        requested: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            block_id: block_id.into(),
            family,
            requested,
            message: message.into(),
        }
    }
}
