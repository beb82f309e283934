//! # Storekit Style Compiler
//!
//! Compiles a block's structural [`StyleConfig`] into an ordered list of
//! atomic rendering [`Directive`]s.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Compilation is fully deterministic.**
//!
//! Fields are evaluated in one fixed order — padding, paddingX, maxWidth,
//! height, background, alignment, imageFit — regardless of how the caller
//! constructed the config. Same config → byte-for-byte identical output on
//! every call. No hidden state, no defaults: an absent field emits nothing.

mod compiler;

pub use compiler::{compile, Directive, ImageFitRule, Overflow};
