//! # Storekit Editor
//!
//! The designer's editing state machine over a page's block list.
//!
//! ## Core Principles
//!
//! 1. **The snapshot is the source of truth**: the session edits the latest
//!    page snapshot and hands mutation intents to the persistence
//!    collaborator; a refreshed snapshot can replace local state at any time.
//! 2. **Total operations**: every mutation is a total function over
//!    `(blocks, selection)`. An unknown block id is a no-op, not an error —
//!    the UI and the list can transiently disagree during rapid edits.
//! 3. **One selection**: at most one block is selected across the page, and
//!    a locked block can never be (or stay) selected.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storekit_editor::EditSession;
//!
//! let mut session = EditSession::new(page);
//! session.select("b-2");
//! session.move_up("b-2");
//! session.duplicate("b-2");
//!
//! // Persistence collaborator drains the applied intents.
//! for mutation in session.take_pending() {
//!     store.commit(&mutation)?;
//! }
//! ```

mod mutations;
mod patch;
mod session;

pub use mutations::{Applied, EditState, Mutation};
pub use patch::{merge_block_data, PatchError};
pub use session::EditSession;
