//! # Block Mutations
//!
//! Semantic operations on a page's block list.
//!
//! ## Mutation Semantics
//!
//! ### Select
//! - Locked targets reject selection (prior selection unchanged)
//! - Otherwise the previous selection returns to normal
//!
//! ### MoveUp / MoveDown
//! - Swap with the immediate neighbor; first/last position is a no-op
//! - Selection is preserved across the move
//!
//! ### Duplicate
//! - Deep copy with a fresh id, inserted immediately after the source
//! - The copy is not auto-selected
//!
//! ### Delete
//! - Removes the block; deleting the selected block clears selection
//!
//! ### ToggleLocked
//! - Locking the selected block forces it back to normal
//!
//! ### Update
//! - JSON merge patch into the block's data; a patch that does not fit the
//!   family is dropped whole, leaving the block untouched

use crate::patch::merge_block_data;
use serde::{Deserialize, Serialize};
use storekit_model::{IdGenerator, Page};
use tracing::{debug, warn};

/// Engine-owned selection state. At most one block is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditState {
    pub selected: Option<String>,
}

impl EditState {
    pub fn is_selected(&self, block_id: &str) -> bool {
        self.selected.as_deref() == Some(block_id)
    }
}

/// Whether a mutation changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Noop,
}

/// Semantic mutations (intent-preserving operations) over the block list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Mutation {
    Select { block_id: String },
    MoveUp { block_id: String },
    MoveDown { block_id: String },
    Duplicate { block_id: String },
    Delete { block_id: String },
    ToggleHidden { block_id: String },
    ToggleLocked { block_id: String },
    Update {
        block_id: String,
        patch: serde_json::Value,
    },
}

impl Mutation {
    pub fn block_id(&self) -> &str {
        match self {
            Mutation::Select { block_id }
            | Mutation::MoveUp { block_id }
            | Mutation::MoveDown { block_id }
            | Mutation::Duplicate { block_id }
            | Mutation::Delete { block_id }
            | Mutation::ToggleHidden { block_id }
            | Mutation::ToggleLocked { block_id }
            | Mutation::Update { block_id, .. } => block_id,
        }
    }

    /// Apply the mutation to the latest snapshot. Total: unknown ids,
    /// edge moves, and unappliable patches are no-ops.
    pub fn apply(&self, page: &mut Page, state: &mut EditState, ids: &mut IdGenerator) -> Applied {
        let applied = match self {
            Mutation::Select { block_id } => Self::apply_select(page, state, block_id),
            Mutation::MoveUp { block_id } => Self::apply_move(page, block_id, -1),
            Mutation::MoveDown { block_id } => Self::apply_move(page, block_id, 1),
            Mutation::Duplicate { block_id } => Self::apply_duplicate(page, block_id, ids),
            Mutation::Delete { block_id } => Self::apply_delete(page, state, block_id),
            Mutation::ToggleHidden { block_id } => Self::apply_toggle_hidden(page, block_id),
            Mutation::ToggleLocked { block_id } => Self::apply_toggle_locked(page, state, block_id),
            Mutation::Update { block_id, patch } => Self::apply_update(page, block_id, patch),
        };

        debug!(mutation = ?self.block_id(), ?applied, "applied mutation");
        applied
    }

    fn apply_select(page: &Page, state: &mut EditState, block_id: &str) -> Applied {
        let Some(block) = page.block(block_id) else {
            return Applied::Noop;
        };
        if block.locked {
            // Locked blocks reject selection; prior selection stands.
            return Applied::Noop;
        }
        if state.is_selected(block_id) {
            return Applied::Noop;
        }
        state.selected = Some(block_id.to_string());
        Applied::Changed
    }

    fn apply_move(page: &mut Page, block_id: &str, delta: isize) -> Applied {
        let Some(index) = page.position(block_id) else {
            return Applied::Noop;
        };

        let target = index as isize + delta;
        if target < 0 || target as usize >= page.blocks.len() {
            return Applied::Noop;
        }

        page.blocks.swap(index, target as usize);
        Applied::Changed
    }

    fn apply_duplicate(page: &mut Page, block_id: &str, ids: &mut IdGenerator) -> Applied {
        let Some(index) = page.position(block_id) else {
            return Applied::Noop;
        };

        let fresh_id = ids.next_free(|candidate| page.blocks.iter().any(|b| b.id == candidate));
        let copy = page.blocks[index].duplicate_as(fresh_id);
        page.blocks.insert(index + 1, copy);
        Applied::Changed
    }

    fn apply_delete(page: &mut Page, state: &mut EditState, block_id: &str) -> Applied {
        let Some(index) = page.position(block_id) else {
            return Applied::Noop;
        };

        page.blocks.remove(index);
        if state.is_selected(block_id) {
            state.selected = None;
        }
        Applied::Changed
    }

    fn apply_toggle_hidden(page: &mut Page, block_id: &str) -> Applied {
        let Some(block) = page.block_mut(block_id) else {
            return Applied::Noop;
        };
        block.hidden = !block.hidden;
        Applied::Changed
    }

    fn apply_toggle_locked(page: &mut Page, state: &mut EditState, block_id: &str) -> Applied {
        let Some(block) = page.block_mut(block_id) else {
            return Applied::Noop;
        };
        block.locked = !block.locked;
        // A locked block cannot remain selected.
        if block.locked && state.is_selected(block_id) {
            state.selected = None;
        }
        Applied::Changed
    }

    fn apply_update(page: &mut Page, block_id: &str, patch: &serde_json::Value) -> Applied {
        let Some(block) = page.block_mut(block_id) else {
            return Applied::Noop;
        };

        match merge_block_data(block, patch) {
            Ok(()) => Applied::Changed,
            Err(err) => {
                warn!(block = block_id, %err, "dropping unappliable data patch");
                Applied::Noop
            }
        }
    }
}
