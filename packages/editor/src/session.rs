//! # Edit Session
//!
//! One designer client's editing state for a page: the latest snapshot,
//! the selection, and the queue of applied mutations waiting for the
//! persistence collaborator.
//!
//! The session is the single interface the UI drives — one method per
//! operation instead of a callback parameter per mutation threaded
//! through every call site.

use crate::mutations::{Applied, EditState, Mutation};
use storekit_model::{IdGenerator, Page};

pub struct EditSession {
    page: Page,
    state: EditState,
    ids: IdGenerator,

    /// Applied mutations not yet committed by the persistence collaborator.
    pending: Vec<Mutation>,
}

impl EditSession {
    pub fn new(page: Page) -> Self {
        let ids = IdGenerator::new(&page.id);
        Self {
            page,
            state: EditState::default(),
            ids,
            pending: Vec::new(),
        }
    }

    /// The latest block-list snapshot, as mutated so far.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn select(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::Select {
            block_id: block_id.to_string(),
        })
    }

    pub fn move_up(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::MoveUp {
            block_id: block_id.to_string(),
        })
    }

    pub fn move_down(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::MoveDown {
            block_id: block_id.to_string(),
        })
    }

    pub fn duplicate(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::Duplicate {
            block_id: block_id.to_string(),
        })
    }

    pub fn delete(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::Delete {
            block_id: block_id.to_string(),
        })
    }

    pub fn toggle_hidden(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::ToggleHidden {
            block_id: block_id.to_string(),
        })
    }

    pub fn toggle_locked(&mut self, block_id: &str) -> Applied {
        self.apply(Mutation::ToggleLocked {
            block_id: block_id.to_string(),
        })
    }

    pub fn update(&mut self, block_id: &str, patch: serde_json::Value) -> Applied {
        self.apply(Mutation::Update {
            block_id: block_id.to_string(),
            patch,
        })
    }

    /// Apply a mutation against the latest snapshot; queue it for the
    /// persistence collaborator only if it changed something.
    pub fn apply(&mut self, mutation: Mutation) -> Applied {
        let applied = mutation.apply(&mut self.page, &mut self.state, &mut self.ids);
        if applied == Applied::Changed {
            self.pending.push(mutation);
        }
        applied
    }

    /// Drain the queue of applied-but-uncommitted mutations.
    pub fn take_pending(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Replace the snapshot with a refreshed one from the store. Selection
    /// survives only if the selected block still exists and is not locked.
    pub fn replace_page(&mut self, page: Page) {
        self.page = page;
        if let Some(selected) = self.state.selected.clone() {
            let keep = self
                .page
                .block(&selected)
                .map(|block| !block.locked)
                .unwrap_or(false);
            if !keep {
                self.state.selected = None;
            }
        }
    }
}
