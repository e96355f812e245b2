//! Owner of the current cart snapshot.

use std::sync::Arc;

use crate::cart::{CartCommand, CartState};

/// Holds the authoritative cart and applies commands in issue order.
///
/// Snapshots are shared as `Arc<CartState>`. Dispatching swaps in a new
/// snapshot; readers holding the previous one keep seeing it unchanged.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    current: Arc<CartState>,
    revision: u64,
}

impl CartStore {
    /// A store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with an existing state.
    pub fn with_state(state: CartState) -> Self {
        Self {
            current: Arc::new(state),
            revision: 0,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&self.current)
    }

    /// Apply one command and return the new snapshot.
    pub fn dispatch(&mut self, command: CartCommand) -> Arc<CartState> {
        let kind = command.kind();
        let next = Arc::new(self.current.apply(command));
        self.revision += 1;

        tracing::debug!(
            command = kind,
            revision = self.revision,
            lines = next.len(),
            items = next.item_count(),
            "cart updated"
        );

        self.current = Arc::clone(&next);
        next
    }

    /// Number of commands dispatched so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
