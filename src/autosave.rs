//! Autosave State
//!
//! Tracks the last persisted ordering and whether a save is in flight.
//! Owned by the list controller and consulted on every autosave tick.

use crate::models::{card_order, CardOrder, DocumentCard};
use crate::ordering::compare_card_order;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autosaver {
    last_saved: CardOrder,
    /// Ordering being written; Some while a save is in flight
    pending: Option<CardOrder>,
}

impl Autosaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `cards` as already persisted (e.g. freshly fetched)
    pub fn reset_baseline(&mut self, cards: &[DocumentCard]) {
        self.last_saved = card_order(cards);
    }

    #[cfg(test)]
    pub fn last_saved(&self) -> &[String] {
        &self.last_saved
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a save if the ordering changed and nothing is in flight.
    ///
    /// Returns the snapshot to persist.
    pub fn begin(&mut self, cards: &[DocumentCard]) -> Option<Vec<DocumentCard>> {
        if self.pending.is_some() {
            return None;
        }
        let changed = compare_card_order(cards, &self.last_saved)?;
        self.pending = Some(changed);
        Some(cards.to_vec())
    }

    /// Complete the in-flight save. A failed save leaves the baseline alone so
    /// the next tick tries again.
    pub fn finish(&mut self, saved: bool) {
        if let Some(order) = self.pending.take() {
            if saved {
                self.last_saved = order;
            }
        }
    }
}
