//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_dragdrop::reorder;
use reactive_stores::Store;

use crate::constants::thumbnail_url;
use crate::error::ApiResult;
use crate::models::DocumentCard;
use crate::ordering::duplicate_types;

/// State of the card board with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards in display order
    pub cards: Vec<DocumentCard>,
    /// True until the first fetch resolves
    pub loading: bool,
    /// Thumbnail URL shown full-screen, if any
    pub overlay_image: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Apply the result of the initial fetch. Loading ends either way.
pub fn store_finish_loading(store: &BoardStore, result: ApiResult<Vec<DocumentCard>>) {
    match result {
        Ok(cards) => {
            log::info!("[APP] Loaded {} documents", cards.len());
            let duplicates = duplicate_types(&cards);
            if !duplicates.is_empty() {
                log::warn!("[APP] Cards share types {:?}; their order changes are not tracked", duplicates);
            }
            store.cards().set(cards);
        }
        Err(e) => log::error!("[APP] Loading documents failed: {}", e),
    }
    store.loading().set(false);
}

/// Move the card at `from` to `to`
pub fn store_move_card(store: &BoardStore, from: usize, to: usize) -> bool {
    let moved = reorder(&mut *store.cards().write(), from, to);
    if moved {
        log::debug!("[APP] Moved card {} -> {}", from, to);
    }
    moved
}

/// Show the thumbnail for `doc_type` full-screen
pub fn store_open_overlay(store: &BoardStore, doc_type: &str) {
    let image = thumbnail_url(doc_type).map(str::to_string);
    if image.is_none() {
        log::warn!("[APP] No thumbnail for type '{}'", doc_type);
    }
    store.overlay_image().set(image);
}

pub fn store_close_overlay(store: &BoardStore) {
    if store.overlay_image().get_untracked().is_some() {
        store.overlay_image().set(None);
    }
}

/// Render key for a card row.
///
/// Covers the whole card: `position` is only a hint and may repeat, and a
/// row is rebuilt only when its key changes.
pub fn card_key(index: usize, card: &DocumentCard) -> (usize, DocumentCard) {
    (index, card.clone())
}

/// Key that dismisses the overlay
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn sample() -> Vec<DocumentCard> {
        vec![
            DocumentCard::new(0, "invoice", "Invoice"),
            DocumentCard::new(1, "bank-draft", "Bank Draft"),
        ]
    }

    fn types(cards: &[DocumentCard]) -> Vec<&str> {
        cards.iter().map(|c| c.doc_type.as_str()).collect()
    }

    #[test]
    fn test_new_board_is_loading() {
        let state = BoardState::new();
        assert!(state.loading);
        assert!(state.cards.is_empty());
        assert!(state.overlay_image.is_none());
    }

    #[test]
    fn test_finish_loading_success() {
        let store = Store::new(BoardState::new());
        store_finish_loading(&store, Ok(sample()));
        assert!(!store.loading().get_untracked());
        assert_eq!(store.cards().get_untracked(), sample());
    }

    #[test]
    fn test_finish_loading_failure_leaves_empty_list() {
        let store = Store::new(BoardState::new());
        store_finish_loading(&store, Err(ApiError::Transport("offline".to_string())));
        assert!(!store.loading().get_untracked());
        assert!(store.cards().get_untracked().is_empty());
    }

    #[test]
    fn test_move_card() {
        let store = Store::new(BoardState::new());
        store_finish_loading(&store, Ok(sample()));

        assert!(!store_move_card(&store, 0, 0));
        assert_eq!(types(&store.cards().get_untracked()), vec!["invoice", "bank-draft"]);

        assert!(store_move_card(&store, 1, 0));
        assert_eq!(types(&store.cards().get_untracked()), vec!["bank-draft", "invoice"]);
    }

    #[test]
    fn test_overlay_open_and_close() {
        let store = Store::new(BoardState::new());
        store_open_overlay(&store, "invoice");
        assert_eq!(
            store.overlay_image().get_untracked().as_deref(),
            thumbnail_url("invoice")
        );

        store_close_overlay(&store);
        assert!(store.overlay_image().get_untracked().is_none());

        store_open_overlay(&store, "unknown-type");
        assert!(store.overlay_image().get_untracked().is_none());
    }

    #[test]
    fn test_dismiss_key() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("Esc"));
    }

    #[test]
    fn test_card_key_follows_card_when_positions_repeat() {
        // Positions are hints and may collide after arbitrary POSTs
        let a = DocumentCard::new(0, "invoice", "Invoice");
        let b = DocumentCard::new(0, "bank-draft", "Bank Draft");
        let store = Store::new(BoardState::new());
        store_finish_loading(&store, Ok(vec![a.clone(), b.clone()]));

        let keys = |cards: &[DocumentCard]| -> Vec<_> {
            cards.iter().enumerate().map(|(i, c)| card_key(i, c)).collect()
        };
        let before = keys(&store.cards().get_untracked());
        assert!(store_move_card(&store, 1, 0));
        let after = keys(&store.cards().get_untracked());

        assert_ne!(before[0], after[0]);
        assert_ne!(before[1], after[1]);
        assert_eq!(after, vec![card_key(0, &b), card_key(1, &a)]);
    }
}
