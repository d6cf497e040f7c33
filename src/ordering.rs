//! Card Ordering
//!
//! Change detection between the live list and the last persisted ordering.

use std::collections::HashMap;

use crate::models::{card_order, CardOrder, DocumentCard};

/// New ordering of `cards` if it differs from `last_order`, else None
pub fn compare_card_order(cards: &[DocumentCard], last_order: &[String]) -> Option<CardOrder> {
    let current = card_order(cards);
    if current.as_slice() != last_order {
        Some(current)
    } else {
        None
    }
}

/// Types that occur more than once, in first-seen order.
///
/// Cards sharing a type are indistinguishable to `compare_card_order`.
pub fn duplicate_types(cards: &[DocumentCard]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for card in cards {
        let count = counts.entry(card.doc_type.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            duplicates.push(card.doc_type.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_dragdrop::reorder;

    fn cards(types: &[&str]) -> Vec<DocumentCard> {
        types
            .iter()
            .enumerate()
            .map(|(i, t)| DocumentCard::new(i as i32, *t, t.to_uppercase()))
            .collect()
    }

    fn order(types: &[&str]) -> Vec<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_unchanged_order_is_none() {
        let list = cards(&["invoice", "bank-draft", "bill-of-lading"]);
        assert_eq!(compare_card_order(&list, &order(&["invoice", "bank-draft", "bill-of-lading"])), None);
    }

    #[test]
    fn test_changed_order_is_returned() {
        let list = cards(&["bank-draft", "invoice"]);
        assert_eq!(
            compare_card_order(&list, &order(&["invoice", "bank-draft"])),
            Some(order(&["bank-draft", "invoice"]))
        );
    }

    #[test]
    fn test_length_change_is_detected() {
        let list = cards(&["invoice"]);
        assert_eq!(compare_card_order(&list, &[]), Some(order(&["invoice"])));
        assert_eq!(compare_card_order(&[], &order(&["invoice"])), Some(Vec::new()));
        assert_eq!(compare_card_order(&[], &[]), None);
    }

    #[test]
    fn test_every_move_is_detected() {
        let base = cards(&["a", "b", "c", "d"]);
        let base_order = card_order(&base);
        for from in 0..base.len() {
            for to in 0..base.len() {
                let mut moved = base.clone();
                reorder(&mut moved, from, to);
                let result = compare_card_order(&moved, &base_order);
                if from == to {
                    assert_eq!(result, None);
                } else {
                    assert_eq!(result, Some(card_order(&moved)));
                }
            }
        }
    }

    #[test]
    fn test_duplicate_types() {
        let list = cards(&["invoice", "bank-draft", "invoice", "invoice", "bank-draft"]);
        assert_eq!(duplicate_types(&list), order(&["invoice", "bank-draft"]));
        assert!(duplicate_types(&cards(&["a", "b"])).is_empty());
    }
}
