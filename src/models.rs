//! Frontend Models
//!
//! Data structures shared by the list view, API client and storage.

use serde::{Deserialize, Serialize};

/// One reorderable document card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentCard {
    /// Position hint from the seed data; never reassigned by reordering
    pub position: i32,
    /// Category key, also used to look up the thumbnail
    #[serde(rename = "type")]
    pub doc_type: String,
    pub title: String,
}

impl DocumentCard {
    #[cfg(test)]
    pub fn new(position: i32, doc_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            position,
            doc_type: doc_type.into(),
            title: title.into(),
        }
    }
}

/// Sequence of `type` values in list order
pub type CardOrder = Vec<String>;

/// Derive the ordering of a card list
pub fn card_order(cards: &[DocumentCard]) -> CardOrder {
    cards.iter().map(|card| card.doc_type.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_renamed() {
        let card = DocumentCard::new(2, "invoice", "Invoice");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"position":2,"type":"invoice","title":"Invoice"}"#);

        let parsed: DocumentCard =
            serde_json::from_str(r#"{"type":"bank-draft","title":"Bank Draft","position":0}"#).unwrap();
        assert_eq!(parsed, DocumentCard::new(0, "bank-draft", "Bank Draft"));
    }

    #[test]
    fn test_card_order() {
        let cards = vec![
            DocumentCard::new(0, "invoice", "Invoice"),
            DocumentCard::new(1, "bank-draft", "Bank Draft"),
        ];
        assert_eq!(card_order(&cards), vec!["invoice", "bank-draft"]);
        assert!(card_order(&[]).is_empty());
    }
}
