//! Static Constants
//!
//! Thumbnail URLs, storage key, endpoint path and the bundled seed data.

use crate::models::DocumentCard;

/// Local storage key holding the persisted card list
pub const LOCAL_STORAGE_KEY: &str = "documents";

/// Endpoint served by the backend (mocked in development builds)
pub const DOCUMENTS_ENDPOINT: &str = "/api/documents";

/// Bundled sample data written to storage on first run
const SEED_DOCUMENTS: &str = include_str!("../data/documents.json");

/// Thumbnail URL for a card type
pub fn thumbnail_url(doc_type: &str) -> Option<&'static str> {
    let url = match doc_type {
        "bank-draft" => "https://cdn.britannica.com/34/235834-050-C5843610/two-different-breeds-of-cats-side-by-side-outdoors-in-the-garden.jpg",
        "bill-of-lading" => "https://cdn.pixabay.com/photo/2024/02/28/07/42/european-shorthair-8601492_640.jpg",
        "invoice" => "https://img.freepik.com/free-photo/cute-domestic-kitten-sits-window-staring-outside-generative-ai_188544-12519.jpg",
        "bank-draft-2" => "https://images.theconversation.com/files/541015/original/file-20230803-19-fmuwe.jpg?ixlib=rb-4.1.0&rect=10%2C0%2C6647%2C4626&q=20&auto=format&w=320&fit=clip&dpr=2&usm=12&cs=strip",
        "bill-of-lading-2" => "https://images.pexels.com/photos/45170/kittens-cat-cat-puppy-rush-45170.jpeg?auto=compress&cs=tinysrgb&dpr=1&w=500",
        _ => return None,
    };
    Some(url)
}

/// Parse the bundled seed data
pub fn seed_documents() -> Result<Vec<DocumentCard>, serde_json::Error> {
    serde_json::from_str(SEED_DOCUMENTS)
}
