//! UI Components
//!
//! Leptos components rendered by the board.

mod document_card;
mod image_overlay;
mod loading_spinner;

pub use document_card::DocumentCardView;
pub use image_overlay::ImageOverlay;
pub use loading_spinner::LoadingSpinner;
