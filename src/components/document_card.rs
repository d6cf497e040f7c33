//! Document Card Component
//!
//! One draggable card in the board.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop, ListDndSignals,
};

use crate::constants::thumbnail_url;
use crate::models::DocumentCard;

#[component]
pub fn DocumentCardView(
    card: DocumentCard,
    /// Current index in the list
    index: usize,
    dnd: ListDndSignals,
    /// Called with (from, to) when another card is dropped here
    on_move: Callback<(usize, usize)>,
    /// Called with the card type when the card is clicked
    on_open: Callback<String>,
) -> impl IntoView {
    let thumbnail = thumbnail_url(&card.doc_type).unwrap_or_default();
    let doc_type = card.doc_type.clone();
    let title = card.title.clone();

    let class = move || {
        let mut c = "card".to_string();
        if dnd.is_dragging(index) { c.push_str(" dragging"); }
        if dnd.is_over(index) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <div
            class=class
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, index)
            on:dragover=make_on_dragover(dnd, index)
            on:dragleave=make_on_dragleave(dnd, index)
            on:drop=make_on_drop(dnd, index, move |from, to| on_move.run((from, to)))
            on:dragend=make_on_dragend(dnd)
            on:click=move |_| on_open.run(doc_type.clone())
        >
            <img src=thumbnail alt=title height="300" width="300" />
            <h3>{card.title}</h3>
        </div>
    }
}
