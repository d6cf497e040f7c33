//! Document Cards App
//!
//! Root component: owns the board state, loads the cards once, autosaves
//! reorders and handles overlay dismissal.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::create_list_dnd;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::autosave::Autosaver;
use crate::components::{DocumentCardView, ImageOverlay, LoadingSpinner};
use crate::config::AppConfig;
use crate::store::{
    card_key, is_dismiss_key, store_close_overlay, store_finish_loading, store_move_card, store_open_overlay, BoardState,
    BoardStateStoreFields, BoardStore,
};

#[component]
pub fn App(api: ApiClient, config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::new());
    let dnd = create_list_dnd();
    let autosaver = StoredValue::new(Autosaver::new());

    // Initial load, delayed so the spinner shows
    {
        let api = api.clone();
        let delay = config.initial_fetch_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            log::info!("[APP] Fetching documents from {}", api.endpoint());
            let result = api.fetch_documents().await;
            if let Ok(cards) = &result {
                autosaver.try_update_value(|saver| saver.reset_baseline(cards));
            }
            store_finish_loading(&store, result);
        });
    }

    // Escape closes the overlay
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            store_close_overlay(&store);
        }
    });
    on_cleanup(move || key_handle.remove());

    // Autosave loop
    let period = Duration::from_millis(config.autosave_interval_ms.into());
    match set_interval_with_handle(move || autosave_tick(store, autosaver, &api), period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("[AUTOSAVE] Could not start timer: {:?}", e),
    }

    let on_move = Callback::new(move |(from, to): (usize, usize)| {
        store_move_card(&store, from, to);
    });
    let on_open = Callback::new(move |doc_type: String| store_open_overlay(&store, &doc_type));

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <LoadingSpinner /> }
        >
            <div class="container">
                <For
                    each=move || store.cards().get().into_iter().enumerate()
                    key=|(index, card)| card_key(*index, card)
                    children=move |(index, card)| {
                        view! {
                            <DocumentCardView
                                card=card
                                index=index
                                dnd=dnd
                                on_move=on_move
                                on_open=on_open
                            />
                        }
                    }
                />
                <ImageOverlay
                    image=Signal::derive(move || store.overlay_image().get())
                    on_close=Callback::new(move |_: ()| store_close_overlay(&store))
                />
            </div>
        </Show>
    }
}

/// One autosave cycle, run on the event loop
fn autosave_tick(store: BoardStore, autosaver: StoredValue<Autosaver>, api: &ApiClient) {
    let api = api.clone();
    spawn_local(async move {
        persist_if_changed(store, autosaver, api).await;
    });
}

/// Persist the live list if its ordering changed since the last save.
///
/// Returns None when nothing was sent (unchanged, or a save still in flight),
/// otherwise whether the save succeeded.
async fn persist_if_changed(store: BoardStore, autosaver: StoredValue<Autosaver>, api: ApiClient) -> Option<bool> {
    if autosaver.try_with_value(|saver| saver.is_in_flight()).unwrap_or(false) {
        log::debug!("[AUTOSAVE] Previous save still running, skipping tick");
        return None;
    }
    let cards = store.cards().get_untracked();
    let snapshot = autosaver.try_update_value(|saver| saver.begin(&cards)).flatten()?;

    let saved = match api.save_documents(&snapshot).await {
        Ok(()) => {
            log::info!("[AUTOSAVE] Saved {} documents", snapshot.len());
            true
        }
        Err(_) => false,
    };
    autosaver.try_update_value(|saver| saver.finish(saved));
    Some(saved)
}
