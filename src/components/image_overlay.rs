//! Image Overlay Component

use leptos::prelude::*;

/// Full-screen image, dismissed by clicking anywhere on it
#[component]
pub fn ImageOverlay(
    #[prop(into)] image: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        image.get().map(|src| {
            view! {
                <div class="overlay" on:click=move |_| on_close.run(())>
                    <img src=src alt="Document" />
                </div>
            }
        })
    }
}
