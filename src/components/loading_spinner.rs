use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner"></div>
            <p class="loading-text">"Loading..."</p>
        </div>
    }
}
