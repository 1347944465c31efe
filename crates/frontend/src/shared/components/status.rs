//! Loading and error placeholders shared by every view.

use leptos::prelude::*;

#[component]
pub fn LoadingCard(message: &'static str) -> impl IntoView {
    view! {
        <div class="status-card status-card--loading">
            <p class="status-card__message">{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorCard(reason: String) -> impl IntoView {
    view! {
        <div class="status-card status-card--error">
            <p class="status-card__title">"Error: El servidor no responde."</p>
            <p class="status-card__detail">{reason}</p>
        </div>
    }
}
