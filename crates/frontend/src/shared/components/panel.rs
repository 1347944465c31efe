//! White card wrapping one chart or insight block.

use leptos::prelude::*;

#[component]
pub fn Panel(
    /// Small uppercase heading above the content.
    title: &'static str,
    /// Extra class appended after the base, e.g. "panel--rose".
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "panel".to_string()
    } else {
        format!("panel {}", class)
    };

    view! {
        <div class=full_class>
            <h3 class="panel__title">{title}</h3>
            <div class="panel__body">{children()}</div>
        </div>
    }
}
