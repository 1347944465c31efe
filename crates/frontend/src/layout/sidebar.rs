//! Sidebar with one button per view.

use crate::app_shell::ViewKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active: RwSignal<ViewKey>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"SuperTienda Pro"</div>
            <nav class="sidebar__nav">
                {ViewKey::ALL
                    .into_iter()
                    .map(|target| view! { <SidebarButton target=target active=active /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn SidebarButton(target: ViewKey, active: RwSignal<ViewKey>) -> impl IntoView {
    let class = move || {
        if active.get() == target {
            "sidebar__button sidebar__button--active"
        } else {
            "sidebar__button"
        }
    };

    view! {
        <button class=class on:click=move |_| active.set(target)>
            {icon(target.icon_name())}
            <span class="sidebar__button-label">{target.nav_label()}</span>
        </button>
    }
}
