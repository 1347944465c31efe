//! Application shell: sidebar navigation plus the active view.
//!
//! Navigation is a single enum signal. Switching entries swaps the mounted
//! view component, so every view re-runs its data fetch when the user comes
//! back to it.

use crate::layout::sidebar::Sidebar;
use crate::views::conclusions::ui::ConclusionsView;
use crate::views::countries::ui::CountriesView;
use crate::views::customers::ui::CustomersView;
use crate::views::discounts::ui::DiscountsView;
use crate::views::overview::ui::OverviewView;
use crate::views::products::ui::ProductsView;
use chrono::Utc;
use leptos::prelude::*;

/// Identifier of one screen-level view. The shell holds exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKey {
    Overview,
    Discounts,
    Products,
    Customers,
    Countries,
    Conclusions,
}

impl ViewKey {
    pub const ALL: [ViewKey; 6] = [
        ViewKey::Overview,
        ViewKey::Discounts,
        ViewKey::Products,
        ViewKey::Customers,
        ViewKey::Countries,
        ViewKey::Conclusions,
    ];

    /// Short label shown in the sidebar.
    pub fn nav_label(self) -> &'static str {
        match self {
            ViewKey::Overview => "Dashboard",
            ViewKey::Discounts => "Descuentos",
            ViewKey::Products => "Productos",
            ViewKey::Customers => "Clientes",
            ViewKey::Countries => "Países",
            ViewKey::Conclusions => "Conclusiones",
        }
    }

    /// Page title rendered in the shell header.
    pub fn title(self) -> &'static str {
        match self {
            ViewKey::Overview => "Panel de Control",
            ViewKey::Discounts => "Impacto de Descuentos",
            ViewKey::Products => "Auditoría de Productos",
            ViewKey::Customers => "Análisis de Clientes",
            ViewKey::Countries => "Global Analytics",
            ViewKey::Conclusions => "Reporte de Conclusiones",
        }
    }

    /// One-line description under the title.
    pub fn subtitle(self) -> &'static str {
        match self {
            ViewKey::Overview => "Salud operativa y financiera del período",
            ViewKey::Discounts => "Segmentación por Grupos de Descuento en la Utilidad Neta",
            ViewKey::Products => "Fletes, pérdidas y rotación por producto",
            ViewKey::Customers => "Segmentación y rentabilidad de cartera",
            ViewKey::Countries => "Rentabilidad y logística por mercado",
            ViewKey::Conclusions => "Hallazgos y plan de acción",
        }
    }

    /// Icon name resolved by `shared::icons::icon`.
    pub fn icon_name(self) -> &'static str {
        match self {
            ViewKey::Overview => "package",
            ViewKey::Discounts => "percent",
            ViewKey::Products => "package",
            ViewKey::Customers => "users",
            ViewKey::Countries => "globe",
            ViewKey::Conclusions => "file-text",
        }
    }
}

impl Default for ViewKey {
    fn default() -> Self {
        ViewKey::Overview
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let active = RwSignal::new(ViewKey::default());
    let today = Utc::now().format("%d/%m/%Y").to_string();

    view! {
        <div class="shell">
            <Sidebar active=active />
            <main class="shell__main">
                <header class="shell__header">
                    <div>
                        <h1 class="shell__title">{move || active.get().title()}</h1>
                        <p class="shell__subtitle">{move || active.get().subtitle()}</p>
                    </div>
                    <span class="shell__date">{today}</span>
                </header>
                <div class="shell__content">
                    {move || match active.get() {
                        ViewKey::Overview => view! { <OverviewView /> }.into_any(),
                        ViewKey::Discounts => view! { <DiscountsView /> }.into_any(),
                        ViewKey::Products => view! { <ProductsView /> }.into_any(),
                        ViewKey::Customers => view! { <CustomersView /> }.into_any(),
                        ViewKey::Countries => view! { <CountriesView /> }.into_any(),
                        ViewKey::Conclusions => view! { <ConclusionsView /> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_complete_metadata() {
        for key in ViewKey::ALL {
            assert!(!key.nav_label().is_empty());
            assert!(!key.title().is_empty());
            assert!(!key.subtitle().is_empty());
            assert!(!key.icon_name().is_empty());
        }
    }

    #[test]
    fn default_view_is_the_overview() {
        assert_eq!(ViewKey::default(), ViewKey::Overview);
    }
}
