pub mod area_chart;
pub mod bar_chart;
pub mod hbar_chart;
pub mod scale;
pub mod scatter_chart;

use crate::shared::tooltip::HoveredPoint;
use leptos::prelude::*;

/// Chart colours, matching the product palette used across the views.
pub mod palette {
    pub const VIOLET: &str = "#8b5cf6";
    pub const INDIGO: &str = "#6366f1";
    pub const ROSE: &str = "#fb7185";
    pub const ROSE_SOFT: &str = "#fda4af";
    pub const CRIMSON: &str = "#e11d48";
    pub const EMERALD: &str = "#10b981";
    pub const EMERALD_DEEP: &str = "#059669";
    pub const ORANGE: &str = "#f97316";
    pub const SLATE: &str = "#94a3b8";
    pub const SLATE_SOFT: &str = "#cbd5e1";
    pub const SLATE_FAINT: &str = "#e2e8f0";
}

pub const GRID_COLOR: &str = "#f1f5f9";
pub const TICK_COLOR: &str = "#94a3b8";
pub const ZERO_LINE_COLOR: &str = "#cbd5e1";

/// Hover channel shared by every chart: the hovered datum plus the pointer
/// position inside the chart container, in CSS pixels.
#[derive(Clone, Copy)]
pub struct ChartHover {
    pub point: RwSignal<Option<HoveredPoint>>,
    pub pointer: RwSignal<(f64, f64)>,
}

impl ChartHover {
    pub fn new() -> Self {
        Self {
            point: RwSignal::new(None),
            pointer: RwSignal::new((0.0, 0.0)),
        }
    }

    pub fn track(&self, ev: &web_sys::MouseEvent) {
        self.pointer.set((ev.offset_x() as f64, ev.offset_y() as f64));
    }

    pub fn enter(&self, point: HoveredPoint) {
        self.point.set(Some(point));
    }

    pub fn leave(&self) {
        self.point.set(None);
    }
}

impl Default for ChartHover {
    fn default() -> Self {
        Self::new()
    }
}
