//! Defines the mutable, reactive state for the landing page.

use dioxus::prelude::*;
use site::ColorScheme;
use site::MenuState;
use site::PageView;

/// A reactive state provided as a Dioxus context.
///
/// Owned by the single page view and dropped with it.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Mobile navigation overlay.
    pub menu: Signal<MenuState>,
    /// Mirrors the system color scheme. Written only by the theme resolver.
    pub color_scheme: Signal<ColorScheme>,
}

impl AppStateMut {
    /// Snapshot used for rendering decisions. Subscribes the caller to both
    /// signals.
    pub fn view(&self) -> PageView {
        PageView::new(*self.menu.read(), *self.color_scheme.read())
    }
}
