//! Platform-independent core of the ExpenseGauge landing page.
//!
//! Nothing in here knows about Dioxus or the browser. The `ui` crate plugs a
//! platform [`theme::ColorSchemeSource`] into these types and renders
//! [`page::PageView`] decisions as markup.

pub mod assets;
pub mod content;
pub mod error;
pub mod page;
pub mod prefs;
pub mod theme;

pub use error::ThemeError;
pub use page::MenuState;
pub use page::PageView;
pub use theme::ColorScheme;
