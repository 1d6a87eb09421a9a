use thiserror::Error;

/// Failures reaching the platform's color-scheme preference.
///
/// None of these are shown to the visitor. The theme resolver logs them and
/// falls back to the light scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("media query `{query}` failed: {reason}")]
    Query { query: &'static str, reason: String },

    #[error("media queries are not supported on this platform")]
    Unsupported,

    #[error("could not register the change listener: {0}")]
    Listen(String),

    #[error("script bridge failed: {0}")]
    Bridge(String),
}
