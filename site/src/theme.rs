//! Color scheme detection contract.
//!
//! A [`ColorSchemeSource`] is whatever the platform offers for reading and
//! watching the system light/dark preference. Watching hands back a
//! [`Subscription`], which deregisters the listener when it goes away.

use std::fmt;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ThemeError;

/// Media query that matches when the system prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The system's light/dark preference as seen by the page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Maps a "prefers dark" media query result to a scheme.
    pub fn from_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// A platform facility that reports the system color scheme and pushes
/// changes to it.
pub trait ColorSchemeSource {
    /// Reads the preference right now.
    fn current(&self) -> Result<ColorScheme, ThemeError>;

    /// Registers `on_change` for every future preference change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or cancelled.
    fn subscribe(
        &self,
        on_change: Box<dyn FnMut(ColorScheme)>,
    ) -> Result<Subscription, ThemeError>;
}

/// Keeps a change listener registered. Deregisters exactly once, on
/// [`Subscription::cancel`] or on drop.
#[must_use = "dropping a Subscription deregisters its listener immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription with nothing to release, for platforms without change
    /// notifications.
    pub fn detached() -> Self {
        Self { unsubscribe: None }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Deregisters the listener now.
    pub fn cancel(self) {
        drop(self);
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Reads the scheme to show at mount. Unreadable platforms get the light
/// scheme.
pub fn resolve_initial(source: &impl ColorSchemeSource) -> ColorScheme {
    match source.current() {
        Ok(scheme) => scheme,
        Err(e) => {
            warn!("color scheme unavailable, using light: {e}");
            ColorScheme::Light
        }
    }
}

/// Subscribes `on_change` to `source`, logging instead of failing.
///
/// Without a subscription the page keeps whatever scheme it mounted with.
pub fn watch(
    source: &impl ColorSchemeSource,
    on_change: impl FnMut(ColorScheme) + 'static,
) -> Option<Subscription> {
    match source.subscribe(Box::new(on_change)) {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            warn!("not watching color scheme changes: {e}");
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::str::FromStr;

    use super::testing::FakeSource;
    use super::*;

    #[test]
    fn from_dark_maps_both_values() {
        assert_eq!(ColorScheme::from_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark(false), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
    }

    #[test]
    fn scheme_names_parse_case_insensitively() {
        assert_eq!(ColorScheme::from_str("DARK").unwrap(), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_str("light").unwrap(), ColorScheme::Light);
        assert!(ColorScheme::from_str("sepia").is_err());
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
    }

    #[test]
    fn initial_scheme_follows_the_platform() {
        assert_eq!(resolve_initial(&FakeSource::new(ColorScheme::Dark)), ColorScheme::Dark);
        assert_eq!(resolve_initial(&FakeSource::new(ColorScheme::Light)), ColorScheme::Light);
    }

    #[test]
    fn unreadable_platform_falls_back_to_light() {
        let source = FakeSource::broken();
        assert_eq!(resolve_initial(&source), ColorScheme::Light);
        assert!(watch(&source, |_| {}).is_none());
    }

    #[test]
    fn notifications_reach_the_listener_until_dropped() {
        let source = FakeSource::new(ColorScheme::Light);
        let seen = Rc::new(Cell::new(resolve_initial(&source)));

        let sink = Rc::clone(&seen);
        let subscription = watch(&source, move |scheme| sink.set(scheme)).unwrap();
        assert_eq!(source.listener_count(), 1);

        source.notify(ColorScheme::Dark);
        assert_eq!(seen.get(), ColorScheme::Dark);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.notify(ColorScheme::Light);
        assert_eq!(seen.get(), ColorScheme::Dark);
    }

    #[test]
    fn unsubscribe_runs_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert!(subscription.is_active());

        subscription.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn detached_subscription_is_inert() {
        let subscription = Subscription::detached();
        assert!(!subscription.is_active());
        drop(subscription);
    }
}
