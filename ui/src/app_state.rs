use chrono::Datelike;
use site::prefs::site_prefs::SitePrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub prefs: SitePrefs,
    /// Year printed in the footer copyright line.
    pub year: i32,
}

/// Settings that do not change while the page is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: SitePrefs) -> Self {
        Self::with_year(prefs, chrono::Local::now().year())
    }

    pub fn with_year(prefs: SitePrefs, year: i32) -> Self {
        Self(Arc::new(AppStateData { prefs, year }))
    }
}
