use std::env;

use serde::Deserialize;
use serde::Serialize;

const DEFAULT_APK_PATH: &str = "/downloads/ExpenseGauge.apk";
const PLACEHOLDER_LINK: &str = "#";

/// Deployment settings for the landing page: where the download and legal
/// links point.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SitePrefs {
    /// Target of the Android download button. Served as a plain file.
    apk_path: String,

    /// Optional iOS store link. The iOS button is hidden without one.
    ios_url: Option<String>,

    privacy_url: String,
    terms_url: String,
}

impl SitePrefs {
    /// Reads settings from environment variables, with in-code defaults.
    ///
    /// A variable set in the process environment wins over the value baked in
    /// at build time. Web builds have no process environment, so they only
    /// see the build-time values.
    ///
    /// # Environment Variables
    /// - `EXPENSEGAUGE_APK_PATH`: Android download link.
    ///   defaults to `/downloads/ExpenseGauge.apk`
    /// - `EXPENSEGAUGE_IOS_URL`: iOS link. unset or empty hides the button.
    /// - `EXPENSEGAUGE_PRIVACY_URL`: footer privacy policy link. defaults to `#`
    /// - `EXPENSEGAUGE_TERMS_URL`: footer terms of service link. defaults to `#`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| build_time_var(key).map(str::to_owned))
        })
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        Self {
            apk_path: get("EXPENSEGAUGE_APK_PATH").unwrap_or_else(|| DEFAULT_APK_PATH.to_owned()),
            ios_url: get("EXPENSEGAUGE_IOS_URL"),
            privacy_url: get("EXPENSEGAUGE_PRIVACY_URL")
                .unwrap_or_else(|| PLACEHOLDER_LINK.to_owned()),
            terms_url: get("EXPENSEGAUGE_TERMS_URL").unwrap_or_else(|| PLACEHOLDER_LINK.to_owned()),
        }
    }

    pub fn apk_path(&self) -> &str {
        &self.apk_path
    }

    pub fn ios_url(&self) -> Option<&str> {
        self.ios_url.as_deref()
    }

    pub fn privacy_url(&self) -> &str {
        &self.privacy_url
    }

    pub fn terms_url(&self) -> &str {
        &self.terms_url
    }
}

impl Default for SitePrefs {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn build_time_var(key: &str) -> Option<&'static str> {
    match key {
        "EXPENSEGAUGE_APK_PATH" => option_env!("EXPENSEGAUGE_APK_PATH"),
        "EXPENSEGAUGE_IOS_URL" => option_env!("EXPENSEGAUGE_IOS_URL"),
        "EXPENSEGAUGE_PRIVACY_URL" => option_env!("EXPENSEGAUGE_PRIVACY_URL"),
        "EXPENSEGAUGE_TERMS_URL" => option_env!("EXPENSEGAUGE_TERMS_URL"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn prefs_from(pairs: &[(&str, &str)]) -> SitePrefs {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SitePrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_shipped_page() {
        let prefs = SitePrefs::default();
        assert_eq!(prefs.apk_path(), "/downloads/ExpenseGauge.apk");
        assert_eq!(prefs.ios_url(), None);
        assert_eq!(prefs.privacy_url(), "#");
        assert_eq!(prefs.terms_url(), "#");
    }

    #[test]
    fn variables_override_defaults() {
        let prefs = prefs_from(&[
            ("EXPENSEGAUGE_APK_PATH", "/files/eg-2.1.apk"),
            ("EXPENSEGAUGE_IOS_URL", "https://apps.apple.com/app/id0"),
            ("EXPENSEGAUGE_PRIVACY_URL", "/privacy"),
        ]);
        assert_eq!(prefs.apk_path(), "/files/eg-2.1.apk");
        assert_eq!(prefs.ios_url(), Some("https://apps.apple.com/app/id0"));
        assert_eq!(prefs.privacy_url(), "/privacy");
        assert_eq!(prefs.terms_url(), "#");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let prefs = prefs_from(&[("EXPENSEGAUGE_IOS_URL", "  "), ("EXPENSEGAUGE_APK_PATH", "")]);
        assert_eq!(prefs.ios_url(), None);
        assert_eq!(prefs.apk_path(), "/downloads/ExpenseGauge.apk");
    }
}
