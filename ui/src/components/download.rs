use dioxus::prelude::*;
use site::content::NavLink;
use site::content::ANDROID_LABEL;
use site::content::DOWNLOAD_HEADING;
use site::content::DOWNLOAD_TAGLINE;
use site::content::IOS_LABEL;

use crate::app_state::AppState;

/// Call to action. The APK link is a plain file download handled by the
/// browser.
#[component]
pub fn Download() -> Element {
    let app_state = use_context::<AppState>();
    let apk_path = app_state.prefs.apk_path().to_owned();
    let ios_url = app_state.prefs.ios_url().map(str::to_owned);

    rsx! {
        section {
            id: NavLink::Download.section_id(),
            class: "download",
            div {
                class: "container",
                h3 { class: "download-heading", "{DOWNLOAD_HEADING}" }
                p { class: "download-tagline", "{DOWNLOAD_TAGLINE}" }
                div {
                    class: "download-buttons",
                    a {
                        class: "download-button",
                        href: "{apk_path}",
                        download: "",
                        "{ANDROID_LABEL}"
                    }
                    if let Some(ios_url) = ios_url {
                        a {
                            class: "download-button secondary",
                            href: "{ios_url}",
                            "{IOS_LABEL}"
                        }
                    }
                }
            }
        }
    }
}
