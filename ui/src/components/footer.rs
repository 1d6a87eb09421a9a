use dioxus::prelude::*;
use site::content::APP_NAME;

use crate::app_state::AppState;

#[component]
pub fn Footer() -> Element {
    let app_state = use_context::<AppState>();
    let year = app_state.year;
    let privacy_url = app_state.prefs.privacy_url().to_owned();
    let terms_url = app_state.prefs.terms_url().to_owned();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "container",
                p { "© {year} {APP_NAME}. All rights reserved." }
                p {
                    class: "footer-links",
                    a { href: "{privacy_url}", "Privacy Policy" }
                    " | "
                    a { href: "{terms_url}", "Terms of Service" }
                }
            }
        }
    }
}
