use dioxus::prelude::*;
use site::content::NavLink;
use site::content::SCREENSHOTS;
use site::content::SCREENSHOTS_HEADING;
use site::PageView;

/// Gallery of app screenshots. The admin previews swap artwork with the
/// color scheme.
#[component]
pub fn Screenshots(view: PageView) -> Element {
    let dark_mode = view.dark_mode();

    rsx! {
        section {
            id: NavLink::Screenshots.section_id(),
            class: "screenshots",
            div {
                class: "container",
                h3 { class: "section-heading", "{SCREENSHOTS_HEADING}" }
                div {
                    class: "screenshot-grid",
                    for shot in SCREENSHOTS {
                        img {
                            key: "{shot.alt}",
                            class: "screenshot",
                            src: shot.url(dark_mode),
                            alt: shot.alt,
                        }
                    }
                }
            }
        }
    }
}
