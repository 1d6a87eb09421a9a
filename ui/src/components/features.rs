use dioxus::prelude::*;
use site::content::Feature;
use site::content::NavLink;
use site::content::FEATURES;
use site::content::FEATURES_HEADING;

#[component]
pub fn Features() -> Element {
    rsx! {
        section {
            id: NavLink::Features.section_id(),
            class: "features",
            div {
                class: "container",
                h3 { class: "section-heading", "{FEATURES_HEADING}" }
                div {
                    class: "feature-grid",
                    for feature in FEATURES {
                        FeatureCard { key: "{feature.title}", feature }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        article {
            class: "feature-card",
            div { class: "feature-icon {feature.accent}", "{feature.icon}" }
            h4 { class: "feature-title", "{feature.title}" }
            p { class: "feature-description", "{feature.description}" }
        }
    }
}
