use dioxus::prelude::*;
use site::content::NavLink;
use site::content::HERO;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "container",
                img {
                    class: "hero-image",
                    src: HERO.image,
                    alt: HERO.image_alt,
                }
                h2 { class: "hero-headline", "{HERO.headline}" }
                p { class: "hero-tagline", "{HERO.tagline}" }
                a {
                    class: "cta-button",
                    href: NavLink::Download.href(),
                    "{HERO.call_to_action}"
                }
            }
        }
    }
}
