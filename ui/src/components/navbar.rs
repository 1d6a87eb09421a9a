// File: src/components/navbar.rs
use dioxus::prelude::*;
use site::content::nav_links;
use site::content::APP_NAME;
use site::MenuState;
use site::PageView;

/// Top bar: logo, brand, desktop links and the mobile menu toggle.
#[component]
pub fn NavBar(view: PageView, mut menu: Signal<MenuState>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "brand",
                img {
                    class: "brand-logo",
                    src: view.favicon_url(),
                    alt: "{APP_NAME} Logo",
                }
                h1 { class: "brand-name", "{APP_NAME}" }
            }
            div {
                class: "nav-links",
                for link in nav_links() {
                    a {
                        class: "nav-link",
                        href: link.href(),
                        "{link.label()}"
                    }
                }
            }
            div {
                class: "menu-toggle-container",
                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{view.menu.is_open()}",
                    onclick: move |_| menu.write().toggle(),
                    svg {
                        class: "menu-icon",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: view.menu_icon_path(),
                        }
                    }
                }
            }
        }
    }
}

/// The mobile navigation overlay. Following any link closes it; the anchor
/// jump itself is left to the browser.
#[component]
pub fn MobileMenu(mut menu: Signal<MenuState>) -> Element {
    if !menu.read().is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "mobile-menu",
            for link in nav_links() {
                a {
                    class: "mobile-menu-item",
                    href: link.href(),
                    onclick: move |_| {
                        menu.write().select(link);
                    },
                    "{link.label()}"
                }
            }
        }
    }
}
