// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::download::Download;
use components::favicon::Favicon;
use components::features::Features;
use components::footer::Footer;
use components::hero::Hero;
use components::navbar::MobileMenu;
use components::navbar::NavBar;
use components::screenshots::Screenshots;
use site::content::APP_NAME;
use site::prefs::site_prefs::SitePrefs;
use site::MenuState;
use site::PageView;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "{APP_NAME}" }
        document::Stylesheet {
            href: asset!("/assets/css/landing.css"),
        }
        LandingPage {}
    }
}

/// The whole page. Owns the menu and color scheme state for as long as it is
/// mounted.
#[component]
fn LandingPage() -> Element {
    use_context_provider(|| {
        let prefs = SitePrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    let theme = hooks::use_color_scheme();
    let menu = use_signal(MenuState::default);
    let app_state_mut = use_context_provider(|| AppStateMut {
        menu,
        color_scheme: theme.scheme,
    });

    // Nothing is drawn in the wrong scheme while the platform is still
    // reporting its preference.
    if !*theme.resolved.read() {
        return rsx! {};
    }

    let view = app_state_mut.view();

    rsx! {
        PageBody { view, menu }
    }
}

/// Markup for the given state, favicon included. Reads prefs from the
/// `AppState` context.
#[component]
fn PageBody(view: PageView, menu: Signal<MenuState>) -> Element {
    rsx! {
        Favicon { href: view.favicon_url() }
        div {
            class: "page {view.theme_class()}",
            NavBar { view, menu }
            MobileMenu { menu }
            Hero {}
            Features {}
            Screenshots { view }
            Download {}
            Footer {}
        }
    }
}
