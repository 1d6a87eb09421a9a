//! The page's two pieces of UI state and the rendering decisions derived
//! from them.

use crate::assets;
use crate::content::NavLink;
use crate::theme::ColorScheme;

/// SVG path of the hamburger icon (three bars).
pub const MENU_CLOSED_ICON: &str = "M4 6h16M4 12h16M4 18h16";
/// SVG path of the close icon (an X).
pub const MENU_OPEN_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Visibility of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follows `link` from the menu: the menu closes and the returned href is
    /// where the browser jumps.
    pub fn select(&mut self, link: NavLink) -> String {
        self.close();
        link.href()
    }
}

/// Everything the renderer needs to know about the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageView {
    pub menu: MenuState,
    pub scheme: ColorScheme,
}

impl PageView {
    pub fn new(menu: MenuState, scheme: ColorScheme) -> Self {
        Self { menu, scheme }
    }

    pub fn dark_mode(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn image_url(&self, base_name: &str) -> String {
        assets::image_url(base_name, self.dark_mode())
    }

    pub fn favicon_url(&self) -> &'static str {
        assets::favicon_url(self.dark_mode())
    }

    pub fn menu_icon_path(&self) -> &'static str {
        if self.menu.is_open() {
            MENU_OPEN_ICON
        } else {
            MENU_CLOSED_ICON
        }
    }

    /// Class on the page root that selects the stylesheet palette.
    pub fn theme_class(&self) -> &'static str {
        match self.scheme {
            ColorScheme::Light => "theme-light",
            ColorScheme::Dark => "theme-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::content::nav_links;
    use crate::theme::resolve_initial;
    use crate::theme::testing::FakeSource;
    use crate::theme::watch;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn even_number_of_toggles_restores_the_menu() {
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.toggle();
            }
            let before = menu;
            for times in [2, 4, 10] {
                for _ in 0..times {
                    menu.toggle();
                }
                assert_eq!(menu, before);
            }
            menu.toggle();
            assert_ne!(menu, before);
        }
    }

    #[test]
    fn selecting_any_link_closes_the_menu() {
        for link in nav_links() {
            let mut menu = MenuState::default();
            menu.toggle();
            assert!(menu.is_open());

            let href = menu.select(link);
            assert!(!menu.is_open());
            assert_eq!(href, link.href());
        }
    }

    #[test]
    fn selecting_a_link_with_the_menu_closed_keeps_it_closed() {
        let mut menu = MenuState::default();
        menu.select(NavLink::Download);
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_icon_tracks_the_menu() {
        let mut view = PageView::default();
        assert_eq!(view.menu_icon_path(), MENU_CLOSED_ICON);
        view.menu.toggle();
        assert_eq!(view.menu_icon_path(), MENU_OPEN_ICON);
    }

    #[test]
    fn theme_change_after_mount_updates_selections() {
        let source = FakeSource::new(ColorScheme::Light);
        let view = Rc::new(Cell::new(PageView::new(
            MenuState::default(),
            resolve_initial(&source),
        )));
        assert!(!view.get().dark_mode());
        assert_eq!(view.get().favicon_url(), "/iconLight.png");
        assert_eq!(view.get().image_url("admin_preview1"), "/admin_preview1_light.jpg");
        assert_eq!(view.get().theme_class(), "theme-light");

        let state = Rc::clone(&view);
        let _subscription = watch(&source, move |scheme| {
            state.set(PageView::new(state.get().menu, scheme));
        });

        source.notify(ColorScheme::Dark);
        assert!(view.get().dark_mode());
        assert_eq!(view.get().favicon_url(), "/icon.png");
        assert_eq!(view.get().image_url("admin_preview1"), "/admin_preview1.jpg");
        assert_eq!(view.get().theme_class(), "theme-dark");
    }

    #[test]
    fn theme_change_leaves_the_menu_alone() {
        let source = FakeSource::new(ColorScheme::Dark);
        let mut menu = MenuState::default();
        menu.toggle();
        let view = Rc::new(Cell::new(PageView::new(menu, resolve_initial(&source))));

        let state = Rc::clone(&view);
        let _subscription = watch(&source, move |scheme| {
            state.set(PageView::new(state.get().menu, scheme));
        });
        source.notify(ColorScheme::Light);

        assert!(view.get().menu.is_open());
        assert_eq!(view.get().scheme, ColorScheme::Light);
    }
}
