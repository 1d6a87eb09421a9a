//! Static asset paths.
//!
//! Theme-dependent screenshots follow a suffix convention: the dark artwork is
//! `/{name}.jpg` and the light artwork is `/{name}_light.jpg`. The favicon does
//! not follow it; its two variants are separate files.

/// Favicon and logo shown on dark backgrounds.
pub const FAVICON_DARK: &str = "/icon.png";
/// Favicon and logo shown on light backgrounds.
pub const FAVICON_LIGHT: &str = "/iconLight.png";

/// Hero banner preview.
pub const HERO_PREVIEW: &str = "/expensegauge.jpg";

const LIGHT_SUFFIX: &str = "_light";
const IMAGE_EXTENSION: &str = "jpg";

/// Path of the themed image `base_name` for the given dark-mode flag.
pub fn image_url(base_name: &str, dark_mode: bool) -> String {
    if dark_mode {
        format!("/{base_name}.{IMAGE_EXTENSION}")
    } else {
        format!("/{base_name}{LIGHT_SUFFIX}.{IMAGE_EXTENSION}")
    }
}

pub fn favicon_url(dark_mode: bool) -> &'static str {
    if dark_mode {
        FAVICON_DARK
    } else {
        FAVICON_LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themed_images_pick_the_suffix_by_flag() {
        for name in ["admin_preview1", "admin_preview2", "a", ""] {
            assert_eq!(image_url(name, true), format!("/{name}.jpg"));
            assert_eq!(image_url(name, false), format!("/{name}_light.jpg"));
        }
    }

    #[test]
    fn favicon_uses_its_own_filenames() {
        assert_eq!(favicon_url(true), "/icon.png");
        assert_eq!(favicon_url(false), "/iconLight.png");
        // not the suffix rule
        assert_ne!(favicon_url(false), image_url("icon", false));
    }
}
