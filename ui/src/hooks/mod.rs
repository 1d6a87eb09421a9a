mod use_color_scheme;

pub use use_color_scheme::use_color_scheme;
pub use use_color_scheme::ColorSchemeState;
