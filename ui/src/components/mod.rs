//! The landing page sections, top to bottom.
pub mod download;
pub mod favicon;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod screenshots;
