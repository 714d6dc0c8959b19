//! UI layer for the desktop app: app shell and theme.

pub mod app;
pub mod theme;

pub use app::CinemaMatchApp;
