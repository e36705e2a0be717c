//! Presentation themes and the fixed entity palette.
//!
//! Theme selection only affects colors and page chrome; the simulation
//! never reads it.

pub const HUMAN_PADDLE_COLOR: &str = "#fbc531";
pub const OPPONENT_PADDLE_COLOR: &str = "#00a8ff";
pub const BALL_COLOR: &str = "#fff";

/// Two-valued page theme flipped by the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the page body
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label shown on the toggle button (names the theme it switches to)
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark",
            Theme::Dark => "Switch to Light",
        }
    }

    pub fn net_color(self) -> &'static str {
        match self {
            Theme::Light => "#fff",
            Theme::Dark => "#eee",
        }
    }

    pub fn border_color(self) -> &'static str {
        match self {
            Theme::Light => "#e0e0e0",
            Theme::Dark => "#444d5c",
        }
    }

    pub fn margin_color(self) -> &'static str {
        match self {
            Theme::Light => "#8fbc8f",
            Theme::Dark => "#465a75",
        }
    }
}
