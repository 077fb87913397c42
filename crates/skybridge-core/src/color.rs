use serde::{Deserialize, Serialize};

/// RGB display color. Carries no gameplay semantics; the physics core only
/// passes it through to whatever renders the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default color for static platforms.
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Color marking the summoned platform.
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    /// Hazard spikes.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// The player.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
}
