//! Colors and themes.
//!
//! Themes are stored in the [`Ui`](crate::Ui); widgets only carry a
//! [`ThemeId`]. When a widget has no theme of its own it is drawn with the
//! UI's default theme.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Theme`] stored in a [`Ui`](crate::Ui).
    pub struct ThemeId;
}

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// The colors a theme provides to widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Window and widget background.
    pub background: Color,
    /// Raised elements such as button faces and dial bodies.
    pub surface: Color,
    /// Value indicators: filled arcs, active buttons, slider fill.
    pub highlight: Color,
    /// Widget outlines.
    pub border: Color,
    /// Label text.
    pub text: Color,
    /// Muted text.
    pub text_secondary: Color,
}

/// A named palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Display name.
    pub name: String,
    /// Colors.
    pub palette: Palette,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_owned(),
            palette: Palette {
                background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
                surface: Color::from_rgb8(0x2c, 0x2c, 0x2c),
                highlight: Color::from_rgb8(0x00, 0xb8, 0xff),
                border: Color::from_rgb8(0x4a, 0x4a, 0x4a),
                text: Color::from_rgb8(0xe0, 0xe0, 0xe0),
                text_secondary: Color::from_rgb8(0x9e, 0x9e, 0x9e),
            },
        }
    }

    /// A light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_owned(),
            palette: Palette {
                background: Color::from_rgb8(0xf5, 0xf5, 0xf5),
                surface: Color::WHITE,
                highlight: Color::from_rgb8(0xff, 0x6a, 0x00),
                border: Color::from_rgb8(0xbd, 0xbd, 0xbd),
                text: Color::from_rgb8(0x21, 0x21, 0x21),
                text_secondary: Color::from_rgb8(0x75, 0x75, 0x75),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(
            Color::from_hex("00ff0080"),
            Some(Color::from_rgba8(0, 255, 0, 0x80))
        );
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_builtin_themes_differ() {
        assert_eq!(Theme::default().name, "dark");
        assert_ne!(Theme::dark().palette, Theme::light().palette);
    }
}
