//! Color values
//!
//! [`Color`] is the opaque RGBA value every color token resolves to. Components
//! are stored as `f32` in `0.0..=1.0`.

use std::fmt;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn parse_hex(input: &str) -> Option<Self> {
        let input = input.trim();
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            6 => Some(Self::rgb(
                channel(0)? as f32 / 255.0,
                channel(2)? as f32 / 255.0,
                channel(4)? as f32 / 255.0,
            )),
            8 => Some(Self::rgba(
                channel(0)? as f32 / 255.0,
                channel(2)? as f32 / 255.0,
                channel(4)? as f32 / 255.0,
                channel(6)? as f32 / 255.0,
            )),
            _ => None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        }
    }

    /// Relative luminance (WCAG 2.x), used by contrast diagnostics
    pub fn relative_luminance(&self) -> f32 {
        fn linear(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two opaque colors, in `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let (a, b) = (self.relative_luminance(), other.relative_luminance());
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#0078D4"), Some(Color::from_hex(0x0078D4)));
        assert_eq!(Color::parse_hex("0078d4"), Some(Color::from_hex(0x0078D4)));

        let translucent = Color::parse_hex("#00000080").unwrap();
        assert_eq!(translucent.r, 0.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 0.001);

        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#GG0000"), None);
        assert_eq!(Color::parse_hex(""), None);
        assert_eq!(Color::parse_hex("##123456"), None);
        assert_eq!(Color::parse_hex("#+1+2+3"), None);
    }

    #[test]
    fn test_hex_string_formatting() {
        assert_eq!(Color::from_hex(0x0078D4).to_hex_string(), "#0078d4");
        assert_eq!(Color::TRANSPARENT.to_hex_string(), "#00000000");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_contrast_ratio() {
        let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert!((Color::WHITE.contrast_ratio(&Color::WHITE) - 1.0).abs() < f32::EPSILON);
    }
}
