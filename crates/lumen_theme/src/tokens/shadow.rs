//! Shadow tokens
//!
//! Every elevation is a two-part shadow: a directional key shadow plus a soft
//! ambient one.

use super::dynamic::{AppearanceMode, DynamicColor};
use lumen_core::Color;

/// Design blur values are halved to match the platform's shadow radius.
const SHADOW_BLUR_ADJUSTMENT: f32 = 0.5;

/// A single resolved shadow layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

/// Two-part shadow with mode-dependent colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowInfo {
    pub color_one: DynamicColor,
    pub blur_one: f32,
    pub x_one: f32,
    pub y_one: f32,
    pub color_two: DynamicColor,
    pub blur_two: f32,
    pub x_two: f32,
    pub y_two: f32,
}

impl ShadowInfo {
    /// Build a shadow from design values; blurs are adjusted here
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        color_one: DynamicColor,
        blur_one: f32,
        x_one: f32,
        y_one: f32,
        color_two: DynamicColor,
        blur_two: f32,
        x_two: f32,
        y_two: f32,
    ) -> Self {
        Self {
            color_one,
            blur_one: blur_one * SHADOW_BLUR_ADJUSTMENT,
            x_one,
            y_one,
            color_two,
            blur_two: blur_two * SHADOW_BLUR_ADJUSTMENT,
            x_two,
            y_two,
        }
    }

    pub fn none() -> Self {
        let clear = DynamicColor::uniform(Color::TRANSPARENT);
        Self::new(clear, 0.0, 0.0, 0.0, clear, 0.0, 0.0, 0.0)
    }

    /// Both layers with colors resolved for `mode`
    pub fn resolve(&self, mode: AppearanceMode) -> [Shadow; 2] {
        [
            Shadow {
                offset_x: self.x_one,
                offset_y: self.y_one,
                blur: self.blur_one,
                color: self.color_one.resolve(mode),
            },
            Shadow {
                offset_x: self.x_two,
                offset_y: self.y_two,
                blur: self.blur_two,
                color: self.color_two.resolve(mode),
            },
        ]
    }
}

token_enum! {
    /// Elevation levels
    pub enum ShadowToken {
        Clear => "clear",
        Shadow02 => "shadow02",
        Shadow04 => "shadow04",
        Shadow08 => "shadow08",
        Shadow16 => "shadow16",
        Shadow28 => "shadow28",
        Shadow64 => "shadow64",
    }
}

impl ShadowToken {
    pub fn shadow_info(self) -> ShadowInfo {
        let black = |light: f32, dark: f32| {
            DynamicColor::new(Color::BLACK.with_alpha(light), Color::BLACK.with_alpha(dark))
        };
        let soft = || (black(0.14, 0.28), black(0.12, 0.20));
        let deep = || (black(0.24, 0.48), black(0.20, 0.40));

        let ((key, ambient), blur_one, y_one, blur_two) = match self {
            Self::Clear => return ShadowInfo::none(),
            Self::Shadow02 => (soft(), 2.0, 1.0, 2.0),
            Self::Shadow04 => (soft(), 4.0, 2.0, 2.0),
            Self::Shadow08 => (soft(), 8.0, 4.0, 2.0),
            Self::Shadow16 => (soft(), 16.0, 8.0, 2.0),
            Self::Shadow28 => (deep(), 28.0, 14.0, 8.0),
            Self::Shadow64 => (deep(), 64.0, 32.0, 8.0),
        };
        ShadowInfo::new(key, blur_one, 0.0, y_one, ambient, blur_two, 0.0, 0.0)
    }
}
