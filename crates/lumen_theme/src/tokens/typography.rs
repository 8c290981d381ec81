//! Typography tokens

use super::global::{FontSizeToken, FontWeightToken, GlobalTokens};

/// A resolved font description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontInfo {
    pub size: f32,
    pub weight: u16,
}

impl FontInfo {
    pub const fn new(size: f32, weight: u16) -> Self {
        Self { size, weight }
    }

    fn from_globals(size: FontSizeToken, weight: FontWeightToken) -> Self {
        Self::new(GlobalTokens::font_size(size), GlobalTokens::font_weight(weight))
    }
}

token_enum! {
    /// Semantic text styles
    pub enum TypographyToken {
        Display => "display",
        LargeTitle => "large_title",
        Title1 => "title1",
        Title2 => "title2",
        Title3 => "title3",
        Body1Strong => "body1_strong",
        Body1 => "body1",
        Body2Strong => "body2_strong",
        Body2 => "body2",
        Caption1Strong => "caption1_strong",
        Caption1 => "caption1",
        Caption2 => "caption2",
    }
}

impl TypographyToken {
    pub fn font_info(self) -> FontInfo {
        use FontSizeToken::*;
        use FontWeightToken::*;

        match self {
            Self::Display => FontInfo::from_globals(Size900, Bold),
            Self::LargeTitle => FontInfo::from_globals(Size800, Bold),
            Self::Title1 => FontInfo::from_globals(Size700, Bold),
            Self::Title2 => FontInfo::from_globals(Size600, Semibold),
            Self::Title3 => FontInfo::from_globals(Size500, Semibold),
            Self::Body1Strong => FontInfo::from_globals(Size400, Semibold),
            Self::Body1 => FontInfo::from_globals(Size400, Regular),
            Self::Body2Strong => FontInfo::from_globals(Size300, Semibold),
            Self::Body2 => FontInfo::from_globals(Size300, Regular),
            Self::Caption1Strong => FontInfo::from_globals(Size200, Semibold),
            Self::Caption1 => FontInfo::from_globals(Size200, Regular),
            Self::Caption2 => FontInfo::from_globals(Size100, Regular),
        }
    }
}
