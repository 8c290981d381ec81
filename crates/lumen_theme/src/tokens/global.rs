//! Global tokens
//!
//! The immutable base tables every other token layer is built from. Nothing
//! here depends on the appearance mode or on overrides; lookups are pure
//! functions over closed key enumerations, so an invalid key cannot be
//! expressed.

use lumen_core::Color;

token_enum! {
    /// Spacing scale
    pub enum SpacingToken {
        None => "none",
        XxxSmall => "xxx_small",
        XxSmall => "xx_small",
        XSmall => "x_small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x_large",
        XxLarge => "xx_large",
        XxxLarge => "xxx_large",
    }
}

token_enum! {
    /// Icon sizes
    pub enum IconSizeToken {
        XxxSmall => "xxx_small",
        XxSmall => "xx_small",
        XSmall => "x_small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x_large",
        XxLarge => "xx_large",
        XxxLarge => "xxx_large",
    }
}

token_enum! {
    /// Border radii
    pub enum BorderRadiusToken {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x_large",
        Circle => "circle",
    }
}

token_enum! {
    /// Stroke widths
    pub enum StrokeWidthToken {
        None => "none",
        Width05 => "width05",
        Width10 => "width10",
        Width15 => "width15",
        Width20 => "width20",
        Width30 => "width30",
        Width40 => "width40",
        Width60 => "width60",
    }
}

token_enum! {
    /// Font size ramp
    pub enum FontSizeToken {
        Size100 => "size100",
        Size200 => "size200",
        Size300 => "size300",
        Size400 => "size400",
        Size500 => "size500",
        Size600 => "size600",
        Size700 => "size700",
        Size800 => "size800",
        Size900 => "size900",
    }
}

token_enum! {
    /// Font weights
    pub enum FontWeightToken {
        Regular => "regular",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

token_enum! {
    /// Neutral grey ramp, `GreyN` is N% lightness
    pub enum NeutralColorToken {
        Black => "black",
        Grey2 => "grey2",
        Grey4 => "grey4",
        Grey6 => "grey6",
        Grey8 => "grey8",
        Grey10 => "grey10",
        Grey12 => "grey12",
        Grey14 => "grey14",
        Grey16 => "grey16",
        Grey18 => "grey18",
        Grey20 => "grey20",
        Grey22 => "grey22",
        Grey24 => "grey24",
        Grey26 => "grey26",
        Grey28 => "grey28",
        Grey30 => "grey30",
        Grey32 => "grey32",
        Grey34 => "grey34",
        Grey36 => "grey36",
        Grey38 => "grey38",
        Grey40 => "grey40",
        Grey42 => "grey42",
        Grey44 => "grey44",
        Grey46 => "grey46",
        Grey48 => "grey48",
        Grey50 => "grey50",
        Grey52 => "grey52",
        Grey54 => "grey54",
        Grey56 => "grey56",
        Grey58 => "grey58",
        Grey60 => "grey60",
        Grey62 => "grey62",
        Grey64 => "grey64",
        Grey66 => "grey66",
        Grey68 => "grey68",
        Grey70 => "grey70",
        Grey72 => "grey72",
        Grey74 => "grey74",
        Grey76 => "grey76",
        Grey78 => "grey78",
        Grey80 => "grey80",
        Grey82 => "grey82",
        Grey84 => "grey84",
        Grey86 => "grey86",
        Grey88 => "grey88",
        Grey90 => "grey90",
        Grey92 => "grey92",
        Grey94 => "grey94",
        Grey96 => "grey96",
        Grey98 => "grey98",
        White => "white",
    }
}

token_enum! {
    /// Brand color ramp, darkest to lightest
    pub enum BrandColorToken {
        Shade30 => "shade30",
        Shade20 => "shade20",
        Shade10 => "shade10",
        Primary => "primary",
        Tint10 => "tint10",
        Tint20 => "tint20",
        Tint30 => "tint30",
        Tint40 => "tint40",
    }
}

token_enum! {
    /// Status palettes shared across brands
    pub enum SharedColorSet {
        Red => "red",
        Green => "green",
        Yellow => "yellow",
    }
}

token_enum! {
    /// Steps of a shared status palette
    pub enum SharedColorToken {
        Shade30 => "shade30",
        Shade20 => "shade20",
        Shade10 => "shade10",
        Primary => "primary",
        Tint10 => "tint10",
        Tint20 => "tint20",
        Tint30 => "tint30",
        Tint40 => "tint40",
        Tint50 => "tint50",
        Tint60 => "tint60",
    }
}

/// Process-wide constant tables
pub struct GlobalTokens;

impl GlobalTokens {
    pub fn spacing(token: SpacingToken) -> f32 {
        match token {
            SpacingToken::None => 0.0,
            SpacingToken::XxxSmall => 2.0,
            SpacingToken::XxSmall => 4.0,
            SpacingToken::XSmall => 8.0,
            SpacingToken::Small => 12.0,
            SpacingToken::Medium => 16.0,
            SpacingToken::Large => 20.0,
            SpacingToken::XLarge => 24.0,
            SpacingToken::XxLarge => 36.0,
            SpacingToken::XxxLarge => 48.0,
        }
    }

    pub fn icon_size(token: IconSizeToken) -> f32 {
        match token {
            IconSizeToken::XxxSmall => 10.0,
            IconSizeToken::XxSmall => 12.0,
            IconSizeToken::XSmall => 16.0,
            IconSizeToken::Small => 20.0,
            IconSizeToken::Medium => 24.0,
            IconSizeToken::Large => 28.0,
            IconSizeToken::XLarge => 36.0,
            IconSizeToken::XxLarge => 40.0,
            IconSizeToken::XxxLarge => 48.0,
        }
    }

    pub fn border_radius(token: BorderRadiusToken) -> f32 {
        match token {
            BorderRadiusToken::None => 0.0,
            BorderRadiusToken::Small => 2.0,
            BorderRadiusToken::Medium => 4.0,
            BorderRadiusToken::Large => 8.0,
            BorderRadiusToken::XLarge => 12.0,
            BorderRadiusToken::Circle => 9999.0,
        }
    }

    pub fn stroke_width(token: StrokeWidthToken) -> f32 {
        match token {
            StrokeWidthToken::None => 0.0,
            StrokeWidthToken::Width05 => 0.5,
            StrokeWidthToken::Width10 => 1.0,
            StrokeWidthToken::Width15 => 1.5,
            StrokeWidthToken::Width20 => 2.0,
            StrokeWidthToken::Width30 => 3.0,
            StrokeWidthToken::Width40 => 4.0,
            StrokeWidthToken::Width60 => 6.0,
        }
    }

    pub fn font_size(token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Size100 => 12.0,
            FontSizeToken::Size200 => 13.0,
            FontSizeToken::Size300 => 15.0,
            FontSizeToken::Size400 => 17.0,
            FontSizeToken::Size500 => 20.0,
            FontSizeToken::Size600 => 22.0,
            FontSizeToken::Size700 => 28.0,
            FontSizeToken::Size800 => 34.0,
            FontSizeToken::Size900 => 60.0,
        }
    }

    pub fn font_weight(token: FontWeightToken) -> u16 {
        match token {
            FontWeightToken::Regular => 400,
            FontWeightToken::Medium => 500,
            FontWeightToken::Semibold => 600,
            FontWeightToken::Bold => 700,
        }
    }

    pub fn neutral_color(token: NeutralColorToken) -> Color {
        use NeutralColorToken::*;

        Color::from_hex(match token {
            Black => 0x000000,
            Grey2 => 0x050505,
            Grey4 => 0x0A0A0A,
            Grey6 => 0x0F0F0F,
            Grey8 => 0x141414,
            Grey10 => 0x1A1A1A,
            Grey12 => 0x1F1F1F,
            Grey14 => 0x242424,
            Grey16 => 0x292929,
            Grey18 => 0x2E2E2E,
            Grey20 => 0x333333,
            Grey22 => 0x383838,
            Grey24 => 0x3D3D3D,
            Grey26 => 0x424242,
            Grey28 => 0x474747,
            Grey30 => 0x4D4D4D,
            Grey32 => 0x525252,
            Grey34 => 0x575757,
            Grey36 => 0x5C5C5C,
            Grey38 => 0x616161,
            Grey40 => 0x666666,
            Grey42 => 0x6B6B6B,
            Grey44 => 0x707070,
            Grey46 => 0x757575,
            Grey48 => 0x7A7A7A,
            Grey50 => 0x808080,
            Grey52 => 0x858585,
            Grey54 => 0x8A8A8A,
            Grey56 => 0x8F8F8F,
            Grey58 => 0x949494,
            Grey60 => 0x999999,
            Grey62 => 0x9E9E9E,
            Grey64 => 0xA3A3A3,
            Grey66 => 0xA8A8A8,
            Grey68 => 0xADADAD,
            Grey70 => 0xB3B3B3,
            Grey72 => 0xB8B8B8,
            Grey74 => 0xBDBDBD,
            Grey76 => 0xC2C2C2,
            Grey78 => 0xC7C7C7,
            Grey80 => 0xCCCCCC,
            Grey82 => 0xD1D1D1,
            Grey84 => 0xD6D6D6,
            Grey86 => 0xDBDBDB,
            Grey88 => 0xE0E0E0,
            Grey90 => 0xE6E6E6,
            Grey92 => 0xEBEBEB,
            Grey94 => 0xF0F0F0,
            Grey96 => 0xF5F5F5,
            Grey98 => 0xFAFAFA,
            White => 0xFFFFFF,
        })
    }

    /// Default (communication blue) brand ramp
    pub fn brand_color(token: BrandColorToken) -> Color {
        Color::from_hex(match token {
            BrandColorToken::Shade30 => 0x004578,
            BrandColorToken::Shade20 => 0x005A9E,
            BrandColorToken::Shade10 => 0x106EBE,
            BrandColorToken::Primary => 0x0078D4,
            BrandColorToken::Tint10 => 0x2B88D8,
            BrandColorToken::Tint20 => 0xC7E0F4,
            BrandColorToken::Tint30 => 0xDEECF9,
            BrandColorToken::Tint40 => 0xEFF6FC,
        })
    }

    pub fn shared_color(set: SharedColorSet, token: SharedColorToken) -> Color {
        use SharedColorToken::*;

        let ramp: [u32; 10] = match set {
            SharedColorSet::Red => [
                0x751D1F, 0x9F282B, 0xBC2F32, 0xD13438, 0xD7494C, 0xDC5E62, 0xE37D80, 0xF1BBBC,
                0xF8DADB, 0xFDF6F6,
            ],
            SharedColorSet::Green => [
                0x094509, 0x0C5E0C, 0x0E700E, 0x107C10, 0x218C21, 0x359B35, 0x54B054, 0x9FD89F,
                0xC9EAC9, 0xF1FAF1,
            ],
            SharedColorSet::Yellow => [
                0x817400, 0xC0AD00, 0xE4CC00, 0xFDE300, 0xFDE61E, 0xFDEA3D, 0xFEEE66, 0xFEF7B2,
                0xFFFAD6, 0xFFFEF5,
            ],
        };

        let index = match token {
            Shade30 => 0,
            Shade20 => 1,
            Shade10 => 2,
            Primary => 3,
            Tint10 => 4,
            Tint20 => 5,
            Tint30 => 6,
            Tint40 => 7,
            Tint50 => 8,
            Tint60 => 9,
        };
        Color::from_hex(ramp[index])
    }
}

/// A complete brand ramp
///
/// Themes carry their own brand; [`BrandColors::default`] is the global ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrandColors {
    colors: [Color; 8],
}

impl BrandColors {
    pub fn get(&self, token: BrandColorToken) -> Color {
        self.colors[token as usize]
    }

    /// Replace one step of the ramp
    pub fn with(mut self, token: BrandColorToken, color: Color) -> Self {
        self.colors[token as usize] = color;
        self
    }

    pub fn primary(&self) -> Color {
        self.get(BrandColorToken::Primary)
    }
}

impl Default for BrandColors {
    fn default() -> Self {
        let mut colors = [Color::default(); 8];
        for token in BrandColorToken::ALL {
            colors[*token as usize] = GlobalTokens::brand_color(*token);
        }
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_ramp_is_monotonic() {
        let lightness: Vec<f32> = NeutralColorToken::all()
            .iter()
            .map(|t| GlobalTokens::neutral_color(*t).r)
            .collect();
        assert!(lightness.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(GlobalTokens::neutral_color(NeutralColorToken::Grey14), Color::from_hex(0x242424));
    }

    #[test]
    fn test_spacing_scale_is_increasing() {
        let values: Vec<f32> = SpacingToken::all().iter().map(|t| GlobalTokens::spacing(*t)).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_token_names_round_trip() {
        for token in NeutralColorToken::all() {
            assert_eq!(NeutralColorToken::from_name(token.name()), Some(*token));
        }
        assert_eq!(BrandColorToken::from_name("shade10"), Some(BrandColorToken::Shade10));
        assert_eq!(BrandColorToken::from_name("shade11"), None);
    }

    #[test]
    fn test_brand_override_replaces_single_step() {
        let custom = Color::from_hex(0x6264A7);
        let brand = BrandColors::default().with(BrandColorToken::Primary, custom);
        assert_eq!(brand.primary(), custom);
        assert_eq!(
            brand.get(BrandColorToken::Shade10),
            GlobalTokens::brand_color(BrandColorToken::Shade10)
        );
    }

    #[test]
    fn test_shared_palettes() {
        assert_eq!(
            GlobalTokens::shared_color(SharedColorSet::Red, SharedColorToken::Primary),
            Color::from_hex(0xD13438)
        );
        assert_eq!(
            GlobalTokens::shared_color(SharedColorSet::Green, SharedColorToken::Tint60),
            Color::from_hex(0xF1FAF1)
        );
    }
}
