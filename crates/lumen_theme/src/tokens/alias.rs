//! Alias tokens
//!
//! Semantic tokens ("foreground1", "brand_background2", ...) defined as
//! [`DynamicColor`]s over the global tables. All definitions are evaluated once
//! when an [`AliasTokens`] is built; resolving a token only selects the variant
//! for the requested [`AppearanceMode`].

use super::dynamic::{AppearanceMode, DynamicColor};
use super::global::{
    BrandColorToken, BrandColors, GlobalTokens, NeutralColorToken, SharedColorSet,
    SharedColorToken,
};
use super::shadow::{ShadowInfo, ShadowToken};
use super::typography::{FontInfo, TypographyToken};
use lumen_core::Color;

token_enum! {
    /// Semantic color token keys
    pub enum AliasColorToken {
        // Neutral foregrounds
        Foreground1 => "foreground1",
        Foreground2 => "foreground2",
        Foreground3 => "foreground3",
        ForegroundDisabled1 => "foreground_disabled1",
        ForegroundDisabled2 => "foreground_disabled2",
        ForegroundOnColor => "foreground_on_color",
        ForegroundInverted1 => "foreground_inverted1",
        ForegroundInverted2 => "foreground_inverted2",
        ForegroundLightStatic => "foreground_light_static",
        ForegroundDarkStatic => "foreground_dark_static",

        // Brand foregrounds
        BrandForegroundTint => "brand_foreground_tint",
        BrandForeground1 => "brand_foreground1",
        BrandForeground1Pressed => "brand_foreground1_pressed",
        BrandForeground1Selected => "brand_foreground1_selected",
        BrandForegroundDisabled1 => "brand_foreground_disabled1",
        BrandForegroundDisabled2 => "brand_foreground_disabled2",

        // Neutral backgrounds
        Background1 => "background1",
        Background1Pressed => "background1_pressed",
        Background1Selected => "background1_selected",
        Background2 => "background2",
        Background2Pressed => "background2_pressed",
        Background2Selected => "background2_selected",
        Background3 => "background3",
        Background3Pressed => "background3_pressed",
        Background3Selected => "background3_selected",
        Background4 => "background4",
        Background4Pressed => "background4_pressed",
        Background4Selected => "background4_selected",
        Background5 => "background5",
        Background5Pressed => "background5_pressed",
        Background5Selected => "background5_selected",
        Background6 => "background6",
        Background6Pressed => "background6_pressed",
        Background6Selected => "background6_selected",
        BackgroundInverted => "background_inverted",
        BackgroundDisabled => "background_disabled",
        CanvasBackground => "canvas_background",
        Stencil1 => "stencil1",
        Stencil2 => "stencil2",
        BackgroundDarkStatic => "background_dark_static",
        BackgroundLightStatic => "background_light_static",
        BackgroundLightStaticDisabled => "background_light_static_disabled",

        // Brand backgrounds
        BrandBackgroundTint => "brand_background_tint",
        BrandBackground1 => "brand_background1",
        BrandBackground1Pressed => "brand_background1_pressed",
        BrandBackground1Selected => "brand_background1_selected",
        BrandBackground2 => "brand_background2",
        BrandBackground2Pressed => "brand_background2_pressed",
        BrandBackground2Selected => "brand_background2_selected",
        BrandBackground3 => "brand_background3",
        BrandBackground3Pressed => "brand_background3_pressed",
        BrandBackgroundDisabled => "brand_background_disabled",

        // Neutral strokes
        Stroke1 => "stroke1",
        Stroke2 => "stroke2",
        StrokeDisabled => "stroke_disabled",
        StrokeAccessible => "stroke_accessible",
        StrokeFocus1 => "stroke_focus1",
        StrokeFocus2 => "stroke_focus2",

        // Brand strokes
        BrandStroke1 => "brand_stroke1",
        BrandStroke1Pressed => "brand_stroke1_pressed",
        BrandStroke1Selected => "brand_stroke1_selected",
    }
}

impl AliasColorToken {
    /// Display title, e.g. "Brand Foreground 1 Pressed"
    pub fn title(self) -> String {
        let mut words = Vec::new();
        for part in self.name().split('_') {
            let split = part
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(part.len());
            let (word, number) = part.split_at(split);
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                words.push(first.to_ascii_uppercase().to_string() + chars.as_str());
            }
            if !number.is_empty() {
                words.push(number.to_string());
            }
        }
        words.join(" ")
    }

    /// The alias token declared legible when drawn on top of `self`
    ///
    /// This table is maintained by hand and must stay exhaustive; some groups
    /// deliberately mix backgrounds, foregrounds and strokes.
    pub fn legible_foreground(self) -> AliasColorToken {
        use AliasColorToken::*;

        match self {
            Background1
            | Background1Pressed
            | Background1Selected
            | Background2
            | Background2Pressed
            | Background2Selected
            | Background3
            | Background3Pressed
            | Background3Selected
            | Background4
            | Background4Pressed
            | Background4Selected
            | Background5
            | Background5Pressed
            | Background5Selected
            | Background6
            | Background6Pressed
            | Background6Selected
            | BackgroundDisabled
            | BrandBackgroundDisabled
            | CanvasBackground
            | Stencil1
            | Stencil2
            | ForegroundDisabled2
            | ForegroundOnColor
            | BrandForegroundDisabled2
            | Stroke1
            | Stroke2
            | StrokeDisabled
            | StrokeFocus1
            | BrandBackgroundTint
            | ForegroundDisabled1 => Foreground1,

            BrandBackground3Pressed
            | Foreground1
            | Foreground2
            | Foreground3
            | ForegroundInverted2
            | StrokeFocus2
            | BrandBackground1Pressed
            | BrandForeground1Pressed
            | BrandStroke1Pressed
            | BrandStroke1
            | BrandForegroundTint
            | BrandStroke1Selected => ForegroundOnColor,

            ForegroundInverted1
            | ForegroundLightStatic
            | BackgroundLightStatic
            | BackgroundLightStaticDisabled => ForegroundDarkStatic,

            BrandForeground1
            | BrandForeground1Selected
            | BrandForegroundDisabled1
            | BackgroundInverted
            | BrandBackground1
            | BrandBackground1Selected
            | BrandBackground2
            | BrandBackground2Pressed
            | BrandBackground2Selected
            | BrandBackground3
            | StrokeAccessible
            | BackgroundDarkStatic
            | ForegroundDarkStatic => ForegroundInverted1,
        }
    }
}

token_enum! {
    /// Semantic groups of alias colors, as listed by diagnostic tooling
    pub enum AliasColorCategory {
        NeutralBackgrounds => "neutral_backgrounds",
        BrandBackgrounds => "brand_backgrounds",
        NeutralForegrounds => "neutral_foregrounds",
        BrandForegrounds => "brand_foregrounds",
        NeutralStrokes => "neutral_strokes",
        BrandStrokes => "brand_strokes",
    }
}

impl AliasColorCategory {
    pub fn title(self) -> &'static str {
        match self {
            Self::NeutralBackgrounds => "Neutral Backgrounds",
            Self::BrandBackgrounds => "Brand Backgrounds",
            Self::NeutralForegrounds => "Neutral Foregrounds",
            Self::BrandForegrounds => "Brand Foregrounds",
            Self::NeutralStrokes => "Neutral Strokes",
            Self::BrandStrokes => "Brand Strokes",
        }
    }

    /// Member tokens, in display order
    pub fn tokens(self) -> &'static [AliasColorToken] {
        use AliasColorToken::*;

        match self {
            Self::NeutralBackgrounds => &[
                Background1,
                Background1Pressed,
                Background1Selected,
                Background2,
                Background2Pressed,
                Background2Selected,
                Background3,
                Background3Pressed,
                Background3Selected,
                Background4,
                Background4Pressed,
                Background4Selected,
                Background5,
                Background5Pressed,
                Background5Selected,
                Background6,
                Background6Pressed,
                Background6Selected,
                BackgroundInverted,
                BackgroundDisabled,
                CanvasBackground,
                Stencil1,
                Stencil2,
                BackgroundDarkStatic,
                BackgroundLightStatic,
                BackgroundLightStaticDisabled,
            ],
            Self::BrandBackgrounds => &[
                BrandBackgroundTint,
                BrandBackground1,
                BrandBackground1Pressed,
                BrandBackground1Selected,
                BrandBackground2,
                BrandBackground2Pressed,
                BrandBackground2Selected,
                BrandBackground3,
                BrandBackground3Pressed,
                BrandBackgroundDisabled,
            ],
            Self::NeutralForegrounds => &[
                Foreground1,
                Foreground2,
                Foreground3,
                ForegroundDisabled1,
                ForegroundDisabled2,
                ForegroundOnColor,
                ForegroundInverted1,
                ForegroundInverted2,
                ForegroundLightStatic,
                ForegroundDarkStatic,
            ],
            Self::BrandForegrounds => &[
                BrandForegroundTint,
                BrandForeground1,
                BrandForeground1Pressed,
                BrandForeground1Selected,
                BrandForegroundDisabled1,
                BrandForegroundDisabled2,
            ],
            Self::NeutralStrokes => &[
                Stroke1,
                Stroke2,
                StrokeDisabled,
                StrokeAccessible,
                StrokeFocus1,
                StrokeFocus2,
            ],
            Self::BrandStrokes => &[BrandStroke1, BrandStroke1Pressed, BrandStroke1Selected],
        }
    }

    pub fn contains(self, token: AliasColorToken) -> bool {
        self.tokens().contains(&token)
    }
}

token_enum! {
    /// Status colors shared by every brand
    pub enum AliasSharedColorToken {
        DangerBackground1 => "danger_background1",
        DangerBackground2 => "danger_background2",
        DangerForeground1 => "danger_foreground1",
        DangerForeground2 => "danger_foreground2",
        SuccessBackground1 => "success_background1",
        SuccessBackground2 => "success_background2",
        SuccessForeground1 => "success_foreground1",
        SuccessForeground2 => "success_foreground2",
        WarningBackground1 => "warning_background1",
        WarningBackground2 => "warning_background2",
        WarningForeground1 => "warning_foreground1",
        WarningForeground2 => "warning_foreground2",
    }
}

/// Semantic token tables of one theme
#[derive(Clone, Debug)]
pub struct AliasTokens {
    brand: BrandColors,
    colors: Vec<DynamicColor>,
    shared_colors: Vec<DynamicColor>,
}

impl AliasTokens {
    /// Evaluate every alias definition against `brand`
    pub fn new(brand: &BrandColors) -> Self {
        Self {
            colors: AliasColorToken::ALL
                .iter()
                .map(|token| define_color(*token, brand))
                .collect(),
            shared_colors: AliasSharedColorToken::ALL
                .iter()
                .map(|token| define_shared_color(*token))
                .collect(),
            brand: *brand,
        }
    }

    pub fn brand(&self) -> &BrandColors {
        &self.brand
    }

    pub fn color(&self, token: AliasColorToken) -> DynamicColor {
        self.colors[token as usize]
    }

    /// Resolve `token` for `mode`
    pub fn resolve(&self, token: AliasColorToken, mode: AppearanceMode) -> Color {
        self.color(token).resolve(mode)
    }

    pub fn shared_color(&self, token: AliasSharedColorToken) -> DynamicColor {
        self.shared_colors[token as usize]
    }

    pub fn typography(&self, token: TypographyToken) -> FontInfo {
        token.font_info()
    }

    pub fn shadow(&self, token: ShadowToken) -> ShadowInfo {
        token.shadow_info()
    }
}

impl Default for AliasTokens {
    fn default() -> Self {
        Self::new(&BrandColors::default())
    }
}

fn define_color(token: AliasColorToken, brand: &BrandColors) -> DynamicColor {
    use AliasColorToken::*;
    use NeutralColorToken::*;

    let n = GlobalTokens::neutral_color;
    let b = |step: BrandColorToken| brand.get(step);
    let pair = |light: NeutralColorToken, dark: NeutralColorToken| DynamicColor::new(n(light), n(dark));
    let triple = |light: NeutralColorToken, dark: NeutralColorToken, elevated: NeutralColorToken| {
        DynamicColor::elevated(n(light), n(dark), n(elevated))
    };
    let brand_pair =
        |light: BrandColorToken, dark: BrandColorToken| DynamicColor::new(b(light), b(dark));

    match token {
        Foreground1 => pair(Grey14, White),
        Foreground2 => pair(Grey38, Grey84),
        Foreground3 => pair(Grey50, Grey68),
        ForegroundDisabled1 => pair(Grey74, Grey36),
        ForegroundDisabled2 => triple(White, Grey24, Grey28),
        ForegroundOnColor => pair(White, Black),
        ForegroundInverted1 => pair(White, Grey14),
        ForegroundInverted2 => pair(Grey14, White),
        ForegroundLightStatic => pair(White, White),
        ForegroundDarkStatic => pair(Black, Black),

        BrandForegroundTint => brand_pair(BrandColorToken::Shade10, BrandColorToken::Tint30),
        BrandForeground1 => brand_pair(BrandColorToken::Primary, BrandColorToken::Tint10),
        BrandForeground1Pressed => brand_pair(BrandColorToken::Shade10, BrandColorToken::Tint20),
        BrandForeground1Selected => brand_pair(BrandColorToken::Shade20, BrandColorToken::Tint10),
        BrandForegroundDisabled1 => brand_pair(BrandColorToken::Tint20, BrandColorToken::Shade20),
        BrandForegroundDisabled2 => brand_pair(BrandColorToken::Tint30, BrandColorToken::Shade30),

        Background1 => triple(White, Black, Grey4),
        Background1Pressed => triple(Grey88, Grey18, Grey18),
        Background1Selected => triple(Grey92, Grey14, Grey14),
        Background2 => triple(White, Grey12, Grey16),
        Background2Pressed => pair(Grey88, Grey30),
        Background2Selected => pair(Grey92, Grey26),
        Background3 => triple(White, Grey16, Grey20),
        Background3Pressed => pair(Grey88, Grey34),
        Background3Selected => pair(Grey92, Grey30),
        Background4 => triple(Grey98, Grey20, Grey24),
        Background4Pressed => pair(Grey86, Grey38),
        Background4Selected => pair(Grey90, Grey34),
        Background5 => triple(Grey94, Grey24, Grey28),
        Background5Pressed => pair(Grey82, Grey42),
        Background5Selected => pair(Grey86, Grey38),
        Background6 => triple(Grey82, Grey36, Grey40),
        Background6Pressed => pair(Grey74, Grey48),
        Background6Selected => pair(Grey78, Grey44),
        BackgroundInverted => pair(Grey46, Grey72),
        BackgroundDisabled => triple(Grey88, Grey32, Grey32),
        CanvasBackground => triple(Grey96, Black, Grey8),
        Stencil1 => pair(Grey90, Grey34),
        Stencil2 => pair(Grey98, Grey20),
        BackgroundDarkStatic => triple(Grey14, Grey24, Grey28),
        BackgroundLightStatic => pair(White, White),
        BackgroundLightStaticDisabled => pair(White, Grey68),

        BrandBackgroundTint => brand_pair(BrandColorToken::Tint40, BrandColorToken::Shade30),
        BrandBackground1 => brand_pair(BrandColorToken::Primary, BrandColorToken::Shade10),
        BrandBackground1Pressed => brand_pair(BrandColorToken::Shade20, BrandColorToken::Tint10),
        BrandBackground1Selected => brand_pair(BrandColorToken::Shade10, BrandColorToken::Shade20),
        BrandBackground2 => brand_pair(BrandColorToken::Shade10, BrandColorToken::Shade20),
        BrandBackground2Pressed => brand_pair(BrandColorToken::Shade30, BrandColorToken::Shade10),
        BrandBackground2Selected => brand_pair(BrandColorToken::Shade20, BrandColorToken::Shade30),
        BrandBackground3 => brand_pair(BrandColorToken::Shade20, BrandColorToken::Shade30),
        BrandBackground3Pressed => brand_pair(BrandColorToken::Shade30, BrandColorToken::Tint10),
        BrandBackgroundDisabled => brand_pair(BrandColorToken::Tint20, BrandColorToken::Shade30),

        Stroke1 => triple(Grey82, Grey30, Grey36),
        Stroke2 => triple(Grey88, Grey24, Grey30),
        StrokeDisabled => pair(Grey88, Grey26),
        StrokeAccessible => pair(Grey38, Grey62),
        StrokeFocus1 => pair(White, Black),
        StrokeFocus2 => pair(Black, White),

        BrandStroke1 => brand_pair(BrandColorToken::Primary, BrandColorToken::Tint10),
        BrandStroke1Pressed => brand_pair(BrandColorToken::Shade20, BrandColorToken::Tint20),
        BrandStroke1Selected => brand_pair(BrandColorToken::Shade10, BrandColorToken::Tint10),
    }
}

fn define_shared_color(token: AliasSharedColorToken) -> DynamicColor {
    use AliasSharedColorToken::*;
    use SharedColorToken::*;

    let shared = |set: SharedColorSet, light: SharedColorToken, dark: SharedColorToken| {
        DynamicColor::new(
            GlobalTokens::shared_color(set, light),
            GlobalTokens::shared_color(set, dark),
        )
    };

    match token {
        DangerBackground1 => shared(SharedColorSet::Red, Tint60, Shade30),
        DangerBackground2 => shared(SharedColorSet::Red, Primary, Shade10),
        DangerForeground1 => shared(SharedColorSet::Red, Shade10, Tint30),
        DangerForeground2 => shared(SharedColorSet::Red, Primary, Tint30),
        SuccessBackground1 => shared(SharedColorSet::Green, Tint60, Shade30),
        SuccessBackground2 => shared(SharedColorSet::Green, Primary, Shade10),
        SuccessForeground1 => shared(SharedColorSet::Green, Shade10, Tint30),
        SuccessForeground2 => shared(SharedColorSet::Green, Primary, Tint30),
        WarningBackground1 => shared(SharedColorSet::Yellow, Tint60, Shade30),
        WarningBackground2 => shared(SharedColorSet::Yellow, Primary, Shade10),
        WarningForeground1 => shared(SharedColorSet::Yellow, Shade30, Tint30),
        WarningForeground2 => shared(SharedColorSet::Yellow, Shade20, Primary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(AliasColorToken::Foreground1.title(), "Foreground 1");
        assert_eq!(
            AliasColorToken::BrandBackground1Pressed.title(),
            "Brand Background 1 Pressed"
        );
        assert_eq!(AliasColorToken::StrokeFocus2.title(), "Stroke Focus 2");
        assert_eq!(AliasColorToken::CanvasBackground.title(), "Canvas Background");
    }

    #[test]
    fn test_categories_partition_every_token() {
        for token in AliasColorToken::all() {
            let homes = AliasColorCategory::all()
                .iter()
                .filter(|category| category.contains(*token))
                .count();
            assert_eq!(homes, 1, "{token:?} should belong to exactly one category");
        }
    }

    #[test]
    fn test_pairing_targets_are_neutral_foregrounds() {
        for category in AliasColorCategory::all() {
            for token in category.tokens() {
                let paired = token.legible_foreground();
                assert!(
                    AliasColorCategory::NeutralForegrounds.contains(paired),
                    "{token:?} pairs with {paired:?}"
                );
            }
        }
    }

    #[test]
    fn test_brand_feeds_brand_tokens_only() {
        let custom = Color::from_hex(0x6264A7);
        let default = AliasTokens::default();
        let branded = AliasTokens::new(&BrandColors::default().with(BrandColorToken::Primary, custom));

        assert_eq!(
            branded.resolve(AliasColorToken::BrandBackground1, AppearanceMode::Light),
            custom
        );
        assert_eq!(
            branded.color(AliasColorToken::Foreground1),
            default.color(AliasColorToken::Foreground1)
        );
    }

    #[test]
    fn test_elevated_background_differs_from_dark() {
        let tokens = AliasTokens::default();
        let background = tokens.color(AliasColorToken::Background1);
        assert_ne!(
            background.resolve(AppearanceMode::Dark),
            background.resolve(AppearanceMode::DarkElevated)
        );
        let inverted = tokens.color(AliasColorToken::BackgroundInverted);
        assert_eq!(
            inverted.resolve(AppearanceMode::Dark),
            inverted.resolve(AppearanceMode::DarkElevated)
        );
    }
}
