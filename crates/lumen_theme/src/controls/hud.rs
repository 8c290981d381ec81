//! Heads-up display tokens

use crate::control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
use crate::theme::Theme;
use crate::tokens::{AliasColorToken, BorderRadiusToken, GlobalTokens, SpacingToken};

token_enum! {
    pub enum HudToken {
        BackgroundColor => "background_color",
        ActivityIndicatorColor => "activity_indicator_color",
        LabelColor => "label_color",
        CornerRadius => "corner_radius",
        HorizontalPadding => "horizontal_padding",
        VerticalPadding => "vertical_padding",
        TopPadding => "top_padding",
        BottomPadding => "bottom_padding",
        MinSize => "min_size",
        MaxSize => "max_size",
    }
}

impl TokenSetKey for HudToken {
    const KIND: ControlKind = ControlKind::HeadsUpDisplay;

    fn all_keys() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    fn key_name(self) -> &'static str {
        self.name()
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::BackgroundColor | Self::ActivityIndicatorColor | Self::LabelColor => {
                ValueKind::Color
            }
            _ => ValueKind::Float,
        }
    }
}

impl HudToken {
    pub fn default_value(self, theme: &Theme) -> ControlTokenValue {
        let alias = theme.alias_tokens();
        match self {
            Self::BackgroundColor => alias.color(AliasColorToken::BackgroundInverted).into(),
            Self::ActivityIndicatorColor => alias.color(AliasColorToken::StrokeAccessible).into(),
            Self::LabelColor => alias.color(AliasColorToken::ForegroundInverted1).into(),
            Self::CornerRadius => GlobalTokens::border_radius(BorderRadiusToken::Medium).into(),
            Self::HorizontalPadding => GlobalTokens::spacing(SpacingToken::Small).into(),
            Self::VerticalPadding | Self::TopPadding => {
                GlobalTokens::spacing(SpacingToken::Large).into()
            }
            Self::BottomPadding => GlobalTokens::spacing(SpacingToken::Medium).into(),
            Self::MinSize => 100.0.into(),
            Self::MaxSize => 192.0.into(),
        }
    }
}

pub fn hud_token_set() -> ControlTokenSet<HudToken> {
    ControlTokenSet::new(|key: HudToken, theme: &Theme| key.default_value(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds_match_defaults() {
        let theme = Theme::default();
        for key in HudToken::all() {
            assert_eq!(key.default_value(&theme).kind(), key.value_kind());
        }
    }

    #[test]
    fn test_size_bounds() {
        let theme = Theme::default();
        let tokens = hud_token_set();
        tokens.bind(&theme);
        assert!(tokens.float(HudToken::MinSize) < tokens.float(HudToken::MaxSize));
        assert_eq!(tokens.float(HudToken::HorizontalPadding), 12.0);
    }
}
