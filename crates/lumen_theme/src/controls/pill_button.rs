//! Pill button tokens

use crate::control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
use crate::theme::Theme;
use crate::tokens::{AliasColorToken, DynamicColor, TypographyToken};

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum PillButtonStyle {
    #[default]
    Primary,
    /// Pills drawn on a brand-colored bar
    OnBrand,
}

token_enum! {
    pub enum PillButtonToken {
        BackgroundColor => "background_color",
        BackgroundColorSelected => "background_color_selected",
        BackgroundColorDisabled => "background_color_disabled",
        BackgroundColorSelectedDisabled => "background_color_selected_disabled",
        TitleColor => "title_color",
        TitleColorSelected => "title_color_selected",
        TitleColorDisabled => "title_color_disabled",
        TitleColorSelectedDisabled => "title_color_selected_disabled",
        EnabledUnreadDotColor => "enabled_unread_dot_color",
        DisabledUnreadDotColor => "disabled_unread_dot_color",
        Font => "font",
        CornerRadius => "corner_radius",
        UnreadDotSize => "unread_dot_size",
        UnreadDotOffsetX => "unread_dot_offset_x",
        UnreadDotOffsetY => "unread_dot_offset_y",
        HorizontalInset => "horizontal_inset",
        TopInset => "top_inset",
        BottomInset => "bottom_inset",
    }
}

impl TokenSetKey for PillButtonToken {
    const KIND: ControlKind = ControlKind::PillButton;

    fn all_keys() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    fn key_name(self) -> &'static str {
        self.name()
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::Font => ValueKind::Font,
            Self::CornerRadius
            | Self::UnreadDotSize
            | Self::UnreadDotOffsetX
            | Self::UnreadDotOffsetY
            | Self::HorizontalInset
            | Self::TopInset
            | Self::BottomInset => ValueKind::Float,
            _ => ValueKind::Color,
        }
    }
}

impl PillButtonToken {
    pub fn default_value(self, style: PillButtonStyle, theme: &Theme) -> ControlTokenValue {
        use AliasColorToken::*;

        let alias = theme.alias_tokens();
        // On-brand pills take their light variant from one alias and dark from another
        let split = |light: AliasColorToken, dark: AliasColorToken| {
            DynamicColor::new(alias.color(light).light, alias.color(dark).dark)
        };

        let color = match (self, style) {
            (Self::Font, _) => return alias.typography(TypographyToken::Body2).into(),
            (Self::CornerRadius, _) => return 16.0.into(),
            (Self::UnreadDotSize, _) => return 6.0.into(),
            (Self::UnreadDotOffsetX, _) => return 6.0.into(),
            (Self::UnreadDotOffsetY, _) => return 3.0.into(),
            (Self::HorizontalInset, _) => return 16.0.into(),
            (Self::TopInset, _) => return 6.0.into(),
            (Self::BottomInset, _) => return 8.0.into(),

            (Self::BackgroundColor, PillButtonStyle::Primary) => alias.color(Background5),
            (Self::BackgroundColor, PillButtonStyle::OnBrand) => split(BrandBackground2, Background5),
            (Self::BackgroundColorSelected, PillButtonStyle::Primary) => {
                alias.color(BrandBackground1)
            }
            (Self::BackgroundColorSelected, PillButtonStyle::OnBrand) => {
                split(Background1, Background5Selected)
            }
            (Self::BackgroundColorDisabled, PillButtonStyle::Primary) => alias.color(Background5),
            (Self::BackgroundColorDisabled, PillButtonStyle::OnBrand) => {
                split(BrandBackground2, Background5)
            }
            (Self::BackgroundColorSelectedDisabled, PillButtonStyle::Primary) => {
                alias.color(Background5)
            }
            (Self::BackgroundColorSelectedDisabled, PillButtonStyle::OnBrand) => {
                split(Background1, Background5Selected)
            }

            (Self::TitleColor, PillButtonStyle::Primary) => alias.color(Foreground2),
            (Self::TitleColor, PillButtonStyle::OnBrand) => split(ForegroundOnColor, Foreground2),
            (Self::TitleColorSelected, PillButtonStyle::Primary) => {
                alias.color(ForegroundOnColor)
            }
            (Self::TitleColorSelected, PillButtonStyle::OnBrand) => {
                split(BrandForeground1, Foreground1)
            }
            (Self::TitleColorDisabled, PillButtonStyle::Primary) => {
                alias.color(ForegroundDisabled1)
            }
            (Self::TitleColorDisabled, PillButtonStyle::OnBrand) => {
                split(BrandForegroundDisabled1, ForegroundDisabled1)
            }
            (Self::TitleColorSelectedDisabled, _) => alias.color(ForegroundDisabled2),

            (Self::EnabledUnreadDotColor, PillButtonStyle::Primary) => {
                alias.color(BrandForeground1)
            }
            (Self::EnabledUnreadDotColor, PillButtonStyle::OnBrand) => {
                split(ForegroundOnColor, BrandForeground1)
            }
            (Self::DisabledUnreadDotColor, _) => alias.color(ForegroundDisabled1),
        };
        color.into()
    }
}

pub fn pill_button_token_set(style: PillButtonStyle) -> ControlTokenSet<PillButtonToken> {
    ControlTokenSet::new(move |key: PillButtonToken, theme: &Theme| {
        key.default_value(style, theme)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::AppearanceMode;

    #[test]
    fn test_value_kinds_match_defaults() {
        let theme = Theme::default();
        for style in [PillButtonStyle::Primary, PillButtonStyle::OnBrand] {
            for key in PillButtonToken::all() {
                assert_eq!(key.default_value(style, &theme).kind(), key.value_kind());
            }
        }
    }

    #[test]
    fn test_geometry_is_overridable() {
        let theme = Theme::default();
        let tokens = pill_button_token_set(PillButtonStyle::Primary);
        tokens.bind(&theme);
        assert_eq!(tokens.float(PillButtonToken::CornerRadius), 16.0);
        assert_eq!(tokens.float(PillButtonToken::UnreadDotSize), 6.0);

        theme.set_control_override(PillButtonToken::CornerRadius, 8.0);
        assert_eq!(tokens.float(PillButtonToken::CornerRadius), 8.0);
        assert_eq!(tokens.float(PillButtonToken::BottomInset), 8.0);
    }

    #[test]
    fn test_on_brand_splits_light_and_dark() {
        let theme = Theme::default();
        let alias = theme.alias_tokens();
        let tokens = pill_button_token_set(PillButtonStyle::OnBrand);
        tokens.bind(&theme);

        assert_eq!(
            tokens.color(PillButtonToken::BackgroundColor),
            alias.resolve(AliasColorToken::BrandBackground2, AppearanceMode::Light)
        );

        theme.set_mode(AppearanceMode::Dark);
        assert_eq!(
            tokens.color(PillButtonToken::BackgroundColor),
            alias.resolve(AliasColorToken::Background5, AppearanceMode::Dark)
        );
    }
}
