//! Button tokens

use crate::control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
use crate::theme::Theme;
use crate::tokens::{
    AliasColorToken, AliasSharedColorToken, DynamicColor, GlobalTokens, StrokeWidthToken,
    TypographyToken,
};
use lumen_core::Color;

/// Visual variants of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonStyle {
    PrimaryFilled,
    PrimaryOutline,
    DangerFilled,
    DangerOutline,
    #[default]
    SecondaryOutline,
    TertiaryOutline,
    Borderless,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 7] = [
        Self::PrimaryFilled,
        Self::PrimaryOutline,
        Self::DangerFilled,
        Self::DangerOutline,
        Self::SecondaryOutline,
        Self::TertiaryOutline,
        Self::Borderless,
    ];

    pub fn is_filled(self) -> bool {
        matches!(self, Self::PrimaryFilled | Self::DangerFilled)
    }

    pub fn is_danger(self) -> bool {
        matches!(self, Self::DangerFilled | Self::DangerOutline)
    }

    pub fn has_borders(self) -> bool {
        matches!(
            self,
            Self::PrimaryOutline | Self::DangerOutline | Self::SecondaryOutline | Self::TertiaryOutline
        )
    }

    /// Content insets as `(top, leading, bottom, trailing)`
    pub fn content_insets(self) -> (f32, f32, f32, f32) {
        match self {
            Self::PrimaryFilled | Self::PrimaryOutline | Self::DangerFilled | Self::DangerOutline => {
                (16.0, 20.0, 16.0, 20.0)
            }
            Self::SecondaryOutline => (10.0, 14.0, 10.0, 14.0),
            Self::Borderless => (7.0, 12.0, 7.0, 12.0),
            Self::TertiaryOutline => (5.0, 8.0, 5.0, 8.0),
        }
    }
}

token_enum! {
    pub enum ButtonToken {
        BackgroundColor => "background_color",
        BackgroundPressedColor => "background_pressed_color",
        BackgroundFocusedColor => "background_focused_color",
        BackgroundDisabledColor => "background_disabled_color",
        BorderColor => "border_color",
        BorderPressedColor => "border_pressed_color",
        BorderDisabledColor => "border_disabled_color",
        BorderWidth => "border_width",
        TitleColor => "title_color",
        TitlePressedColor => "title_pressed_color",
        TitleDisabledColor => "title_disabled_color",
        CornerRadius => "corner_radius",
        TitleFont => "title_font",
        MinTitleLabelHeight => "min_title_label_height",
        TitleImagePadding => "title_image_padding",
        ContentInsetTop => "content_inset_top",
        ContentInsetLeading => "content_inset_leading",
        ContentInsetBottom => "content_inset_bottom",
        ContentInsetTrailing => "content_inset_trailing",
    }
}

impl TokenSetKey for ButtonToken {
    const KIND: ControlKind = ControlKind::Button;

    fn all_keys() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    fn key_name(self) -> &'static str {
        self.name()
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::BackgroundColor
            | Self::BackgroundPressedColor
            | Self::BackgroundFocusedColor
            | Self::BackgroundDisabledColor
            | Self::BorderColor
            | Self::BorderPressedColor
            | Self::BorderDisabledColor
            | Self::TitleColor
            | Self::TitlePressedColor
            | Self::TitleDisabledColor => ValueKind::Color,
            Self::TitleFont => ValueKind::Font,
            Self::BorderWidth
            | Self::CornerRadius
            | Self::MinTitleLabelHeight
            | Self::TitleImagePadding
            | Self::ContentInsetTop
            | Self::ContentInsetLeading
            | Self::ContentInsetBottom
            | Self::ContentInsetTrailing => ValueKind::Float,
        }
    }
}

impl ButtonToken {
    pub fn default_value(self, style: ButtonStyle, theme: &Theme) -> ControlTokenValue {
        let alias = theme.alias_tokens();
        let color = |token: AliasColorToken| alias.color(token);
        let clear = DynamicColor::uniform(Color::TRANSPARENT);
        let danger_foreground = alias.shared_color(AliasSharedColorToken::DangerForeground2);

        // Title on a filled background
        let on_fill = if style.is_danger() {
            color(AliasColorToken::ForegroundLightStatic)
        } else {
            color(AliasColorToken::ForegroundOnColor)
        };

        match self {
            Self::BackgroundColor => match style {
                ButtonStyle::PrimaryFilled => color(AliasColorToken::BrandBackground1).into(),
                ButtonStyle::DangerFilled => alias
                    .shared_color(AliasSharedColorToken::DangerBackground2)
                    .into(),
                _ => clear.into(),
            },
            Self::BackgroundPressedColor => match style {
                ButtonStyle::PrimaryFilled => {
                    color(AliasColorToken::BrandBackground1Pressed).into()
                }
                ButtonStyle::DangerFilled => alias
                    .shared_color(AliasSharedColorToken::DangerBackground2)
                    .into(),
                _ => clear.into(),
            },
            Self::BackgroundFocusedColor => match style {
                ButtonStyle::PrimaryFilled => {
                    color(AliasColorToken::BrandBackground1Selected).into()
                }
                ButtonStyle::DangerFilled => alias
                    .shared_color(AliasSharedColorToken::DangerBackground2)
                    .into(),
                _ => clear.into(),
            },
            Self::BackgroundDisabledColor => {
                if style.is_filled() {
                    color(AliasColorToken::Background5).into()
                } else {
                    clear.into()
                }
            }
            Self::BorderColor => {
                if !style.has_borders() {
                    clear.into()
                } else if style.is_danger() {
                    danger_foreground.into()
                } else {
                    color(AliasColorToken::BrandForeground1).into()
                }
            }
            Self::BorderPressedColor => {
                if !style.has_borders() {
                    clear.into()
                } else if style.is_danger() {
                    danger_foreground.into()
                } else {
                    color(AliasColorToken::BrandStroke1Pressed).into()
                }
            }
            Self::BorderDisabledColor => {
                if style.has_borders() {
                    color(AliasColorToken::StrokeFocus1).into()
                } else {
                    clear.into()
                }
            }
            Self::BorderWidth => {
                if style.has_borders() {
                    GlobalTokens::stroke_width(StrokeWidthToken::Width10).into()
                } else {
                    0.0.into()
                }
            }
            Self::TitleColor => {
                if style.is_filled() {
                    on_fill.into()
                } else if style.is_danger() {
                    danger_foreground.into()
                } else {
                    color(AliasColorToken::BrandForeground1).into()
                }
            }
            Self::TitlePressedColor => {
                if style.is_filled() {
                    on_fill.into()
                } else if style.is_danger() {
                    danger_foreground.into()
                } else {
                    color(AliasColorToken::BrandStroke1Pressed).into()
                }
            }
            Self::TitleDisabledColor => {
                if style.is_filled() {
                    color(AliasColorToken::ForegroundOnColor).into()
                } else {
                    color(AliasColorToken::ForegroundDisabled1).into()
                }
            }
            Self::CornerRadius => match style {
                ButtonStyle::TertiaryOutline => 5.0.into(),
                _ => 8.0.into(),
            },
            Self::TitleFont => match style {
                ButtonStyle::SecondaryOutline | ButtonStyle::TertiaryOutline => {
                    alias.typography(TypographyToken::Body2Strong).into()
                }
                _ => alias.typography(TypographyToken::Body1Strong).into(),
            },
            Self::MinTitleLabelHeight => match style {
                ButtonStyle::SecondaryOutline | ButtonStyle::TertiaryOutline => 18.0.into(),
                _ => 20.0.into(),
            },
            Self::TitleImagePadding => match style {
                ButtonStyle::PrimaryFilled
                | ButtonStyle::PrimaryOutline
                | ButtonStyle::DangerFilled
                | ButtonStyle::DangerOutline => 10.0.into(),
                ButtonStyle::SecondaryOutline | ButtonStyle::Borderless => 8.0.into(),
                ButtonStyle::TertiaryOutline => 0.0.into(),
            },
            Self::ContentInsetTop => style.content_insets().0.into(),
            Self::ContentInsetLeading => style.content_insets().1.into(),
            Self::ContentInsetBottom => style.content_insets().2.into(),
            Self::ContentInsetTrailing => style.content_insets().3.into(),
        }
    }
}

/// Unbound token set for a button of `style`
pub fn button_token_set(style: ButtonStyle) -> ControlTokenSet<ButtonToken> {
    ControlTokenSet::new(move |key: ButtonToken, theme: &Theme| key.default_value(style, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::AppearanceMode;

    #[test]
    fn test_value_kinds_match_defaults() {
        let theme = Theme::default();
        for style in ButtonStyle::ALL {
            for key in ButtonToken::all() {
                assert_eq!(
                    key.default_value(style, &theme).kind(),
                    key.value_kind(),
                    "{style:?} {key:?}"
                );
            }
        }
    }

    #[test]
    fn test_primary_filled_follows_mode() {
        let theme = Theme::default();
        let tokens = button_token_set(ButtonStyle::PrimaryFilled);
        tokens.bind(&theme);

        let light = tokens.color(ButtonToken::BackgroundColor);
        assert_eq!(
            light,
            theme
                .alias_tokens()
                .resolve(AliasColorToken::BrandBackground1, AppearanceMode::Light)
        );

        theme.set_mode(AppearanceMode::Dark);
        assert_eq!(
            tokens.color(ButtonToken::BackgroundColor),
            theme
                .alias_tokens()
                .resolve(AliasColorToken::BrandBackground1, AppearanceMode::Dark)
        );
    }

    #[test]
    fn test_borderless_has_no_border() {
        let theme = Theme::default();
        let tokens = button_token_set(ButtonStyle::Borderless);
        tokens.bind(&theme);

        assert_eq!(tokens.float(ButtonToken::BorderWidth), 0.0);
        assert_eq!(tokens.color(ButtonToken::BorderColor), Color::TRANSPARENT);
        assert_eq!(tokens.float(ButtonToken::ContentInsetLeading), 12.0);
    }

    #[test]
    fn test_tertiary_geometry() {
        let theme = Theme::default();
        let tokens = button_token_set(ButtonStyle::TertiaryOutline);
        tokens.bind(&theme);

        assert_eq!(tokens.float(ButtonToken::CornerRadius), 5.0);
        assert_eq!(tokens.float(ButtonToken::TitleImagePadding), 0.0);
        assert_eq!(tokens.font(ButtonToken::TitleFont).size, 15.0);
    }
}
