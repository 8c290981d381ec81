//! Table view cell tokens
//!
//! [`ActionsCellToken`] extends the cell keys by wrapping them, so an actions
//! cell resolves every plain cell key exactly like a table view cell does.

use crate::control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
use crate::theme::Theme;
use crate::tokens::{
    AliasColorToken, AppearanceMode, BrandColorToken, DynamicColor, GlobalTokens, IconSizeToken,
    NeutralColorToken, SpacingToken, TypographyToken,
};
use lumen_core::Color;

/// Size of the custom view shown at the leading edge of a cell
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum CustomViewSize {
    #[default]
    Default,
    Zero,
    Small,
    Medium,
}

token_enum! {
    pub enum TableViewCellToken {
        BackgroundColor => "background_color",
        BackgroundGroupedColor => "background_grouped_color",
        CellBackgroundColor => "cell_background_color",
        CellBackgroundGroupedColor => "cell_background_grouped_color",
        CellBackgroundSelectedColor => "cell_background_selected_color",
        ImageColor => "image_color",
        CustomViewDimension => "custom_view_dimension",
        CustomViewTrailingMargin => "custom_view_trailing_margin",
        TitleColor => "title_color",
        SubtitleColor => "subtitle_color",
        FooterColor => "footer_color",
        SelectionIndicatorOffColor => "selection_indicator_off_color",
        TitleFont => "title_font",
        SubtitleTwoLinesFont => "subtitle_two_lines_font",
        SubtitleThreeLinesFont => "subtitle_three_lines_font",
        FooterFont => "footer_font",
        TitleHeight => "title_height",
        SubtitleTwoLineHeight => "subtitle_two_line_height",
        SubtitleThreeLineHeight => "subtitle_three_line_height",
        FooterHeight => "footer_height",
        LabelAccessoryViewMarginLeading => "label_accessory_view_margin_leading",
        LabelAccessoryViewMarginTrailing => "label_accessory_view_margin_trailing",
        CustomAccessoryViewMarginLeading => "custom_accessory_view_margin_leading",
        CustomAccessoryViewMinVerticalMargin => "custom_accessory_view_min_vertical_margin",
        LabelVerticalMarginForOneAndThreeLines => "label_vertical_margin_for_one_and_three_lines",
        LabelVerticalMarginForTwoLines => "label_vertical_margin_for_two_lines",
        LabelVerticalSpacing => "label_vertical_spacing",
        MinHeight => "min_height",
        MediumHeight => "medium_height",
        LargeHeight => "large_height",
        SelectionImageMarginTrailing => "selection_image_margin_trailing",
        SelectionImageSize => "selection_image_size",
        TextAreaMinWidth => "text_area_min_width",
        EnabledAlpha => "enabled_alpha",
        DisabledAlpha => "disabled_alpha",
        HorizontalSpacing => "horizontal_spacing",
        PaddingLeading => "padding_leading",
        PaddingVertical => "padding_vertical",
        PaddingTrailing => "padding_trailing",
        AccessoryDisclosureIndicatorColor => "accessory_disclosure_indicator_color",
        AccessoryDetailButtonColor => "accessory_detail_button_color",
        MainBrandColor => "main_brand_color",
    }
}

impl TokenSetKey for TableViewCellToken {
    const KIND: ControlKind = ControlKind::TableViewCell;

    fn all_keys() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    fn key_name(self) -> &'static str {
        self.name()
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::BackgroundColor
            | Self::BackgroundGroupedColor
            | Self::CellBackgroundColor
            | Self::CellBackgroundGroupedColor
            | Self::CellBackgroundSelectedColor
            | Self::ImageColor
            | Self::TitleColor
            | Self::SubtitleColor
            | Self::FooterColor
            | Self::SelectionIndicatorOffColor
            | Self::AccessoryDisclosureIndicatorColor
            | Self::AccessoryDetailButtonColor
            | Self::MainBrandColor => ValueKind::Color,
            Self::TitleFont
            | Self::SubtitleTwoLinesFont
            | Self::SubtitleThreeLinesFont
            | Self::FooterFont => ValueKind::Font,
            _ => ValueKind::Float,
        }
    }
}

impl TableViewCellToken {
    pub fn default_value(self, custom_view_size: CustomViewSize, theme: &Theme) -> ControlTokenValue {
        let alias = theme.alias_tokens();
        let color = |token: AliasColorToken| alias.color(token);
        let spacing = GlobalTokens::spacing;

        match self {
            Self::BackgroundColor => DynamicColor::new(
                GlobalTokens::neutral_color(NeutralColorToken::White),
                GlobalTokens::neutral_color(NeutralColorToken::Black),
            )
            .into(),
            Self::BackgroundGroupedColor => DynamicColor::new(
                color(AliasColorToken::Background2).light,
                color(AliasColorToken::Background1).dark,
            )
            .into(),
            Self::CellBackgroundColor => {
                let background2 = color(AliasColorToken::Background2);
                DynamicColor::elevated(
                    color(AliasColorToken::Background1).light,
                    color(AliasColorToken::Background1).dark,
                    background2.resolve(AppearanceMode::DarkElevated),
                )
                .into()
            }
            Self::CellBackgroundGroupedColor => DynamicColor::elevated(
                color(AliasColorToken::Background1).light,
                color(AliasColorToken::Background3).dark,
                Color::from_hex(0x212121),
            )
            .into(),
            Self::CellBackgroundSelectedColor => color(AliasColorToken::Background5).into(),
            Self::ImageColor | Self::TitleColor => color(AliasColorToken::Foreground1).into(),
            Self::SubtitleColor
            | Self::FooterColor
            | Self::SelectionIndicatorOffColor
            | Self::AccessoryDetailButtonColor => color(AliasColorToken::Foreground3).into(),
            Self::AccessoryDisclosureIndicatorColor => {
                color(AliasColorToken::ForegroundDisabled1).into()
            }
            Self::MainBrandColor => {
                DynamicColor::uniform(theme.brand_colors().get(BrandColorToken::Primary)).into()
            }

            Self::CustomViewDimension => match custom_view_size {
                CustomViewSize::Zero => 0.0.into(),
                CustomViewSize::Small => GlobalTokens::icon_size(IconSizeToken::Medium).into(),
                CustomViewSize::Medium | CustomViewSize::Default => {
                    GlobalTokens::icon_size(IconSizeToken::XxLarge).into()
                }
            },
            Self::CustomViewTrailingMargin => match custom_view_size {
                CustomViewSize::Zero => spacing(SpacingToken::None).into(),
                CustomViewSize::Small => spacing(SpacingToken::Medium).into(),
                CustomViewSize::Medium | CustomViewSize::Default => {
                    spacing(SpacingToken::Small).into()
                }
            },

            Self::TitleFont => alias.typography(TypographyToken::Body1).into(),
            Self::SubtitleTwoLinesFont | Self::FooterFont => {
                alias.typography(TypographyToken::Caption1).into()
            }
            Self::SubtitleThreeLinesFont => alias.typography(TypographyToken::Body2).into(),

            Self::TitleHeight => 22.0.into(),
            Self::SubtitleTwoLineHeight | Self::FooterHeight => 18.0.into(),
            Self::SubtitleThreeLineHeight => 20.0.into(),
            Self::LabelAccessoryViewMarginLeading
            | Self::LabelAccessoryViewMarginTrailing
            | Self::CustomAccessoryViewMarginLeading => spacing(SpacingToken::XSmall).into(),
            Self::CustomAccessoryViewMinVerticalMargin => 6.0.into(),
            Self::LabelVerticalMarginForOneAndThreeLines | Self::PaddingVertical => 11.0.into(),
            Self::LabelVerticalMarginForTwoLines => spacing(SpacingToken::Small).into(),
            Self::LabelVerticalSpacing => spacing(SpacingToken::None).into(),
            Self::MinHeight => spacing(SpacingToken::XxxLarge).into(),
            Self::MediumHeight => 64.0.into(),
            Self::LargeHeight => 84.0.into(),
            Self::SelectionImageMarginTrailing
            | Self::HorizontalSpacing
            | Self::PaddingLeading
            | Self::PaddingTrailing => spacing(SpacingToken::Medium).into(),
            Self::SelectionImageSize => GlobalTokens::icon_size(IconSizeToken::Medium).into(),
            Self::TextAreaMinWidth => 100.0.into(),
            Self::EnabledAlpha => 1.0.into(),
            Self::DisabledAlpha => 0.35.into(),
        }
    }
}

pub fn table_view_cell_token_set(
    custom_view_size: CustomViewSize,
) -> ControlTokenSet<TableViewCellToken> {
    ControlTokenSet::new(move |key: TableViewCellToken, theme: &Theme| {
        key.default_value(custom_view_size, theme)
    })
}

/// Keys of an actions cell: every cell key plus the action text colors
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ActionsCellToken {
    Cell(TableViewCellToken),
    DestructiveTextColor,
    CommunicationTextColor,
}

impl From<TableViewCellToken> for ActionsCellToken {
    fn from(token: TableViewCellToken) -> Self {
        Self::Cell(token)
    }
}

impl TokenSetKey for ActionsCellToken {
    const KIND: ControlKind = ControlKind::ActionsCell;

    fn all_keys() -> Vec<Self> {
        TableViewCellToken::ALL
            .iter()
            .copied()
            .map(Self::Cell)
            .chain([Self::DestructiveTextColor, Self::CommunicationTextColor])
            .collect()
    }

    fn key_name(self) -> &'static str {
        match self {
            Self::Cell(token) => token.name(),
            Self::DestructiveTextColor => "destructive_text_color",
            Self::CommunicationTextColor => "communication_text_color",
        }
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::Cell(token) => token.value_kind(),
            Self::DestructiveTextColor | Self::CommunicationTextColor => ValueKind::Color,
        }
    }
}

impl ActionsCellToken {
    pub fn default_value(self, custom_view_size: CustomViewSize, theme: &Theme) -> ControlTokenValue {
        match self {
            Self::Cell(token) => token.default_value(custom_view_size, theme),
            Self::DestructiveTextColor => {
                DynamicColor::new(Color::from_hex(0xD92C2C), Color::from_hex(0xE83A3A)).into()
            }
            Self::CommunicationTextColor => {
                DynamicColor::new(Color::from_hex(0x0078D4), Color::from_hex(0x0086F0)).into()
            }
        }
    }
}

pub fn actions_cell_token_set(
    custom_view_size: CustomViewSize,
) -> ControlTokenSet<ActionsCellToken> {
    ControlTokenSet::new(move |key: ActionsCellToken, theme: &Theme| {
        key.default_value(custom_view_size, theme)
    })
}
