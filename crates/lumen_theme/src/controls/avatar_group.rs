//! Avatar group tokens

use crate::control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
use crate::theme::Theme;
use crate::tokens::{AliasColorToken, GlobalTokens, SpacingToken, StrokeWidthToken};

/// Layout of the avatars in a group
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum AvatarGroupStyle {
    /// Overlapping avatars
    #[default]
    Stack,
    /// Avatars side by side with a gap
    Pile,
}

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum AvatarSize {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 6] = [
        Self::XSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::XxLarge,
    ];

    pub fn diameter(self) -> f32 {
        match self {
            Self::XSmall => 16.0,
            Self::Small => 24.0,
            Self::Medium => 32.0,
            Self::Large => 40.0,
            Self::XLarge => 52.0,
            Self::XxLarge => 72.0,
        }
    }
}

token_enum! {
    pub enum AvatarGroupToken {
        Interspace => "interspace",
        AvatarSize => "avatar_size",
        RingThickness => "ring_thickness",
        RingInnerGap => "ring_inner_gap",
        RingOuterGap => "ring_outer_gap",
        RingColor => "ring_color",
        RingGapColor => "ring_gap_color",
        OverflowBackgroundColor => "overflow_background_color",
        OverflowForegroundColor => "overflow_foreground_color",
    }
}

impl TokenSetKey for AvatarGroupToken {
    const KIND: ControlKind = ControlKind::AvatarGroup;

    fn all_keys() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    fn key_name(self) -> &'static str {
        self.name()
    }

    fn value_kind(self) -> ValueKind {
        match self {
            Self::RingColor
            | Self::RingGapColor
            | Self::OverflowBackgroundColor
            | Self::OverflowForegroundColor => ValueKind::Color,
            _ => ValueKind::Float,
        }
    }
}

impl AvatarGroupToken {
    pub fn default_value(
        self,
        style: AvatarGroupStyle,
        size: AvatarSize,
        theme: &Theme,
    ) -> ControlTokenValue {
        let alias = theme.alias_tokens();
        let stroke = GlobalTokens::stroke_width;
        let large = matches!(size, AvatarSize::XLarge | AvatarSize::XxLarge);

        match self {
            // Stacked avatars overlap, so their interspace is negative
            Self::Interspace => match (style, size) {
                (AvatarGroupStyle::Stack, AvatarSize::XSmall | AvatarSize::Small) => (-2.0).into(),
                (AvatarGroupStyle::Stack, AvatarSize::Medium) => (-4.0).into(),
                (AvatarGroupStyle::Stack, AvatarSize::Large) => (-6.0).into(),
                (AvatarGroupStyle::Stack, AvatarSize::XLarge) => (-8.0).into(),
                (AvatarGroupStyle::Stack, AvatarSize::XxLarge) => (-12.0).into(),
                (AvatarGroupStyle::Pile, AvatarSize::XSmall | AvatarSize::Small) => {
                    GlobalTokens::spacing(SpacingToken::XxSmall).into()
                }
                (AvatarGroupStyle::Pile, _) => GlobalTokens::spacing(SpacingToken::XSmall).into(),
            },
            Self::AvatarSize => size.diameter().into(),
            Self::RingThickness => {
                if large {
                    stroke(StrokeWidthToken::Width30).into()
                } else {
                    stroke(StrokeWidthToken::Width20).into()
                }
            }
            Self::RingInnerGap => stroke(StrokeWidthToken::Width20).into(),
            Self::RingOuterGap => {
                if large {
                    stroke(StrokeWidthToken::Width40).into()
                } else {
                    stroke(StrokeWidthToken::Width20).into()
                }
            }
            Self::RingColor => alias.color(AliasColorToken::BrandStroke1).into(),
            Self::RingGapColor => alias.color(AliasColorToken::Background1).into(),
            Self::OverflowBackgroundColor => alias.color(AliasColorToken::Background5).into(),
            Self::OverflowForegroundColor => alias.color(AliasColorToken::Foreground2).into(),
        }
    }
}

pub fn avatar_group_token_set(
    style: AvatarGroupStyle,
    size: AvatarSize,
) -> ControlTokenSet<AvatarGroupToken> {
    ControlTokenSet::new(move |key: AvatarGroupToken, theme: &Theme| {
        key.default_value(style, size, theme)
    })
}

/// Horizontal step between the leading edges of two neighbouring avatars
pub fn avatar_step(tokens: &ControlTokenSet<AvatarGroupToken>) -> f32 {
    tokens.float(AvatarGroupToken::AvatarSize) + tokens.float(AvatarGroupToken::Interspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds_match_defaults() {
        let theme = Theme::default();
        for style in [AvatarGroupStyle::Stack, AvatarGroupStyle::Pile] {
            for size in AvatarSize::ALL {
                for key in AvatarGroupToken::all() {
                    assert_eq!(
                        key.default_value(style, size, &theme).kind(),
                        key.value_kind()
                    );
                }
            }
        }
    }

    #[test]
    fn test_stack_overlaps_and_pile_spreads() {
        let theme = Theme::default();
        let stack = avatar_group_token_set(AvatarGroupStyle::Stack, AvatarSize::Medium);
        let pile = avatar_group_token_set(AvatarGroupStyle::Pile, AvatarSize::Medium);
        stack.bind(&theme);
        pile.bind(&theme);

        assert!(stack.float(AvatarGroupToken::Interspace) < 0.0);
        assert!(pile.float(AvatarGroupToken::Interspace) > 0.0);
        assert!(avatar_step(&stack) < avatar_step(&pile));
    }
}
