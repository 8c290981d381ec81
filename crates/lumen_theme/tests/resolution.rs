use lumen_theme::controls::button::{button_token_set, ButtonStyle, ButtonToken};
use lumen_theme::controls::hud::{hud_token_set, HudToken};
use lumen_theme::{
    AliasColorCategory, AliasColorToken, AliasTokens, AppearanceMode, Color, ControlTokenValue,
    DynamicColor, Theme,
};
use pretty_assertions::assert_eq;

#[test]
fn override_then_get_returns_override_regardless_of_theme_state() {
    let theme = Theme::new("Contoso");
    let hud = hud_token_set();
    let value = DynamicColor::uniform(Color::from_hex(0x112233));

    hud.set_override(HudToken::LabelColor, value);
    assert_eq!(hud.get(HudToken::LabelColor), ControlTokenValue::Color(value));

    hud.bind(&theme);
    theme.set_control_override(HudToken::LabelColor, Color::WHITE);
    theme.set_mode(AppearanceMode::Dark);
    assert_eq!(hud.get(HudToken::LabelColor), ControlTokenValue::Color(value));
}

#[test]
fn clear_override_matches_fresh_set() {
    let theme = Theme::new("Contoso");
    let used = button_token_set(ButtonStyle::PrimaryOutline);
    used.bind(&theme);

    for key in ButtonToken::all() {
        used.set_override(*key, 99.0);
    }
    used.clear_overrides();

    let fresh = button_token_set(ButtonStyle::PrimaryOutline);
    fresh.bind(&theme);
    for key in ButtonToken::all() {
        assert_eq!(used.get(*key), fresh.get(*key), "{key:?}");
    }
}

#[test]
fn alias_resolution_is_pure() {
    let tokens = AliasTokens::default();
    for token in AliasColorToken::all() {
        for mode in AppearanceMode::ALL {
            assert_eq!(tokens.resolve(*token, mode), tokens.resolve(*token, mode));
        }
    }
}

#[test]
fn light_dark_light_round_trip_restores_aliases() {
    let theme = Theme::new("Contoso");
    let before = theme.alias_color_map();

    theme.set_mode(AppearanceMode::Dark);
    assert_ne!(theme.alias_color_map(), before);

    theme.set_mode(AppearanceMode::Light);
    assert_eq!(theme.alias_color_map(), before);
}

#[test]
fn pairing_table_is_total_and_legible() {
    let tokens = AliasTokens::default();
    for category in AliasColorCategory::all() {
        for background in category.tokens() {
            let foreground = background.legible_foreground();
            assert!(AliasColorToken::from_name(foreground.name()).is_some());

            if foreground != AliasColorToken::Foreground1 {
                continue;
            }
            // Pairings onto the primary text color must actually be readable
            for mode in [AppearanceMode::Light, AppearanceMode::Dark] {
                let ratio = tokens
                    .resolve(*background, mode)
                    .contrast_ratio(&tokens.resolve(foreground, mode));
                assert!(ratio >= 3.0, "{background:?} in {mode:?}: {ratio}");
            }
        }
    }
}

#[test]
fn button_follows_mode_switch_without_rebinding() {
    let theme = Theme::new("Contoso");
    let button = button_token_set(ButtonStyle::PrimaryFilled);
    button.bind(&theme);

    assert_eq!(
        button.color(ButtonToken::BackgroundColor),
        theme
            .alias_tokens()
            .resolve(AliasColorToken::BrandBackground1, AppearanceMode::Light)
    );

    theme.set_mode(AppearanceMode::Dark);
    assert_eq!(
        button.color(ButtonToken::BackgroundColor),
        theme
            .alias_tokens()
            .resolve(AliasColorToken::BrandBackground1, AppearanceMode::Dark)
    );
}

#[test]
fn instance_overrides_are_isolated() {
    let theme = Theme::new("Contoso");
    let first = button_token_set(ButtonStyle::SecondaryOutline);
    let second = button_token_set(ButtonStyle::SecondaryOutline);
    first.bind(&theme);
    second.bind(&theme);

    first.set_override(ButtonToken::CornerRadius, 20.0);
    assert_eq!(first.float(ButtonToken::CornerRadius), 20.0);
    assert_eq!(second.float(ButtonToken::CornerRadius), 8.0);
    assert!(!second.has_override(ButtonToken::CornerRadius));
}

#[test]
fn theme_override_reaches_every_bound_set() {
    let theme = Theme::new("Contoso");
    let first = button_token_set(ButtonStyle::PrimaryFilled);
    let second = button_token_set(ButtonStyle::DangerFilled);
    first.bind(&theme);
    second.bind(&theme);

    theme.set_control_override(ButtonToken::CornerRadius, 2.0);
    assert_eq!(first.float(ButtonToken::CornerRadius), 2.0);
    assert_eq!(second.float(ButtonToken::CornerRadius), 2.0);

    theme.clear_control_overrides();
    assert_eq!(first.float(ButtonToken::CornerRadius), 8.0);
}
