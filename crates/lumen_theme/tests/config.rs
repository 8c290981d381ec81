use lumen_theme::controls::button::{button_token_set, ButtonStyle, ButtonToken};
use lumen_theme::controls::hud::HudToken;
use lumen_theme::controls::table_view_cell::{ActionsCellToken, TableViewCellToken};
use lumen_theme::tokens::BrandColorToken;
use lumen_theme::{
    AliasColorToken, AppearanceMode, Color, ControlTokenValue, DynamicColor, Theme, ThemeConfig,
    ThemeError,
};
use pretty_assertions::assert_eq;

const CONTOSO: &str = r##"
name = "Contoso"
mode = "dark"

[brand]
primary = "#6264A7"
shade10 = "#585A96"

[controls.button]
corner_radius = 6
background_color = { light = "#6264A7", dark = "#7F85F5" }
title_font = { size = 13.0, weight = 600 }

[controls.hud]
label_color = "#FFFFFF"

[controls.actions_cell]
destructive_text_color = "#C50F1F"
title_height = 24.0
"##;

#[test]
fn full_config_builds_theme() {
    let theme = Theme::from_toml(CONTOSO).unwrap();

    assert_eq!(theme.name(), "Contoso");
    assert_eq!(theme.mode(), AppearanceMode::Dark);
    assert_eq!(
        theme.brand_colors().get(BrandColorToken::Primary),
        Color::from_hex(0x6264A7)
    );
    assert_eq!(
        theme.alias_tokens().color(AliasColorToken::BrandForeground1).light,
        Color::from_hex(0x6264A7)
    );

    assert_eq!(
        theme.control_override(ButtonToken::CornerRadius),
        Some(ControlTokenValue::Float(6.0))
    );
    assert_eq!(
        theme.control_override(HudToken::LabelColor),
        Some(ControlTokenValue::Color(DynamicColor::uniform(Color::WHITE)))
    );
    assert_eq!(
        theme.control_override(ActionsCellToken::Cell(TableViewCellToken::TitleHeight)),
        Some(ControlTokenValue::Float(24.0))
    );
    // Actions cell overrides do not leak into plain cells
    assert_eq!(theme.control_override(TableViewCellToken::TitleHeight), None);
}

#[test]
fn configured_overrides_reach_bound_sets() {
    let theme = Theme::from_toml(CONTOSO).unwrap();
    let button = button_token_set(ButtonStyle::PrimaryFilled);
    button.bind(&theme);

    assert_eq!(button.color(ButtonToken::BackgroundColor), Color::from_hex(0x7F85F5));
    assert_eq!(button.font(ButtonToken::TitleFont).weight, 600);

    theme.set_mode(AppearanceMode::Light);
    assert_eq!(button.color(ButtonToken::BackgroundColor), Color::from_hex(0x6264A7));
}

#[test]
fn config_round_trips_through_struct() {
    let config = ThemeConfig::from_toml(CONTOSO).unwrap();
    assert_eq!(config.controls.len(), 3);

    let theme = Theme::from_config(&config).unwrap();
    assert_eq!(theme.name(), "Contoso");
}

#[test]
fn unknown_control_is_rejected() {
    let err = Theme::from_toml("[controls.slider]\nthumb_color = \"#000000\"").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownControl(ref name) if name == "slider"));
}

#[test]
fn unknown_token_is_rejected() {
    let err = Theme::from_toml("[controls.button]\nglow = 1.0").unwrap_err();
    assert!(matches!(
        err,
        ThemeError::UnknownToken { ref scope, ref token } if scope == "button" && token == "glow"
    ));

    let err = Theme::from_toml("[brand]\nshade99 = \"#000000\"").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownToken { ref scope, .. } if scope == "brand"));
}

#[test]
fn wrong_value_shape_is_rejected() {
    let err = Theme::from_toml("[controls.button]\ncorner_radius = \"#FFFFFF\"").unwrap_err();
    assert!(matches!(
        err,
        ThemeError::InvalidValue { expected: "float", .. }
    ));
}

#[test]
fn malformed_color_is_rejected() {
    let err = Theme::from_toml("[controls.hud]\nlabel_color = \"white\"").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidColor { ref value } if value == "white"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Theme::from_toml("mode = ").unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse theme configuration"));
}
