//! Theme configuration
//!
//! Themes can be described in TOML:
//!
//! ```toml
//! name = "Contoso"
//! mode = "dark"
//!
//! [brand]
//! primary = "#6264A7"
//!
//! [controls.button]
//! corner_radius = 6.0
//! background_color = { light = "#6264A7", dark = "#7F85F5" }
//! ```
//!
//! Brand steps and control keys are matched against the `name()` of the
//! corresponding token enums. Override values are checked against the kind of
//! value the key resolves to.

use crate::control::{ControlKind, ControlTokenValue, TokenSetKey, ValueKind};
use crate::controls::avatar_group::AvatarGroupToken;
use crate::controls::button::ButtonToken;
use crate::controls::hud::HudToken;
use crate::controls::pill_button::PillButtonToken;
use crate::controls::table_view_cell::{ActionsCellToken, TableViewCellToken};
use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::{AppearanceMode, BrandColorToken, BrandColors, DynamicColor, FontInfo};
use lumen_core::Color;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Name used when the configuration does not set one
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Deserialized theme description
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: Option<String>,
    /// Initial appearance mode
    pub mode: AppearanceMode,
    /// Brand ramp steps (`primary`, `shade10`, ...) as hex colors
    pub brand: BTreeMap<String, String>,
    /// Per-control override tables, keyed by control kind name
    pub controls: BTreeMap<String, BTreeMap<String, OverrideValue>>,
}

/// One override value as written in the configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Number(f64),
    /// Hex color used in every mode
    Color(String),
    Dynamic {
        light: String,
        dark: String,
        #[serde(default)]
        dark_elevated: Option<String>,
    },
    Font {
        size: f64,
        weight: u16,
    },
}

impl OverrideValue {
    /// Convert to a token value of kind `expected`
    pub fn to_token_value(
        &self,
        expected: ValueKind,
        scope: &str,
        token: &str,
    ) -> Result<ControlTokenValue, ThemeError> {
        let value = match (self, expected) {
            (Self::Number(value), ValueKind::Float) => {
                ControlTokenValue::Float(finite(*value, expected, scope, token)?)
            }
            (Self::Color(hex), ValueKind::Color) => parse_color(hex)?.into(),
            (
                Self::Dynamic {
                    light,
                    dark,
                    dark_elevated,
                },
                ValueKind::Color,
            ) => {
                let mut color = DynamicColor::new(parse_color(light)?, parse_color(dark)?);
                if let Some(elevated) = dark_elevated {
                    color.dark_elevated = Some(parse_color(elevated)?);
                }
                color.into()
            }
            (Self::Font { size, weight }, ValueKind::Font) => {
                FontInfo::new(finite(*size, expected, scope, token)?, *weight).into()
            }
            _ => return Err(ThemeError::invalid_value(scope, token, expected)),
        };
        Ok(value)
    }
}

/// Narrow to `f32`, rejecting values that do not stay finite
fn finite(value: f64, expected: ValueKind, scope: &str, token: &str) -> Result<f32, ThemeError> {
    let narrowed = value as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(ThemeError::invalid_value(scope, token, expected))
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA`
pub fn parse_color(value: &str) -> Result<Color, ThemeError> {
    Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
        value: value.to_string(),
    })
}

impl ThemeConfig {
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// The global brand ramp with the configured steps replaced
    pub fn brand_colors(&self) -> Result<BrandColors, ThemeError> {
        let mut brand = BrandColors::default();
        for (step, hex) in &self.brand {
            let token =
                BrandColorToken::from_name(step).ok_or_else(|| ThemeError::UnknownToken {
                    scope: "brand".to_string(),
                    token: step.clone(),
                })?;
            brand = brand.with(token, parse_color(hex)?);
        }
        Ok(brand)
    }

    /// Build a theme from this configuration
    ///
    /// Nothing is subscribed to the new theme yet, so applying the override
    /// tables notifies no one.
    pub fn build(&self) -> Result<Theme, ThemeError> {
        let name = self.name.as_deref().unwrap_or(DEFAULT_THEME_NAME);
        let theme = Theme::with_brand(name, self.brand_colors()?).with_mode(self.mode);

        for (control, table) in &self.controls {
            let kind = ControlKind::from_name(control)
                .ok_or_else(|| ThemeError::UnknownControl(control.clone()))?;
            let applied = match kind {
                ControlKind::Button => apply_overrides::<ButtonToken>(&theme, control, table)?,
                ControlKind::PillButton => {
                    apply_overrides::<PillButtonToken>(&theme, control, table)?
                }
                ControlKind::HeadsUpDisplay => apply_overrides::<HudToken>(&theme, control, table)?,
                ControlKind::TableViewCell => {
                    apply_overrides::<TableViewCellToken>(&theme, control, table)?
                }
                ControlKind::ActionsCell => {
                    apply_overrides::<ActionsCellToken>(&theme, control, table)?
                }
                ControlKind::AvatarGroup => {
                    apply_overrides::<AvatarGroupToken>(&theme, control, table)?
                }
            };
            if applied == 0 {
                tracing::warn!("theme '{}': [controls.{}] has no overrides", name, control);
            }
        }

        tracing::debug!(
            "built theme '{}' ({:?}) with {} control tables",
            name,
            self.mode,
            self.controls.len()
        );
        Ok(theme)
    }
}

fn apply_overrides<K: TokenSetKey>(
    theme: &Theme,
    scope: &str,
    table: &BTreeMap<String, OverrideValue>,
) -> Result<usize, ThemeError> {
    for (name, value) in table {
        let key = K::from_key_name(name).ok_or_else(|| ThemeError::UnknownToken {
            scope: scope.to_string(),
            token: name.clone(),
        })?;
        let value = value.to_token_value(key.value_kind(), scope, name)?;
        theme.set_control_override(key, value);
    }
    Ok(table.len())
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Theme, ThemeError> {
        config.build()
    }

    /// Parse and build in one step
    pub fn from_toml(source: &str) -> Result<Theme, ThemeError> {
        ThemeConfig::from_toml(source)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default_theme() {
        let theme = Theme::from_toml("").unwrap();
        assert_eq!(theme.name(), DEFAULT_THEME_NAME);
        assert_eq!(theme.mode(), AppearanceMode::Light);
        assert_eq!(*theme.brand_colors(), BrandColors::default());
    }

    #[test]
    fn test_value_shapes() {
        let number = OverrideValue::Number(4.0);
        assert_eq!(
            number.to_token_value(ValueKind::Float, "button", "corner_radius").unwrap(),
            ControlTokenValue::Float(4.0)
        );
        assert!(matches!(
            number.to_token_value(ValueKind::Color, "button", "border_color"),
            Err(ThemeError::InvalidValue { expected: "color", .. })
        ));

        let font = OverrideValue::Font {
            size: 13.0,
            weight: 600,
        };
        assert_eq!(
            font.to_token_value(ValueKind::Font, "button", "title_font").unwrap(),
            ControlTokenValue::Font(FontInfo::new(13.0, 600))
        );
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        let huge = OverrideValue::Number(1e300);
        assert!(matches!(
            huge.to_token_value(ValueKind::Float, "button", "corner_radius"),
            Err(ThemeError::InvalidValue { expected: "float", .. })
        ));

        let font = OverrideValue::Font {
            size: f64::NAN,
            weight: 400,
        };
        assert!(font
            .to_token_value(ValueKind::Font, "button", "title_font")
            .is_err());

        let err = Theme::from_toml("[controls.hud]\ncorner_radius = inf").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidValue { ref token, .. } if token == "corner_radius"));
    }

    #[test]
    fn test_bad_color_is_reported() {
        let err = parse_color("#12").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { value } if value == "#12"));
    }
}
