//! Appearance modes and mode-dependent values

use lumen_core::Color;
use serde::Deserialize;

/// Rendering variant selecting which [`DynamicValue`] variant is used
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
    /// Dark content presented above the base level (sheets, popovers)
    DarkElevated,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [Self::Light, Self::Dark, Self::DarkElevated];

    pub fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }

    /// Flip between light and dark. Dark-elevated toggles to light.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark | Self::DarkElevated => Self::Light,
        }
    }
}

/// A value with one variant per appearance mode
///
/// `dark_elevated` falls back to `dark` when absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicValue<T> {
    pub light: T,
    pub dark: T,
    pub dark_elevated: Option<T>,
}

/// The common case: a color per appearance mode
pub type DynamicColor = DynamicValue<Color>;

impl<T: Clone> DynamicValue<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self {
            light,
            dark,
            dark_elevated: None,
        }
    }

    pub fn elevated(light: T, dark: T, dark_elevated: T) -> Self {
        Self {
            light,
            dark,
            dark_elevated: Some(dark_elevated),
        }
    }

    /// Same value in every mode
    pub fn uniform(value: T) -> Self {
        Self::new(value.clone(), value)
    }

    /// Select the variant for `mode`
    pub fn resolve(&self, mode: AppearanceMode) -> T {
        match mode {
            AppearanceMode::Light => self.light.clone(),
            AppearanceMode::Dark => self.dark.clone(),
            AppearanceMode::DarkElevated => self
                .dark_elevated
                .clone()
                .unwrap_or_else(|| self.dark.clone()),
        }
    }

    pub fn map<U: Clone>(&self, f: impl Fn(&T) -> U) -> DynamicValue<U> {
        DynamicValue {
            light: f(&self.light),
            dark: f(&self.dark),
            dark_elevated: self.dark_elevated.as_ref().map(f),
        }
    }
}

impl DynamicValue<Color> {
    /// Apply `alpha` to every variant
    pub fn with_alpha(&self, alpha: f32) -> Self {
        self.map(|c| c.with_alpha(alpha))
    }
}

impl From<Color> for DynamicColor {
    fn from(color: Color) -> Self {
        Self::uniform(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_elevated_falls_back_to_dark() {
        let value = DynamicValue::new(1, 2);
        assert_eq!(value.resolve(AppearanceMode::Light), 1);
        assert_eq!(value.resolve(AppearanceMode::Dark), 2);
        assert_eq!(value.resolve(AppearanceMode::DarkElevated), 2);

        let elevated = DynamicValue::elevated(1, 2, 3);
        assert_eq!(elevated.resolve(AppearanceMode::DarkElevated), 3);
    }

    #[test]
    fn test_uniform_is_mode_independent() {
        let value = DynamicColor::uniform(Color::WHITE);
        for mode in AppearanceMode::ALL {
            assert_eq!(value.resolve(mode), Color::WHITE);
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(AppearanceMode::Light.toggle(), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::Dark.toggle(), AppearanceMode::Light);
        assert_eq!(AppearanceMode::DarkElevated.toggle(), AppearanceMode::Light);
        assert!(AppearanceMode::DarkElevated.is_dark());
    }

    #[test]
    fn test_with_alpha_keeps_elevated_variant() {
        let value = DynamicColor::elevated(Color::WHITE, Color::BLACK, Color::BLACK)
            .with_alpha(0.5);
        assert_eq!(value.light.a, 0.5);
        assert_eq!(value.dark_elevated.map(|c| c.a), Some(0.5));
    }
}
