//! Lumen theme engine
//!
//! Layered design-token resolution: global constants, semantic alias tokens
//! and per-component token sets, resolved against a theme's appearance mode
//! and override tables.
//!
//! # Overview
//!
//! - [`GlobalTokens`]: immutable base tables (spacing, sizes, color ramps)
//! - [`DynamicValue`]: a value per [`AppearanceMode`]
//! - [`AliasTokens`]: semantic colors, typography and shadows of one theme
//! - [`ControlTokenSet`]: a component's tokens with instance and theme overrides
//! - [`Theme`]: mode, alias tokens, override tables and change notification
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_theme::controls::button::{button_token_set, ButtonStyle, ButtonToken};
//! use lumen_theme::{AliasColorToken, AppearanceMode, Theme};
//!
//! let theme = Theme::new("Default");
//! let button = button_token_set(ButtonStyle::PrimaryFilled);
//! button.bind(&theme);
//!
//! let light = button.color(ButtonToken::BackgroundColor);
//! assert_eq!(light, theme.resolve_alias(AliasColorToken::BrandBackground1));
//!
//! // Bound sets follow the theme without rebinding
//! theme.set_mode(AppearanceMode::Dark);
//! assert_ne!(button.color(ButtonToken::BackgroundColor), light);
//! ```
//!
//! # Overrides
//!
//! A lookup checks the set's own overrides, then the theme's table for the
//! component kind, then the component default:
//!
//! ```rust
//! use lumen_theme::controls::hud::{hud_token_set, HudToken};
//! use lumen_theme::Theme;
//!
//! let theme = Theme::new("Default");
//! let hud = hud_token_set();
//! hud.bind(&theme);
//!
//! theme.set_control_override(HudToken::CornerRadius, 12.0);
//! assert_eq!(hud.float(HudToken::CornerRadius), 12.0);
//!
//! hud.set_override(HudToken::CornerRadius, 2.0);
//! assert_eq!(hud.float(HudToken::CornerRadius), 2.0);
//! ```
//!
//! # Threading
//!
//! Themes and token sets are single-threaded (`!Send`). Notification is
//! synchronous and happens on the thread that mutated the theme.

#[macro_use]
mod macros;

pub mod config;
pub mod control;
pub mod controls;
pub mod error;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::{OverrideValue, ThemeConfig};
pub use control::{ControlKind, ControlTokenSet, ControlTokenValue, TokenSetKey, ValueKind};
pub use error::ThemeError;
pub use theme::{Subscription, Theme, WeakTheme};
pub use tokens::{
    AliasColorCategory, AliasColorToken, AliasSharedColorToken, AliasTokens, AppearanceMode,
    BrandColors, DynamicColor, DynamicValue, FontInfo, GlobalTokens, ShadowInfo, ShadowToken,
    TypographyToken,
};

pub use lumen_core::{Color, SubscriptionId};
