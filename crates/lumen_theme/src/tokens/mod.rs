//! Design tokens
//!
//! - [`GlobalTokens`]: constant base tables (spacing, sizes, ramps)
//! - [`DynamicValue`]: per-appearance-mode values
//! - [`AliasTokens`]: semantic tokens derived from the globals
//! - Typography and shadow tokens

mod alias;
mod dynamic;
mod global;
mod shadow;
mod typography;

pub use alias::*;
pub use dynamic::*;
pub use global::*;
pub use shadow::*;
pub use typography::*;
