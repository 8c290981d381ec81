//! Built-in component token sets
//!
//! Each module declares a component's key enumeration, its default values
//! and a constructor returning an unbound [`ControlTokenSet`](crate::ControlTokenSet).

pub mod avatar_group;
pub mod button;
pub mod hud;
pub mod pill_button;
pub mod table_view_cell;
