//! Lumen Core
//!
//! Leaf primitives shared by the Lumen theming crates:
//!
//! - **Color**: the opaque RGBA value every color token resolves to
//! - **Observer list**: weakly-held, typed publish/subscribe used as the
//!   change-notification channel of a theme
//!
//! # Example
//!
//! ```rust
//! use lumen_core::observer::{notify, ObserverList};
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//!
//! let list = RefCell::new(ObserverList::new());
//! let renders = Rc::new(Cell::new(0));
//!
//! list.borrow_mut().insert(&renders, |count: &Cell<u32>| count.set(count.get() + 1));
//! notify(&list);
//! assert_eq!(renders.get(), 1);
//!
//! // Dropping the owner silently ends the registration.
//! drop(renders);
//! assert_eq!(notify(&list).delivered, 0);
//! ```

pub mod color;
pub mod observer;

pub use color::Color;
pub use observer::{notify, Delivery, ObserverList, SubscriptionId};
