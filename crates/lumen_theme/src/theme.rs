//! Theme state and change notification
//!
//! A [`Theme`] owns one set of alias tokens, the current appearance mode and
//! the per-component override tables. Every mutating call notifies
//! subscribers exactly once, synchronously, on the calling thread, after the
//! mutation is complete. The generation only moves when state actually
//! changed, so a redundant call notifies without invalidating caches.
//!
//! Subscribers are held weakly. A subscriber that has been dropped is never
//! invoked and is pruned on the next notification.

use crate::control::{ControlTokenValue, TokenSetKey};
use crate::tokens::{AliasColorToken, AliasTokens, AppearanceMode, BrandColors};
use indexmap::IndexMap;
use lumen_core::{Color, ObserverList, SubscriptionId};
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Override table of one key type, `FxHashMap<K, ControlTokenValue>` erased
type OverrideTable = Box<dyn Any>;

struct ThemeState {
    name: String,
    mode: Cell<AppearanceMode>,
    /// Bumped on every mutation; stamps cached resolutions
    generation: Cell<u64>,
    alias_tokens: AliasTokens,
    control_overrides: RefCell<FxHashMap<TypeId, OverrideTable>>,
    observers: RefCell<ObserverList>,
}

/// Shared handle to a theme
///
/// Cloning is cheap and yields another handle to the same theme.
#[derive(Clone)]
pub struct Theme {
    state: Rc<ThemeState>,
}

/// Non-owning reference to a [`Theme`]
#[derive(Clone, Default)]
pub struct WeakTheme {
    state: Weak<ThemeState>,
}

impl WeakTheme {
    pub fn upgrade(&self) -> Option<Theme> {
        self.state.upgrade().map(|state| Theme { state })
    }
}

impl fmt::Debug for WeakTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakTheme")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

impl Theme {
    /// Theme using the global brand ramp
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_brand(name, BrandColors::default())
    }

    pub fn with_brand(name: impl Into<String>, brand: BrandColors) -> Self {
        let name = name.into();
        tracing::debug!("creating theme '{}'", name);
        Self {
            state: Rc::new(ThemeState {
                name,
                mode: Cell::new(AppearanceMode::default()),
                generation: Cell::new(0),
                alias_tokens: AliasTokens::new(&brand),
                control_overrides: RefCell::new(FxHashMap::default()),
                observers: RefCell::new(ObserverList::new()),
            }),
        }
    }

    /// Set the initial mode while building. Does not notify.
    pub fn with_mode(self, mode: AppearanceMode) -> Self {
        self.state.mode.set(mode);
        self
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn mode(&self) -> AppearanceMode {
        self.state.mode.get()
    }

    /// Switch appearance mode and notify subscribers
    ///
    /// Subscribers are notified even if `mode` is already current.
    pub fn set_mode(&self, mode: AppearanceMode) {
        let old = self.state.mode.get();
        if old != mode {
            tracing::debug!("theme '{}': mode {:?} -> {:?}", self.name(), old, mode);
            self.state.mode.set(mode);
        }
        self.changed(old != mode);
    }

    pub fn toggle_mode(&self) {
        self.set_mode(self.mode().toggle());
    }

    pub fn generation(&self) -> u64 {
        self.state.generation.get()
    }

    pub fn alias_tokens(&self) -> &AliasTokens {
        &self.state.alias_tokens
    }

    pub fn brand_colors(&self) -> &BrandColors {
        self.state.alias_tokens.brand()
    }

    /// Resolve an alias color for the current mode
    pub fn resolve_alias(&self, token: AliasColorToken) -> Color {
        self.state.alias_tokens.resolve(token, self.mode())
    }

    // ========== Control overrides ==========

    /// Override `key` for every token set keyed by `K` bound to this theme
    pub fn set_control_override<K: TokenSetKey>(
        &self,
        key: K,
        value: impl Into<ControlTokenValue>,
    ) {
        let value = value.into();
        if let Some(table) = self
            .state
            .control_overrides
            .borrow_mut()
            .entry(TypeId::of::<K>())
            .or_insert_with(|| -> OverrideTable {
                Box::new(FxHashMap::<K, ControlTokenValue>::default())
            })
            .downcast_mut::<FxHashMap<K, ControlTokenValue>>()
        {
            table.insert(key, value);
        }
        tracing::debug!(
            "theme '{}': override {}.{}",
            self.name(),
            K::KIND.name(),
            key.key_name()
        );
        self.changed(true);
    }

    pub fn clear_control_override<K: TokenSetKey>(&self, key: K) {
        let removed = self
            .state
            .control_overrides
            .borrow_mut()
            .get_mut(&TypeId::of::<K>())
            .and_then(|table| table.downcast_mut::<FxHashMap<K, ControlTokenValue>>())
            .and_then(|table| table.remove(&key))
            .is_some();
        if removed {
            tracing::debug!(
                "theme '{}': cleared override {}.{}",
                self.name(),
                K::KIND.name(),
                key.key_name()
            );
        }
        self.changed(removed);
    }

    /// Drop every control override of every kind
    pub fn clear_control_overrides(&self) {
        let had_overrides = {
            let mut tables = self.state.control_overrides.borrow_mut();
            let had = !tables.is_empty();
            tables.clear();
            had
        };
        if had_overrides {
            tracing::debug!("theme '{}': cleared all control overrides", self.name());
        }
        self.changed(had_overrides);
    }

    pub fn control_override<K: TokenSetKey>(&self, key: K) -> Option<ControlTokenValue> {
        self.state
            .control_overrides
            .borrow()
            .get(&TypeId::of::<K>())
            .and_then(|table| table.downcast_ref::<FxHashMap<K, ControlTokenValue>>())
            .and_then(|table| table.get(&key).copied())
    }

    // ========== Subscriptions ==========

    /// Subscribe for as long as the returned handle is alive
    pub fn subscribe(&self, callback: impl Fn(&Theme) + 'static) -> Subscription {
        let token = Rc::new(());
        let theme = self.downgrade();
        let id = self
            .state
            .observers
            .borrow_mut()
            .insert(&token, move |_: &()| {
                if let Some(theme) = theme.upgrade() {
                    callback(&theme);
                }
            });
        Subscription {
            id,
            theme: self.downgrade(),
            _token: token,
        }
    }

    /// Subscribe on behalf of `owner`; the registration lapses when `owner` is dropped
    pub fn subscribe_weak<O, F>(&self, owner: &Rc<O>, callback: F) -> SubscriptionId
    where
        O: Any,
        F: Fn(&O) + 'static,
    {
        self.state.observers.borrow_mut().insert(owner, callback)
    }

    /// Returns `false` if `id` was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.observers.borrow_mut().remove(id)
    }

    /// Number of subscribers whose owner is still alive
    pub fn subscriber_count(&self) -> usize {
        self.state.observers.borrow().live_len()
    }

    /// Notify subscribers, bumping the generation first if state `mutated`
    fn changed(&self, mutated: bool) {
        if mutated {
            self.state.generation.set(self.state.generation.get() + 1);
        }
        let delivery = lumen_core::notify(&self.state.observers);
        tracing::trace!(
            "theme '{}' generation {}: notified {}, {} panicked, {} pruned",
            self.name(),
            self.generation(),
            delivery.delivered,
            delivery.panicked,
            delivery.pruned
        );
    }

    // ========== Identity ==========

    pub fn downgrade(&self) -> WeakTheme {
        WeakTheme {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Whether both handles refer to the same theme
    pub fn ptr_eq(&self, other: &Theme) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Every alias color as `name -> #hex`, resolved for the current mode
    pub fn alias_color_map(&self) -> IndexMap<&'static str, String> {
        let mode = self.mode();
        AliasColorToken::all()
            .iter()
            .map(|token| {
                (
                    token.name(),
                    self.state.alias_tokens.resolve(*token, mode).to_hex_string(),
                )
            })
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Default")
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.state.name)
            .field("mode", &self.mode())
            .field("generation", &self.generation())
            .finish()
    }
}

/// Registration created by [`Theme::subscribe`]
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes it"]
pub struct Subscription {
    id: SubscriptionId,
    theme: WeakTheme,
    _token: Rc<()>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(theme) = self.theme.upgrade() {
            theme.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlKind, ValueKind};

    #[test]
    fn test_set_mode_bumps_generation_once() {
        let theme = Theme::new("Test");
        assert_eq!(theme.generation(), 0);

        theme.set_mode(AppearanceMode::Dark);
        assert_eq!(theme.generation(), 1);

        theme.set_mode(AppearanceMode::Dark);
        assert_eq!(theme.generation(), 1);
    }

    #[test]
    fn test_redundant_mutations_still_notify() {
        let theme = Theme::new("Test");
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let _subscription = theme.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        theme.set_mode(AppearanceMode::Light);
        theme.clear_control_override(SliderToken::Thumb);
        theme.clear_control_overrides();

        assert_eq!(hits.get(), 3);
        assert_eq!(theme.generation(), 0);
    }

    token_enum! {
        enum SliderToken {
            Thumb => "thumb",
        }
    }

    impl TokenSetKey for SliderToken {
        // Shares a kind with the built-in button keys
        const KIND: ControlKind = ControlKind::Button;

        fn all_keys() -> Vec<Self> {
            Self::ALL.to_vec()
        }

        fn key_name(self) -> &'static str {
            self.name()
        }

        fn value_kind(self) -> ValueKind {
            ValueKind::Float
        }
    }

    #[test]
    fn test_key_types_sharing_a_kind_keep_separate_tables() {
        use crate::controls::button::ButtonToken;

        let theme = Theme::new("Test");
        theme.set_control_override(ButtonToken::CornerRadius, 4.0);
        theme.set_control_override(SliderToken::Thumb, 3.0);

        assert_eq!(
            theme.control_override(ButtonToken::CornerRadius),
            Some(ControlTokenValue::Float(4.0))
        );
        assert_eq!(
            theme.control_override(SliderToken::Thumb),
            Some(ControlTokenValue::Float(3.0))
        );

        theme.clear_control_override(SliderToken::Thumb);
        assert_eq!(theme.control_override(SliderToken::Thumb), None);
        assert_eq!(
            theme.control_override(ButtonToken::CornerRadius),
            Some(ControlTokenValue::Float(4.0))
        );
    }

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let theme = Theme::new("Test");
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let subscription = theme.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));
        assert_eq!(theme.subscriber_count(), 1);

        theme.toggle_mode();
        drop(subscription);
        theme.toggle_mode();

        assert_eq!(hits.get(), 1);
        assert_eq!(theme.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_sees_completed_mutation() {
        let theme = Theme::new("Test");
        let seen = Rc::new(Cell::new(None));
        let seen_clone = seen.clone();
        let _subscription = theme.subscribe(move |theme| seen_clone.set(Some(theme.mode())));

        theme.set_mode(AppearanceMode::DarkElevated);
        assert_eq!(seen.get(), Some(AppearanceMode::DarkElevated));
    }

    #[test]
    fn test_weak_theme_does_not_keep_theme_alive() {
        let theme = Theme::new("Test");
        let weak = theme.downgrade();
        assert!(weak.upgrade().is_some());
        drop(theme);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_alias_color_map_follows_mode() {
        let theme = Theme::new("Test");
        assert_eq!(theme.alias_color_map()["foreground1"], "#242424");
        assert_eq!(theme.alias_color_map().len(), AliasColorToken::ALL.len());

        theme.set_mode(AppearanceMode::Dark);
        assert_eq!(theme.alias_color_map()["foreground1"], "#ffffff");
    }

    #[test]
    fn test_with_mode_does_not_notify() {
        let theme = Theme::new("Test").with_mode(AppearanceMode::Dark);
        assert_eq!(theme.mode(), AppearanceMode::Dark);
        assert_eq!(theme.generation(), 0);
    }
}
