//! Per-component token sets
//!
//! A [`ControlTokenSet<K>`] maps every key of a component's token enumeration
//! to a [`ControlTokenValue`]. A lookup resolves through three tiers:
//!
//! 1. an override set on this instance,
//! 2. the bound theme's override table for `K`,
//! 3. the component's default closure, which may read the theme's alias tokens.
//!
//! A bound set subscribes weakly to its theme. When the theme changes, the
//! set's cached resolutions go stale (they are stamped with the theme
//! generation) and the consumer's update callback fires. The set never keeps
//! the theme alive.

use crate::theme::{Theme, WeakTheme};
use crate::tokens::{AppearanceMode, DynamicColor, FontInfo, ShadowInfo};
use lumen_core::{Color, SubscriptionId};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::rc::Rc;

token_enum! {
    /// Component kinds that own a token set
    pub enum ControlKind {
        Button => "button",
        PillButton => "pill_button",
        HeadsUpDisplay => "hud",
        TableViewCell => "table_view_cell",
        ActionsCell => "actions_cell",
        AvatarGroup => "avatar_group",
    }
}

token_enum! {
    /// Shape of a [`ControlTokenValue`]
    pub enum ValueKind {
        Color => "color",
        Float => "float",
        Font => "font",
        Shadow => "shadow",
    }
}

/// Value of a control token
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlTokenValue {
    Color(DynamicColor),
    Float(f32),
    Font(FontInfo),
    Shadow(ShadowInfo),
}

impl ControlTokenValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Color(_) => ValueKind::Color,
            Self::Float(_) => ValueKind::Float,
            Self::Font(_) => ValueKind::Font,
            Self::Shadow(_) => ValueKind::Shadow,
        }
    }

    /// # Panics
    ///
    /// If the value is not a color.
    pub fn dynamic_color(&self) -> DynamicColor {
        match self {
            Self::Color(color) => *color,
            other => kind_mismatch(ValueKind::Color, other),
        }
    }

    /// # Panics
    ///
    /// If the value is not a float.
    pub fn float(&self) -> f32 {
        match self {
            Self::Float(value) => *value,
            other => kind_mismatch(ValueKind::Float, other),
        }
    }

    /// # Panics
    ///
    /// If the value is not a font.
    pub fn font(&self) -> FontInfo {
        match self {
            Self::Font(font) => *font,
            other => kind_mismatch(ValueKind::Font, other),
        }
    }

    /// # Panics
    ///
    /// If the value is not a shadow.
    pub fn shadow(&self) -> ShadowInfo {
        match self {
            Self::Shadow(shadow) => *shadow,
            other => kind_mismatch(ValueKind::Shadow, other),
        }
    }
}

fn kind_mismatch(expected: ValueKind, found: &ControlTokenValue) -> ! {
    panic!(
        "control token value is a {}, not a {}",
        found.kind().name(),
        expected.name()
    )
}

impl From<DynamicColor> for ControlTokenValue {
    fn from(color: DynamicColor) -> Self {
        Self::Color(color)
    }
}

impl From<Color> for ControlTokenValue {
    fn from(color: Color) -> Self {
        Self::Color(DynamicColor::uniform(color))
    }
}

impl From<f32> for ControlTokenValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<FontInfo> for ControlTokenValue {
    fn from(font: FontInfo) -> Self {
        Self::Font(font)
    }
}

impl From<ShadowInfo> for ControlTokenValue {
    fn from(shadow: ShadowInfo) -> Self {
        Self::Shadow(shadow)
    }
}

/// Key enumeration of one component kind
pub trait TokenSetKey: Copy + Eq + Hash + Debug + 'static {
    /// Component kind the keys belong to; names the configuration table and log scope
    const KIND: ControlKind;

    /// Every key, in declaration order
    fn all_keys() -> Vec<Self>;

    /// Stable snake_case identifier
    fn key_name(self) -> &'static str;

    /// Shape of the values this key resolves to
    fn value_kind(self) -> ValueKind;

    fn from_key_name(name: &str) -> Option<Self> {
        Self::all_keys().into_iter().find(|key| key.key_name() == name)
    }
}

type Defaults<K> = Box<dyn Fn(K, &Theme) -> ControlTokenValue>;
type UpdateCallback = Rc<dyn Fn()>;

struct Binding {
    theme: WeakTheme,
    subscription: SubscriptionId,
}

struct Cache<K> {
    /// Theme generation the cached values were computed at
    generation: Option<u64>,
    values: FxHashMap<K, ControlTokenValue>,
}

impl<K> Cache<K> {
    fn invalidate(&mut self) {
        self.generation = None;
        self.values.clear();
    }
}

struct TokenSetState<K: TokenSetKey> {
    defaults: Defaults<K>,
    overrides: RefCell<FxHashMap<K, ControlTokenValue>>,
    binding: RefCell<Option<Binding>>,
    cache: RefCell<Cache<K>>,
    on_update: RefCell<Option<UpdateCallback>>,
}

impl<K: TokenSetKey> TokenSetState<K> {
    /// Tiers 2 and 3, cached per theme generation
    fn resolve(&self, key: K, theme: &Theme) -> ControlTokenValue {
        let generation = theme.generation();
        {
            let mut cache = self.cache.borrow_mut();
            if cache.generation != Some(generation) {
                cache.values.clear();
                cache.generation = Some(generation);
            }
            if let Some(value) = cache.values.get(&key) {
                return *value;
            }
        }

        let value = match theme.control_override(key) {
            Some(value) => value,
            None => (self.defaults)(key, theme),
        };
        tracing::trace!(
            "resolved {}.{} at generation {}",
            K::KIND.name(),
            key.key_name(),
            generation
        );

        let mut cache = self.cache.borrow_mut();
        if cache.generation == Some(generation) {
            cache.values.insert(key, value);
        }
        value
    }

    fn theme_changed(&self) {
        self.cache.borrow_mut().invalidate();
        self.fire_update();
    }

    fn fire_update(&self) {
        let callback = self.on_update.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}

/// Token table of one component instance
///
/// ```rust
/// use lumen_theme::controls::button::{button_token_set, ButtonStyle, ButtonToken};
/// use lumen_theme::{AppearanceMode, Theme};
///
/// let theme = Theme::new("Default");
/// let tokens = button_token_set(ButtonStyle::PrimaryFilled);
/// tokens.bind(&theme);
///
/// tokens.set_override(ButtonToken::CornerRadius, 12.0);
/// assert_eq!(tokens.float(ButtonToken::CornerRadius), 12.0);
///
/// theme.set_mode(AppearanceMode::Dark);
/// let _dark_background = tokens.color(ButtonToken::BackgroundColor);
/// ```
pub struct ControlTokenSet<K: TokenSetKey> {
    state: Rc<TokenSetState<K>>,
}

impl<K: TokenSetKey> ControlTokenSet<K> {
    /// Create an unbound set. `defaults` must produce a value for every key.
    pub fn new(defaults: impl Fn(K, &Theme) -> ControlTokenValue + 'static) -> Self {
        Self {
            state: Rc::new(TokenSetState {
                defaults: Box::new(defaults),
                overrides: RefCell::new(FxHashMap::default()),
                binding: RefCell::new(None),
                cache: RefCell::new(Cache {
                    generation: None,
                    values: FxHashMap::default(),
                }),
                on_update: RefCell::new(None),
            }),
        }
    }

    /// Create a set already bound to `theme`
    pub fn bound(
        theme: &Theme,
        defaults: impl Fn(K, &Theme) -> ControlTokenValue + 'static,
    ) -> Self {
        let set = Self::new(defaults);
        set.bind(theme);
        set
    }

    /// Bind to `theme`, replacing any previous binding
    ///
    /// Rebinding to the theme the set is already bound to does nothing.
    pub fn bind(&self, theme: &Theme) {
        if self.theme().is_some_and(|current| current.ptr_eq(theme)) {
            return;
        }
        self.release_binding();

        let subscription = theme.subscribe_weak(&self.state, |state: &TokenSetState<K>| {
            state.theme_changed()
        });
        *self.state.binding.borrow_mut() = Some(Binding {
            theme: theme.downgrade(),
            subscription,
        });
        self.state.cache.borrow_mut().invalidate();

        tracing::debug!(
            "bound {} token set to theme '{}'",
            K::KIND.name(),
            theme.name()
        );
        self.state.fire_update();
    }

    /// Detach from the current theme, if any
    pub fn unbind(&self) {
        if self.release_binding() {
            self.state.cache.borrow_mut().invalidate();
            self.state.fire_update();
        }
    }

    fn release_binding(&self) -> bool {
        let Some(binding) = self.state.binding.borrow_mut().take() else {
            return false;
        };
        if let Some(theme) = binding.theme.upgrade() {
            theme.unsubscribe(binding.subscription);
        }
        true
    }

    /// The bound theme, if bound and still alive
    pub fn theme(&self) -> Option<Theme> {
        self.state
            .binding
            .borrow()
            .as_ref()
            .and_then(|binding| binding.theme.upgrade())
    }

    pub fn is_bound(&self) -> bool {
        self.theme().is_some()
    }

    /// Resolve `key`
    ///
    /// # Panics
    ///
    /// If there is no instance override for `key` and the set is not bound, or
    /// its theme has been dropped.
    pub fn get(&self, key: K) -> ControlTokenValue {
        if let Some(value) = self.state.overrides.borrow().get(&key) {
            return *value;
        }
        let theme = self.require_theme(key);
        self.state.resolve(key, &theme)
    }

    fn require_theme(&self, key: K) -> Theme {
        match self.state.binding.borrow().as_ref() {
            None => panic!(
                "{} token set has no theme bound and no override for {}",
                K::KIND.name(),
                key.key_name()
            ),
            Some(binding) => binding.theme.upgrade().unwrap_or_else(|| {
                panic!(
                    "theme bound to {} token set was dropped while resolving {}",
                    K::KIND.name(),
                    key.key_name()
                )
            }),
        }
    }

    /// Appearance mode colors resolve against. Light when unbound.
    pub fn mode(&self) -> AppearanceMode {
        self.theme().map(|theme| theme.mode()).unwrap_or_default()
    }

    /// Color for `key`, resolved for the bound theme's current mode
    pub fn color(&self, key: K) -> Color {
        self.dynamic_color(key).resolve(self.mode())
    }

    pub fn dynamic_color(&self, key: K) -> DynamicColor {
        self.get(key).dynamic_color()
    }

    pub fn float(&self, key: K) -> f32 {
        self.get(key).float()
    }

    pub fn font(&self, key: K) -> FontInfo {
        self.get(key).font()
    }

    pub fn shadow(&self, key: K) -> ShadowInfo {
        self.get(key).shadow()
    }

    /// Override `key` on this instance only
    pub fn set_override(&self, key: K, value: impl Into<ControlTokenValue>) {
        self.state
            .overrides
            .borrow_mut()
            .insert(key, value.into());
        self.state.fire_update();
    }

    pub fn clear_override(&self, key: K) {
        let removed = self.state.overrides.borrow_mut().remove(&key).is_some();
        if removed {
            self.state.fire_update();
        }
    }

    pub fn clear_overrides(&self) {
        let had_overrides = {
            let mut overrides = self.state.overrides.borrow_mut();
            let had = !overrides.is_empty();
            overrides.clear();
            had
        };
        if had_overrides {
            self.state.fire_update();
        }
    }

    pub fn has_override(&self, key: K) -> bool {
        self.state.overrides.borrow().contains_key(&key)
    }

    /// Register the consumer's update callback, replacing the previous one
    ///
    /// Fires after a theme change, a rebinding, or an override change on this
    /// instance.
    pub fn on_update(&self, callback: impl Fn() + 'static) {
        *self.state.on_update.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn keys(&self) -> Vec<K> {
        K::all_keys()
    }
}

impl<K: TokenSetKey> Drop for ControlTokenSet<K> {
    fn drop(&mut self) {
        self.release_binding();
    }
}

impl<K: TokenSetKey> Debug for ControlTokenSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlTokenSet")
            .field("kind", &K::KIND)
            .field("theme", &self.theme().map(|theme| theme.name().to_string()))
            .field("overrides", &self.state.overrides.borrow().len())
            .finish()
    }
}
