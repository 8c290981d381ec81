/// Declare a closed token key enumeration.
///
/// Generates the enum together with `ALL`/`all()` for exhaustive enumeration,
/// a stable snake_case `name()` and the inverse `from_name()`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every key, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn all() -> &'static [$name] {
                Self::ALL
            }

            /// Stable identifier used by configuration and diagnostics
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|token| token.name() == name)
            }
        }
    };
}
