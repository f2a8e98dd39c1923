//! Macros for declaring named state enums.

/// Generate a `State` implementation for a simple fieldless enum.
///
/// Each variant's name doubles as its display name. Variants listed under
/// `error:` report `is_error() == true`.
///
/// # Example
///
/// ```
/// use pocketcalc::state_enum;
/// use pocketcalc::core::State;
///
/// state_enum! {
///     pub enum Lamp {
///         Off,
///         On,
///         Blown,
///     }
///     error: [Blown]
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(Lamp::Blown.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
