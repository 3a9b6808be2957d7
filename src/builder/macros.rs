//! Macros for ergonomic machine construction.

/// Generate a `State` implementation for simple enums.
///
/// The generated `enter()` hook does nothing; write the impl by hand for
/// states that react to activation.
///
/// # Example
///
/// ```
/// use mindstack::state_enum;
/// use mindstack::core::State;
///
/// state_enum! {
///     pub enum MenuState {
///         Root,
///         Options,
///         Quit,
///     }
///     final: [Quit]
/// }
///
/// assert_eq!(MenuState::Options.name(), "Options");
/// assert!(MenuState::Quit.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
