//! Macros for ergonomic state machine construction.

/// Declare a fieldless state enum and implement [`State`](crate::core::State) for it.
///
/// Each variant is named after itself, and the enum gets an `ALL` constant
/// listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use fsmkit::core::State;
/// use fsmkit::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// assert_eq!(Light::Yellow.name(), "Yellow");
/// assert_eq!(Light::ALL.len(), 3);
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_lists_all_variants() {
        assert_eq!(
            TestState::ALL,
            &[
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn state_enum_supports_visibility() {
        // The macro should work with pub visibility
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        assert_eq!(PublicState::B.name(), "B");
    }
}
