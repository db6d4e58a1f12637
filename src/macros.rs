//! Macros for declaring state enums.

/// Declare an enum of states and implement [`State`] for it.
///
/// Each variant may carry an explicit display name with `= "name"`;
/// otherwise the variant identifier is used. The generated `all()` lists
/// the variants in declaration order, ready for [`AllowedStates::new`].
///
/// # Example
///
/// ```
/// use ingreatstate::core::{AllowedStates, State};
/// use ingreatstate::state_enum;
///
/// state_enum! {
///     pub enum IssueState {
///         Open = "open",
///         InProgress = "in progress",
///         Closed = "closed",
///     }
/// }
///
/// assert_eq!(IssueState::InProgress.name(), "in progress");
///
/// let states = AllowedStates::new(IssueState::all()).unwrap();
/// assert_eq!(states.len(), 3);
/// ```
///
/// [`State`]: crate::core::State
/// [`AllowedStates::new`]: crate::core::AllowedStates::new
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };

    (@label $variant:ident) => {
        stringify!($variant)
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
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
            /// Every state in declaration order.
            #[allow(dead_code)]
            $vis fn all() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),*]
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{AllowedStates, State};

    state_enum! {
        enum TestState {
            Open = "open",
            InProgress = "in progress",
            Closed,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Open.name(), "open");
        assert_eq!(TestState::InProgress.name(), "in progress");
        assert_eq!(TestState::Closed.name(), "Closed");
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestState::all(),
            vec![TestState::Open, TestState::InProgress, TestState::Closed]
        );

        let states = AllowedStates::new(TestState::all()).unwrap();
        assert!(states.contains(&TestState::InProgress));
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::all().len(), 2);
        assert_eq!(PublicState::B.name(), "B");
    }

    #[test]
    fn state_enum_passes_attributes_through() {
        state_enum! {
            #[derive(PartialOrd)]
            enum Power {
                Off,
                On,
            }
        }

        assert!(Power::Off < Power::On);
    }
}
