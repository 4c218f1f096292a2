//! Macros for declaring state and trigger sets.

/// Declare a field-less enum usable as a state or trigger.
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and adds a `name()`
/// method plus an `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use switchyard::{state_enum, StateMachine};
///
/// state_enum! {
///     pub enum Phase {
///         Draft,
///         Published,
///     }
/// }
///
/// state_enum! {
///     pub enum Action {
///         Publish,
///     }
/// }
///
/// let mut machine = StateMachine::new(Phase::Draft);
/// machine.configure(Phase::Draft).permit(Action::Publish, Phase::Published);
/// machine.fire(Action::Publish);
///
/// assert_eq!(machine.state().name(), "Published");
/// assert_eq!(Phase::ALL, &[Phase::Draft, Phase::Published]);
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

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            $vis const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Variant name, for display and logging.
            $vis fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_generates_names() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_lists_all_variants() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Initial, TestState::Processing, TestState::Complete]
        );
    }

    #[test]
    fn state_enum_is_hashable_and_copy() {
        let state = TestState::Processing;
        let copied = state;
        let set: HashSet<_> = [state, copied, TestState::Complete].into_iter().collect();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// Public states.
            pub enum PublicState {
                A,
                #[allow(dead_code)]
                B,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
    }
}
