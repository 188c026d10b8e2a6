//! Macros for ergonomic state machine construction.

/// Declare a unit-only enum usable as a state (or event) type.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and the serde
/// traits, and adds `ALL`, `name()` and a `Display` impl printing the
/// variant name.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert_eq!(DoorState::ALL.len(), 3);
/// assert_eq!(DoorState::Open.to_string(), "Open");
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The variant name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::StateMachine;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_names() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.to_string(), "Processing");
        assert_eq!(
            TestState::ALL,
            &[TestState::Initial, TestState::Processing, TestState::Complete]
        );
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }

    #[test]
    fn state_enum_is_usable_as_state_and_event() {
        state_enum! {
            enum Signal {
                Go,
                Halt,
            }
        }

        let mut machine: StateMachine<TestState, Signal> = StateMachine::new(TestState::Initial);
        machine.on_transition(TestState::Initial, Signal::Go, TestState::Processing);

        machine.command(Signal::Halt, ()).unwrap();
        assert_eq!(machine.state(), Some(&TestState::Initial));

        machine.command(Signal::Go, ()).unwrap();
        assert_eq!(machine.state(), Some(&TestState::Processing));
    }

    #[test]
    fn state_enum_serializes_correctly() {
        let json = serde_json::to_string(&TestState::Complete).unwrap();
        assert_eq!(json, "\"Complete\"");
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestState::Complete);
    }
}
