//! State and event traits for state machine tables.
//!
//! States and events are opaque, caller-defined values. The engine only needs
//! to clone them, hash them into per-state tables, and print them in logs.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implemented for every type that is `Clone + Eq + Hash + Debug + 'static`,
/// so plain enums, integers and strings all work as states.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&TaskState::Pending);
/// assert_state(&"running");
/// assert_state(&3u8);
/// ```
pub trait State: Clone + Eq + Hash + Debug + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Trait for caller-defined event identifiers.
///
/// Like [`State`], blanket-implemented; `&'static str` and enums are the
/// usual choices.
pub trait Event: Clone + Eq + Hash + Debug + 'static {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn hashes_into_set<S: State>(states: &[S]) -> usize {
        states.iter().cloned().collect::<HashSet<_>>().len()
    }

    #[test]
    fn enums_are_states() {
        let states = [
            TestState::Initial,
            TestState::Processing,
            TestState::Complete,
            TestState::Initial,
        ];
        assert_eq!(hashes_into_set(&states), 3);
    }

    #[test]
    fn primitives_are_states() {
        assert_eq!(hashes_into_set(&[1u32, 2, 2]), 2);
        assert_eq!(hashes_into_set(&["open", "closed"]), 2);
        assert_eq!(hashes_into_set(&[String::from("a"), String::from("a")]), 1);
    }

    #[test]
    fn string_slices_are_events() {
        fn assert_event<E: Event>(_: E) {}
        assert_event("close");
        assert_event(String::from("close"));
    }
}
