//! Event keys and transition payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of an entry in a per-state handler table.
///
/// `StateEnter` and `StateLeave` are reserved: the machine emits them around
/// every [`transit_to`](crate::StateMachine::transit_to). Caller events are
/// wrapped in `Named`, and any `E` converts into `EventKey<E>` with `.into()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKey<E> {
    /// Emitted against the new state after it becomes current.
    StateEnter,
    /// Emitted against the old state before it is left.
    StateLeave,
    /// A caller-submitted event.
    Named(E),
}

impl<E> EventKey<E> {
    /// True for `StateEnter` and `StateLeave`.
    pub fn is_reserved(&self) -> bool {
        !matches!(self, Self::Named(_))
    }

    /// The caller event, if this is not a reserved key.
    pub fn named(&self) -> Option<&E> {
        match self {
            Self::Named(event) => Some(event),
            _ => None,
        }
    }
}

impl<E> From<E> for EventKey<E> {
    fn from(event: E) -> Self {
        Self::Named(event)
    }
}

impl<E: fmt::Debug> fmt::Display for EventKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateEnter => f.write_str("StateEnter"),
            Self::StateLeave => f.write_str("StateLeave"),
            Self::Named(event) => write!(f, "{event:?}"),
        }
    }
}

/// Payload handed to `StateEnter`/`StateLeave` handlers.
///
/// The same context is passed to both sides of one transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionContext<S> {
    /// The state being left; `None` when the machine had no state yet
    pub prev: Option<S>,
    /// The state being entered
    pub next: S,
    /// When the transition started
    pub at: DateTime<Utc>,
}

impl<S> TransitionContext<S> {
    /// Create a context stamped with the current time.
    pub fn new(prev: Option<S>, next: S) -> Self {
        Self {
            prev,
            next,
            at: Utc::now(),
        }
    }

    /// True when leaving and entering the same state.
    pub fn is_self_transition(&self) -> bool
    where
        S: PartialEq,
    {
        self.prev.as_ref() == Some(&self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Open,
        Closed,
    }

    #[test]
    fn events_convert_into_named_keys() {
        let key: EventKey<&str> = "close".into();
        assert_eq!(key, EventKey::Named("close"));
        assert_eq!(key.named(), Some(&"close"));
        assert!(!key.is_reserved());
    }

    #[test]
    fn reserved_keys_are_distinct_from_named_events() {
        let enter: EventKey<&str> = EventKey::StateEnter;
        assert!(enter.is_reserved());
        assert!(enter.named().is_none());
        assert_ne!(enter, EventKey::Named("StateEnter"));
        assert_ne!(enter, EventKey::StateLeave);
    }

    #[test]
    fn keys_display_readably() {
        assert_eq!(EventKey::<&str>::StateEnter.to_string(), "StateEnter");
        assert_eq!(EventKey::<&str>::StateLeave.to_string(), "StateLeave");
        assert_eq!(EventKey::Named("lock").to_string(), "\"lock\"");
    }

    #[test]
    fn context_detects_self_transitions() {
        let ctx = TransitionContext::new(Some(TestState::Open), TestState::Open);
        assert!(ctx.is_self_transition());

        let ctx = TransitionContext::new(Some(TestState::Open), TestState::Closed);
        assert!(!ctx.is_self_transition());

        let ctx = TransitionContext::new(None, TestState::Closed);
        assert!(!ctx.is_self_transition());
    }

    #[test]
    fn context_serializes_correctly() {
        let ctx = TransitionContext::new(Some(TestState::Open), TestState::Closed);
        let json = serde_json::to_string(&ctx).unwrap();
        let deserialized: TransitionContext<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, deserialized);
    }
}
