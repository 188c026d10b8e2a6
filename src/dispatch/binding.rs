//! Handler bindings stored in per-state tables.

use super::machine::StateMachine;
use crate::core::{HandlerError, TransitionContext};
use std::fmt;
use std::sync::Arc;

/// Argument passed to a bound action.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload<S, A> {
    /// Arguments of a caller [`command`](StateMachine::command)
    Command(A),
    /// Context of the transition that emitted `StateEnter`/`StateLeave`
    Transition(TransitionContext<S>),
}

impl<S, A> Payload<S, A> {
    pub fn args(&self) -> Option<&A> {
        match self {
            Self::Command(args) => Some(args),
            Self::Transition(_) => None,
        }
    }

    /// Take the command arguments, if this is a command payload.
    pub fn into_args(self) -> Option<A> {
        match self {
            Self::Command(args) => Some(args),
            Self::Transition(_) => None,
        }
    }

    pub fn transition(&self) -> Option<&TransitionContext<S>> {
        match self {
            Self::Transition(ctx) => Some(ctx),
            Self::Command(_) => None,
        }
    }
}

/// Type alias for bound action functions.
///
/// Actions receive the dispatching machine, so they can trigger further
/// transitions or commands from inside a handler.
pub type Action<S, E, A> = Arc<
    dyn Fn(&mut StateMachine<S, E, A>, Payload<S, A>) -> Result<(), HandlerError> + Send + Sync,
>;

/// What runs when a (state, event) pair fires.
pub enum Binding<S, E, A> {
    /// A user action, invoked with the machine and the payload
    Action(Action<S, E, A>),
    /// A built-in transition to the given state
    Transition(S),
}

impl<S, E, A> Binding<S, E, A> {
    /// Wrap a closure as an action binding.
    pub fn action<F>(f: F) -> Self
    where
        F: Fn(&mut StateMachine<S, E, A>, Payload<S, A>) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        Self::Action(Arc::new(f))
    }

    pub fn transition(target: S) -> Self {
        Self::Transition(target)
    }

    /// Target state of a transition binding.
    pub fn target(&self) -> Option<&S> {
        match self {
            Self::Transition(target) => Some(target),
            Self::Action(_) => None,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition(_))
    }
}

impl<S: Clone, E, A> Clone for Binding<S, E, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Action(action) => Self::Action(Arc::clone(action)),
            Self::Transition(target) => Self::Transition(target.clone()),
        }
    }
}

impl<S: fmt::Debug, E, A> fmt::Debug for Binding<S, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(_) => f.write_str("Action(..)"),
            Self::Transition(target) => f.debug_tuple("Transition").field(target).finish(),
        }
    }
}
