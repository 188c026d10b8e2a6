//! Builder for constructing handler bindings.

use crate::builder::error::BuildError;
use crate::core::{Event, EventKey, HandlerError, State};
use crate::dispatch::{Action, Binding, Payload, StateMachine};
use std::sync::Arc;

/// A validated binding, ready to be registered on a machine.
pub struct Registration<S, E, A> {
    pub state: S,
    pub event: EventKey<E>,
    pub binding: Binding<S, E, A>,
}

impl<S: State, E: Event, A> Registration<S, E, A> {
    /// Register this binding on `machine`.
    pub fn apply(self, machine: &mut StateMachine<S, E, A>) {
        machine.on(self.state, self.event, self.binding);
    }
}

/// Builder for constructing bindings with a fluent API.
///
/// Exactly one of [`action`](Self::action) or
/// [`transition_to`](Self::transition_to) must be set; `build` rejects
/// a binding with neither or both.
///
/// # Example
///
/// ```
/// use turnstile::builder::{BindingBuilder, BuildError};
///
/// let missing = BindingBuilder::<u8, &str>::new().state(1).event("go").build();
/// assert!(matches!(missing, Err(BuildError::MissingHandler { .. })));
///
/// let ok = BindingBuilder::<u8, &str>::new()
///     .state(1)
///     .event("go")
///     .transition_to(2)
///     .build();
/// assert!(ok.is_ok());
/// ```
pub struct BindingBuilder<S, E, A = ()> {
    state: Option<S>,
    event: Option<EventKey<E>>,
    action: Option<Action<S, E, A>>,
    transition: Option<S>,
}

impl<S: State, E: Event, A> BindingBuilder<S, E, A> {
    /// Create a new binding builder.
    pub fn new() -> Self {
        Self {
            state: None,
            event: None,
            action: None,
            transition: None,
        }
    }

    /// Set the state the binding belongs to (required).
    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the caller event that fires the binding.
    pub fn event(mut self, event: E) -> Self {
        self.event = Some(EventKey::Named(event));
        self
    }

    /// Fire on `StateEnter`.
    pub fn enter(mut self) -> Self {
        self.event = Some(EventKey::StateEnter);
        self
    }

    /// Fire on `StateLeave`.
    pub fn leave(mut self) -> Self {
        self.event = Some(EventKey::StateLeave);
        self
    }

    /// Set the action to run.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut StateMachine<S, E, A>, Payload<S, A>) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Transition into `target` when the binding fires.
    pub fn transition_to(mut self, target: S) -> Self {
        self.transition = Some(target);
        self
    }

    /// Build the binding.
    pub fn build(self) -> Result<Registration<S, E, A>, BuildError> {
        let state = self.state.ok_or(BuildError::MissingState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        let binding = match (self.action, self.transition) {
            (Some(action), None) => Binding::Action(action),
            (None, Some(target)) => Binding::Transition(target),
            (Some(_), Some(_)) => {
                return Err(BuildError::ConflictingHandler {
                    event: event.to_string(),
                })
            }
            (None, None) => {
                return Err(BuildError::MissingHandler {
                    event: event.to_string(),
                })
            }
        };

        Ok(Registration {
            state,
            event,
            binding,
        })
    }
}

impl<S: State, E: Event, A> Default for BindingBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
