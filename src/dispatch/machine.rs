//! State machine that dispatches events through per-state handler tables.

use super::binding::{Binding, Payload};
use crate::core::{Event, EventEmitter, EventKey, HandlerError, State, TransitionContext};
use std::collections::HashMap;
use std::fmt;

/// Handler table of a single state.
pub type StateTable<S, E, A> = EventEmitter<EventKey<E>, Binding<S, E, A>>;

/// Reactive state machine.
///
/// Holds the current state and, for each state, a table of
/// event → [`Binding`]. Transitions are not declared up front: whatever the
/// bound handlers do at runtime is the transition graph. An event with no
/// handler in the current state is silently ignored.
///
/// # Example
///
/// ```rust
/// use turnstile::StateMachine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Off,
///     On,
/// }
///
/// let mut machine: StateMachine<Light, &str> = StateMachine::new(Light::Off);
/// machine
///     .on_transition(Light::Off, "flip", Light::On)
///     .on_transition(Light::On, "flip", Light::Off);
///
/// machine.command("flip", ()).unwrap();
/// assert_eq!(machine.state(), Some(&Light::On));
///
/// // Unbound events are ignored
/// machine.command("smash", ()).unwrap();
/// assert_eq!(machine.state(), Some(&Light::On));
/// ```
pub struct StateMachine<S, E, A = ()> {
    current: Option<S>,
    tables: HashMap<S, StateTable<S, E, A>>,
}

impl<S: State, E: Event, A> StateMachine<S, E, A> {
    /// Create a machine in the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            current: Some(initial),
            tables: HashMap::new(),
        }
    }

    /// Create a machine with no current state yet.
    ///
    /// Commands are ignored until a state is set.
    pub fn unset() -> Self {
        Self {
            current: None,
            tables: HashMap::new(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn is_in(&self, state: &S) -> bool {
        self.current.as_ref() == Some(state)
    }

    /// Replace the current state without emitting `StateLeave`/`StateEnter`.
    pub fn set_state(&mut self, state: S) {
        tracing::trace!(from = ?self.current, to = ?state, "state set without signaling");
        self.current = Some(state);
    }

    /// Bind `binding` to `event` in `state`, replacing any previous binding.
    pub fn on(
        &mut self,
        state: S,
        event: impl Into<EventKey<E>>,
        binding: Binding<S, E, A>,
    ) -> &mut Self {
        let event = event.into();
        tracing::trace!(state = ?state, event = %event, binding = ?binding, "binding registered");
        self.ensure_state(state).register(event, binding);
        self
    }

    /// Bind an action that receives the command arguments.
    pub fn on_action<F>(&mut self, state: S, event: E, action: F) -> &mut Self
    where
        F: Fn(&mut Self, A) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let binding: Binding<S, E, A> = Binding::action(move |machine, payload| match payload {
            Payload::Command(args) => action(machine, args),
            Payload::Transition(_) => Ok(()),
        });
        self.on(state, EventKey::Named(event), binding)
    }

    /// Bind `event` in `state` to a transition into `target`.
    pub fn on_transition(&mut self, state: S, event: E, target: S) -> &mut Self {
        self.on(state, EventKey::Named(event), Binding::Transition(target))
    }

    /// Bind a handler run after the machine enters `state`.
    pub fn on_enter<F>(&mut self, state: S, handler: F) -> &mut Self
    where
        F: Fn(&mut Self, &TransitionContext<S>) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.on(state, EventKey::StateEnter, transition_handler(handler))
    }

    /// Bind a handler run before the machine leaves `state`.
    pub fn on_leave<F>(&mut self, state: S, handler: F) -> &mut Self
    where
        F: Fn(&mut Self, &TransitionContext<S>) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.on(state, EventKey::StateLeave, transition_handler(handler))
    }

    /// Remove the binding for `event` in `state`, returning it if present.
    pub fn off(&mut self, state: &S, event: &EventKey<E>) -> Option<Binding<S, E, A>> {
        self.tables.get_mut(state)?.unregister(event)
    }

    /// Get the handler table of `state`, inserting an empty one if needed.
    pub fn ensure_state(&mut self, state: S) -> &mut StateTable<S, E, A> {
        self.tables.entry(state).or_default()
    }

    /// Get the handler table of `state`, if one exists.
    pub fn table(&self, state: &S) -> Option<&StateTable<S, E, A>> {
        self.tables.get(state)
    }

    /// Check whether `event` is bound in `state`.
    pub fn has_handler(&self, state: &S, event: &EventKey<E>) -> bool {
        self.tables
            .get(state)
            .is_some_and(|table| table.contains(event))
    }

    /// Check whether `event` is bound in the current state.
    pub fn handles(&self, event: &E) -> bool {
        let key = EventKey::Named(event.clone());
        self.current
            .as_ref()
            .is_some_and(|state| self.has_handler(state, &key))
    }

    /// Submit `event` with `args` to the current state.
    ///
    /// Unbound events are a no-op. Errors returned by the bound action are
    /// passed through unchanged. Returns the machine for chaining.
    pub fn command(&mut self, event: E, args: A) -> Result<&mut Self, HandlerError> {
        self.dispatch(EventKey::Named(event), Payload::Command(args))?;
        Ok(self)
    }

    /// Move to `next`, emitting `StateLeave` on the current state first and
    /// `StateEnter` on `next` afterwards.
    ///
    /// A failing leave handler aborts the transition before the state
    /// changes.
    pub fn transit_to(&mut self, next: S) -> Result<&mut Self, HandlerError> {
        let context = TransitionContext::new(self.current.clone(), next.clone());
        tracing::debug!(from = ?context.prev, to = ?context.next, "state transition");

        self.dispatch(EventKey::StateLeave, Payload::Transition(context.clone()))?;
        self.set_state(next);
        self.dispatch(EventKey::StateEnter, Payload::Transition(context))?;
        Ok(self)
    }

    fn dispatch(
        &mut self,
        event: EventKey<E>,
        payload: Payload<S, A>,
    ) -> Result<(), HandlerError> {
        let Some(state) = self.current.as_ref() else {
            tracing::trace!(event = %event, "no current state, event ignored");
            return Ok(());
        };

        // Clone the binding out so the handler may mutate the tables.
        let binding = self
            .tables
            .get(state)
            .and_then(|table| table.handler(&event))
            .cloned();

        match binding {
            None => {
                tracing::trace!(state = ?state, event = %event, "no handler bound, event ignored");
                Ok(())
            }
            Some(Binding::Action(action)) => {
                tracing::trace!(state = ?state, event = %event, "dispatching action");
                action(self, payload)
            }
            Some(Binding::Transition(target)) => {
                self.transit_to(target)?;
                Ok(())
            }
        }
    }
}

fn transition_handler<S, E, A, F>(handler: F) -> Binding<S, E, A>
where
    F: Fn(&mut StateMachine<S, E, A>, &TransitionContext<S>) -> Result<(), HandlerError>
        + Send
        + Sync
        + 'static,
{
    Binding::action(move |machine, payload| match payload {
        Payload::Transition(ctx) => handler(machine, &ctx),
        Payload::Command(_) => Ok(()),
    })
}

impl<S: State, E: Event, A> Default for StateMachine<S, E, A> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<S: fmt::Debug, E: fmt::Debug, A> fmt::Debug for StateMachine<S, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("tables", &self.tables)
            .finish()
    }
}
