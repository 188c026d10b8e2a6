//! Builder for constructing state machines.

use crate::builder::binding::{BindingBuilder, Registration};
use crate::builder::error::BuildError;
use crate::core::{Event, HandlerError, State};
use crate::dispatch::StateMachine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing state machines with a fluent API.
///
/// Bindings are validated together in [`build`](Self::build); every invalid
/// binding is reported, not just the first.
pub struct StateMachineBuilder<S, E, A = ()> {
    initial: Option<S>,
    bindings: Vec<BindingBuilder<S, E, A>>,
}

impl<S: State, E: Event, A> StateMachineBuilder<S, E, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            bindings: Vec::new(),
        }
    }

    /// Set the initial state. Without one the machine starts unset.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a binding, validated when the machine is built.
    pub fn binding(mut self, builder: BindingBuilder<S, E, A>) -> Self {
        self.bindings.push(builder);
        self
    }

    /// Add multiple bindings at once.
    pub fn bindings(mut self, builders: Vec<BindingBuilder<S, E, A>>) -> Self {
        self.bindings.extend(builders);
        self
    }

    /// Add a transition from `state` to `target` on `event`.
    pub fn transition(self, state: S, event: E, target: S) -> Self {
        self.binding(
            BindingBuilder::<S, E, A>::new()
                .state(state)
                .event(event)
                .transition_to(target),
        )
    }

    /// Add an action run on `event` in `state`.
    pub fn action<F>(self, state: S, event: E, action: F) -> Self
    where
        F: Fn(&mut StateMachine<S, E, A>, A) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.binding(
            BindingBuilder::<S, E, A>::new()
                .state(state)
                .event(event)
                .action(move |machine, payload| match payload.into_args() {
                    Some(args) => action(machine, args),
                    None => Ok(()),
                }),
        )
    }

    /// Build the state machine.
    /// Returns every binding error at once if any binding is invalid.
    pub fn build(self) -> Result<StateMachine<S, E, A>, BuildError> {
        let mut registrations: Vec<Registration<S, E, A>> = Vec::new();
        let checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .bindings
            .into_iter()
            .map(|builder| match builder.build() {
                Ok(registration) => {
                    registrations.push(registration);
                    Validation::success(())
                }
                Err(err) => Validation::fail(err),
            })
            .collect();

        if let Validation::Failure(errors) = Validation::all_vec(checks).map(|_| ()) {
            return Err(BuildError::InvalidBindings(errors.iter().cloned().collect()));
        }

        let mut machine = match self.initial {
            Some(initial) => StateMachine::new(initial),
            None => StateMachine::unset(),
        };
        for registration in registrations {
            registration.apply(&mut machine);
        }

        tracing::debug!(
            initial = ?machine.state(),
            "state machine built"
        );
        Ok(machine)
    }
}

impl<S: State, E: Event, A> Default for StateMachineBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
