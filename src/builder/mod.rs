//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring handler
//! tables up front, with every misconfigured binding reported at build time.

pub mod binding;
pub mod error;
pub mod machine;
pub mod macros;

pub use binding::{BindingBuilder, Registration};
pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{Event, State};

/// Create a binding that moves `from` to `to` on `event`.
///
/// # Example
///
/// ```
/// use turnstile::builder::{simple_transition, StateMachineBuilder};
/// use turnstile::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let mut machine = StateMachineBuilder::<MyState, &str>::new()
///     .initial(MyState::Start)
///     .binding(simple_transition(MyState::Start, "finish", MyState::End))
///     .build()
///     .unwrap();
///
/// machine.command("finish", ()).unwrap();
/// assert_eq!(machine.state(), Some(&MyState::End));
/// ```
pub fn simple_transition<S, E, A>(from: S, event: E, to: S) -> BindingBuilder<S, E, A>
where
    S: State,
    E: Event,
{
    BindingBuilder::new().state(from).event(event).transition_to(to)
}

/// Create a binding that moves `from` to `to` whenever `from` is entered.
///
/// Useful for pass-through states that only exist to run their own enter
/// and leave handlers.
pub fn auto_transition<S, E, A>(from: S, to: S) -> BindingBuilder<S, E, A>
where
    S: State,
    E: Event,
{
    BindingBuilder::new().state(from).enter().transition_to(to)
}
