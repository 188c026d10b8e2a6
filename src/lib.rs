//! Turnstile: a reactive, event-driven state machine engine
//!
//! A machine holds a current state and, per state, a table mapping events to
//! handlers. Callers drive it by submitting events; whatever is bound to the
//! event in the current state runs, and anything unbound is ignored.
//!
//! # Core Concepts
//!
//! - **States and events**: opaque caller-defined values (`State`, `Event`)
//! - **Bindings**: an event is bound either to a user action or to a built-in
//!   transition into another state
//! - **Enter/leave signaling**: every transition emits `StateLeave` on the old
//!   state and `StateEnter` on the new one, as ordinary table entries
//! - **Re-entrancy**: actions receive the machine and may transition it
//!
//! # Example
//!
//! ```rust
//! use turnstile::{state_enum, EventKey, StateMachine};
//!
//! state_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!         Locked,
//!     }
//! }
//!
//! let mut door: StateMachine<Door, &str> = StateMachine::new(Door::Open);
//! door.on_transition(Door::Open, "close", Door::Closed)
//!     .on_transition(Door::Closed, "open", Door::Open)
//!     .on_transition(Door::Closed, "lock", Door::Locked)
//!     .on_enter(Door::Locked, |_, ctx| {
//!         assert_eq!(ctx.prev, Some(Door::Closed));
//!         Ok(())
//!     });
//!
//! door.command("close", ())
//!     .and_then(|d| d.command("lock", ()))
//!     .and_then(|d| d.command("open", ()))
//!     .unwrap();
//! assert_eq!(door.state(), Some(&Door::Locked));
//! assert!(door.has_handler(&Door::Locked, &EventKey::StateEnter));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use builder::{BindingBuilder, BuildError, StateMachineBuilder};
pub use self::core::{
    EmitError, Event, EventEmitter, EventKey, HandlerError, State, TransitionContext,
};
pub use dispatch::{Binding, Payload, StateMachine};
