//! Event dispatch through per-state handler tables.
//!
//! # Key Concepts
//!
//! - **Bindings**: what a (state, event) pair runs, either a user action or a
//!   built-in transition
//! - **Payloads**: command arguments for caller events, a transition context
//!   for `StateEnter`/`StateLeave`
//! - **State Machine**: owns the current state and the tables, and drives the
//!   leave → set → enter transition protocol
//!
//! Transition bindings store only their target state. The machine that
//! dispatches them performs the transition, so a handler table never refers
//! back to its machine.

mod binding;
mod machine;

pub use binding::{Action, Binding, Payload};
pub use machine::{StateMachine, StateTable};
