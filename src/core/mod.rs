//! Core types shared by every state machine.
//!
//! This module contains the building blocks the dispatcher is made of:
//! - `State`/`Event` traits for caller-defined identifiers
//! - `EventKey`, with the reserved enter/leave keys
//! - `TransitionContext`, the payload of enter/leave handlers
//! - `EventEmitter`, a single-handler-per-key table

mod emitter;
mod error;
mod event;
mod state;

pub use emitter::EventEmitter;
pub use error::{EmitError, HandlerError};
pub use event::{EventKey, TransitionContext};
pub use state::{Event, State};
