//! Dispatch errors.

use thiserror::Error;

/// Error type returned by user actions.
///
/// The machine never wraps or inspects it; whatever an action returns comes
/// back out of [`command`](crate::StateMachine::command) unchanged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by [`EventEmitter::emit`](crate::core::EventEmitter::emit).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("No handler registered for event '{event}'")]
    HandlerNotFound { event: String },
}
