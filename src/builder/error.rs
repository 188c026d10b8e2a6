//! Build errors for state machine and binding builders.

use thiserror::Error;

/// Errors that can occur when building bindings and state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Binding state not specified. Call .state(state)")]
    MissingState,

    #[error("Binding event not specified. Call .event(event), .enter() or .leave()")]
    MissingEvent,

    #[error("No handler for '{event}'. Call .action(f) or .transition_to(state)")]
    MissingHandler { event: String },

    #[error("Both an action and a transition were set for '{event}'")]
    ConflictingHandler { event: String },

    #[error("{count} invalid binding(s): {summary}", count = .0.len(), summary = summarize(.0))]
    InvalidBindings(Vec<BuildError>),
}

fn summarize(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
