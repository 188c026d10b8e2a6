//! Per-state table of event handlers.

use super::error::EmitError;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Mapping from event key to a single handler.
///
/// Registering a second handler for the same key replaces the first.
/// The handler type is left open: the state machine stores its own
/// [`Binding`](crate::Binding)s here, while standalone emitters usually hold
/// boxed closures and dispatch through [`emit`](Self::emit).
///
/// # Example
///
/// ```rust
/// use turnstile::core::{EmitError, EventEmitter};
///
/// let mut emitter: EventEmitter<&str, Box<dyn Fn(i32) -> i32>> = EventEmitter::new();
/// emitter.register("double", Box::new(|n| n * 2));
///
/// assert_eq!(emitter.emit(&"double", 21), Ok(42));
/// assert!(matches!(
///     emitter.emit(&"triple", 1),
///     Err(EmitError::HandlerNotFound { .. })
/// ));
/// ```
pub struct EventEmitter<K, H> {
    handlers: HashMap<K, H>,
}

impl<K: Eq + Hash, H> EventEmitter<K, H> {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to `event`, returning the handler it replaced.
    pub fn register(&mut self, event: K, handler: H) -> Option<H> {
        self.handlers.insert(event, handler)
    }

    /// Remove the handler for `event`. Absent events are not an error.
    pub fn unregister(&mut self, event: &K) -> Option<H> {
        self.handlers.remove(event)
    }

    /// Look up the handler bound to `event`.
    pub fn handler(&self, event: &K) -> Option<&H> {
        self.handlers.get(event)
    }

    pub fn contains(&self, event: &K) -> bool {
        self.handlers.contains_key(event)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over the bound event keys, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &K> {
        self.handlers.keys()
    }

    /// Invoke the handler bound to `event` with `args` and return its result.
    ///
    /// Fails with [`EmitError::HandlerNotFound`] when nothing is bound.
    pub fn emit<Args, R>(&self, event: &K, args: Args) -> Result<R, EmitError>
    where
        K: fmt::Debug,
        H: Fn(Args) -> R,
    {
        let handler = self
            .handlers
            .get(event)
            .ok_or_else(|| EmitError::HandlerNotFound {
                event: format!("{event:?}"),
            })?;
        Ok(handler(args))
    }
}

impl<K: Eq + Hash, H> Default for EventEmitter<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, H> fmt::Debug for EventEmitter<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Callback = Box<dyn Fn(u32) -> u32>;

    #[test]
    fn new_emitter_is_empty() {
        let emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        assert!(emitter.is_empty());
        assert_eq!(emitter.len(), 0);
        assert_eq!(emitter.events().count(), 0);
    }

    #[test]
    fn emit_invokes_registered_handler() {
        let mut emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        emitter.register("inc", Box::new(|n| n + 1));

        assert!(emitter.contains(&"inc"));
        assert_eq!(emitter.emit(&"inc", 1), Ok(2));
    }

    #[test]
    fn emit_reports_missing_handler() {
        let emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        let result = emitter.emit(&"missing", 0);

        assert_eq!(
            result,
            Err(EmitError::HandlerNotFound {
                event: "\"missing\"".to_string()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "No handler registered for event '\"missing\"'"
        );
    }

    #[test]
    fn register_overwrites_previous_handler() {
        let mut emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        assert!(emitter.register("op", Box::new(|n| n + 1)).is_none());
        assert!(emitter.register("op", Box::new(|n| n * 10)).is_some());

        assert_eq!(emitter.len(), 1);
        assert_eq!(emitter.emit(&"op", 3), Ok(30));
    }

    #[test]
    fn unregister_removes_handler() {
        let mut emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        emitter.register("op", Box::new(|n| n));

        assert!(emitter.unregister(&"op").is_some());
        assert!(!emitter.contains(&"op"));
        assert!(emitter.emit(&"op", 1).is_err());
    }

    #[test]
    fn unregister_absent_event_is_noop() {
        let mut emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        emitter.register("kept", Box::new(|n| n));

        assert!(emitter.unregister(&"absent").is_none());
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn handlers_may_mutate_shared_state() {
        let hits = Rc::new(Cell::new(0));
        let mut emitter: EventEmitter<u8, Box<dyn Fn(())>> = EventEmitter::new();

        let counter = Rc::clone(&hits);
        emitter.register(7, Box::new(move |()| counter.set(counter.get() + 1)));

        emitter.emit(&7, ()).unwrap();
        emitter.emit(&7, ()).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn function_pointers_are_handlers() {
        fn square(n: u32) -> u32 {
            n * n
        }

        let mut emitter: EventEmitter<&str, fn(u32) -> u32> = EventEmitter::default();
        emitter.register("square", square);
        assert_eq!(emitter.emit(&"square", 5), Ok(25));
    }

    #[test]
    fn debug_lists_bound_events() {
        let mut emitter: EventEmitter<&str, Callback> = EventEmitter::new();
        emitter.register("only", Box::new(|n| n));
        assert_eq!(format!("{emitter:?}"), "EventEmitter { events: [\"only\"] }");
    }
}
