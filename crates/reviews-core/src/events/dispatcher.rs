//! Synchronous dispatch of review events to registered handlers.

use std::sync::Arc;

use super::handler::ReviewEventHandler;
use super::types::{ReviewPostedEvent, ReviewRejectedEvent};
use crate::tracing_setup::events;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ReviewEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ReviewEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A handler that panics is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn ReviewEventHandler)>(&self, name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                events::handler_panicked(name);
            }
        }
    }

    pub fn emit_review_posted(&self, event: &ReviewPostedEvent) {
        self.emit("review_posted", |h| h.on_review_posted(event));
    }

    pub fn emit_review_rejected(&self, event: &ReviewRejectedEvent) {
        self.emit("review_rejected", |h| h.on_review_rejected(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
