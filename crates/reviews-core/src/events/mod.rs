//! Review lifecycle events, dispatched synchronously to registered handlers.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ReviewEventHandler;
pub use types::{ReviewPostedEvent, ReviewRejectedEvent};
