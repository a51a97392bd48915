//! Event Dispatch
//!
//! In-process publish/subscribe decoupling gesture producers from their
//! consumers (pointer drivers, loggers). Delivery is synchronous, on the
//! calling thread, in listener-registration order.

pub mod dispatcher;
pub mod types;

pub use dispatcher::{Dispatcher, Listener, ListenerId, LoggingListener};
pub use types::{Event, EventKind, EventName};
