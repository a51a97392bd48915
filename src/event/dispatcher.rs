//! Listener registry and synchronous dispatch

use super::types::{Event, EventKind, EventName};
use tracing::info;

/// A consumer of dispatched events.
///
/// A listener declares the canonical names it handles; the dispatcher
/// invokes `handle` for every matching event, in registration order.
pub trait Listener {
    /// Event names this listener handles
    fn dispatches(&self) -> &[EventName];

    /// Handle one matching event. Runs synchronously on the dispatching
    /// thread; setting `event.stop_propagation()` halts delivery to
    /// listeners registered after this one.
    fn handle(&mut self, event: &mut Event);
}

/// Handle for a registered listener, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous single-threaded event dispatcher.
///
/// Owned by the top-level controller and injected where needed; there is
/// no process-global registry. Registration order is preserved and there
/// is no deduplication: adding the same listener twice causes double
/// delivery.
#[derive(Default)]
pub struct Dispatcher {
    listeners: Vec<(ListenerId, Box<dyn Listener>)>,
    next_id: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returning the id needed to remove it later
    pub fn add_listener(&mut self, listener: Box<dyn Listener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener. Returns false if the id is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// True if at least one registered listener handles the given name
    pub fn has_listener(&self, name: EventName) -> bool {
        self.listeners
            .iter()
            .any(|(_, l)| l.dispatches().contains(&name))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an event synchronously to every matching listener, in
    /// registration order. An event with no listener is a silent no-op.
    /// Returns the number of handlers invoked.
    ///
    /// Iteration is index-based over the registry length captured at
    /// entry, so listeners appended during delivery are not seen until the
    /// next dispatch.
    pub fn dispatch(&mut self, event: &mut Event) -> usize {
        let count = self.listeners.len();
        let mut delivered = 0;

        for slot in 0..count {
            if event.propagation_stopped() {
                break;
            }
            let Some((_, listener)) = self.listeners.get_mut(slot) else {
                break;
            };
            if listener.dispatches().contains(&event.name()) {
                listener.handle(event);
                delivered += 1;
            }
        }

        delivered
    }
}

/// Listener that logs every delivery.
///
/// Subscribed to all event names; the `inspect` command and dry runs use
/// it as the event sink.
#[derive(Debug, Default)]
pub struct LoggingListener;

impl Listener for LoggingListener {
    fn dispatches(&self) -> &[EventName] {
        &[
            EventName::MouseMove,
            EventName::MouseClick,
            EventName::MouseDoubleClick,
        ]
    }

    fn handle(&mut self, event: &mut Event) {
        match *event.kind() {
            EventKind::Move { x, y } => info!(name = %event.name(), x, y, "event"),
            _ => info!(name = %event.name(), "event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records deliveries into a shared log, optionally stopping
    /// propagation.
    struct Recorder {
        tag: &'static str,
        names: Vec<EventName>,
        log: Rc<RefCell<Vec<String>>>,
        stop: bool,
    }

    impl Recorder {
        fn boxed(
            tag: &'static str,
            names: Vec<EventName>,
            log: &Rc<RefCell<Vec<String>>>,
        ) -> Box<Self> {
            Box::new(Self {
                tag,
                names,
                log: Rc::clone(log),
                stop: false,
            })
        }
    }

    impl Listener for Recorder {
        fn dispatches(&self) -> &[EventName] {
            &self.names
        }

        fn handle(&mut self, event: &mut Event) {
            self.log
                .borrow_mut()
                .push(format!("{}:{}", self.tag, event.name()));
            if self.stop {
                event.stop_propagation();
            }
        }
    }

    #[test]
    fn test_delivery_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_listener(Recorder::boxed("a", vec![EventName::MouseMove], &log));
        dispatcher.add_listener(Recorder::boxed("b", vec![EventName::MouseMove], &log));

        let delivered = dispatcher.dispatch(&mut Event::mouse_move(1, 2));
        assert_eq!(delivered, 2);
        assert_eq!(*log.borrow(), vec!["a:mouse.move", "b:mouse.move"]);
    }

    #[test]
    fn test_name_filtering() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_listener(Recorder::boxed("clicks", vec![EventName::MouseClick], &log));
        dispatcher.add_listener(Recorder::boxed("moves", vec![EventName::MouseMove], &log));

        dispatcher.dispatch(&mut Event::mouse_move(1, 2));
        assert_eq!(*log.borrow(), vec!["moves:mouse.move"]);
    }

    #[test]
    fn test_no_listener_is_silent_noop() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.dispatch(&mut Event::new(EventKind::Click)), 0);

        let log = Rc::new(RefCell::new(Vec::new()));
        dispatcher.add_listener(Recorder::boxed("moves", vec![EventName::MouseMove], &log));
        assert_eq!(dispatcher.dispatch(&mut Event::new(EventKind::Click)), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_double_registration_double_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_listener(Recorder::boxed("dup", vec![EventName::MouseMove], &log));
        dispatcher.add_listener(Recorder::boxed("dup", vec![EventName::MouseMove], &log));

        let delivered = dispatcher.dispatch(&mut Event::mouse_move(0, 0));
        assert_eq!(delivered, 2);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_remove_listener_stops_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        let keep = dispatcher.add_listener(Recorder::boxed("keep", vec![EventName::MouseMove], &log));
        let gone = dispatcher.add_listener(Recorder::boxed("gone", vec![EventName::MouseMove], &log));

        assert!(dispatcher.remove_listener(gone));
        assert!(!dispatcher.remove_listener(gone));
        assert_eq!(dispatcher.len(), 1);

        dispatcher.dispatch(&mut Event::mouse_move(1, 1));
        assert_eq!(*log.borrow(), vec!["keep:mouse.move"]);

        assert!(dispatcher.remove_listener(keep));
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn test_has_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        assert!(!dispatcher.has_listener(EventName::MouseMove));

        let id = dispatcher.add_listener(Recorder::boxed("m", vec![EventName::MouseMove], &log));
        assert!(dispatcher.has_listener(EventName::MouseMove));
        assert!(!dispatcher.has_listener(EventName::MouseClick));

        dispatcher.remove_listener(id);
        assert!(!dispatcher.has_listener(EventName::MouseMove));
    }

    #[test]
    fn test_stop_propagation_halts_subsequent_listeners() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_listener(Recorder::boxed("first", vec![EventName::MouseMove], &log));
        let mut stopper = Recorder::boxed("stopper", vec![EventName::MouseMove], &log);
        stopper.stop = true;
        dispatcher.add_listener(stopper);
        dispatcher.add_listener(Recorder::boxed("never", vec![EventName::MouseMove], &log));

        let delivered = dispatcher.dispatch(&mut Event::mouse_move(1, 1));
        assert_eq!(delivered, 2);
        assert_eq!(*log.borrow(), vec!["first:mouse.move", "stopper:mouse.move"]);
    }

    #[test]
    fn test_logging_listener_handles_all_names() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_listener(Box::new(LoggingListener));
        assert!(dispatcher.has_listener(EventName::MouseMove));
        assert!(dispatcher.has_listener(EventName::MouseClick));
        assert!(dispatcher.has_listener(EventName::MouseDoubleClick));
        assert_eq!(dispatcher.dispatch(&mut Event::mouse_move(1, 1)), 1);
        assert_eq!(dispatcher.dispatch(&mut Event::new(EventKind::Click)), 1);
    }
}
