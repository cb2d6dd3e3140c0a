use std::{cell::RefCell, fmt::Display};

/// Represents a trait responsible for handling diagnostics of the checker.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Prints every received diagnostic to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintHandler;

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
    }
}

/// Collects every received diagnostic without printing it.
#[derive(Debug)]
pub struct SilentHandler<T> {
    received: RefCell<Vec<T>>,
}

impl<T> Default for SilentHandler<T> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<T> SilentHandler<T> {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the handler and returns the collected diagnostics in order of arrival.
    #[must_use]
    pub fn into_received(self) -> Vec<T> {
        self.received.into_inner()
    }

    /// Number of diagnostics collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    /// Whether no diagnostic has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }
}

impl<T> Handler<T> for SilentHandler<T> {
    fn receive(&self, error: T) {
        self.received.borrow_mut().push(error);
    }
}

/// Drops every received diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}
}
