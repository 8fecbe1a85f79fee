//! In-memory host implementations.
//!
//! Used by the unit tests and by any non-browser caller that wants to run
//! the controller (for example to pre-compute attributes during server
//! rendering).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{DocumentRoot, HostError, PreferenceStore, TextSource, ToggleControl};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// `localStorage` stand-in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write, like disabled storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: RefCell::default(), unavailable: true }
    }

    /// Builder: pre-populate `key`.
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Raw stored value, bypassing availability.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Root element stand-in holding a flat attribute map.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    attributes: RefCell<HashMap<String, String>>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pre-set `name`, as page markup would.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        self
    }
}

impl DocumentRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

type Handler = Box<dyn FnMut()>;

#[derive(Default)]
struct ControlInner {
    label: RefCell<Option<String>>,
    handlers: RefCell<Vec<Handler>>,
}

/// Toggle button stand-in. Clones share the same button, so a test can keep
/// one handle while the controller owns another.
#[derive(Clone, Default)]
pub struct MemoryControl {
    inner: Rc<ControlInner>,
}

impl MemoryControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every registered handler once, as a click would.
    pub fn click(&self) {
        let mut running = self.inner.handlers.take();
        for handler in &mut running {
            handler();
        }
        // Handlers registered during the click go after the existing ones.
        let mut slot = self.inner.handlers.borrow_mut();
        running.append(&mut slot);
        *slot = running;
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.inner.label.borrow().clone()
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

impl ToggleControl for MemoryControl {
    fn set_label(&self, label: &str) -> Result<(), HostError> {
        *self.inner.label.borrow_mut() = Some(label.to_owned());
        Ok(())
    }

    fn on_activate(&self, handler: Box<dyn FnMut()>) {
        self.inner.handlers.borrow_mut().push(handler);
    }
}

/// Fixed visible text, or a fixed failure.
#[derive(Debug, Clone)]
pub struct MemoryText {
    text: Result<String, String>,
}

impl MemoryText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Ok(text.into()) }
    }

    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self { text: Err(reason.into()) }
    }
}

impl TextSource for MemoryText {
    fn visible_text(&self) -> Result<String, HostError> {
        self.text.clone().map_err(HostError::TextUnavailable)
    }
}
