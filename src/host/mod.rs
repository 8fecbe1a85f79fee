//! Host environment seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller and the direction detector never touch `web_sys` directly.
//! They talk to the page through these traits, implemented by [`browser`]
//! under the `hydrate` feature and by [`memory`] everywhere else (tests,
//! server-side rendering).
//!
//! All methods take `&self`: browser handles are reference types, and the
//! in-memory fakes use interior mutability to match.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

/// Failure reported by a host implementation.
///
/// None of these are fatal. Callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Storage is disabled or blocked (private mode, sandboxed frame).
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// Storage exists but the read or write threw.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// Setting an attribute on an element failed.
    #[error("failed to set attribute {name}: {reason}")]
    Attribute { name: String, reason: String },
    /// A required element is not in the document.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// Visible text could not be read.
    #[error("visible text unavailable: {0}")]
    TextUnavailable(String),
}

/// Origin-scoped key/value storage for the theme preference.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when storage is unavailable or throws.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when storage is unavailable or throws.
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The root document element (`<html>`).
pub trait DocumentRoot {
    /// Current attribute value, `None` when unset.
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`HostError::Attribute`] when the host rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;
}

/// The optional button that toggles the theme.
pub trait ToggleControl {
    /// Update the control's accessible label.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Attribute`] when the host rejects the write.
    fn set_label(&self, label: &str) -> Result<(), HostError>;

    /// Register `handler` to run on every activation (click).
    fn on_activate(&self, handler: Box<dyn FnMut()>);
}

/// Source of the page's visible text.
pub trait TextSource {
    /// # Errors
    ///
    /// Returns [`HostError`] when the text cannot be read.
    fn visible_text(&self) -> Result<String, HostError>;
}
