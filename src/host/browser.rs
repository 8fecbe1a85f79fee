//! `web-sys` bindings for the host traits. Requires a browser environment.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Storage, Window};

use super::{DocumentRoot, HostError, PreferenceStore, TextSource, ToggleControl};
use crate::theme::Theme;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, or nothing when the browser blocks it.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn local(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("theme: localStorage blocked: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        let storage = self.storage.as_ref().ok_or(HostError::StorageUnavailable)?;
        storage.get_item(key).map_err(|e| HostError::Storage(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = self.storage.as_ref().ok_or(HostError::StorageUnavailable)?;
        storage.set_item(key, value).map_err(|e| HostError::Storage(describe(&e)))
    }
}

/// `document.documentElement`.
pub struct BrowserRoot {
    element: Element,
}

impl BrowserRoot {
    /// # Errors
    ///
    /// Returns [`HostError::MissingElement`] for a document without a root.
    pub fn of(document: &Document) -> Result<Self, HostError> {
        let element = document.document_element().ok_or(HostError::MissingElement("html"))?;
        Ok(Self { element })
    }
}

impl DocumentRoot for BrowserRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| HostError::Attribute { name: name.to_owned(), reason: describe(&e) })
    }
}

/// The toggle button, looked up by id.
pub struct BrowserControl {
    element: Element,
}

impl BrowserControl {
    /// `None` when the page has no element with `id`.
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(|element| Self { element })
    }
}

impl ToggleControl for BrowserControl {
    fn set_label(&self, label: &str) -> Result<(), HostError> {
        self.element
            .set_attribute("aria-label", label)
            .map_err(|e| HostError::Attribute { name: "aria-label".into(), reason: describe(&e) })
    }

    fn on_activate(&self, mut handler: Box<dyn FnMut()>) {
        let cb = Closure::<dyn FnMut()>::new(move || handler());
        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            log::warn!("theme: could not wire toggle control: {}", describe(&e));
            return;
        }
        // The listener lives as long as the page.
        cb.forget();
    }
}

/// `document.body.innerText`.
pub struct BodyText {
    document: Document,
}

impl BodyText {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl TextSource for BodyText {
    fn visible_text(&self) -> Result<String, HostError> {
        let body = self.document.body().ok_or(HostError::MissingElement("body"))?;
        Ok(body.inner_text())
    }
}

/// Current `prefers-color-scheme`, if the browser reports one.
#[must_use]
pub fn system_theme(window: &Window) -> Option<Theme> {
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(mq)) => Some(if mq.matches() { Theme::Dark } else { Theme::Light }),
        Ok(None) => None,
        Err(e) => {
            log::debug!("theme: matchMedia failed: {}", describe(&e));
            None
        }
    }
}
