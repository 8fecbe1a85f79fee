//! Theme preference controller.
//!
//! Reads the stored preference on load, mirrors it onto the root element,
//! and flips both on every click of the toggle control.
//!
//! DESIGN
//! ======
//! `toggle` derives the active theme from the root attribute, not from
//! storage, so a click always moves away from what is on screen even when
//! the two have drifted. Storage failures are logged and skipped; the
//! attribute still changes for the rest of the session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::host::{DocumentRoot, PreferenceStore, ToggleControl};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, D, C> {
    store: S,
    root: D,
    control: Option<C>,
    storage_key: String,
    attribute: String,
    update_label: bool,
    system: Option<Theme>,
}

impl<S, D, C> ThemeController<S, D, C>
where
    S: PreferenceStore,
    D: DocumentRoot,
    C: ToggleControl,
{
    /// Build a controller. `control` is `None` when the page has no toggle
    /// button; the theme is still applied from storage.
    pub fn new(config: &ThemeConfig, store: S, root: D, control: Option<C>) -> Self {
        Self {
            store,
            root,
            control,
            storage_key: config.storage_key.clone(),
            attribute: config.theme_attribute.clone(),
            update_label: config.update_label,
            system: None,
        }
    }

    /// System color scheme to fall back on when nothing is stored.
    ///
    /// Only set this when `follow_system` is enabled.
    #[must_use]
    pub fn with_system_theme(mut self, system: Option<Theme>) -> Self {
        self.system = system;
        self
    }

    /// Apply the stored preference, if any.
    ///
    /// Returns the theme that was applied. Never writes storage, so calling
    /// it again with the same stored value is a no-op.
    pub fn initialize(&mut self) -> Option<Theme> {
        let theme = self.stored().or(self.system)?;
        self.apply(theme);
        Some(theme)
    }

    /// Flip the theme currently on the root element and persist the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().opposite();
        self.apply(next);
        if let Err(e) = self.store.set(&self.storage_key, next.as_str()) {
            log::warn!("theme: could not persist {next}: {e}");
        }
        next
    }

    /// Theme shown right now. Unset or unrecognized attributes read as light.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.root
            .attribute(&self.attribute)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    #[must_use]
    pub fn root(&self) -> &D {
        &self.root
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored(&self) -> Option<Theme> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("theme: could not read preference: {e}");
                return None;
            }
        };
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::debug!("theme: ignoring unrecognized stored value {raw:?}");
        }
        theme
    }

    fn apply(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            log::warn!("theme: could not apply {theme}: {e}");
        }
        if !self.update_label {
            return;
        }
        if let Some(control) = &self.control {
            if let Err(e) = control.set_label(theme.toggle_label()) {
                log::debug!("theme: could not update toggle label: {e}");
            }
        }
    }
}

impl<S, D, C> ThemeController<S, D, C>
where
    S: PreferenceStore + 'static,
    D: DocumentRoot + 'static,
    C: ToggleControl + 'static,
{
    /// Initialize, then wire the toggle control's activation to [`Self::toggle`].
    ///
    /// The click handler is registered only after the stored preference has
    /// been applied. Without a control nothing is wired.
    pub fn install(mut self) -> Rc<RefCell<Self>> {
        let applied = self.initialize();
        log::debug!("theme: initialized with {applied:?}");

        let shared = Rc::new(RefCell::new(self));
        let handle = Rc::clone(&shared);
        if let Some(control) = &shared.borrow().control {
            control.on_activate(Box::new(move || {
                let next = handle.borrow_mut().toggle();
                log::debug!("theme: toggled to {next}");
            }));
        } else {
            log::debug!("theme: no toggle control, click handling disabled");
        }
        shared
    }
}
