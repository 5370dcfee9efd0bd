//! Visual surfaces that reflect the active theme.

use std::cell::RefCell;

use crate::model::ThemeId;

/// Attribute on the document element that stylesheets key theme tokens from.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Target that the active theme is applied to.
pub trait ThemeSurface {
    /// Applies `theme`. Returns `false` when it was already active and nothing changed.
    fn apply_theme(&self, theme: ThemeId) -> bool;

    /// Returns the theme token currently applied, if any.
    fn applied_theme(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Sets [`THEME_ATTRIBUTE`] on `document.documentElement`.
pub struct DocumentThemeSurface;

impl ThemeSurface for DocumentThemeSurface {
    fn apply_theme(&self, theme: ThemeId) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            else {
                return false;
            };
            if root.get_attribute(THEME_ATTRIBUTE).as_deref() == Some(theme.as_str()) {
                return false;
            }
            if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                leptos::logging::warn!("apply theme `{}` failed: {err:?}", theme.as_str());
                return false;
            }
            true
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
            false
        }
    }

    fn applied_theme(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
                .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

#[derive(Debug, Default)]
/// In-memory surface that records every attribute write.
pub struct MemoryThemeSurface {
    applied: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryThemeSurface {
    /// Number of times the attribute was actually written.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl ThemeSurface for MemoryThemeSurface {
    fn apply_theme(&self, theme: ThemeId) -> bool {
        if self.applied.borrow().as_deref() == Some(theme.as_str()) {
            return false;
        }
        *self.applied.borrow_mut() = Some(theme.as_str().to_string());
        *self.writes.borrow_mut() += 1;
        true
    }

    fn applied_theme(&self) -> Option<String> {
        self.applied.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplying_the_active_theme_is_a_no_op() {
        let surface = MemoryThemeSurface::default();

        assert!(surface.apply_theme(ThemeId::Pink));
        assert!(!surface.apply_theme(ThemeId::Pink));
        assert_eq!(surface.applied_theme().as_deref(), Some("pink"));
        assert_eq!(surface.writes(), 1);

        assert!(surface.apply_theme(ThemeId::Dark));
        assert_eq!(surface.writes(), 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn document_surface_is_inert_off_wasm() {
        assert!(!DocumentThemeSurface.apply_theme(ThemeId::Ocean));
        assert_eq!(DocumentThemeSurface.applied_theme(), None);
    }
}
