//! Host colour mode, read once and handed to the widget explicitly.
//!
//! Resolution order: the site's `theme` entry in `localStorage`, then the
//! `data-theme` attribute on `<html>`, then `prefers-color-scheme`.
//! Requires a browser environment; elsewhere the default (light) is used.
//!
//! TRADE-OFFS
//! ==========
//! The widget never looks this up itself. A host that cannot read a
//! preference simply omits the property and gets the light palette.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Parse a stored or attribute value (`"dark"` / `"light"`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Read the host page's colour mode.
pub fn read_preference() -> ColorMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ColorMode::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ColorMode::parse(&val) {
                    return mode;
                }
            }
        }

        let attr = window
            .document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("data-theme"));
        if let Some(mode) = attr.as_deref().and_then(ColorMode::parse) {
            return mode;
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ColorMode::Dark } else { ColorMode::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ColorMode::default()
    }
}
