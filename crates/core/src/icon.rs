//! Icon references and the registry that resolves them.
//!
//! Screens only name icons symbolically. A registry turns a name, size, and
//! color into a [`Glyph`] a backend can draw; names it does not know are its
//! error to report.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;
use crate::style::{Color, Length, Viewport};

/// Symbolic icon name (e.g. `settings-outline`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(Cow<'static, str>);

impl IconId {
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An icon placed in the view tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRef {
    pub id: IconId,
    pub size: Length,
    pub color: Color,
}

impl IconRef {
    #[must_use]
    pub const fn new(id: IconId, size: Length, color: Color) -> Self {
        Self { id, size, color }
    }
}

/// A resolved, drawable icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub name: String,
    pub size_px: f32,
    pub color: Color,
}

/// Resolves symbolic icons into glyphs.
pub trait IconRegistry {
    /// # Errors
    ///
    /// Returns `Error::UnknownIcon` when the name is outside the registry.
    fn resolve(&self, icon: &IconRef, viewport: &Viewport) -> Result<Glyph>;

    fn contains(&self, id: &IconId) -> bool;
}

/// The Ionicons names available to the app.
///
/// Sorted; lookups use binary search.
const IONICONS: &[&str] = &[
    "add-circle",
    "add-circle-outline",
    "airplane",
    "airplane-outline",
    "card",
    "card-outline",
    "chatbubbles",
    "chatbubbles-outline",
    "globe",
    "globe-outline",
    "home",
    "home-outline",
    "link",
    "link-outline",
    "location",
    "location-outline",
    "log-out-outline",
    "map",
    "map-outline",
    "notifications-outline",
    "people",
    "people-outline",
    "person",
    "person-add",
    "person-add-outline",
    "person-outline",
    "qr-code-outline",
    "search-outline",
    "settings",
    "settings-outline",
    "share-social-outline",
];

/// Registry backed by the Ionicons name set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ionicons;

impl Ionicons {
    /// Every known icon name.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        IONICONS
    }
}

impl IconRegistry for Ionicons {
    fn resolve(&self, icon: &IconRef, viewport: &Viewport) -> Result<Glyph> {
        if !self.contains(&icon.id) {
            tracing::warn!(icon = %icon.id, "icon not in registry");
            return Err(Error::unknown_icon(icon.id.as_str()));
        }

        Ok(Glyph {
            name: icon.id.as_str().to_string(),
            size_px: viewport.resolve(icon.size),
            color: icon.color,
        })
    }

    fn contains(&self, id: &IconId) -> bool {
        IONICONS
            .binary_search_by(|probe| (*probe).cmp(id.as_str()))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_ionicons_table_is_sorted_and_unique() {
        let names = Ionicons::names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_resolve_known_icon() {
        let icon = IconRef::new(
            IconId::from_static("settings-outline"),
            Length::Vw(5.0),
            Color::from_hex(0x37_41_51),
        );
        let glyph = Ionicons
            .resolve(&icon, &Viewport::new(400.0, 800.0, 1.0))
            .unwrap();

        assert_eq!(glyph.name, "settings-outline");
        assert_eq!(glyph.size_px, 20.0);
        assert_eq!(glyph.color.to_hex(), "#374151");
    }

    #[test]
    fn test_resolve_unknown_icon_is_registry_error() {
        let icon = IconRef::new(IconId::new("unicorn"), Length::Px(16.0), Color::BLACK);
        let err = Ionicons.resolve(&icon, &Viewport::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownIcon { ref name } if name == "unicorn"));
    }
}
