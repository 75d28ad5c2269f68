//! Interaction intents.
//!
//! Every tappable element carries an [`Intent`] value instead of a callback,
//! so the mapping from element to effect can be inspected without a UI.

use serde::{Deserialize, Serialize};

use crate::route::RoutePath;
use crate::router::Router;

/// What tapping an element asks the host to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "snake_case")]
pub enum Intent {
    /// Inert element.
    #[default]
    None,
    /// Navigate to the given path.
    Navigate(RoutePath),
}

impl Intent {
    /// `Navigate` when a route is defined, otherwise `None`.
    #[must_use]
    pub fn for_route(route: Option<&RoutePath>) -> Self {
        route.map_or(Self::None, |r| Self::Navigate(r.clone()))
    }

    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn route(&self) -> Option<&RoutePath> {
        match self {
            Self::Navigate(route) => Some(route),
            Self::None => None,
        }
    }

    /// Hand the intent to `router`.
    ///
    /// Returns `true` when a navigation was issued. `None` never touches the
    /// router.
    pub fn dispatch(&self, router: &dyn Router) -> bool {
        match self {
            Self::Navigate(route) => {
                tracing::debug!(route = %route, "dispatching navigation intent");
                router.navigate(route);
                true
            }
            Self::None => {
                tracing::trace!("ignoring inert intent");
                false
            }
        }
    }
}
