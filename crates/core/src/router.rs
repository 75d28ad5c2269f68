//! Navigation seam.
//!
//! The home screen never navigates by itself: it hands a [`RoutePath`] to a
//! host-supplied router and forgets about it.

use crate::route::RoutePath;

/// Navigation service owned by the host application.
///
/// Calls are fire-and-forget. Unknown paths and transition failures are the
/// implementor's concern.
pub trait Router {
    /// Request a transition to `path`.
    fn navigate(&self, path: &RoutePath);
}

impl<F> Router for F
where
    F: Fn(&RoutePath),
{
    fn navigate(&self, path: &RoutePath) {
        self(path);
    }
}
