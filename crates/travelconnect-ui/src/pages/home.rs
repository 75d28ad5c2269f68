//! Home dashboard page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use travelconnect_core::{HomeScreen, SessionReader, User};

use crate::render::{Renderer, current_viewport};
use crate::router::LeptosRouter;
use crate::state::AuthContext;

/// Home page: renders the core home screen tree.
///
/// The session is read once per mount. Without an `AuthContext` the
/// welcome card shows the signed-out fallback.
#[component]
pub fn Home() -> impl IntoView {
    let auth = use_context::<AuthContext>();
    let session = move || -> Option<User> { auth.and_then(|ctx| ctx.current_user()) };

    let renderer = Renderer::new(LeptosRouter::new(use_navigate()), current_viewport());
    renderer.render(&HomeScreen::new(session).render())
}
