//! Router configuration for the TravelConnect UI
//!
//! Declares the routes and adapts `leptos_router` navigation to the core
//! `Router` seam so view-tree intents can drive it.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router as LeptosRouterRoot, Routes},
};
use travelconnect_core::{RoutePath, Router};

use crate::log;
use crate::pages::{Cards, Connections, Home, NotFound, Settings, Sharing};

/// Route definitions shared with the core view model
pub use travelconnect_core::routes;

/// Core `Router` backed by a `leptos_router` navigate function.
#[derive(Clone)]
pub struct LeptosRouter<N> {
    navigate: N,
}

impl<N> LeptosRouter<N>
where
    N: Fn(&str, NavigateOptions),
{
    pub const fn new(navigate: N) -> Self {
        Self { navigate }
    }
}

impl<N> Router for LeptosRouter<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &RoutePath) {
        log::debug(&format!("navigate {path}"));
        (self.navigate)(path.as_str(), NavigateOptions::default());
    }
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <LeptosRouterRoot>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
                <Route path=StaticSegment("settings") view=Settings />
                <Route path=StaticSegment("cards") view=Cards />
                <Route path=StaticSegment("sharing") view=Sharing />
                <Route path=StaticSegment("connections") view=Connections />
            </Routes>
        </LeptosRouterRoot>
    }
}
