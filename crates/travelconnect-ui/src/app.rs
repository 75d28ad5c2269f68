//! Main application component
//!
//! Provides the session context and mounts the router.

use leptos::prelude::*;

use crate::router::AppRouter;
use crate::state::AuthContext;

/// Root component: seeds the session from storage and provides it.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AuthContext::from_storage());

    view! {
        <div class="app-container">
            <main class="app-main">
                <AppRouter />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        let _component = App;
    }
}
