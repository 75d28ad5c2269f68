//! Settings page: shows and edits the session identity

use leptos::prelude::*;
use travelconnect_core::{User, display_identity, routes};

use crate::state::AuthContext;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let auth = use_context::<AuthContext>();
    let (draft, set_draft) = signal(String::new());

    let identity = move || display_identity(auth.and_then(|ctx| ctx.user()).as_ref());

    let sign_in = move |_| {
        let email = draft.get_untracked().trim().to_string();
        if let (Some(ctx), false) = (auth, email.is_empty()) {
            ctx.sign_in(User::new(email));
            set_draft.set(String::new());
        }
    };

    let sign_out = move |_| {
        if let Some(ctx) = auth {
            ctx.sign_out();
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <p class="settings-identity">{identity}</p>
            <div class="settings-form">
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="button" on:click=sign_in>"Sign in"</button>
                <button type="button" on:click=sign_out>"Sign out"</button>
            </div>
            <a href=routes::HOME>"Back to Home"</a>
        </div>
    }
}
