//! Destinations linked from the quick actions, not yet built out

use leptos::prelude::*;
use travelconnect_core::routes;

#[component]
fn Placeholder(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1>{title}</h1>
            <p>{blurb}</p>
            <a href=routes::HOME>"Back to Home"</a>
        </div>
    }
}

#[component]
pub fn Cards() -> impl IntoView {
    view! { <Placeholder title="Cards" blurb="Manage your cards" /> }
}

#[component]
pub fn Sharing() -> impl IntoView {
    view! { <Placeholder title="Share Contact" blurb="Share your details with travelers" /> }
}

#[component]
pub fn Connections() -> impl IntoView {
    view! { <Placeholder title="My Connections" blurb="View shared cards" /> }
}
