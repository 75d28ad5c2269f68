//! Leptos 0.7 CSR frontend for the TravelConnect home dashboard
//!
//! The screen itself is built by `travelconnect-core` as a view tree; this
//! crate interprets that tree in the DOM.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Tap intents dispatched through `leptos_router`
//! - Session seeded from `localStorage`
//!
//! ## Module Structure
//! - `app`: root component and session context
//! - `router`: routes and the navigation adapter
//! - `pages`: one component per route
//! - `render`: view tree to DOM
//! - `state`: session state
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod app;
pub mod error;
pub mod log;
pub mod pages;
pub mod render;
pub mod router;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
