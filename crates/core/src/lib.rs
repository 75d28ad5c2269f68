//! Core view model for the TravelConnect home dashboard.
//!
//! Everything here is platform-neutral: the screen is described as a
//! [`ViewNode`] tree with semantic styles and data-valued tap [`Intent`]s,
//! and the session and router are injected through traits. The Leptos
//! frontend and the terminal outline are two backends over the same tree.
//!
//! ## Module Structure
//! - `screen`: the home screen and its stable element ids
//! - `view`: the declarative view tree
//! - `style`, `stylesheet`: semantic styles and the named style classes
//! - `icon`: icon references and the registry they resolve against
//! - `session`, `router`, `route`, `intent`: injected collaborators
//! - `data`: the fixed records shown on screen
//! - `render`: terminal outline backend
//! - `config`: TOML configuration
//! - `error`, `result`: error handling

#![forbid(unsafe_code)]

pub mod config;
pub mod data;
pub mod error;
pub mod icon;
pub mod intent;
pub mod render;
pub mod result;
pub mod route;
pub mod router;
pub mod screen;
pub mod session;
pub mod style;
pub mod stylesheet;
pub mod view;

pub use config::ScreenConfig;
pub use error::Error;
pub use icon::{IconId, IconRef, IconRegistry, Ionicons};
pub use intent::Intent;
pub use render::{OutlineOptions, render_outline};
pub use result::Result;
pub use route::{RoutePath, routes};
pub use router::Router;
pub use screen::HomeScreen;
pub use session::{SessionReader, StaticSession, User, display_identity};
pub use style::{Color, Length, Style, StyleProp, StyleValue, Viewport};
pub use stylesheet::StyleClass;
pub use view::{Content, NodeKind, ViewNode};

#[cfg(test)]
mod tests;
