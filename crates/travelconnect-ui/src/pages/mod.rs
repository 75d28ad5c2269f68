//! Page components for the TravelConnect UI
//!
//! One component per route. Only the home dashboard is fully built; the
//! destinations it links to are placeholders.

pub mod home;
pub mod not_found;
pub mod placeholder;
pub mod settings;

pub use home::Home;
pub use not_found::NotFound;
pub use placeholder::{Cards, Connections, Sharing};
pub use settings::Settings;
