//! Application state
//!
//! The session is the only runtime-varying state. It lives in an
//! [`AuthContext`] provided at the app root and is read through the core
//! `SessionReader` seam.

pub mod auth;

pub use auth::{AuthContext, SESSION_STORAGE_KEY, decode_session, encode_session};
