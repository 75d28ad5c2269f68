//! Session context seam.
//!
//! The signed-in identity is read through [`SessionReader`], which the host
//! passes to the screen instead of the screen reaching into ambient state.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Text shown in place of the email when nobody is signed in.
pub const SIGNED_IN_FALLBACK: &str = "Signed in";

/// The signed-in user as exposed by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Decode a persisted session record (`{"email": "..."}`).
    ///
    /// # Errors
    ///
    /// Returns `Error::JsonParseFailed` if the payload is not a user record.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| Error::json_parse_failed(e.to_string()))
    }
}

/// Synchronous, side-effect free read of the current user.
pub trait SessionReader {
    /// `None` before sign-in or when no session provider is mounted.
    fn current_user(&self) -> Option<User>;
}

impl SessionReader for Option<User> {
    fn current_user(&self) -> Option<User> {
        self.clone()
    }
}

impl<F> SessionReader for F
where
    F: Fn() -> Option<User>,
{
    fn current_user(&self) -> Option<User> {
        self()
    }
}

/// A session fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    user: Option<User>,
}

impl StaticSession {
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn signed_in(email: impl Into<String>) -> Self {
        Self {
            user: Some(User::new(email)),
        }
    }
}

impl SessionReader for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

/// Identity line for the welcome card.
///
/// An empty email counts as absent.
#[must_use]
pub fn display_identity(user: Option<&User>) -> String {
    user.map(|u| u.email.as_str())
        .filter(|email| !email.is_empty())
        .unwrap_or(SIGNED_IN_FALLBACK)
        .to_string()
}
