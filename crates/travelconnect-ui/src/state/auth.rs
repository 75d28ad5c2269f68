//! Session context backed by `localStorage`.

use leptos::prelude::*;
use travelconnect_core::{SessionReader, User};

use crate::error::{Result, UiError};
use crate::log;

/// Storage key holding the JSON session record (`{"email": "..."}`).
pub const SESSION_STORAGE_KEY: &str = "travelconnect.session";

/// Reactive holder of the signed-in user.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<User>>,
}

impl AuthContext {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: RwSignal::new(user),
        }
    }

    /// Seed from `localStorage`, signed out when nothing valid is stored.
    pub fn from_storage() -> Self {
        let payload = load_payload().unwrap_or_else(|err| {
            log::warn(&format!("session storage unavailable: {err}"));
            None
        });
        Self::new(payload.as_deref().and_then(decode_session))
    }

    /// Current user, tracked by the reactive graph.
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn sign_in(&self, user: User) {
        if let Err(err) = store_session(Some(&user)) {
            log::warn(&format!("session not persisted: {err}"));
        }
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        if let Err(err) = store_session(None) {
            log::warn(&format!("session not cleared: {err}"));
        }
        self.user.set(None);
    }
}

impl SessionReader for AuthContext {
    fn current_user(&self) -> Option<User> {
        self.user.get_untracked()
    }
}

/// Decode a stored session record; malformed records count as signed out.
pub fn decode_session(payload: &str) -> Option<User> {
    User::from_json(payload)
        .map_err(|err| log::warn(&format!("ignoring malformed session record: {err}")))
        .ok()
}

/// Encode a user as a session record.
///
/// # Errors
///
/// Returns `UiError::InvalidSession` if serialization fails.
pub fn encode_session(user: &User) -> Result<String> {
    serde_json::to_string(user).map_err(|e| UiError::InvalidSession(e.to_string()))
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or(UiError::WindowUnavailable)?
        .local_storage()
        .map_err(|e| UiError::StorageUnavailable(format!("{e:?}")))?
        .ok_or_else(|| UiError::StorageUnavailable("no storage object".to_string()))
}

fn load_payload() -> Result<Option<String>> {
    local_storage()?
        .get_item(SESSION_STORAGE_KEY)
        .map_err(|e| UiError::StorageFailed(format!("{e:?}")))
}

fn store_session(user: Option<&User>) -> Result<()> {
    let storage = local_storage()?;
    match user {
        Some(user) => storage.set_item(SESSION_STORAGE_KEY, &encode_session(user)?),
        None => storage.remove_item(SESSION_STORAGE_KEY),
    }
    .map_err(|e| UiError::StorageFailed(format!("{e:?}")))
}
