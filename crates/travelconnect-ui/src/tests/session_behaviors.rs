//! Behavioral tests for the session context

use travelconnect_core::screen::ids;
use travelconnect_core::{HomeScreen, SessionReader, User};

use crate::state::{AuthContext, decode_session};

fn welcome_email<S: SessionReader>(session: S) -> String {
    HomeScreen::new(session)
        .render()
        .find(ids::WELCOME_EMAIL)
        .and_then(|node| node.text_value())
        .map(str::to_string)
        .unwrap()
}

#[test]
fn given_signed_in_context_when_rendering_home_then_email_is_shown() {
    let auth = AuthContext::new(Some(User::new("kai@trip.io")));
    assert_eq!(welcome_email(auth), "kai@trip.io");
}

#[test]
fn given_signed_out_context_when_rendering_home_then_fallback_is_shown() {
    assert_eq!(welcome_email(AuthContext::new(None)), "Signed in");
}

#[test]
fn given_missing_context_when_rendering_home_then_fallback_is_shown() {
    let auth: Option<AuthContext> = None;
    let session = move || auth.and_then(|ctx| ctx.current_user());
    assert_eq!(welcome_email(session), "Signed in");
}

#[test]
fn given_stored_record_when_decoded_then_session_user_matches() {
    let user = decode_session(r#"{"email":"noor@trip.io"}"#).unwrap();
    assert_eq!(welcome_email(Some(user)), "noor@trip.io");
}

#[test]
fn given_corrupt_record_when_seeding_then_home_shows_fallback() {
    let auth = AuthContext::new(decode_session(r#"{"mail":"x"}"#));
    assert_eq!(welcome_email(auth), "Signed in");
}
