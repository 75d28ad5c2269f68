//! Behavioral tests for the welcome card identity line

use crate::screen::{HomeScreen, ids};
use crate::session::{StaticSession, User};

fn rendered_identity<S: crate::session::SessionReader>(session: S) -> String {
    let tree = HomeScreen::new(session).render();
    tree.find(ids::WELCOME_EMAIL)
        .and_then(|node| node.text_value())
        .map(str::to_string)
        .unwrap()
}

// ============================================================================
// SIGNED-OUT BEHAVIORS
// ============================================================================

#[test]
fn given_no_user_when_rendering_then_welcome_shows_signed_in_fallback() {
    assert_eq!(rendered_identity(StaticSession::signed_out()), "Signed in");
}

#[test]
fn given_no_session_provider_when_rendering_then_fallback_is_used() {
    let missing_provider = || None::<User>;
    assert_eq!(rendered_identity(missing_provider), "Signed in");
}

#[test]
fn given_user_with_empty_email_when_rendering_then_fallback_is_used() {
    assert_eq!(rendered_identity(Some(User::new(""))), "Signed in");
}

// ============================================================================
// SIGNED-IN BEHAVIORS
// ============================================================================

#[test]
fn given_signed_in_user_when_rendering_then_welcome_shows_email_verbatim() {
    let email = "Ada.Lovelace+trips@Example.org";
    assert_eq!(rendered_identity(StaticSession::signed_in(email)), email);
}

#[test]
fn given_session_that_changes_when_rendering_twice_then_each_render_reads_afresh() {
    let current = std::cell::RefCell::new(None::<User>);
    let screen = HomeScreen::new(|| current.borrow().clone());

    let before = screen.identity_line();
    *current.borrow_mut() = Some(User::new("late@signin.io"));
    let after = screen.identity_line();

    assert_eq!(before, "Signed in");
    assert_eq!(after, "late@signin.io");
}

#[test]
fn given_signed_in_user_when_rendering_then_greeting_precedes_email() {
    let tree = HomeScreen::new(StaticSession::signed_in("a@b.co")).render();
    let welcome = tree.find(ids::WELCOME).unwrap();
    let texts = welcome.text_content();

    let greeting = texts.iter().position(|t| *t == "Welcome back!").unwrap();
    let email = texts.iter().position(|t| *t == "a@b.co").unwrap();
    assert!(greeting < email);
}
