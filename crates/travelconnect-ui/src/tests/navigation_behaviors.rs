//! Behavioral tests for intent-driven navigation

use std::cell::RefCell;

use leptos_router::NavigateOptions;
use travelconnect_core::screen::ids;
use travelconnect_core::{HomeScreen, StaticSession};

use crate::router::{LeptosRouter, routes};

fn recorded_taps(target_ids: &[&str]) -> Vec<String> {
    let seen = RefCell::new(Vec::new());
    let router = LeptosRouter::new(|path: &str, _options: NavigateOptions| {
        seen.borrow_mut().push(path.to_string());
    });
    let screen = HomeScreen::new(StaticSession::signed_out());

    for id in target_ids {
        screen.tap(id).dispatch(&router);
    }
    seen.into_inner()
}

#[test]
fn given_settings_button_when_tapped_then_leptos_navigates_to_settings() {
    assert_eq!(recorded_taps(&[ids::SETTINGS_BUTTON]), [routes::SETTINGS]);
}

#[test]
fn given_routed_quick_actions_when_tapped_then_each_navigates_once() {
    let taps = [
        ids::quick_action(0),
        ids::quick_action(1),
        ids::quick_action(3),
    ];
    let targets: Vec<&str> = taps.iter().map(String::as_str).collect();

    assert_eq!(
        recorded_taps(&targets),
        [routes::CARDS, routes::SHARING, routes::CONNECTIONS]
    );
}

#[test]
fn given_inert_elements_when_tapped_then_router_is_untouched() {
    let taps = [
        ids::quick_action(2),
        ids::quick_action(4),
        ids::quick_action(5),
    ];
    let mut targets: Vec<&str> = taps.iter().map(String::as_str).collect();
    targets.push(ids::VIEW_ALL_ACTIVITY);

    assert!(recorded_taps(&targets).is_empty());
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let all = [
        routes::HOME,
        routes::SETTINGS,
        routes::CARDS,
        routes::SHARING,
        routes::CONNECTIONS,
    ];
    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "All routes should be unique");
}
