//! Fixed display records backing the home screen.
//!
//! These collections are process-wide constants. Order is significant and is
//! preserved by every consumer.

use serde::Serialize;

use crate::icon::IconId;
use crate::route::{RoutePath, routes};
use crate::style::Color;

/// A shortcut tile in the quick-action grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
    pub background: Color,
    pub icon_color: Color,
    /// Tiles without a route are inert.
    pub route: Option<RoutePath>,
}

/// A row in the recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
    pub background: Color,
    pub icon_color: Color,
    pub relative_time: &'static str,
}

/// A value/label pair in the stats summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatMetric {
    pub value: &'static str,
    pub label: &'static str,
}

/// Tiles per quick-action column.
pub const QUICK_ACTION_COLUMN_LEN: usize = 3;

pub static QUICK_ACTIONS: [QuickAction; 6] = [
    QuickAction {
        title: "Cards",
        description: "Manage your cards",
        icon: IconId::from_static("card-outline"),
        background: Color::from_hex(0xDB_EA_FE),
        icon_color: Color::from_hex(0x3B_82_F6),
        route: Some(RoutePath::from_static(routes::CARDS)),
    },
    QuickAction {
        title: "Share Contact",
        description: "Share your details with travelers",
        icon: IconId::from_static("add-circle-outline"),
        background: Color::from_hex(0xD1_FA_E5),
        icon_color: Color::from_hex(0x05_96_69),
        route: Some(RoutePath::from_static(routes::SHARING)),
    },
    QuickAction {
        title: "Find Travelers",
        description: "Discover nearby travelers",
        icon: IconId::from_static("people-outline"),
        background: Color::from_hex(0xED_E9_FE),
        icon_color: Color::from_hex(0x7C_3A_ED),
        route: None,
    },
    QuickAction {
        title: "My Connections",
        description: "View shared cards",
        icon: IconId::from_static("link-outline"),
        background: Color::from_hex(0xF3_E8_FF),
        icon_color: Color::from_hex(0x8B_5C_F6),
        route: Some(RoutePath::from_static(routes::CONNECTIONS)),
    },
    QuickAction {
        title: "My Location",
        description: "Update your current location",
        icon: IconId::from_static("location-outline"),
        background: Color::from_hex(0xFF_ED_D5),
        icon_color: Color::from_hex(0xEA_58_0C),
        route: None,
    },
    QuickAction {
        title: "Messages",
        description: "Chat with connections",
        icon: IconId::from_static("chatbubbles-outline"),
        background: Color::from_hex(0xFC_E7_F3),
        icon_color: Color::from_hex(0xDB_27_77),
        route: None,
    },
];

pub static RECENT_ACTIVITY: [ActivityEntry; 2] = [
    ActivityEntry {
        title: "New connection",
        description: "Someone saved your contact",
        icon: IconId::from_static("person-add"),
        background: Color::from_hex(0xDB_EA_FE),
        icon_color: Color::from_hex(0x3B_82_F6),
        relative_time: "2h ago",
    },
    ActivityEntry {
        title: "Location updated",
        description: "Now visible to nearby travelers",
        icon: IconId::from_static("location"),
        background: Color::from_hex(0xD1_FA_E5),
        icon_color: Color::from_hex(0x05_96_69),
        relative_time: "1d ago",
    },
];

pub static STATS: [StatMetric; 3] = [
    StatMetric {
        value: "12",
        label: "Connections",
    },
    StatMetric {
        value: "5",
        label: "Countries",
    },
    StatMetric {
        value: "28",
        label: "Interactions",
    },
];

/// The quick-action tiles split into their two layout columns.
#[must_use]
pub fn quick_action_columns() -> [&'static [QuickAction]; 2] {
    let (left, right) = QUICK_ACTIONS.split_at(QUICK_ACTION_COLUMN_LEN);
    [left, right]
}
