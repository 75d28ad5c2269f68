//! The TravelConnect home screen.
//!
//! [`HomeScreen`] turns the injected session plus the fixed records in
//! [`crate::data`] into a [`ViewNode`] tree. It holds no state of its own:
//! every call to [`HomeScreen::render`] reads the session afresh.

use crate::data::{
    ActivityEntry, QUICK_ACTION_COLUMN_LEN, QuickAction, RECENT_ACTIVITY, STATS, StatMetric,
    quick_action_columns,
};
use crate::icon::{IconId, IconRef, IconRegistry};
use crate::intent::Intent;
use crate::result::Result;
use crate::route::RoutePath;
use crate::session::{SessionReader, display_identity};
use crate::style::{Color, Length, Style, StyleProp, Viewport};
use crate::stylesheet::{StyleClass as C, palette};
use crate::view::{Content, ViewNode};

/// Fixed copy shown on the screen.
pub mod copy {
    pub const APP_TITLE: &str = "TravelConnect";
    pub const TAGLINE: &str = "Share contacts, connect globally";
    pub const GREETING: &str = "Welcome back!";
    pub const BANNER_TITLE: &str = "Ready to explore?";
    pub const BANNER_BODY: &str = "Connect with fellow travelers and share your journey";
    pub const QUICK_ACTIONS_TITLE: &str = "Quick Actions";
    pub const RECENT_ACTIVITY_TITLE: &str = "Recent Activity";
    pub const VIEW_ALL: &str = "View all activity";
    pub const STATS_TITLE: &str = "Your Travel Network";
}

/// Stable node ids.
pub mod ids {
    pub const SCREEN: &str = "home";
    pub const HEADER: &str = "header";
    pub const APP_TITLE: &str = "app-title";
    pub const TAGLINE: &str = "app-tagline";
    pub const SETTINGS_BUTTON: &str = "settings-button";
    pub const CONTENT: &str = "content";
    pub const WELCOME: &str = "welcome";
    pub const WELCOME_EMAIL: &str = "welcome-email";
    pub const READY_BANNER: &str = "ready-banner";
    pub const QUICK_ACTIONS: &str = "quick-actions";
    pub const RECENT_ACTIVITY: &str = "recent-activity";
    pub const VIEW_ALL_ACTIVITY: &str = "view-all-activity";
    pub const STATS: &str = "stats";

    /// Top-level sections in render order.
    pub const SECTIONS: [&str; 5] = [HEADER, WELCOME, QUICK_ACTIONS, RECENT_ACTIVITY, STATS];

    #[must_use]
    pub fn quick_action_column(column: usize) -> String {
        format!("quick-actions-column-{column}")
    }

    #[must_use]
    pub fn quick_action(index: usize) -> String {
        format!("quick-action-{index}")
    }

    #[must_use]
    pub fn activity(index: usize) -> String {
        format!("activity-{index}")
    }

    #[must_use]
    pub fn stat(index: usize) -> String {
        format!("stat-{index}")
    }
}

/// Home dashboard view model.
#[derive(Debug, Clone)]
pub struct HomeScreen<S> {
    session: S,
}

impl<S: SessionReader> HomeScreen<S> {
    pub const fn new(session: S) -> Self {
        Self { session }
    }

    /// Email of the signed-in user, or the fallback label.
    #[must_use]
    pub fn identity_line(&self) -> String {
        display_identity(self.session.current_user().as_ref())
    }

    /// Build the full view tree.
    #[must_use]
    pub fn render(&self) -> ViewNode {
        ViewNode::screen(&[C::Container])
            .with_id(ids::SCREEN)
            .with_child(header())
            .with_child(
                ViewNode::scroll(&[C::Fill])
                    .with_id(ids::CONTENT)
                    .with_child(self.welcome())
                    .with_child(quick_actions())
                    .with_child(recent_activity())
                    .with_child(stats()),
            )
    }

    /// Intent bound to the element `id`.
    ///
    /// Unknown ids and non-interactive elements yield `Intent::None`.
    #[must_use]
    pub fn tap(&self, id: &str) -> Intent {
        let tree = self.render();
        let intent = tree
            .find(id)
            .filter(|node| node.is_interactive())
            .map(|node| node.action.clone())
            .unwrap_or_default();
        tracing::debug!(target_id = id, ?intent, "tap resolved");
        intent
    }

    /// Every interactive element with its intent, in render order.
    #[must_use]
    pub fn interactions(&self) -> Vec<(String, Intent)> {
        self.render()
            .iter()
            .filter(|node| node.is_interactive())
            .filter_map(|node| node.id.clone().map(|id| (id, node.action.clone())))
            .collect()
    }

    /// Resolve every icon on the screen against `registry`.
    ///
    /// Returns the number of icons checked.
    ///
    /// # Errors
    ///
    /// Returns the registry's error for the first icon it cannot resolve.
    pub fn validate_icons(&self, registry: &dyn IconRegistry, viewport: &Viewport) -> Result<usize> {
        self.render()
            .iter()
            .filter_map(|node| match &node.content {
                Content::Icon(icon) => Some(icon),
                _ => None,
            })
            .try_fold(0_usize, |count, icon| {
                registry
                    .resolve(icon, viewport)
                    .map(|_| count.saturating_add(1))
            })
    }

    fn welcome(&self) -> ViewNode {
        let identity = ViewNode::view(&[C::Fill])
            .with_child(ViewNode::text(&[C::Welcome], copy::GREETING))
            .with_child(ViewNode::text(&[C::Email], self.identity_line()).with_id(ids::WELCOME_EMAIL));

        let avatar = ViewNode::view(&[C::Avatar]).with_child(ViewNode::icon(IconRef::new(
            IconId::from_static("person"),
            Length::Vw(6.0),
            palette::BLUE,
        )));

        let banner = ViewNode::view(&[C::GradientBox])
            .with_id(ids::READY_BANNER)
            .with_child(ViewNode::text(&[C::GradientTitle], copy::BANNER_TITLE))
            .with_child(ViewNode::text(&[C::GradientSub], copy::BANNER_BODY));

        ViewNode::view(&[C::Section]).with_id(ids::WELCOME).with_child(
            ViewNode::view(&[C::Card])
                .with_child(ViewNode::view(&[C::Row]).with_child(avatar).with_child(identity))
                .with_child(banner),
        )
    }
}

fn header() -> ViewNode {
    let titles = ViewNode::view(&[])
        .with_child(ViewNode::text(&[C::AppTitle], copy::APP_TITLE).with_id(ids::APP_TITLE))
        .with_child(ViewNode::text(&[C::SubTitle], copy::TAGLINE).with_id(ids::TAGLINE));

    let settings = ViewNode::touchable(&[C::SettingsButton], Intent::Navigate(RoutePath::settings()))
        .with_id(ids::SETTINGS_BUTTON)
        .with_child(ViewNode::icon(IconRef::new(
            IconId::from_static("settings-outline"),
            Length::Vw(5.0),
            palette::INK_SOFT,
        )));

    ViewNode::view(&[C::Header])
        .with_id(ids::HEADER)
        .with_child(
            ViewNode::view(&[C::HeaderRow])
                .with_child(titles)
                .with_child(settings),
        )
}

fn tinted_badge(class: C, background: Color, icon: &IconId, size: Length, color: Color) -> ViewNode {
    ViewNode::view(&[class])
        .with_style(&Style::new().with(StyleProp::BackgroundColor, background))
        .with_child(ViewNode::icon(IconRef::new(icon.clone(), size, color)))
}

fn quick_action_card(index: usize, action: &QuickAction) -> ViewNode {
    ViewNode::touchable(&[C::ActionCard], Intent::for_route(action.route.as_ref()))
        .with_id(ids::quick_action(index))
        .with_child(tinted_badge(
            C::ActionIcon,
            action.background,
            &action.icon,
            Length::Vw(6.0),
            action.icon_color,
        ))
        .with_child(ViewNode::text(&[C::ActionTitle], action.title))
        .with_child(ViewNode::text(&[C::ActionDesc], action.description))
}

fn quick_actions() -> ViewNode {
    let columns = quick_action_columns()
        .into_iter()
        .enumerate()
        .map(|(column, actions)| {
            let offset = column.saturating_mul(QUICK_ACTION_COLUMN_LEN);
            ViewNode::view(&[C::ActionColumn])
                .with_id(ids::quick_action_column(column))
                .with_children(
                    actions
                        .iter()
                        .enumerate()
                        .map(|(row, action)| quick_action_card(offset.saturating_add(row), action)),
                )
        });

    ViewNode::view(&[C::Section])
        .with_id(ids::QUICK_ACTIONS)
        .with_child(ViewNode::text(&[C::SectionTitle], copy::QUICK_ACTIONS_TITLE))
        .with_child(ViewNode::view(&[C::QuickActions]).with_children(columns))
}

fn activity_row(index: usize, entry: &ActivityEntry, is_last: bool) -> ViewNode {
    let classes: &[C] = if is_last {
        &[C::ActivityRow]
    } else {
        &[C::ActivityRow, C::ActivityBorder]
    };

    ViewNode::view(classes)
        .with_id(ids::activity(index))
        .with_child(tinted_badge(
            C::ActivityIcon,
            entry.background,
            &entry.icon,
            Length::Vw(4.0),
            entry.icon_color,
        ))
        .with_child(
            ViewNode::view(&[C::Fill])
                .with_child(ViewNode::text(&[C::ActivityTitle], entry.title))
                .with_child(ViewNode::text(&[C::ActivityDesc], entry.description)),
        )
        .with_child(ViewNode::text(&[C::ActivityTime], entry.relative_time))
}

fn recent_activity() -> ViewNode {
    let last = RECENT_ACTIVITY.len().saturating_sub(1);
    let rows = RECENT_ACTIVITY
        .iter()
        .enumerate()
        .map(|(index, entry)| activity_row(index, entry, index == last));

    // "View all" has no destination yet.
    let view_all = ViewNode::touchable(&[C::ViewAllButton], Intent::None)
        .with_id(ids::VIEW_ALL_ACTIVITY)
        .with_child(ViewNode::text(&[C::ViewAll], copy::VIEW_ALL));

    ViewNode::view(&[C::Section])
        .with_id(ids::RECENT_ACTIVITY)
        .with_child(ViewNode::text(&[C::SectionTitle], copy::RECENT_ACTIVITY_TITLE))
        .with_child(
            ViewNode::view(&[C::ActivityCard])
                .with_children(rows)
                .with_child(view_all),
        )
}

fn stat_item(index: usize, stat: &StatMetric) -> ViewNode {
    ViewNode::view(&[C::StatItem])
        .with_id(ids::stat(index))
        .with_child(ViewNode::text(&[C::StatsNumber], stat.value))
        .with_child(ViewNode::text(&[C::StatsLabel], stat.label))
}

fn stats() -> ViewNode {
    ViewNode::view(&[C::Section]).with_id(ids::STATS).with_child(
        ViewNode::view(&[C::StatsCard])
            .with_child(ViewNode::text(&[C::StatsTitle], copy::STATS_TITLE))
            .with_child(
                ViewNode::view(&[C::StatsRow])
                    .with_children(STATS.iter().enumerate().map(|(i, s)| stat_item(i, s))),
            ),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::icon::Ionicons;
    use crate::session::{StaticSession, User};

    #[test]
    fn test_identity_line_prefers_email() {
        let screen = HomeScreen::new(StaticSession::signed_in("me@travel.io"));
        assert_eq!(screen.identity_line(), "me@travel.io");
    }

    #[test]
    fn test_identity_line_fallback() {
        let screen = HomeScreen::new(None::<User>);
        assert_eq!(screen.identity_line(), "Signed in");
    }

    #[test]
    fn test_sections_render_in_order() {
        let tree = HomeScreen::new(StaticSession::signed_out()).render();
        let order: Vec<_> = tree
            .iter()
            .filter_map(|n| n.id.as_deref())
            .filter(|id| ids::SECTIONS.contains(id))
            .collect();
        assert_eq!(order, ids::SECTIONS);
    }

    #[test]
    fn test_settings_tap_navigates_to_settings() {
        let screen = HomeScreen::new(StaticSession::signed_out());
        assert_eq!(
            screen.tap(ids::SETTINGS_BUTTON),
            Intent::Navigate(RoutePath::settings())
        );
    }

    #[test]
    fn test_tap_on_text_is_inert() {
        let screen = HomeScreen::new(StaticSession::signed_out());
        assert_eq!(screen.tap(ids::APP_TITLE), Intent::None);
        assert_eq!(screen.tap("no-such-node"), Intent::None);
    }

    #[test]
    fn test_activity_divider_only_between_rows() {
        let tree = HomeScreen::new(StaticSession::signed_out()).render();
        assert!(tree.find("activity-0").unwrap().has_class(C::ActivityBorder));
        assert!(!tree.find("activity-1").unwrap().has_class(C::ActivityBorder));
    }

    #[test]
    fn test_quick_action_badge_uses_record_background() {
        let tree = HomeScreen::new(StaticSession::signed_out()).render();
        let card = tree.find("quick-action-4").unwrap();
        let badge = card.children.first().unwrap();
        assert_eq!(
            badge.style.get(StyleProp::BackgroundColor),
            Some(&crate::style::StyleValue::Color(Color::from_hex(0xFF_ED_D5)))
        );
    }

    #[test]
    fn test_all_icons_resolve_in_ionicons() {
        let screen = HomeScreen::new(StaticSession::signed_out());
        let count = screen
            .validate_icons(&Ionicons, &Viewport::default())
            .unwrap();
        // settings + avatar + six tiles + two activity rows
        assert_eq!(count, 10);
    }
}
