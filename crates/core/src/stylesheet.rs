//! Named styles for the home screen.
//!
//! Each [`StyleClass`] is a semantic name with a fixed [`Style`]. Lengths are
//! responsive (`Vw`/`Vh`) so every backend scales them against its own
//! viewport.

use serde::{Deserialize, Serialize};

use crate::style::{Color, Keyword, Length, Style, StyleProp as P, StyleValue};

/// Shared palette.
pub mod palette {
    use crate::style::Color;

    pub const SCREEN_BACKGROUND: Color = Color::from_hex(0xF0_F4_FF);
    pub const SURFACE: Color = Color::WHITE;
    pub const HAIRLINE: Color = Color::from_hex(0xF3_F4_F6);
    pub const INK: Color = Color::from_hex(0x11_18_27);
    pub const INK_SOFT: Color = Color::from_hex(0x37_41_51);
    pub const INK_MUTED: Color = Color::from_hex(0x4B_55_63);
    pub const INK_FAINT: Color = Color::from_hex(0x6B_72_80);
    pub const INK_GHOST: Color = Color::from_hex(0x9C_A3_AF);
    pub const BLUE: Color = Color::from_hex(0x3B_82_F6);
    pub const BLUE_PALE: Color = Color::from_hex(0xDB_EA_FE);
    pub const BLUE_MIST: Color = Color::from_hex(0xBF_DB_FE);
    pub const LINK: Color = Color::from_hex(0x25_63_EB);
    pub const INDIGO: Color = Color::from_hex(0x63_66_F1);
    pub const INDIGO_MIST: Color = Color::from_hex(0xC7_D2_FE);
}

/// Every named style used by the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    Container,
    Header,
    HeaderRow,
    AppTitle,
    SubTitle,
    SettingsButton,
    Fill,
    Section,
    Card,
    Row,
    Avatar,
    Welcome,
    Email,
    GradientBox,
    GradientTitle,
    GradientSub,
    SectionTitle,
    QuickActions,
    ActionColumn,
    ActionCard,
    ActionIcon,
    ActionTitle,
    ActionDesc,
    ActivityCard,
    ActivityRow,
    ActivityBorder,
    ActivityIcon,
    ActivityTitle,
    ActivityDesc,
    ActivityTime,
    ViewAllButton,
    ViewAll,
    StatsCard,
    StatsTitle,
    StatsRow,
    StatItem,
    StatsNumber,
    StatsLabel,
}

impl StyleClass {
    pub const ALL: [Self; 38] = [
        Self::Container,
        Self::Header,
        Self::HeaderRow,
        Self::AppTitle,
        Self::SubTitle,
        Self::SettingsButton,
        Self::Fill,
        Self::Section,
        Self::Card,
        Self::Row,
        Self::Avatar,
        Self::Welcome,
        Self::Email,
        Self::GradientBox,
        Self::GradientTitle,
        Self::GradientSub,
        Self::SectionTitle,
        Self::QuickActions,
        Self::ActionColumn,
        Self::ActionCard,
        Self::ActionIcon,
        Self::ActionTitle,
        Self::ActionDesc,
        Self::ActivityCard,
        Self::ActivityRow,
        Self::ActivityBorder,
        Self::ActivityIcon,
        Self::ActivityTitle,
        Self::ActivityDesc,
        Self::ActivityTime,
        Self::ViewAllButton,
        Self::ViewAll,
        Self::StatsCard,
        Self::StatsTitle,
        Self::StatsRow,
        Self::StatItem,
        Self::StatsNumber,
        Self::StatsLabel,
    ];

    /// CSS class name (`tc-` prefixed, kebab-case).
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Container => "tc-container",
            Self::Header => "tc-header",
            Self::HeaderRow => "tc-header-row",
            Self::AppTitle => "tc-app-title",
            Self::SubTitle => "tc-sub-title",
            Self::SettingsButton => "tc-settings-button",
            Self::Fill => "tc-fill",
            Self::Section => "tc-section",
            Self::Card => "tc-card",
            Self::Row => "tc-row",
            Self::Avatar => "tc-avatar",
            Self::Welcome => "tc-welcome",
            Self::Email => "tc-email",
            Self::GradientBox => "tc-gradient-box",
            Self::GradientTitle => "tc-gradient-title",
            Self::GradientSub => "tc-gradient-sub",
            Self::SectionTitle => "tc-section-title",
            Self::QuickActions => "tc-quick-actions",
            Self::ActionColumn => "tc-action-column",
            Self::ActionCard => "tc-action-card",
            Self::ActionIcon => "tc-action-icon",
            Self::ActionTitle => "tc-action-title",
            Self::ActionDesc => "tc-action-desc",
            Self::ActivityCard => "tc-activity-card",
            Self::ActivityRow => "tc-activity-row",
            Self::ActivityBorder => "tc-activity-border",
            Self::ActivityIcon => "tc-activity-icon",
            Self::ActivityTitle => "tc-activity-title",
            Self::ActivityDesc => "tc-activity-desc",
            Self::ActivityTime => "tc-activity-time",
            Self::ViewAllButton => "tc-view-all-button",
            Self::ViewAll => "tc-view-all",
            Self::StatsCard => "tc-stats-card",
            Self::StatsTitle => "tc-stats-title",
            Self::StatsRow => "tc-stats-row",
            Self::StatItem => "tc-stat-item",
            Self::StatsNumber => "tc-stats-number",
            Self::StatsLabel => "tc-stats-label",
        }
    }

    /// The declarations for this class.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn style(&self) -> Style {
        use palette::*;

        let s = Style::new();
        match self {
            Self::Container => s
                .with(P::Flex, num(1.0))
                .with(P::BackgroundColor, SCREEN_BACKGROUND),
            Self::Header => s
                .with(P::BackgroundColor, SURFACE)
                .with(P::PaddingTop, Length::Vh(6.0))
                .with(P::PaddingBottom, Length::Vh(3.0))
                .with(P::PaddingHorizontal, Length::Vw(4.0))
                .with(P::BorderBottomWidth, Length::Px(1.0))
                .with(P::BorderBottomColor, HAIRLINE)
                .with(P::ShadowOpacity, num(0.05))
                .with(P::ShadowRadius, Length::Px(3.0)),
            Self::HeaderRow => s
                .with(P::FlexDirection, Keyword::Row)
                .with(P::JustifyContent, Keyword::SpaceBetween)
                .with(P::AlignItems, Keyword::Center),
            Self::AppTitle => s
                .with(P::FontSize, Length::Vw(6.0))
                .with(P::FontWeight, weight(700))
                .with(P::Color, INK),
            Self::SubTitle => s
                .with(P::Color, INK_MUTED)
                .with(P::FontSize, Length::Vw(3.5))
                .with(P::MarginTop, Length::Vh(0.5)),
            Self::SettingsButton => s
                .with(P::Width, Length::Vw(10.0))
                .with(P::Height, Length::Vw(10.0))
                .with(P::BackgroundColor, HAIRLINE)
                .with(P::BorderRadius, Length::Vw(5.0))
                .with(P::AlignItems, Keyword::Center)
                .with(P::JustifyContent, Keyword::Center),
            Self::Fill => s.with(P::Flex, num(1.0)),
            Self::Section => s
                .with(P::PaddingHorizontal, Length::Vw(4.0))
                .with(P::MarginBottom, Length::Vh(2.0)),
            Self::Card => s
                .with(P::BackgroundColor, SURFACE)
                .with(P::BorderRadius, Length::Vw(4.0))
                .with(P::Padding, Length::Vw(5.0))
                .with(P::ShadowOpacity, num(0.05))
                .with(P::BorderWidth, Length::Px(1.0))
                .with(P::BorderColor, HAIRLINE),
            Self::Row => s
                .with(P::FlexDirection, Keyword::Row)
                .with(P::AlignItems, Keyword::Center)
                .with(P::MarginBottom, Length::Vh(2.0)),
            Self::Avatar => s
                .with(P::Width, Length::Vw(12.0))
                .with(P::Height, Length::Vw(12.0))
                .with(P::BackgroundColor, BLUE_PALE)
                .with(P::BorderRadius, Length::Vw(6.0))
                .with(P::AlignItems, Keyword::Center)
                .with(P::JustifyContent, Keyword::Center)
                .with(P::MarginRight, Length::Vw(4.0)),
            Self::Welcome => s
                .with(P::FontSize, Length::Vw(4.5))
                .with(P::FontWeight, weight(600))
                .with(P::Color, INK),
            Self::Email => s
                .with(P::Color, INK_MUTED)
                .with(P::FontSize, Length::Vw(3.5)),
            Self::GradientBox => s
                .with(P::BackgroundColor, BLUE)
                .with(P::BorderRadius, Length::Vw(3.0))
                .with(P::Padding, Length::Vw(4.0)),
            Self::GradientTitle => s
                .with(P::Color, Color::WHITE)
                .with(P::FontWeight, weight(500))
                .with(P::MarginBottom, Length::Vh(0.5)),
            Self::GradientSub => s
                .with(P::Color, BLUE_MIST)
                .with(P::FontSize, Length::Vw(3.5)),
            Self::SectionTitle => s
                .with(P::Color, INK_SOFT)
                .with(P::FontWeight, weight(600))
                .with(P::FontSize, Length::Vw(4.5))
                .with(P::MarginBottom, Length::Vh(1.0)),
            Self::QuickActions => s
                .with(P::FlexDirection, Keyword::Row)
                .with(P::JustifyContent, Keyword::SpaceBetween)
                .with(P::PaddingHorizontal, Length::Vw(1.0)),
            Self::ActionColumn => s
                .with(P::Flex, num(1.0))
                .with(P::MarginHorizontal, Length::Vw(1.5))
                .with(P::MaxWidth, Length::Vw(47.0)),
            Self::ActionCard => s
                .with(P::BackgroundColor, SURFACE)
                .with(P::BorderRadius, Length::Vw(3.0))
                .with(P::Padding, Length::Vw(4.0))
                .with(P::ShadowOpacity, num(0.05))
                .with(P::BorderWidth, Length::Px(1.0))
                .with(P::BorderColor, HAIRLINE)
                .with(P::MarginBottom, Length::Vh(1.5))
                .with(P::Height, Length::Vh(14.0))
                .with(P::JustifyContent, Keyword::FlexStart)
                .with(P::AlignItems, Keyword::FlexStart),
            Self::ActionIcon => s
                .with(P::Width, Length::Vw(10.0))
                .with(P::Height, Length::Vw(10.0))
                .with(P::BorderRadius, Length::Vw(5.0))
                .with(P::AlignItems, Keyword::Center)
                .with(P::JustifyContent, Keyword::Center)
                .with(P::MarginBottom, Length::Vh(1.0)),
            Self::ActionTitle => s
                .with(P::FontWeight, weight(500))
                .with(P::Color, INK)
                .with(P::MarginBottom, Length::Vh(0.5))
                .with(P::FontSize, Length::Vw(3.8))
                .with(P::LineHeight, Length::Vw(4.5)),
            Self::ActionDesc => s
                .with(P::Color, INK_MUTED)
                .with(P::FontSize, Length::Vw(3.2))
                .with(P::LineHeight, Length::Vw(4.0))
                .with(P::FlexShrink, num(1.0)),
            Self::ActivityCard => s
                .with(P::BackgroundColor, SURFACE)
                .with(P::BorderRadius, Length::Vw(3.0))
                .with(P::ShadowOpacity, num(0.05))
                .with(P::BorderWidth, Length::Px(1.0))
                .with(P::BorderColor, HAIRLINE)
                .with(P::Overflow, Keyword::Hidden),
            Self::ActivityRow => s
                .with(P::FlexDirection, Keyword::Row)
                .with(P::AlignItems, Keyword::Center)
                .with(P::Padding, Length::Vw(4.0)),
            Self::ActivityBorder => s
                .with(P::BorderBottomWidth, Length::Px(1.0))
                .with(P::BorderBottomColor, HAIRLINE),
            Self::ActivityIcon => s
                .with(P::Width, Length::Vw(8.0))
                .with(P::Height, Length::Vw(8.0))
                .with(P::BorderRadius, Length::Vw(4.0))
                .with(P::AlignItems, Keyword::Center)
                .with(P::JustifyContent, Keyword::Center)
                .with(P::MarginRight, Length::Vw(3.0)),
            Self::ActivityTitle => s.with(P::FontWeight, weight(500)).with(P::Color, INK),
            Self::ActivityDesc => s
                .with(P::Color, INK_FAINT)
                .with(P::FontSize, Length::Vw(3.2)),
            Self::ActivityTime => s
                .with(P::Color, INK_GHOST)
                .with(P::FontSize, Length::Vw(2.8)),
            Self::ViewAllButton => s.with(P::Padding, Length::Vw(4.0)),
            Self::ViewAll => s
                .with(P::Color, LINK)
                .with(P::FontWeight, weight(500))
                .with(P::TextAlign, Keyword::Center),
            Self::StatsCard => s
                .with(P::BackgroundColor, INDIGO)
                .with(P::BorderRadius, Length::Vw(3.0))
                .with(P::Padding, Length::Vw(5.0))
                .with(P::ShadowOpacity, num(0.2))
                .with(P::ShadowRadius, Length::Px(5.0)),
            Self::StatsTitle => s
                .with(P::Color, Color::WHITE)
                .with(P::FontWeight, weight(600))
                .with(P::FontSize, Length::Vw(4.5))
                .with(P::MarginBottom, Length::Vh(2.0)),
            Self::StatsRow => s
                .with(P::FlexDirection, Keyword::Row)
                .with(P::JustifyContent, Keyword::SpaceBetween),
            Self::StatItem => s.with(P::AlignItems, Keyword::Center),
            Self::StatsNumber => s
                .with(P::Color, Color::WHITE)
                .with(P::FontSize, Length::Vw(6.0))
                .with(P::FontWeight, weight(700)),
            Self::StatsLabel => s
                .with(P::Color, INDIGO_MIST)
                .with(P::FontSize, Length::Vw(3.2)),
        }
    }
}

/// Merge the styles of `classes` in order.
#[must_use]
pub fn cascade(classes: &[StyleClass]) -> Style {
    classes
        .iter()
        .fold(Style::new(), |acc, class| acc.merge(&class.style()))
}

const fn num(n: f32) -> StyleValue {
    StyleValue::Number(n)
}

const fn weight(w: u16) -> StyleValue {
    StyleValue::FontWeight(w)
}
