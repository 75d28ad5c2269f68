//! Styling primitives: colors, responsive lengths, and semantic style maps.
//!
//! A [`Style`] maps a semantic [`StyleProp`] to a typed [`StyleValue`].
//! Backends decide how to apply it; [`Style::to_css`] is the browser mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_hex(0xFF_FF_FF);
    pub const BLACK: Self = Self::from_hex(0x00_00_00);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColor` for any other shape or non-hex digits.
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_color(value, "missing '#' prefix"))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(value, "contains non-hex digits"));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => {
                return Err(Error::invalid_color(
                    value,
                    format!("expected 3 or 6 hex digits, got {n}"),
                ));
            }
        };

        u32::from_str_radix(&expanded, 16)
            .map(Self::from_hex)
            .map_err(|e| Error::invalid_color(value, e.to_string()))
    }

    /// Convert to hex string (#RRGGBB)
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to CSS rgb() string
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A length that is either absolute or a percentage of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    Px(f32),
    /// Percent of viewport width.
    Vw(f32),
    /// Percent of viewport height.
    Vh(f32),
}

impl Length {
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Vw(p) => format!("{p}vw"),
            Self::Vh(p) => format!("{p}vh"),
        }
    }
}

/// Device dimensions used to resolve responsive lengths into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

const fn default_pixel_ratio() -> f32 {
    1.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
            pixel_ratio: 3.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Resolve to logical pixels, snapped to the nearest physical pixel.
    #[must_use]
    pub fn resolve(&self, length: Length) -> f32 {
        let logical = match length {
            Length::Px(v) => return v,
            Length::Vw(p) => self.width * p / 100.0,
            Length::Vh(p) => self.height * p / 100.0,
        };
        self.snap(logical)
    }

    fn snap(&self, logical: f32) -> f32 {
        if self.pixel_ratio > 0.0 {
            (logical * self.pixel_ratio).round() / self.pixel_ratio
        } else {
            logical.round()
        }
    }
}

/// Layout and alignment keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Keyword {
    Row,
    Column,
    Center,
    FlexStart,
    FlexEnd,
    SpaceBetween,
    Hidden,
}

impl Keyword {
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Center => "center",
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::Hidden => "hidden",
        }
    }
}

/// Semantic style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProp {
    BackgroundColor,
    Color,
    BorderColor,
    BorderWidth,
    BorderBottomColor,
    BorderBottomWidth,
    BorderRadius,
    Padding,
    PaddingHorizontal,
    PaddingTop,
    PaddingBottom,
    MarginTop,
    MarginBottom,
    MarginRight,
    MarginHorizontal,
    Width,
    Height,
    MaxWidth,
    FontSize,
    FontWeight,
    LineHeight,
    TextAlign,
    Flex,
    FlexDirection,
    FlexShrink,
    JustifyContent,
    AlignItems,
    Overflow,
    ShadowOpacity,
    ShadowRadius,
}

impl StyleProp {
    /// CSS properties this maps to. Shadow props map to none; they are folded
    /// into a single `box-shadow` by [`Style::to_css`].
    #[must_use]
    pub const fn css_names(&self) -> &'static [&'static str] {
        match self {
            Self::BackgroundColor => &["background-color"],
            Self::Color => &["color"],
            Self::BorderColor => &["border-color"],
            Self::BorderWidth => &["border-width"],
            Self::BorderBottomColor => &["border-bottom-color"],
            Self::BorderBottomWidth => &["border-bottom-width"],
            Self::BorderRadius => &["border-radius"],
            Self::Padding => &["padding"],
            Self::PaddingHorizontal => &["padding-left", "padding-right"],
            Self::PaddingTop => &["padding-top"],
            Self::PaddingBottom => &["padding-bottom"],
            Self::MarginTop => &["margin-top"],
            Self::MarginBottom => &["margin-bottom"],
            Self::MarginRight => &["margin-right"],
            Self::MarginHorizontal => &["margin-left", "margin-right"],
            Self::Width => &["width"],
            Self::Height => &["height"],
            Self::MaxWidth => &["max-width"],
            Self::FontSize => &["font-size"],
            Self::FontWeight => &["font-weight"],
            Self::LineHeight => &["line-height"],
            Self::TextAlign => &["text-align"],
            Self::Flex => &["flex"],
            Self::FlexDirection => &["flex-direction"],
            Self::FlexShrink => &["flex-shrink"],
            Self::JustifyContent => &["justify-content"],
            Self::AlignItems => &["align-items"],
            Self::Overflow => &["overflow"],
            Self::ShadowOpacity | Self::ShadowRadius => &[],
        }
    }
}

/// Typed value for a [`StyleProp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StyleValue {
    Color(Color),
    Length(Length),
    Number(f32),
    FontWeight(u16),
    Keyword(Keyword),
}

impl StyleValue {
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => c.to_css(),
            Self::Length(l) => l.to_css(),
            Self::Number(n) => n.to_string(),
            Self::FontWeight(w) => w.to_string(),
            Self::Keyword(k) => k.as_css().to_string(),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Length> for StyleValue {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<Keyword> for StyleValue {
    fn from(value: Keyword) -> Self {
        Self::Keyword(value)
    }
}

/// Ordered property map. Later writes win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style(BTreeMap<StyleProp, StyleValue>);

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.0.insert(prop, value.into());
        self
    }

    pub fn insert(&mut self, prop: StyleProp, value: impl Into<StyleValue>) {
        self.0.insert(prop, value.into());
    }

    #[must_use]
    pub fn get(&self, prop: StyleProp) -> Option<&StyleValue> {
        self.0.get(&prop)
    }

    #[must_use]
    pub fn contains(&self, prop: StyleProp) -> bool {
        self.0.contains_key(&prop)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &StyleValue)> {
        self.0.iter().map(|(p, v)| (*p, v))
    }

    /// Overlay `other` on top of `self`.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.0.extend(other.iter().map(|(p, v)| (p, *v)));
        self
    }

    /// Inline CSS declarations (`prop: value;` pairs joined by spaces).
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut declarations: Vec<String> = self
            .iter()
            .flat_map(|(prop, value)| {
                let css = value.to_css();
                prop.css_names()
                    .iter()
                    .map(move |name| format!("{name}: {css};"))
            })
            .collect();

        if self.contains(StyleProp::BorderWidth) {
            declarations.push("border-style: solid;".to_string());
        }
        if self.contains(StyleProp::BorderBottomWidth) {
            declarations.push("border-bottom-style: solid;".to_string());
        }
        if let Some(shadow) = self.box_shadow() {
            declarations.push(format!("box-shadow: {shadow};"));
        }

        declarations.join(" ")
    }

    fn box_shadow(&self) -> Option<String> {
        let opacity = match self.get(StyleProp::ShadowOpacity)? {
            StyleValue::Number(n) => *n,
            _ => return None,
        };
        let radius = match self.get(StyleProp::ShadowRadius) {
            Some(StyleValue::Length(l)) => l.to_css(),
            _ => Length::Px(3.0).to_css(),
        };
        Some(format!("0 1px {radius} rgba(0, 0, 0, {opacity})"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_from_hex_and_back() {
        let color = Color::from_hex(0x3B_82_F6);
        assert_eq!(color, Color::new(59, 130, 246));
        assert_eq!(color.to_hex(), "#3B82F6");
        assert_eq!(color.to_css(), "rgb(59, 130, 246)");
    }

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#DBEAFE").unwrap(), Color::from_hex(0xDB_EA_FE));
        assert_eq!(Color::parse("#dbeafe").unwrap(), Color::from_hex(0xDB_EA_FE));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Color::parse("fff").is_err());
        assert!(Color::parse("#ffff").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_parse_rejects_signed_digits() {
        assert!(Color::parse("#+12345").is_err());
        assert!(Color::parse("#+12").is_err());
    }

    #[test]
    fn test_viewport_resolves_percentages() {
        let viewport = Viewport::new(400.0, 800.0, 1.0);
        assert_eq!(viewport.resolve(Length::Vw(5.0)), 20.0);
        assert_eq!(viewport.resolve(Length::Vh(2.0)), 16.0);
        assert_eq!(viewport.resolve(Length::Px(7.5)), 7.5);
    }

    #[test]
    fn test_viewport_snaps_to_physical_pixels() {
        // 390 * 3.5% = 13.65 logical; at 3x that is 40.95 -> 41 physical.
        let viewport = Viewport::new(390.0, 844.0, 3.0);
        let resolved = viewport.resolve(Length::Vw(3.5));
        assert!((resolved - 41.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_length_css_units() {
        assert_eq!(Length::Px(1.0).to_css(), "1px");
        assert_eq!(Length::Vw(4.5).to_css(), "4.5vw");
        assert_eq!(Length::Vh(6.0).to_css(), "6vh");
    }

    #[test]
    fn test_merge_later_wins() {
        let base = Style::new()
            .with(StyleProp::BackgroundColor, Color::WHITE)
            .with(StyleProp::Padding, Length::Vw(4.0));
        let overlay = Style::new().with(StyleProp::BackgroundColor, Color::BLACK);

        let merged = base.merge(&overlay);

        assert_eq!(
            merged.get(StyleProp::BackgroundColor),
            Some(&StyleValue::Color(Color::BLACK))
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_to_css_expands_axes_and_borders() {
        let style = Style::new()
            .with(StyleProp::PaddingHorizontal, Length::Vw(4.0))
            .with(StyleProp::BorderBottomWidth, Length::Px(1.0));
        let css = style.to_css();

        assert!(css.contains("padding-left: 4vw;"));
        assert!(css.contains("padding-right: 4vw;"));
        assert!(css.contains("border-bottom-width: 1px;"));
        assert!(css.contains("border-bottom-style: solid;"));
    }

    #[test]
    fn test_to_css_folds_shadow() {
        let style = Style::new()
            .with(StyleProp::ShadowOpacity, StyleValue::Number(0.2))
            .with(StyleProp::ShadowRadius, Length::Px(5.0));
        assert_eq!(style.to_css(), "box-shadow: 0 1px 5px rgba(0, 0, 0, 0.2);");
    }
}
