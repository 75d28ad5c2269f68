//! Declarative view tree.
//!
//! A [`ViewNode`] describes what to draw, not how. Any backend (the Leptos
//! frontend, the terminal outline) walks the same tree.

use serde::{Deserialize, Serialize};

use crate::icon::IconRef;
use crate::intent::Intent;
use crate::style::Style;
use crate::stylesheet::{StyleClass, cascade};

/// Node kind, mirroring the primitives a mobile view layer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Screen,
    View,
    Scroll,
    Text,
    Touchable,
    Icon,
}

/// Leaf payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Icon(IconRef),
}

/// One node of the view tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub kind: NodeKind,
    /// Stable identifier for lookup and tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<StyleClass>,
    /// Class cascade plus inline overrides.
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub action: Intent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    fn new(kind: NodeKind, classes: &[StyleClass]) -> Self {
        Self {
            kind,
            id: None,
            classes: classes.to_vec(),
            style: cascade(classes),
            content: Content::Empty,
            action: Intent::None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn screen(classes: &[StyleClass]) -> Self {
        Self::new(NodeKind::Screen, classes)
    }

    #[must_use]
    pub fn view(classes: &[StyleClass]) -> Self {
        Self::new(NodeKind::View, classes)
    }

    #[must_use]
    pub fn scroll(classes: &[StyleClass]) -> Self {
        Self::new(NodeKind::Scroll, classes)
    }

    pub fn text(classes: &[StyleClass], text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new(NodeKind::Text, classes)
        }
    }

    #[must_use]
    pub fn icon(icon: IconRef) -> Self {
        Self {
            content: Content::Icon(icon),
            ..Self::new(NodeKind::Icon, &[])
        }
    }

    /// Tappable container carrying `action`.
    #[must_use]
    pub fn touchable(classes: &[StyleClass], action: Intent) -> Self {
        Self {
            action,
            ..Self::new(NodeKind::Touchable, classes)
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Inline overrides on top of the class cascade.
    #[must_use]
    pub fn with_style(mut self, overrides: &Style) -> Self {
        self.style = self.style.merge(overrides);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: StyleClass) -> bool {
        self.classes.contains(&class)
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.kind, NodeKind::Touchable)
    }

    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Depth-first, pre-order traversal including `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// First node in pre-order with the given id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        self.iter().find(|node| node.id.as_deref() == Some(id))
    }

    /// All text leaves under this node, in render order.
    #[must_use]
    pub fn text_content(&self) -> Vec<&str> {
        self.iter().filter_map(Self::text_value).collect()
    }
}

/// Pre-order iterator over a view tree.
pub struct Iter<'a> {
    stack: Vec<&'a ViewNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ViewNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::route::RoutePath;
    use crate::style::{Color, StyleProp, StyleValue};

    fn sample() -> ViewNode {
        ViewNode::view(&[StyleClass::Section])
            .with_id("root")
            .with_child(ViewNode::text(&[StyleClass::SectionTitle], "Title").with_id("title"))
            .with_child(
                ViewNode::touchable(&[StyleClass::Card], Intent::Navigate(RoutePath::settings()))
                    .with_id("tap")
                    .with_child(ViewNode::text(&[], "inner")),
            )
            .with_child(ViewNode::text(&[], "last"))
    }

    #[test]
    fn test_iter_is_preorder() {
        let tree = sample();
        assert_eq!(tree.text_content(), vec!["Title", "inner", "last"]);
    }

    #[test]
    fn test_find_by_id() {
        let tree = sample();
        let tap = tree.find("tap").unwrap();
        assert!(tap.is_interactive());
        assert_eq!(tap.action.route().map(RoutePath::as_str), Some("/settings"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_style_is_cascade_plus_overrides() {
        let overrides = Style::new().with(StyleProp::BackgroundColor, Color::BLACK);
        let node = ViewNode::view(&[StyleClass::Card]).with_style(&overrides);

        assert!(node.has_class(StyleClass::Card));
        assert_eq!(
            node.style.get(StyleProp::BackgroundColor),
            Some(&StyleValue::Color(Color::BLACK))
        );
        assert!(node.style.contains(StyleProp::BorderRadius));
    }

    #[test]
    fn test_non_touchables_are_inert() {
        let tree = sample();
        assert!(tree.find("title").unwrap().action.is_inert());
    }

    #[test]
    fn test_view_tree_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "view");
        assert_eq!(json["children"][0]["content"]["value"], "Title");
        assert_eq!(json["children"][1]["action"]["route"], "/settings");
    }
}
