//! Terminal outline backend.
//!
//! Flattens a view tree into an indented text listing: one line per node with
//! its kind, id, text, resolved icon, and tap intent.

use crate::icon::IconRegistry;
use crate::intent::Intent;
use crate::result::Result;
use crate::style::Viewport;
use crate::view::{Content, NodeKind, ViewNode};

const INDENT: &str = "  ";

/// Outline rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineOptions {
    pub viewport: Viewport,
    /// Fail on unknown icons instead of marking them unresolved.
    pub strict_icons: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            strict_icons: true,
        }
    }
}

const fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Screen => "screen",
        NodeKind::View => "view",
        NodeKind::Scroll => "scroll",
        NodeKind::Text => "text",
        NodeKind::Touchable => "touchable",
        NodeKind::Icon => "icon",
    }
}

/// Render `root` as an indented outline.
///
/// # Errors
///
/// With `strict_icons`, returns the registry's error for the first icon it
/// cannot resolve.
pub fn render_outline(
    root: &ViewNode,
    registry: &dyn IconRegistry,
    options: &OutlineOptions,
) -> Result<String> {
    let mut lines = Vec::new();
    outline_node(root, 0, registry, options, &mut lines)?;
    Ok(lines.join("\n"))
}

fn outline_node(
    node: &ViewNode,
    depth: usize,
    registry: &dyn IconRegistry,
    options: &OutlineOptions,
    lines: &mut Vec<String>,
) -> Result<()> {
    let mut line = format!("{}{}", INDENT.repeat(depth), kind_label(node.kind));

    if let Some(id) = &node.id {
        line.push('#');
        line.push_str(id);
    }

    match &node.content {
        Content::Empty => {}
        Content::Text(text) => {
            line.push_str(&format!(" {text:?}"));
        }
        Content::Icon(icon) => match registry.resolve(icon, &options.viewport) {
            Ok(glyph) => {
                line.push_str(&format!(
                    " {} {}px {}",
                    glyph.name, glyph.size_px, glyph.color
                ));
            }
            Err(e) if options.strict_icons => return Err(e),
            Err(_) => {
                line.push_str(&format!(" {} (unresolved)", icon.id));
            }
        },
    }

    if node.is_interactive() {
        match &node.action {
            Intent::Navigate(route) => line.push_str(&format!(" -> {route}")),
            Intent::None => line.push_str(" (inert)"),
        }
    }

    lines.push(line);

    node.children.iter().try_for_each(|child| {
        outline_node(child, depth.saturating_add(1), registry, options, lines)
    })
}
