//! DOM backend for the core view tree.
//!
//! Walks a [`ViewNode`] and emits Leptos views. Styles become inline CSS,
//! classes become `tc-*` class names, and touchables dispatch their intent to
//! the router on click.

use leptos::prelude::*;
use travelconnect_core::{Content, IconRef, IconRegistry, Ionicons, NodeKind, Router, ViewNode, Viewport};

use crate::log;

/// Renders view trees, dispatching taps to `router`.
#[derive(Debug, Clone)]
pub struct Renderer<R> {
    router: R,
    viewport: Viewport,
}

impl<R> Renderer<R>
where
    R: Router + Clone + 'static,
{
    pub const fn new(router: R, viewport: Viewport) -> Self {
        Self { router, viewport }
    }

    pub fn render(&self, node: &ViewNode) -> AnyView {
        let class = class_list(node);
        let style = node.style.to_css();
        let data_node = node.id.clone();
        let children: Vec<AnyView> = node.children.iter().map(|c| self.render(c)).collect();

        match node.kind {
            NodeKind::Screen => view! {
                <main class=class style=style data-node=data_node>{children}</main>
            }
            .into_any(),
            NodeKind::View | NodeKind::Scroll => view! {
                <div class=class style=style data-node=data_node>{children}</div>
            }
            .into_any(),
            NodeKind::Text => {
                let text = node.text_value().unwrap_or_default().to_string();
                view! {
                    <span class=class style=style data-node=data_node>{text}</span>
                }
                .into_any()
            }
            NodeKind::Icon => match &node.content {
                Content::Icon(icon) => self.icon(icon),
                Content::Empty | Content::Text(_) => ().into_any(),
            },
            NodeKind::Touchable => {
                let intent = node.action.clone();
                let router = self.router.clone();
                let on_click = move |_| {
                    if intent.dispatch(&router) {
                        log::debug(&format!("dispatched {intent:?}"));
                    }
                };
                view! {
                    <button type="button" class=class style=style data-node=data_node on:click=on_click>
                        {children}
                    </button>
                }
                .into_any()
            }
        }
    }

    fn icon(&self, icon: &IconRef) -> AnyView {
        match Ionicons.resolve(icon, &self.viewport) {
            Ok(glyph) => {
                let style = format!(
                    "font-size: {}px; color: {};",
                    glyph.size_px,
                    glyph.color.to_css()
                );
                view! { <ion-icon name=glyph.name style=style></ion-icon> }.into_any()
            }
            Err(err) => {
                log::warn(&err.to_string());
                view! { <span class="tc-icon-missing">"?"</span> }.into_any()
            }
        }
    }
}

/// Class attribute for a node: a kind marker plus its style classes.
pub fn class_list(node: &ViewNode) -> String {
    let kind = match node.kind {
        NodeKind::Text => "tc-text",
        NodeKind::Scroll => "tc-node tc-scroll",
        NodeKind::Screen | NodeKind::View | NodeKind::Touchable | NodeKind::Icon => "tc-node",
    };

    std::iter::once(kind)
        .chain(node.classes.iter().map(|c| c.css_class()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Browser viewport, or the default device when unavailable.
#[cfg(target_arch = "wasm32")]
pub fn current_viewport() -> Viewport {
    web_sys::window()
        .and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some(Viewport::new(
                width as f32,
                height as f32,
                w.device_pixel_ratio() as f32,
            ))
        })
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_viewport() -> Viewport {
    Viewport::default()
}
