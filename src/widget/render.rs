//! Display tree and menu rendering.
//!
//! Rendering is a pure function of the menu snapshot and interaction state.
//! Interactive controls carry an [`Action`] which the widget controller
//! dispatches when the control is clicked.

use super::state::{InteractionState, Reaction};
use crate::menu::catalog::{PULLED_PORK_IMAGE, TUSCAN_SOUP_IMAGE};
use crate::menu::models::{Dish, MenuSnapshot};
use std::collections::HashMap;

pub const ORDER_LABEL: &str = "🥡 Order Takeaway";
pub const ORDERED_LABEL: &str = "✓ Ordered";

/// What clicking a control does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleOrder { dish_id: String },
    React { dish_id: String, reaction: Reaction },
}

/// An element of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
    pub action: Option<Action>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            action: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, class: &str, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All descendants (including `self`) carrying `class`, in document order.
    pub fn find_all(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(class, found);
        }
    }

    pub fn find(&self, class: &str) -> Option<&Node> {
        self.find_all(class).into_iter().next()
    }

    /// Serializes the tree as HTML with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        out.push('>');

        if self.tag == "img" {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Resolves image keys to displayable asset URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap(HashMap<String, String>);

impl AssetMap {
    /// The photos shipped with the widget. The bundler inlines these paths as
    /// data URIs.
    pub fn bundled() -> Self {
        Self::default()
            .with(PULLED_PORK_IMAGE, "images/pulled-pork-burger.svg")
            .with(TUSCAN_SOUP_IMAGE, "images/tuscan-bean-soup.svg")
    }

    pub fn with(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.0.insert(key.into(), url.into());
        self
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Builds a display tree from widget state.
pub trait Renderer: Send + Sync {
    fn render(&self, menu: &MenuSnapshot, interactions: &InteractionState, assets: &AssetMap) -> Node;
}

/// Renders the menu as a date heading followed by one card per dish.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl CardRenderer {
    fn card(&self, dish: &Dish, interactions: &InteractionState, assets: &AssetMap) -> Node {
        let ordered = interactions.is_ordered(&dish.id);
        let reaction = interactions.reaction(&dish.id);

        let mut card = Node::new("article")
            .class("menu-card")
            .attr("data-id", &dish.id);

        if let Some(url) = dish.image.as_deref().and_then(|key| assets.resolve(key)) {
            card = card.child(
                Node::new("img")
                    .class("menu-card-image")
                    .attr("src", url)
                    .attr("alt", &dish.name),
            );
        }

        let header = Node::new("div").class("menu-card-header").child(
            Node::new("div")
                .child(Node::new("div").class("menu-card-title").text(&dish.title))
                .child(Node::new("h2").class("menu-card-name").text(&dish.name)),
        );

        let tags = Node::new("div").class("menu-card-tags").children(
            dish.tags
                .iter()
                .map(|tag| Node::new("span").class("tag").class(format!("tag-{}", tag)).text(tag)),
        );

        let order_button = Node::new("button")
            .class("order-btn")
            .class_if("ordered", ordered)
            .attr("data-dish-id", &dish.id)
            .text(if ordered { ORDERED_LABEL } else { ORDER_LABEL })
            .on_click(Action::ToggleOrder {
                dish_id: dish.id.clone(),
            });

        let reactions = Node::new("div")
            .class("reaction-buttons")
            .child(reaction_button(&dish.id, Reaction::Liked, reaction))
            .child(reaction_button(&dish.id, Reaction::Disliked, reaction));

        card.child(
            Node::new("div")
                .class("menu-card-content")
                .child(header)
                .child(
                    Node::new("p")
                        .class("menu-card-description")
                        .text(&dish.description),
                )
                .child(tags)
                .child(
                    Node::new("div")
                        .class("menu-card-actions")
                        .child(order_button)
                        .child(reactions),
                ),
        )
    }
}

fn reaction_button(dish_id: &str, reaction: Reaction, current: Option<Reaction>) -> Node {
    let (class, wire, title, icon) = match reaction {
        Reaction::Liked => ("thumbs-up", "up", "I liked this!", "👍"),
        Reaction::Disliked => ("thumbs-down", "down", "Not for me", "👎"),
    };

    Node::new("button")
        .class("reaction-btn")
        .class(class)
        .class_if("active", current == Some(reaction))
        .attr("data-dish-id", dish_id)
        .attr("data-reaction", wire)
        .attr("title", title)
        .text(icon)
        .on_click(Action::React {
            dish_id: dish_id.to_string(),
            reaction,
        })
}

impl Renderer for CardRenderer {
    fn render(&self, menu: &MenuSnapshot, interactions: &InteractionState, assets: &AssetMap) -> Node {
        Node::new("section")
            .class("menu")
            .child(
                Node::new("p")
                    .class("menu-date")
                    .attr("id", "menu-date")
                    .text(&menu.date),
            )
            .child(
                Node::new("div")
                    .class("menu-cards")
                    .attr("id", "menu-cards")
                    .children(menu.dishes.iter().map(|d| self.card(d, interactions, assets))),
            )
    }
}
