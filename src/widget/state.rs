//! Widget state: the current menu snapshot and the user's interactions with it.
//!
//! All mutation goes through three named operations on [`WidgetState`]:
//! [`toggle_order`](WidgetState::toggle_order),
//! [`toggle_reaction`](WidgetState::toggle_reaction) and
//! [`replace_snapshot`](WidgetState::replace_snapshot).

use crate::menu::models::{Dish, MenuSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A diner's reaction to a dish. "No reaction" is the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    #[serde(rename = "up")]
    Liked,
    #[serde(rename = "down")]
    Disliked,
}

/// Per-dish order flags and reactions, keyed by dish id.
///
/// Entries for dishes that are no longer on the menu are kept; they are
/// simply never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    orders: HashMap<String, bool>,
    reactions: HashMap<String, Reaction>,
}

impl InteractionState {
    pub fn is_ordered(&self, dish_id: &str) -> bool {
        self.orders.get(dish_id).copied().unwrap_or(false)
    }

    pub fn reaction(&self, dish_id: &str) -> Option<Reaction> {
        self.reactions.get(dish_id).copied()
    }

    /// Flips the order flag and returns the new value.
    fn toggle_order(&mut self, dish_id: &str) -> bool {
        let ordered = !self.is_ordered(dish_id);
        self.orders.insert(dish_id.to_string(), ordered);
        ordered
    }

    /// Sets `reaction`, or clears it when it is already the current one.
    /// Returns the resulting reaction.
    fn toggle_reaction(&mut self, dish_id: &str, reaction: Reaction) -> Option<Reaction> {
        if self.reaction(dish_id) == Some(reaction) {
            self.reactions.remove(dish_id);
            None
        } else {
            self.reactions.insert(dish_id.to_string(), reaction);
            Some(reaction)
        }
    }
}

/// How client-only image keys are carried over when a new dish list arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetReattach {
    /// Take the image of the previous dish with the same id.
    #[default]
    ById,
    /// Take the image of the previous dish at the same list position. Images
    /// end up on the wrong dish if the provider reorders its list.
    ByPosition,
}

/// Partial menu carried by a tool result. Absent fields mean "no update".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuUpdate {
    pub date: Option<String>,
    pub dishes: Option<Vec<Dish>>,
}

impl MenuUpdate {
    /// Extracts an update from a tool result's `structuredContent`.
    ///
    /// Each field is read on its own: a malformed `dishes` array still lets a
    /// valid `date` through.
    pub fn from_structured(content: &Value) -> Self {
        let date = content
            .get("date")
            .and_then(|d| d.as_str())
            .map(str::to_string);

        let dishes = content.get("dishes").and_then(|raw| {
            serde_json::from_value::<Vec<Dish>>(raw.clone())
                .map_err(|e| tracing::warn!("ignoring malformed dish list: {}", e))
                .ok()
        });

        Self { date, dishes }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.dishes.is_none()
    }
}

/// Outcome of an order toggle, used for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderChange {
    pub dish_name: String,
    pub ordered: bool,
}

/// Outcome of a reaction toggle, used for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionChange {
    pub dish_name: String,
    pub reaction: Option<Reaction>,
}

/// The widget's complete mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub snapshot: MenuSnapshot,
    pub interactions: InteractionState,
}

impl WidgetState {
    pub fn new(snapshot: MenuSnapshot) -> Self {
        Self {
            snapshot,
            interactions: InteractionState::default(),
        }
    }

    /// Flips the order flag of a dish on the current menu.
    ///
    /// Returns `None`, leaving state untouched, if the dish is not on the menu.
    pub fn toggle_order(&mut self, dish_id: &str) -> Option<OrderChange> {
        let dish_name = self.snapshot.dish(dish_id)?.name.clone();
        let ordered = self.interactions.toggle_order(dish_id);
        Some(OrderChange { dish_name, ordered })
    }

    /// Applies a reaction click to a dish on the current menu.
    ///
    /// Clicking the active reaction clears it; clicking the other one
    /// replaces it. Returns `None` if the dish is not on the menu.
    pub fn toggle_reaction(&mut self, dish_id: &str, reaction: Reaction) -> Option<ReactionChange> {
        let dish_name = self.snapshot.dish(dish_id)?.name.clone();
        let reaction = self.interactions.toggle_reaction(dish_id, reaction);
        Some(ReactionChange {
            dish_name,
            reaction,
        })
    }

    /// Merges a tool result into the snapshot.
    ///
    /// The date and dish list are replaced independently. Incoming dishes get
    /// their image key from the previous list according to `policy`, falling
    /// back to whatever the payload carried.
    pub fn replace_snapshot(&mut self, update: MenuUpdate, policy: AssetReattach) {
        if let Some(date) = update.date {
            self.snapshot.date = date;
        }

        if let Some(dishes) = update.dishes {
            let previous = std::mem::take(&mut self.snapshot.dishes);
            self.snapshot.dishes = dishes
                .into_iter()
                .enumerate()
                .map(|(index, mut dish)| {
                    let carried = match policy {
                        AssetReattach::ById => previous.iter().find(|p| p.id == dish.id),
                        AssetReattach::ByPosition => previous.get(index),
                    }
                    .and_then(|p| p.image.clone());
                    dish.image = carried.or(dish.image);
                    dish
                })
                .collect();
        }
    }

    pub fn ordered_dishes(&self) -> impl Iterator<Item = &Dish> {
        self.snapshot
            .dishes
            .iter()
            .filter(move |d| self.interactions.is_ordered(&d.id))
    }

    pub fn dishes_with_reaction(&self, reaction: Reaction) -> impl Iterator<Item = &Dish> {
        self.snapshot
            .dishes
            .iter()
            .filter(move |d| self.interactions.reaction(&d.id) == Some(reaction))
    }
}
