//! Canteen Menu Domain Models
//!
//! These types are shared by the server-side provider and the client-side
//! widget; the widget deserializes the provider's structured output into them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// A single dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    /// Identifier, unique within a menu
    pub id: String,

    /// Category label, e.g. "Dish of the Day"
    pub title: String,

    /// Display name
    pub name: String,

    pub description: String,

    /// Opaque image key. Only the widget resolves it to a display asset, so the
    /// provider never sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Dish {
    /// Returns a copy of this dish with the client-only image key removed.
    pub fn without_image(&self) -> Self {
        Self {
            image: None,
            ..self.clone()
        }
    }
}

/// A dated, ordered list of dishes. Dish order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub date: String,
    pub dishes: Vec<Dish>,
}

impl MenuSnapshot {
    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// The structured tool payload: same date and order, images stripped.
    pub fn structured(&self) -> MenuSnapshot {
        MenuSnapshot {
            date: self.date.clone(),
            dishes: self.dishes.iter().map(Dish::without_image).collect(),
        }
    }
}
