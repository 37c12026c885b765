//! Canteen Menu Formatting Helpers

use super::models::MenuSnapshot;

/// Produces the human-readable rendering of a menu that accompanies the
/// structured tool output.
///
/// Example output:
///
/// ```text
/// Today's menu (Sunday, October 18, 2026):
///
/// **Dish of the Day**: Pulled Pork Burger
/// Pulled pork in a homemade burger bun ...
/// ```
pub fn menu_text(menu: &MenuSnapshot) -> String {
    let dishes = menu
        .dishes
        .iter()
        .map(|d| format!("**{}**: {}\n{}", d.title, d.name, d.description))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Today's menu ({}):\n\n{}", menu.date, dishes)
}
