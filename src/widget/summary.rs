//! Plain-text digest of the widget state, sent to the host's model context.

use super::state::{Reaction, WidgetState};
use crate::menu::models::Dish;

fn names<'a>(dishes: impl Iterator<Item = &'a Dish>) -> String {
    dishes
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarises orders and reactions on the current menu.
///
/// Example output:
///
/// ```text
/// Menu date: Sunday, October 18, 2026
///
/// Orders: Pulled Pork Burger
/// Liked: Pulled Pork Burger, Tuscan Bean Soup
/// ```
///
/// Lines whose dish list would be empty are left out.
pub fn context_digest(state: &WidgetState) -> String {
    let mut summary = format!("Menu date: {}\n\n", state.snapshot.date);

    let lines = [
        ("Orders", names(state.ordered_dishes())),
        ("Liked", names(state.dishes_with_reaction(Reaction::Liked))),
        ("Disliked", names(state.dishes_with_reaction(Reaction::Disliked))),
    ];
    for (label, dishes) in lines {
        if !dishes.is_empty() {
            summary.push_str(&format!("{}: {}\n", label, dishes));
        }
    }

    summary.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::menu_for;
    use chrono::NaiveDate;

    fn state() -> WidgetState {
        WidgetState::new(menu_for(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()))
    }

    #[test]
    fn no_interactions_is_date_only() {
        assert_eq!(
            context_digest(&state()),
            "Menu date: Sunday, October 18, 2026"
        );
    }

    #[test]
    fn orders_line_lists_names_in_menu_order() {
        let mut state = state();
        state.toggle_order("green-dish");
        state.toggle_order("dish-of-the-day");

        let digest = context_digest(&state);
        assert!(digest.contains("Orders: Pulled Pork Burger, Tuscan Bean Soup"));
        assert!(!digest.contains("Liked"));
    }

    #[test]
    fn orders_line_omitted_when_nothing_ordered() {
        let mut state = state();
        state.toggle_order("green-dish");
        state.toggle_order("green-dish");
        state.toggle_reaction("green-dish", Reaction::Disliked);

        assert_eq!(
            context_digest(&state),
            "Menu date: Sunday, October 18, 2026\n\nDisliked: Tuscan Bean Soup"
        );
    }

    #[test]
    fn full_digest() {
        let mut state = state();
        state.toggle_order("dish-of-the-day");
        state.toggle_reaction("dish-of-the-day", Reaction::Liked);
        state.toggle_reaction("green-dish", Reaction::Disliked);

        assert_eq!(
            context_digest(&state),
            "Menu date: Sunday, October 18, 2026\n\n\
             Orders: Pulled Pork Burger\n\
             Liked: Pulled Pork Burger\n\
             Disliked: Tuscan Bean Soup"
        );
    }
}
