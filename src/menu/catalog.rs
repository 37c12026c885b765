//! The fixed dish catalog and the date it is served under.

use super::models::{Dish, MenuSnapshot};
use chrono::{Local, NaiveDate};

/// Image key of the pulled pork burger photo.
pub const PULLED_PORK_IMAGE: &str = "pulled-pork";
/// Image key of the tuscan bean soup photo.
pub const TUSCAN_SOUP_IMAGE: &str = "tuscan-soup";

fn dish(id: &str, title: &str, name: &str, description: &str, image: &str, tags: &[&str]) -> Dish {
    Dish {
        id: id.into(),
        title: title.into(),
        name: name.into(),
        description: description.into(),
        image: Some(image.into()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Every dish the canteen serves, in display order.
pub fn catalog() -> Vec<Dish> {
    vec![
        dish(
            "dish-of-the-day",
            "Dish of the Day",
            "Pulled Pork Burger",
            "Pulled pork in a homemade burger bun with coleslaw, BBQ sauce and cold vinegar sauce",
            PULLED_PORK_IMAGE,
            &["meat", "popular"],
        ),
        dish(
            "green-dish",
            "Green Dish of the Day",
            "Tuscan Bean Soup",
            "Tuscan bean soup with potatoes and cabbage topped with roasted pea protein",
            TUSCAN_SOUP_IMAGE,
            &["vegetarian", "vegan", "healthy"],
        ),
    ]
}

/// Long en-US date label, e.g. "Sunday, October 18, 2026".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The menu as served on `date`.
pub fn menu_for(date: NaiveDate) -> MenuSnapshot {
    MenuSnapshot {
        date: date_label(date),
        dishes: catalog(),
    }
}

/// The menu for the current local date. Evaluated per call.
pub fn todays_menu() -> MenuSnapshot {
    menu_for(Local::now().date_naive())
}
