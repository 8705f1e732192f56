//! The application state aggregate

use crate::screen::Screen;
use crate::types::Dish;

/// The fixed startup menu
fn seed_dishes() -> Vec<Dish> {
    vec![
        Dish::new("Pizza", "Main", 12.0),
        Dish::new("Pasta", "Main", 10.0),
        Dish::new("Burger", "Main", 8.0),
    ]
}

/// Draft contents before any editing has happened
///
/// The description starts as an empty string rather than absent; seeded
/// dishes in contrast carry no description at all.
fn blank_draft() -> Dish {
    Dish {
        name: String::new(),
        course: String::new(),
        price: 0.0,
        description: Some(String::new()),
    }
}

/// The single mutable state aggregate
///
/// Owned exclusively by the controller; fields are crate-private so the
/// command surface stays the only mutation path. `dishes` is the sole
/// source of truth for the menu. `filtered_dishes` is a snapshot refreshed
/// only by a filter command and is allowed to go stale in between.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub(crate) current_screen: Screen,
    pub(crate) dishes: Vec<Dish>,
    pub(crate) selected_dish: Option<Dish>,
    pub(crate) draft_dish: Dish,
    pub(crate) filtered_dishes: Vec<Dish>,
    pub(crate) last_filter_course: Option<String>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::with_dishes(seed_dishes())
    }
}

impl MenuState {
    /// State seeded with the fixed startup menu, on the start screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State over an arbitrary starting menu
    ///
    /// The filtered snapshot starts equal to the full list, the same shape
    /// the seeded state starts in.
    #[must_use]
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        let filtered_dishes = dishes.clone();
        Self {
            current_screen: Screen::Start,
            dishes,
            selected_dish: None,
            draft_dish: blank_draft(),
            filtered_dishes,
            last_filter_course: None,
        }
    }

    // ===== Read accessors =====

    /// Currently displayed screen
    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// The full menu, insertion-ordered
    #[must_use]
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Dish last chosen for inspection, if any
    #[must_use]
    pub fn selected_dish(&self) -> Option<&Dish> {
        self.selected_dish.as_ref()
    }

    /// The add-form working copy
    #[must_use]
    pub fn draft_dish(&self) -> &Dish {
        &self.draft_dish
    }

    /// Result of the most recent filter; stale until the next filter runs
    #[must_use]
    pub fn filtered_dishes(&self) -> &[Dish] {
        &self.filtered_dishes
    }

    /// Course of the most recent filter, `None` before the first
    #[must_use]
    pub fn last_filter_course(&self) -> Option<&str> {
        self.last_filter_course.as_deref()
    }

    /// Arithmetic mean of all dish prices, 0 for an empty menu
    ///
    /// Recomputed on every call, never cached. A NaN price poisons the
    /// mean, matching the pass-through price semantics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_price(&self) -> f64 {
        if self.dishes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.dishes.iter().map(|dish| dish.price).sum();
        total / self.dishes.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_state_shape() {
        let state = MenuState::new();
        assert_eq!(state.current_screen(), Screen::Start);
        assert!(state.selected_dish().is_none());
        assert!(state.last_filter_course().is_none());

        let names: Vec<&str> = state.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Pasta", "Burger"]);
        assert!(state.dishes().iter().all(|d| d.description.is_none()));

        // Snapshot starts equal to the menu, not empty
        assert_eq!(state.filtered_dishes(), state.dishes());
    }

    #[test]
    fn startup_draft_is_blank_with_empty_description() {
        let draft = MenuState::new().draft_dish().clone();
        assert!(draft.name.is_empty());
        assert!(draft.course.is_empty());
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.description.as_deref(), Some(""));
    }

    #[test]
    fn with_dishes_snapshots_the_given_list() {
        let state = MenuState::with_dishes(vec![Dish::new("Cake", "Dessert", 6.0)]);
        assert_eq!(state.dishes().len(), 1);
        assert_eq!(state.filtered_dishes(), state.dishes());
        assert_eq!(state.current_screen(), Screen::Start);
    }

    #[test]
    fn average_price_of_seeded_menu() {
        assert_eq!(MenuState::new().average_price(), 10.0);
    }

    #[test]
    fn average_price_of_empty_menu_is_zero() {
        assert_eq!(MenuState::with_dishes(Vec::new()).average_price(), 0.0);
    }

    #[test]
    fn average_price_poisoned_by_nan() {
        let state = MenuState::with_dishes(vec![
            Dish::new("Pie", "Dessert", 4.0),
            Dish::new("Mystery", "Main", f64::NAN),
        ]);
        assert!(state.average_price().is_nan());
    }
}
