//! The command surface over the state aggregate

use crate::screen::Screen;
use crate::state::MenuState;
use crate::types::{Dish, DishField};

/// A state mutation request
///
/// The six commands are the only way into the aggregate; the frontend
/// translates input events into these and reads results back through the
/// state accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch the current screen
    NavigateTo(Screen),
    /// Choose a dish by menu index for inspection
    SelectDish(usize),
    /// Overwrite one draft field from raw input text
    EditDraftField(DishField, String),
    /// Append a copy of the draft to the menu
    SubmitDraft,
    /// Remove every dish with the given name
    RemoveDish(String),
    /// Refresh the filtered snapshot for one course
    FilterByCourse(String),
}

/// Owns the state aggregate and applies commands to it
///
/// Every command is total: unparseable price text degrades to NaN,
/// out-of-range indices and unknown names are no-ops, and nothing here
/// panics or returns an error.
#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    /// Controller over the fixed startup menu
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller over an arbitrary starting menu
    #[must_use]
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        Self {
            state: MenuState::with_dishes(dishes),
        }
    }

    /// Read access to the aggregate
    #[must_use]
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::NavigateTo(screen) => self.navigate_to(screen),
            Command::SelectDish(index) => self.select_dish(index),
            Command::EditDraftField(field, value) => self.edit_draft_field(field, &value),
            Command::SubmitDraft => self.submit_draft(),
            Command::RemoveDish(name) => self.remove_dish(&name),
            Command::FilterByCourse(course) => self.filter_by_course(&course),
        }
    }

    // ===== Commands =====

    /// Switch the current screen; no data side effect
    pub fn navigate_to(&mut self, screen: Screen) {
        log::debug!("navigate: {} -> {screen}", self.state.current_screen);
        self.state.current_screen = screen;
    }

    /// Select `dishes[index]` for inspection
    ///
    /// Clones the dish into both `selected_dish` and the draft, then
    /// navigates to the detail target. No render branch exists for that
    /// target, so frontends fall back to the unknown-screen display.
    /// Out-of-range indices are a no-op.
    pub fn select_dish(&mut self, index: usize) {
        let Some(dish) = self.state.dishes.get(index) else {
            log::warn!("select_dish: index {index} out of range, ignoring");
            return;
        };
        let dish = dish.clone();
        log::debug!("select dish: {}", dish.name);
        self.state.selected_dish = Some(dish.clone());
        self.state.draft_dish = dish;
        self.state.current_screen = Screen::DishDetails;
    }

    /// Overwrite one field of the draft from raw text
    ///
    /// The price field is parsed as a float; unparseable text is stored as
    /// NaN rather than rejected.
    pub fn edit_draft_field(&mut self, field: DishField, value: &str) {
        match field {
            DishField::Name => self.state.draft_dish.name = value.to_string(),
            DishField::Description => {
                self.state.draft_dish.description = Some(value.to_string());
            }
            DishField::Course => self.state.draft_dish.course = value.to_string(),
            DishField::Price => {
                self.state.draft_dish.price = value.trim().parse().unwrap_or(f64::NAN);
            }
        }
    }

    /// Append a copy of the draft to the menu and return to the menu screen
    ///
    /// The draft keeps its contents afterwards, so re-entering the form
    /// shows the previously submitted values.
    pub fn submit_draft(&mut self) {
        log::debug!("submit draft: {:?}", self.state.draft_dish.name);
        self.state.dishes.push(self.state.draft_dish.clone());
        self.state.current_screen = Screen::Menu;
    }

    /// Remove every dish whose name matches exactly
    ///
    /// Unknown names are a no-op. The filtered snapshot is left alone and
    /// may keep showing removed dishes until the next filter.
    pub fn remove_dish(&mut self, name: &str) {
        let before = self.state.dishes.len();
        self.state.dishes.retain(|dish| dish.name != name);
        log::debug!(
            "remove dish {name:?}: {before} -> {} entries",
            self.state.dishes.len()
        );
    }

    /// Recompute the filtered snapshot for one course
    ///
    /// Exact, case-sensitive match on the course label, no trimming. An
    /// empty result is a valid snapshot, not an error.
    pub fn filter_by_course(&mut self, course: &str) {
        self.state.filtered_dishes = self
            .state
            .dishes
            .iter()
            .filter(|dish| dish.course == course)
            .cloned()
            .collect();
        self.state.last_filter_course = Some(course.to_string());
        log::debug!(
            "filter by {course:?}: {} match(es)",
            self.state.filtered_dishes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_to_switches_screen_only() {
        let mut controller = MenuController::new();
        controller.navigate_to(Screen::Menu);
        assert_eq!(controller.state().current_screen(), Screen::Menu);
        assert_eq!(controller.state().dishes().len(), 3);

        controller.navigate_to(Screen::Start);
        assert_eq!(controller.state().current_screen(), Screen::Start);
    }

    #[test]
    fn select_dish_copies_into_selection_and_draft() {
        let mut controller = MenuController::new();
        controller.select_dish(0);

        let state = controller.state();
        assert_eq!(state.selected_dish().map(|d| d.name.as_str()), Some("Pizza"));
        assert_eq!(state.draft_dish().name, "Pizza");
        assert_eq!(state.draft_dish().price, 12.0);
        // The selected dish has no description, so the draft loses its
        // empty-string one
        assert!(state.draft_dish().description.is_none());
        assert_eq!(state.current_screen(), Screen::DishDetails);
    }

    #[test]
    fn select_dish_out_of_range_is_a_noop() {
        let mut controller = MenuController::new();
        controller.select_dish(99);

        let state = controller.state();
        assert!(state.selected_dish().is_none());
        assert_eq!(state.current_screen(), Screen::Start);
        assert!(state.draft_dish().name.is_empty());
    }

    #[test]
    fn edit_draft_field_overwrites_single_fields() {
        let mut controller = MenuController::new();
        controller.edit_draft_field(DishField::Name, "Soup");
        controller.edit_draft_field(DishField::Course, "Starter");
        controller.edit_draft_field(DishField::Description, "of the day");

        let draft = controller.state().draft_dish();
        assert_eq!(draft.name, "Soup");
        assert_eq!(draft.course, "Starter");
        assert_eq!(draft.description.as_deref(), Some("of the day"));
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn edit_draft_price_parses_float() {
        let mut controller = MenuController::new();
        controller.edit_draft_field(DishField::Price, "7.5");
        assert_eq!(controller.state().draft_dish().price, 7.5);

        controller.edit_draft_field(DishField::Price, " 12 ");
        assert_eq!(controller.state().draft_dish().price, 12.0);
    }

    #[test]
    fn edit_draft_price_degrades_to_nan() {
        let mut controller = MenuController::new();
        controller.edit_draft_field(DishField::Price, "abc");
        assert!(controller.state().draft_dish().price.is_nan());

        controller.edit_draft_field(DishField::Price, "");
        assert!(controller.state().draft_dish().price.is_nan());
    }

    #[test]
    fn submit_draft_appends_and_returns_to_menu() {
        let mut controller = MenuController::new();
        controller.navigate_to(Screen::AddDish);
        controller.edit_draft_field(DishField::Name, "Soup");
        controller.edit_draft_field(DishField::Course, "Starter");
        controller.edit_draft_field(DishField::Price, "5");
        controller.submit_draft();

        let state = controller.state();
        assert_eq!(state.current_screen(), Screen::Menu);
        assert_eq!(state.dishes().len(), 4);

        // Prior entries untouched, new entry last
        let names: Vec<&str> = state.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Pasta", "Burger", "Soup"]);
        assert_eq!(state.dishes()[3].price, 5.0);
    }

    #[test]
    fn submit_draft_does_not_reset_the_draft() {
        let mut controller = MenuController::new();
        controller.edit_draft_field(DishField::Name, "Soup");
        controller.submit_draft();

        assert_eq!(controller.state().draft_dish().name, "Soup");

        // Submitting again duplicates the entry
        controller.submit_draft();
        assert_eq!(controller.state().dishes().len(), 5);
    }

    #[test]
    fn submit_draft_carries_nan_price_through() {
        let mut controller = MenuController::new();
        controller.edit_draft_field(DishField::Name, "Mystery");
        controller.edit_draft_field(DishField::Price, "not a price");
        controller.submit_draft();

        let last = controller.state().dishes().last().unwrap();
        assert!(last.price.is_nan());
    }

    #[test]
    fn remove_dish_removes_every_match_in_order() {
        let mut controller = MenuController::with_dishes(vec![
            Dish::new("Pizza", "Main", 12.0),
            Dish::new("Pasta", "Main", 10.0),
            Dish::new("Pizza", "Starter", 6.0),
            Dish::new("Burger", "Main", 8.0),
        ]);
        controller.remove_dish("Pizza");

        let names: Vec<&str> = controller
            .state()
            .dishes()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Pasta", "Burger"]);
    }

    #[test]
    fn remove_unknown_name_is_a_noop() {
        let mut controller = MenuController::new();
        controller.remove_dish("Sushi");
        assert_eq!(controller.state().dishes().len(), 3);
    }

    #[test]
    fn filter_by_course_matches_exactly() {
        let mut controller = MenuController::new();
        controller.filter_by_course("Main");

        let state = controller.state();
        assert_eq!(state.filtered_dishes().len(), 3);
        assert_eq!(state.filtered_dishes(), state.dishes());
        assert_eq!(state.last_filter_course(), Some("Main"));
    }

    #[test]
    fn filter_by_unused_course_yields_empty() {
        let mut controller = MenuController::new();
        controller.filter_by_course("Dessert");
        assert!(controller.state().filtered_dishes().is_empty());
        assert_eq!(controller.state().last_filter_course(), Some("Dessert"));
    }

    #[test]
    fn filter_is_case_sensitive_without_trimming() {
        let mut controller = MenuController::new();
        controller.filter_by_course("main");
        assert!(controller.state().filtered_dishes().is_empty());

        controller.filter_by_course("Main ");
        assert!(controller.state().filtered_dishes().is_empty());
    }

    #[test]
    fn filtered_snapshot_goes_stale_until_next_filter() {
        let mut controller = MenuController::new();
        controller.filter_by_course("Main");
        assert_eq!(controller.state().filtered_dishes().len(), 3);

        // Mutations after the filter do not refresh the snapshot
        controller.edit_draft_field(DishField::Name, "Steak");
        controller.edit_draft_field(DishField::Course, "Main");
        controller.submit_draft();
        controller.remove_dish("Pizza");
        assert_eq!(controller.state().filtered_dishes().len(), 3);

        // The next filter sees the updated menu
        controller.filter_by_course("Main");
        let names: Vec<&str> = controller
            .state()
            .filtered_dishes()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Pasta", "Burger", "Steak"]);
    }
}
