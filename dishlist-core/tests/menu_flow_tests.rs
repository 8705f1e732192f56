#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the command surface, driven the way a frontend
//! drives it: commands in through `apply`, read accessors out.

use dishlist_core::{Command, Dish, DishField, MenuController, Screen};

fn dish_names(dishes: &[Dish]) -> Vec<&str> {
    dishes.iter().map(|dish| dish.name.as_str()).collect()
}

// ===== Navigation flows =====

#[test]
fn start_to_menu_and_back() {
    let mut controller = MenuController::new();
    assert_eq!(controller.state().current_screen(), Screen::Start);

    controller.apply(Command::NavigateTo(Screen::Menu));
    assert_eq!(controller.state().current_screen(), Screen::Menu);

    controller.apply(Command::NavigateTo(Screen::Start));
    assert_eq!(controller.state().current_screen(), Screen::Start);
}

#[test]
fn add_dish_flow_appends_and_lands_on_menu() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::Menu));
    controller.apply(Command::NavigateTo(Screen::AddDish));
    controller.apply(Command::EditDraftField(DishField::Name, "Soup".into()));
    controller.apply(Command::EditDraftField(DishField::Course, "Starter".into()));
    controller.apply(Command::EditDraftField(DishField::Price, "5".into()));
    controller.apply(Command::SubmitDraft);

    let state = controller.state();
    assert_eq!(state.current_screen(), Screen::Menu);
    assert_eq!(
        dish_names(state.dishes()),
        ["Pizza", "Pasta", "Burger", "Soup"]
    );

    let added = state.dishes().last().unwrap();
    assert_eq!(added.course, "Starter");
    assert_eq!(added.price, 5.0);
    // Never edited, so the description keeps its initial empty string
    assert_eq!(added.description.as_deref(), Some(""));
}

#[test]
fn abandoned_draft_survives_leaving_the_form() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::AddDish));
    controller.apply(Command::EditDraftField(DishField::Name, "Half-typed".into()));

    // Back out without submitting, then return
    controller.apply(Command::NavigateTo(Screen::Menu));
    controller.apply(Command::NavigateTo(Screen::AddDish));

    assert_eq!(controller.state().draft_dish().name, "Half-typed");
    assert_eq!(controller.state().dishes().len(), 3);
}

#[test]
fn average_price_follows_menu_mutations() {
    let mut controller = MenuController::new();
    assert_eq!(controller.state().average_price(), 10.0);

    controller.apply(Command::RemoveDish("Pizza".into()));
    assert_eq!(controller.state().average_price(), 9.0);

    controller.apply(Command::RemoveDish("Pasta".into()));
    controller.apply(Command::RemoveDish("Burger".into()));
    assert_eq!(controller.state().dishes().len(), 0);
    assert_eq!(controller.state().average_price(), 0.0);

    // Adding from the draft brings the average back
    controller.apply(Command::EditDraftField(DishField::Name, "Cake".into()));
    controller.apply(Command::EditDraftField(DishField::Course, "Dessert".into()));
    controller.apply(Command::EditDraftField(DishField::Price, "6".into()));
    controller.apply(Command::SubmitDraft);
    assert_eq!(controller.state().average_price(), 6.0);
}

#[test]
fn removing_a_duplicated_name_clears_every_copy() {
    let mut controller = MenuController::new();
    controller.apply(Command::EditDraftField(DishField::Name, "Pizza".into()));
    controller.apply(Command::EditDraftField(DishField::Course, "Starter".into()));
    controller.apply(Command::EditDraftField(DishField::Price, "4".into()));
    controller.apply(Command::SubmitDraft);
    assert_eq!(
        dish_names(controller.state().dishes()),
        ["Pizza", "Pasta", "Burger", "Pizza"]
    );

    controller.apply(Command::RemoveDish("Pizza".into()));
    assert_eq!(dish_names(controller.state().dishes()), ["Pasta", "Burger"]);
}

// ===== Filter flows =====

#[test]
fn filter_snapshot_survives_navigation_and_goes_stale() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::FilterDishes));
    controller.apply(Command::FilterByCourse("Main".into()));
    assert_eq!(controller.state().current_screen(), Screen::FilterDishes);
    assert_eq!(controller.state().filtered_dishes().len(), 3);

    // Leave the screen and remove a dish; the snapshot still lists it
    controller.apply(Command::NavigateTo(Screen::Menu));
    controller.apply(Command::RemoveDish("Pizza".into()));
    assert_eq!(
        dish_names(controller.state().filtered_dishes()),
        ["Pizza", "Pasta", "Burger"]
    );
    assert_eq!(dish_names(controller.state().dishes()), ["Pasta", "Burger"]);

    // The next filter refreshes the snapshot
    controller.apply(Command::NavigateTo(Screen::FilterDishes));
    controller.apply(Command::FilterByCourse("Main".into()));
    assert_eq!(
        dish_names(controller.state().filtered_dishes()),
        ["Pasta", "Burger"]
    );
}

#[test]
fn filter_by_unused_course_yields_empty_not_error() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::FilterDishes));
    controller.apply(Command::FilterByCourse("Dessert".into()));

    assert!(controller.state().filtered_dishes().is_empty());
    assert_eq!(controller.state().last_filter_course(), Some("Dessert"));
    assert_eq!(controller.state().current_screen(), Screen::FilterDishes);
}

// ===== Dead-branch selection =====

#[test]
fn selecting_a_dish_reaches_the_unwired_detail_screen() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::Menu));
    controller.apply(Command::SelectDish(1));

    let state = controller.state();
    assert_eq!(state.current_screen(), Screen::DishDetails);
    assert_eq!(state.selected_dish().unwrap().name, "Pasta");
    // Selection repopulates the draft wholesale
    assert_eq!(state.draft_dish().name, "Pasta");
    assert_eq!(state.draft_dish().price, 10.0);

    // The form now carries the selected dish; submitting duplicates it
    controller.apply(Command::NavigateTo(Screen::AddDish));
    controller.apply(Command::SubmitDraft);
    assert_eq!(
        dish_names(controller.state().dishes()),
        ["Pizza", "Pasta", "Burger", "Pasta"]
    );
}

#[test]
fn selecting_out_of_range_changes_nothing() {
    let mut controller = MenuController::new();
    controller.apply(Command::NavigateTo(Screen::Menu));
    controller.apply(Command::SelectDish(42));

    let state = controller.state();
    assert_eq!(state.current_screen(), Screen::Menu);
    assert!(state.selected_dish().is_none());
    assert!(state.draft_dish().name.is_empty());
}

// ===== String boundary =====

#[test]
fn unknown_screen_identifier_fails_parse_without_disturbing_state() {
    let mut controller = MenuController::new();

    let err = "Settings".parse::<Screen>().unwrap_err();
    assert_eq!(err.name, "Settings");

    // Only parsed screens ever reach the controller, so it is unaffected
    controller.apply(Command::NavigateTo(Screen::Menu));
    assert_eq!(controller.state().current_screen(), Screen::Menu);
    assert_eq!(controller.state().dishes().len(), 3);
}
