//! Behavioural tests for the selection state machine.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use salon_core::{PoiId, Selection, SelectionController, SelectionError, seed};

type Controller = RefCell<Option<SelectionController>>;
type LastError = RefCell<Option<SelectionError>>;

#[fixture]
fn controller() -> Controller {
    RefCell::new(None)
}

#[fixture]
fn last_error() -> LastError {
    RefCell::new(None)
}

fn with_controller<T>(controller: &Controller, f: impl FnOnce(&mut SelectionController) -> T) -> T {
    let mut borrowed = controller.borrow_mut();
    let active = borrowed.as_mut().expect("controller initialised");
    f(active)
}

fn tap(controller: &Controller, last_error: &LastError, id: &str) {
    let outcome = with_controller(controller, |c| c.select(PoiId::from(id)));
    *last_error.borrow_mut() = outcome.err();
}

fn state(controller: &Controller) -> Selection {
    with_controller(controller, |c| c.state().clone())
}

#[given("the seeded salon map")]
fn given_seeded_map(#[from(controller)] controller: &Controller) {
    let store = seed::store().expect("seed data is valid");
    *controller.borrow_mut() = Some(SelectionController::new(Arc::new(store)));
}

#[when("I tap salon 1")]
fn when_tap_first(
    #[from(controller)] controller: &Controller,
    #[from(last_error)] last_error: &LastError,
) {
    tap(controller, last_error, "1");
}

#[when("I tap salon 2")]
fn when_tap_second(
    #[from(controller)] controller: &Controller,
    #[from(last_error)] last_error: &LastError,
) {
    tap(controller, last_error, "2");
}

#[when("I tap an unknown salon")]
fn when_tap_unknown(
    #[from(controller)] controller: &Controller,
    #[from(last_error)] last_error: &LastError,
) {
    tap(controller, last_error, "does-not-exist");
}

#[when("I expand the detail sheet")]
fn when_expand(#[from(controller)] controller: &Controller) {
    with_controller(controller, SelectionController::expand);
}

#[when("I close the detail sheet")]
fn when_close(#[from(controller)] controller: &Controller) {
    with_controller(controller, SelectionController::close);
}

#[then("salon 1 is previewed")]
fn then_first_previewed(#[from(controller)] controller: &Controller) {
    assert_eq!(state(controller), Selection::Previewing(PoiId::from("1")));
}

#[then("salon 2 is previewed")]
fn then_second_previewed(#[from(controller)] controller: &Controller) {
    assert_eq!(state(controller), Selection::Previewing(PoiId::from("2")));
}

#[then("the detail of salon 1 is open")]
fn then_first_detail(#[from(controller)] controller: &Controller) {
    assert_eq!(state(controller), Selection::DetailOpen(PoiId::from("1")));
}

#[then("nothing is selected")]
fn then_idle(#[from(controller)] controller: &Controller) {
    assert_eq!(state(controller), Selection::Idle);
}

#[then("the selection is rejected as unknown")]
fn then_rejected(#[from(last_error)] last_error: &LastError) {
    let error = last_error.borrow().clone().expect("an error was recorded");
    assert_eq!(
        error,
        SelectionError::UnknownId {
            id: PoiId::from("does-not-exist")
        }
    );
}

#[scenario(path = "tests/features/selection.feature", index = 0)]
fn scenario_switch_from_detail(controller: Controller, last_error: LastError) {
    let _ = (controller, last_error);
}

#[scenario(path = "tests/features/selection.feature", index = 1)]
fn scenario_unknown_salon(controller: Controller, last_error: LastError) {
    let _ = (controller, last_error);
}

#[scenario(path = "tests/features/selection.feature", index = 2)]
fn scenario_double_dismiss(controller: Controller, last_error: LastError) {
    let _ = (controller, last_error);
}
