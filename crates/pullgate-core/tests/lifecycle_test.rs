//! Attach/detach lifecycle: idempotence, scoped listener and timer
//! release, and teardown from arbitrary states.

use std::rc::Rc;

use pullgate_core::{
    InputRoot, OverlayRegistry, RefreshController, ScrollProbe, ThresholdPolicy,
};
use pullgate_testing::{GestureRobot, ScrollStub};

#[test]
fn attach_is_idempotent() {
    let robot = GestureRobot::new(ThresholdPolicy::default());
    assert_eq!(robot.root().handler_count(), 1);

    robot.controller().attach(robot.root());
    robot.controller().attach(robot.root());
    assert_eq!(robot.root().handler_count(), 1);

    // Still exactly one sampler behind the root: one pull, one reload.
    robot.pull(225.0);
    assert_eq!(robot.reload_count(), 1);
}

#[test]
fn detach_removes_the_capture_handler() {
    let robot = GestureRobot::new(ThresholdPolicy::default());
    robot.controller().detach();
    assert_eq!(robot.root().handler_count(), 0);
    assert!(!robot.controller().is_attached());

    robot.pull(225.0);
    assert_eq!(robot.reload_count(), 0);
}

#[test]
fn detach_is_safe_to_repeat_from_any_state() {
    let robot = GestureRobot::new(ThresholdPolicy::default());
    robot.controller().detach();
    robot.controller().detach();

    let detached = RefreshController::new(
        ThresholdPolicy::default(),
        OverlayRegistry::new(),
        Rc::new(ScrollStub::default()) as Rc<dyn ScrollProbe>,
        || {},
    );
    // Never attached at all.
    detached.detach();
}

#[test]
fn detach_mid_gesture_drops_the_session_without_firing() {
    let robot = GestureRobot::new(ThresholdPolicy::default());
    robot.touch_down(40.0, 0.0);
    robot.touch_move(40.0, 225.0);
    assert_eq!(robot.pull_distance(), 100.0);

    robot.controller().detach();
    assert_eq!(robot.pull_distance(), 0.0);
    assert_eq!(robot.reload_count(), 0);
}

#[test]
fn detach_clears_an_armed_hold_timer() {
    let robot = GestureRobot::new(ThresholdPolicy::default().with_long_press());
    robot.mouse_down(100.0, 100.0);
    assert!(robot.controller().next_deadline().is_some());

    robot.controller().detach();
    assert!(robot.controller().next_deadline().is_none());
    assert!(!robot.advance_ms(5000));
    assert_eq!(robot.reload_count(), 0);
}

#[test]
fn reattach_after_detach_resumes_gesture_detection() {
    let robot = GestureRobot::new(ThresholdPolicy::default());
    robot.controller().detach();
    robot.controller().attach(robot.root());

    robot.pull(225.0);
    assert_eq!(robot.reload_count(), 1);
}

#[test]
fn dropping_the_controller_releases_its_handler() {
    let root = InputRoot::new();
    {
        let controller = RefreshController::new(
            ThresholdPolicy::default(),
            OverlayRegistry::new(),
            Rc::new(ScrollStub::default()) as Rc<dyn ScrollProbe>,
            || {},
        );
        controller.attach(&root);
        assert_eq!(root.handler_count(), 1);
    }
    assert_eq!(root.handler_count(), 0);
}
