//! Gesture ownership between the pager and a child scrolling across it.

use screenpager_core::{Horizontal, IntSize, TouchState};
use screenpager_testing::PagerRobot;

fn robot_with_child() -> PagerRobot<Horizontal> {
    PagerRobot::new(IntSize::new(300, 200), 3)
        .expect("pager lays out")
        .with_child_target()
}

#[test]
fn cross_axis_drag_stays_with_child() {
    let mut robot = robot_with_child();
    robot.press(150.0, 180.0);
    robot.advance_millis(16);
    robot.move_to(152.0, 150.0);
    assert_eq!(robot.pager().touch_state(), TouchState::ScrollingOther);

    // Turning sideways later in the same gesture does not hand it over.
    for x in [120.0, 90.0, 60.0] {
        robot.advance_millis(16);
        robot.move_to(x, 150.0);
    }
    assert!(!robot.pager_owns_gesture());
    assert_eq!(robot.scroll_offset(), 0);

    robot.release();
    robot.run_animation_to_idle();
    assert_eq!(robot.current_screen(), 0);
    assert_eq!(robot.scroll_offset(), 0);
}

#[test]
fn primary_axis_drag_is_taken_from_child() {
    let mut robot = robot_with_child();
    robot.drag((200.0, 100.0), (100.0, 100.0), 10, 30);
    assert!(robot.pager_owns_gesture());
    // The move that crossed the slop was consumed by the intercept.
    assert_eq!(robot.pager().pending_screen(), Some(1));

    robot.run_animation_to_idle();
    assert_eq!(robot.current_screen(), 1);
    assert_eq!(robot.switched_screens(), vec![1]);
}

#[test]
fn next_gesture_starts_with_the_child_again() {
    let mut robot = robot_with_child();
    robot.drag((200.0, 100.0), (100.0, 100.0), 10, 30);
    robot.run_animation_to_idle();

    robot.press(150.0, 100.0);
    assert!(!robot.pager_owns_gesture());
    assert_eq!(robot.pager().touch_state(), TouchState::Rest);
}
