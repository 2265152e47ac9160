//! Two-contact behaviour: pinch recognition and how a second contact
//! interrupts one-contact gestures.

use tactile_foundation::{
    GestureConfig, GestureEvent, GestureEventKind, MultiContactPolicy, PinchEvent,
    RecognizerState,
};
use tactile_testing::GestureTestRule;

fn pinch(event: &GestureEvent) -> PinchEvent {
    event.as_pinch().cloned().expect("pinch notification")
}

#[test]
fn spreading_two_contacts_reports_pinch_lifecycle() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.down(2, 20.0, 0.0);
    assert_eq!(rule.state(), RecognizerState::PossibleMultiContact);
    assert_eq!(rule.captured_pointers(), vec![1, 2]);
    assert_eq!(rule.pending_timers(), 0);

    rule.move_to(2, 30.0, 0.0);
    rule.move_to(1, -10.0, 0.0);
    assert_eq!(rule.state(), RecognizerState::Pinching);
    rule.up(2, 30.0, 0.0);

    assert_eq!(rule.event_names(), vec!["pinchstart", "pinchmove", "pinchend"]);
    let events = rule.events();

    let start = pinch(&events[0]);
    assert_eq!((start.x, start.y), (30.0, 0.0));
    assert_eq!((start.center_x, start.center_y), (10.0, 0.0));
    assert_eq!(start.distance, 30.0);

    let moved = pinch(&events[1]);
    assert_eq!((moved.x, moved.y), (-10.0, 0.0));
    assert_eq!((moved.center_x, moved.center_y), (10.0, 0.0));
    assert_eq!(moved.distance, 40.0);

    let end = pinch(&events[2]);
    assert_eq!((end.x, end.y), (-10.0, 0.0));
    assert_eq!(end.distance, 40.0);
}

#[test]
fn lone_contact_after_pinch_is_ignored_until_lifted() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.down(2, 20.0, 0.0);
    rule.move_to(2, 40.0, 0.0);
    rule.up(2, 40.0, 0.0);

    assert_eq!(rule.state(), RecognizerState::Canceled);
    assert_eq!(rule.captured_pointers(), vec![1]);
    rule.take_events();

    rule.move_to(1, 80.0, 0.0);
    rule.advance(1_000);
    rule.up(1, 80.0, 0.0);

    assert!(rule.events().is_empty());
    assert_eq!(rule.state(), RecognizerState::Idle);
    assert!(rule.captured_pointers().is_empty());
}

#[test]
fn second_contact_spoils_a_tap() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.down(2, 3.0, 0.0);
    rule.move_to(2, 4.0, 0.0);
    assert_eq!(rule.state(), RecognizerState::PossibleMultiContact);
    rule.up(2, 4.0, 0.0);
    rule.up(1, 0.0, 0.0);

    assert!(rule.events().is_empty());
    assert_eq!(rule.state(), RecognizerState::Idle);
}

#[test]
fn second_contact_cancels_a_pan() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.move_to(1, 10.0, 0.0);
    rule.down(2, 50.0, 50.0);

    assert_eq!(rule.event_names(), vec!["panstart", "pancancel"]);
    let cancel = rule.last(GestureEventKind::PanCancel).unwrap();
    let cancel = cancel.as_pan().unwrap();
    assert_eq!((cancel.offset_x, cancel.delta_x), (10.0, 0.0));
    assert_eq!(rule.state(), RecognizerState::PossibleMultiContact);
    assert_eq!(rule.captured_pointers(), vec![1, 2]);
}

#[test]
fn second_contact_cancels_a_press() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.advance(500);
    rule.advance(50);
    rule.down(2, 50.0, 50.0);

    assert_eq!(rule.event_names(), vec!["pressstart", "presscancel"]);
    let cancel = rule.last(GestureEventKind::PressCancel).unwrap();
    assert_eq!(cancel.as_press().unwrap().duration, 550);
    assert_eq!(rule.state(), RecognizerState::PossibleMultiContact);
}

#[test]
fn third_contact_is_neither_tracked_nor_captured() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.down(2, 20.0, 0.0);
    rule.down(3, 40.0, 0.0);

    assert_eq!(rule.recognizer().tracked_contacts(), vec![1, 2]);
    assert_eq!(rule.captured_pointers(), vec![1, 2]);
    assert_eq!(rule.hub().capture_owner(3), None);

    rule.move_to(3, 90.0, 0.0);
    rule.up(3, 90.0, 0.0);
    assert!(rule.events().is_empty());
    assert_eq!(rule.state(), RecognizerState::PossibleMultiContact);
}

#[test]
fn ignore_policy_keeps_the_first_contact_gesture() {
    let rule = GestureTestRule::with_config(GestureConfig {
        multi_contact: MultiContactPolicy::Ignore,
        ..GestureConfig::default()
    });
    rule.down(1, 0.0, 0.0);
    rule.advance(50);
    rule.down(2, 30.0, 0.0);
    rule.move_to(2, 90.0, 0.0);

    assert_eq!(rule.state(), RecognizerState::PossibleTap);
    assert_eq!(rule.captured_pointers(), vec![1]);

    rule.up(2, 90.0, 0.0);
    rule.up(1, 0.0, 0.0);
    assert_eq!(rule.event_names(), vec!["tap"]);
}

#[test]
fn cancel_during_pinch_ends_it_and_resets() {
    let rule = GestureTestRule::new();
    rule.down(1, 0.0, 0.0);
    rule.down(2, 20.0, 0.0);
    rule.move_to(2, 40.0, 0.0);
    rule.cancel(1);

    assert_eq!(rule.event_names(), vec!["pinchstart", "pinchend"]);
    let end = pinch(&rule.events()[1]);
    assert_eq!((end.x, end.y), (40.0, 0.0));
    assert_eq!(end.distance, 40.0);
    assert_eq!(rule.state(), RecognizerState::Idle);
    assert!(rule.captured_pointers().is_empty());

    // the surviving contact no longer reports anything
    rule.move_to(2, 100.0, 0.0);
    rule.up(2, 100.0, 0.0);
    assert_eq!(rule.event_names(), vec!["pinchstart", "pinchend"]);
}
