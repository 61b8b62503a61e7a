// SPDX-License-Identifier: MPL-2.0
use notification_stack::config::StackConfig;
use notification_stack::ui::notifications::{
    ItemId, ManualClock, NotificationItem, NotificationMessage, NotificationStack, ProgressCard,
    RemovalReason, ScreenshotCard, StackEvent, StatusCard,
};
use std::time::{Duration, Instant};

fn stack_with(
    capacity: usize,
    idle_timeout_secs: u64,
) -> (NotificationStack<ManualClock>, ManualClock) {
    let config = StackConfig {
        capacity: Some(capacity),
        idle_timeout_secs: Some(idle_timeout_secs),
        ..StackConfig::default()
    };
    let clock = ManualClock::new();
    (NotificationStack::with_clock(&config, clock.clone()), clock)
}

fn tick(stack: &mut NotificationStack<ManualClock>) {
    stack.handle_message(&NotificationMessage::Tick(Instant::now()));
}

#[test]
fn insertion_order_and_eviction_follow_capacity() {
    let (mut stack, _clock) = stack_with(2, 5);

    let a = StatusCard::new("A");
    let b = StatusCard::new("B");
    let (c, c_tracker) = ProgressCard::new("C");
    let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
    stack.add(a).expect("add A");
    stack.add(b).expect("add B");
    stack.add(c).expect("add C");

    // C is unfinished, B is within capacity, A is the oldest excess
    assert_eq!(stack.ids(), vec![c_id, b_id]);
    assert!(!stack.contains(a_id));

    c_tracker.finish();
    let d = StatusCard::new("D");
    let d_id = d.id();
    stack.add(d).expect("add D");
    assert_eq!(stack.ids(), vec![d_id, c_id]);
}

#[test]
fn unfinished_cards_may_exceed_capacity() {
    let (mut stack, _clock) = stack_with(1, 5);
    let mut trackers = Vec::new();
    for n in 0..3 {
        let (card, tracker) = ProgressCard::new(format!("job {n}"));
        stack.add(card).expect("add progress card");
        trackers.push(tracker);
    }
    assert_eq!(stack.len(), 3);

    for tracker in &trackers {
        tracker.finish();
    }
    stack.add(StatusCard::new("done")).expect("add status");
    assert_eq!(stack.len(), 1);
}

#[test]
fn pointer_activity_restarts_idle_period() {
    let (mut stack, clock) = stack_with(5, 5);
    stack.add(StatusCard::new("Recording started")).expect("add");

    clock.advance(Duration::from_secs(4));
    tick(&mut stack);
    stack.handle_message(&NotificationMessage::PointerMoved);

    clock.advance(Duration::from_secs(4));
    tick(&mut stack);
    assert!(stack.is_visible());

    clock.advance(Duration::from_secs(1));
    tick(&mut stack);
    assert!(!stack.is_visible());
    assert!(!stack.is_timer_running());
    // Hiding never drops cards
    assert_eq!(stack.len(), 1);
}

#[test]
fn work_in_flight_keeps_stack_visible() {
    let (mut stack, clock) = stack_with(5, 5);
    let (card, tracker) = ProgressCard::new("Uploading");
    stack.add(card).expect("add");

    clock.advance(Duration::from_secs(30));
    tick(&mut stack);
    assert!(stack.is_visible());

    tracker.finish();
    clock.advance(Duration::from_secs(5));
    tick(&mut stack);
    assert!(!stack.is_visible());
}

#[test]
fn removal_signal_takes_card_out_and_hides_empty_stack() {
    let (mut stack, _clock) = stack_with(5, 5);
    let (card, tracker) = ProgressCard::new("Encoding");
    let id = card.id();
    stack.add(card).expect("add");
    stack.take_events();

    assert!(tracker.request_removal());
    assert_eq!(stack.process_removal_requests(), 1);
    assert!(stack.is_empty());
    assert!(!stack.is_visible());
    assert_eq!(
        stack.take_events(),
        vec![
            StackEvent::Removed {
                id,
                reason: RemovalReason::Requested
            },
            StackEvent::Hidden,
        ]
    );
}

#[test]
fn newest_screenshot_is_the_only_expanded_card() {
    let (mut stack, _clock) = stack_with(5, 5);
    let first = ScreenshotCard::new("/tmp/one.png");
    let second = ScreenshotCard::new("/tmp/two.png");
    let (first_id, second_id) = (first.id(), second.id());

    stack.add(first).expect("add first");
    assert_eq!(stack.expanded(), Some(first_id));
    stack.add(second).expect("add second");
    assert_eq!(stack.expanded(), Some(second_id));

    stack.handle_message(&NotificationMessage::ToggleExpanded(first_id));
    assert_eq!(stack.expanded(), Some(first_id));
}

#[test]
fn close_all_removes_everything_including_unfinished() {
    let (mut stack, _clock) = stack_with(5, 5);
    let (card, _tracker) = ProgressCard::new("Recording");
    stack.add(card).expect("add progress");
    stack.add(StatusCard::new("Saved")).expect("add status");

    stack.handle_message(&NotificationMessage::CloseAll);
    assert!(stack.is_empty());
    assert!(!stack.is_visible());
}

#[test]
fn dismissing_unknown_card_is_harmless() {
    let (mut stack, _clock) = stack_with(5, 5);
    stack.add(StatusCard::new("kept")).expect("add");
    stack.handle_message(&NotificationMessage::Dismiss(ItemId::new()));
    assert_eq!(stack.len(), 1);
    assert!(stack.is_visible());
}

#[test]
fn finished_cards_never_exceed_capacity() {
    for capacity in 1..=4 {
        let (mut stack, _clock) = stack_with(capacity, 5);
        for n in 0..10 {
            stack
                .add(StatusCard::new(format!("card {n}")))
                .expect("add");
            assert!(stack.len() <= capacity);
        }
        assert_eq!(stack.len(), capacity);
    }
}
