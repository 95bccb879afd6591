use std::time::Duration;

use super::*;
use crate::animation::AnimationMode;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn history(session: &Session) -> Vec<String> {
    session.history().entries().map(str::to_string).collect()
}

/// Pushes each value and lets its animation finish. Returns the time reached.
fn push_all(session: &mut Session, values: &[&str], kind: ValueKind, mut now: Duration) -> Duration {
    for value in values {
        session.push(value, kind, now).unwrap();
        now = session.settle(now);
    }
    now
}

#[test]
fn test_scenario_push_then_type_mismatch() {
    let mut session = Session::new();
    let value = session.push("5", ValueKind::Integer, ms(0)).unwrap();
    assert_eq!(value, TypedValue::Integer(5));
    assert_eq!(session.stack().locked_kind(), Some(ValueKind::Integer));
    assert_eq!(history(&session), vec!["Pushed: 5"]);

    let now = session.settle(ms(0));
    let result = session.push("x", ValueKind::String, now);
    assert_eq!(
        result,
        Err(CommandError::Push(PushError::TypeMismatch {
            locked: ValueKind::Integer,
            requested: ValueKind::String,
        }))
    );
    assert_eq!(session.stack().elements(), &[TypedValue::Integer(5)]);
    assert_eq!(history(&session), vec!["Pushed: 5"]);
    assert!(!session.is_animating());
}

#[test]
fn test_scenario_pop_on_empty_stack() {
    let mut session = Session::new();
    assert_eq!(
        session.pop(ms(0)),
        Err(CommandError::Pop(PopError::EmptyStack))
    );
    assert!(session.history().is_empty());
    assert!(!session.is_animating());
}

#[test]
fn test_scenario_character_length() {
    let mut session = Session::new();
    let result = session.push("ab", ValueKind::Character, ms(0));
    assert!(matches!(result, Err(CommandError::Push(PushError::Parse(_)))));
    assert!(session.stack().is_empty());
    assert!(session.history().is_empty());

    assert_eq!(
        session.push("a", ValueKind::Character, ms(0)),
        Ok(TypedValue::Character('a'))
    );
}

#[test]
fn test_scenario_clear_after_ten_pushes() {
    let mut session = Session::new();
    let values: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let now = push_all(&mut session, &values, ValueKind::Integer, ms(0));
    session.peek(now).unwrap();
    assert_eq!(session.history().len(), 10);

    assert_eq!(session.clear(), Ok(10));
    assert!(session.stack().is_empty());
    assert_eq!(session.stack().locked_kind(), None);
    assert_eq!(session.history().len(), 0);
    assert!(!session.indicators().is_peek_active());
    assert!(!session.indicators().is_push_arrow_active());
}

#[test]
fn test_scenario_pop_removes_only_at_completion() {
    let mut session = Session::new();
    let now = push_all(&mut session, &["9"], ValueKind::Integer, ms(0));
    assert_eq!(now, ms(750));

    let pop_at = ms(1000);
    let candidate = session.pop(pop_at).unwrap();
    assert_eq!(candidate, TypedValue::Integer(9));
    assert_eq!(session.animation().mode(), AnimationMode::Popping);

    // nothing happens on the tick of the command itself
    assert_eq!(session.tick(pop_at), None);
    assert_eq!(session.animation().progress(), 0);

    for step in 1..25u64 {
        assert_eq!(session.tick(pop_at + ms(30 * step)), None);
        assert_eq!(session.animation().progress(), step as u32);
        assert_eq!(session.stack().elements(), &[TypedValue::Integer(9)]);
        assert_eq!(session.history().last(), Some("Pushed: 9"));
    }

    let completion = session.tick(pop_at + ms(30 * 25));
    assert_eq!(
        completion,
        Some(AnimationCompletion::Popped(TypedValue::Integer(9)))
    );
    assert!(session.stack().is_empty());
    assert_eq!(session.stack().locked_kind(), None);
    assert_eq!(session.history().last(), Some("Popped: 9"));
    assert_eq!(session.animation().mode(), AnimationMode::Idle);
    assert_eq!(session.animation().subject(), None);
}

#[test]
fn test_push_then_pop_all_restores_empty_state() {
    let mut session = Session::new();
    let mut now = push_all(&mut session, &["a", "b", "c"], ValueKind::String, ms(0));
    assert_eq!(session.stack().len(), 3);

    for expected in &["c", "b", "a"] {
        let candidate = session.pop(now).unwrap();
        assert_eq!(candidate, TypedValue::String(expected.to_string()));
        now = session.settle(now);
    }

    assert!(session.stack().is_empty());
    assert_eq!(session.stack().locked_kind(), None);
    assert_eq!(
        history(&session),
        vec!["Pushed: a", "Pushed: b", "Pushed: c", "Popped: c", "Popped: b", "Popped: a"]
    );

    // the lock is released, any kind can be pushed again
    session.push("1", ValueKind::Integer, now).unwrap();
    assert_eq!(session.stack().locked_kind(), Some(ValueKind::Integer));
}

#[test]
fn test_clear_on_empty_reports_already_empty() {
    let mut session = Session::new();
    assert_eq!(
        session.clear(),
        Err(CommandError::Clear(ClearError::AlreadyEmpty))
    );
    assert!(session.stack().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn test_capacity_boundary() {
    let mut session = Session::new();
    let values: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let now = push_all(&mut session, &values, ValueKind::Integer, ms(0));
    assert_eq!(session.stack().len(), 20);

    assert_eq!(
        session.push("20", ValueKind::Integer, now),
        Err(CommandError::Push(PushError::CapacityExceeded { capacity: 20 }))
    );
    assert_eq!(session.stack().len(), 20);
    assert!(!session.is_animating());
}

#[test]
fn test_history_keeps_last_ten() {
    let mut session = Session::new();
    let values: Vec<String> = (0..12).map(|i| i.to_string()).collect();
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    push_all(&mut session, &values, ValueKind::Integer, ms(0));

    let entries = history(&session);
    assert_eq!(entries.len(), 10);
    assert_eq!(entries.first().map(String::as_str), Some("Pushed: 2"));
    assert_eq!(entries.last().map(String::as_str), Some("Pushed: 11"));
}

#[test]
fn test_commands_rejected_while_animating() {
    let mut session = Session::new();
    session.push("1", ValueKind::Integer, ms(0)).unwrap();
    assert!(session.is_animating());

    assert_eq!(
        session.push("2", ValueKind::Integer, ms(5)),
        Err(CommandError::AnimationInProgress)
    );
    assert_eq!(session.pop(ms(5)), Err(CommandError::AnimationInProgress));
    assert_eq!(session.clear(), Err(CommandError::AnimationInProgress));
    assert_eq!(session.stack().len(), 1);
    assert_eq!(history(&session), vec!["Pushed: 1"]);

    // peek only reads
    assert_eq!(session.peek(ms(5)), Ok(TypedValue::Integer(1)));
    assert_eq!(session.animation().mode(), AnimationMode::Pushing);
}

#[test]
fn test_push_arms_arrow_and_peek_arms_highlight() {
    let mut session = Session::new();
    session.push("x", ValueKind::Character, ms(0)).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.push_arrow.slot(), Some(0));
    assert!(!snapshot.peek.is_active());

    let now = session.settle(ms(0));
    session.peek(now).unwrap();
    assert_eq!(session.history().last(), Some("Peeked: x"));
    assert!(session.indicators().is_peek_active());

    session.tick(ms(2000));
    assert!(!session.indicators().is_push_arrow_active());
    assert!(session.indicators().is_peek_active());

    session.tick(now + ms(3000));
    assert!(!session.indicators().is_peek_active());
}

#[test]
fn test_peek_on_empty_stack() {
    let mut session = Session::new();
    assert_eq!(
        session.peek(ms(0)),
        Err(CommandError::Peek(PeekError::EmptyStack))
    );
    assert!(!session.indicators().is_peek_active());
    assert!(session.history().is_empty());
}

#[test]
fn test_late_tick_catches_up() {
    let mut session = Session::new();
    session.push("1", ValueKind::Integer, ms(0)).unwrap();
    assert_eq!(
        session.tick(ms(10_000)),
        Some(AnimationCompletion::Pushed(TypedValue::Integer(1)))
    );
    assert!(!session.is_animating());
    assert_eq!(session.next_step_at(), None);
}

#[test]
fn test_speed_change_applies_from_next_step() {
    let mut session = Session::new();
    session.push("1", ValueKind::Integer, ms(0)).unwrap();
    assert_eq!(session.next_step_at(), Some(ms(30)));

    session.tick(ms(30));
    assert_eq!(session.animation().progress(), 1);
    assert_eq!(session.next_step_at(), Some(ms(60)));

    session.set_speed(10).unwrap();
    // the step already scheduled keeps its time
    assert_eq!(session.next_step_at(), Some(ms(60)));
    session.tick(ms(60));
    assert_eq!(session.next_step_at(), Some(ms(70)));
}

#[test]
fn test_invalid_speed_leaves_speed_unchanged() {
    let mut session = Session::new();
    assert!(matches!(
        session.set_speed(0),
        Err(CommandError::InvalidSpeed(_))
    ));
    assert!(matches!(
        session.set_speed(11),
        Err(CommandError::InvalidSpeed(_))
    ));
    assert_eq!(session.speed().level(), 5);
}

#[test]
fn test_cycle_kind_respects_lock() {
    let mut session = Session::new();
    assert_eq!(session.selected_kind(), ValueKind::Integer);
    assert_eq!(session.cycle_kind(), ValueKind::Character);

    session.push_selected("q", ms(0)).unwrap();
    assert_eq!(session.cycle_kind(), ValueKind::Character);
    assert_eq!(session.cycle_kind(), ValueKind::Character);
}

#[test]
fn test_toggle_theme() {
    let mut session = Session::new();
    assert_eq!(session.theme_mode(), ThemeMode::Light);
    assert_eq!(session.toggle_theme(), ThemeMode::Dark);
    assert_eq!(session.toggle_theme(), ThemeMode::Light);
}

#[test]
fn test_snapshot_reports_animation() {
    let mut session = Session::new();
    session.push("hello", ValueKind::String, ms(0)).unwrap();
    session.tick(ms(30 * 5));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.animation.mode, AnimationMode::Pushing);
    assert_eq!(
        snapshot.animation.subject,
        Some(&TypedValue::String("hello".to_string()))
    );
    assert_eq!(snapshot.animation.progress, 5);
    assert_eq!(snapshot.animated_slot(), Some(0));
    assert!(snapshot.opacity_at(0) < 1.0);
    assert_eq!(snapshot.history, vec!["Pushed: hello"]);
    assert_eq!(snapshot.locked_kind, Some(ValueKind::String));
}

#[test]
fn test_invariants_hold_over_random_walk() {
    let mut session = Session::with_config(VisualizerConfig {
        capacity: 4,
        ..VisualizerConfig::default()
    });
    let mut now = ms(0);
    let script = [
        ("push", "1", ValueKind::Integer),
        ("push", "a", ValueKind::Character),
        ("push", "2", ValueKind::Integer),
        ("pop", "", ValueKind::Integer),
        ("push", "3", ValueKind::Integer),
        ("push", "4", ValueKind::Integer),
        ("push", "5", ValueKind::Integer),
        ("push", "6", ValueKind::Integer),
        ("pop", "", ValueKind::Integer),
        ("clear", "", ValueKind::Integer),
        ("clear", "", ValueKind::Integer),
        ("push", "s", ValueKind::String),
        ("pop", "", ValueKind::Integer),
        ("pop", "", ValueKind::Integer),
    ];

    for (command, raw, kind) in script.iter() {
        let _ = match *command {
            "push" => session.push(raw, *kind, now).map(|_| ()),
            "pop" => session.pop(now).map(|_| ()),
            _ => session.clear().map(|_| ()),
        };
        now = session.settle(now + ms(1));

        let stack = session.stack();
        assert!(stack.len() <= 4);
        match stack.locked_kind() {
            None => assert!(stack.is_empty()),
            Some(locked) => assert!(stack.elements().iter().all(|v| v.kind() == locked)),
        }
    }
    assert!(session.stack().is_empty());
}
