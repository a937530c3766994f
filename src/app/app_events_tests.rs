//! Tests for app_events

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = test_app();
        app.handle_key_event(event);
        assert!(app.should_quit());
    }
}

#[test]
fn test_number_keys_enqueue_each_kind_in_order() {
    let mut app = test_app();
    for c in ['1', '2', '3', '4'] {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    let kinds: Vec<_> = app.notifications.list().map(|n| n.kind()).collect();
    assert_eq!(kinds, NotificationKind::ALL.to_vec());
}

#[test]
fn test_x_dismisses_newest_and_shift_x_oldest() {
    let mut app = test_app();
    for c in ['1', '2', '4'] {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    app.handle_key_event(key(KeyCode::Char('x')));
    let kinds: Vec<_> = app.notifications.list().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Error]);

    app.handle_key_event(key(KeyCode::Char('X')));
    let kinds: Vec<_> = app.notifications.list().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![NotificationKind::Error]);
}

#[test]
fn test_dismiss_keys_on_empty_set_are_noops() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Char('X')));
    app.handle_key_event(key(KeyCode::Char('a')));
    assert!(app.notifications.is_empty());
    assert!(app.activity.is_empty());
}

#[test]
fn test_action_key_runs_action_without_dismissing() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('2')));
    app.clear_dirty();

    app.handle_key_event(key(KeyCode::Char('a')));

    assert_eq!(app.notifications.len(), 1);
    assert_eq!(app.activity.len(), 1);
    assert!(app.should_render());
}

#[test]
fn test_manual_dismiss_then_timer_is_harmless() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('1')));
    app.advance_clock(Duration::from_millis(1000));
    app.handle_key_event(key(KeyCode::Char('x')));
    assert!(app.notifications.is_empty());
    assert_eq!(app.notifications.pending_timers(), 0);

    app.handle_key_event(key(KeyCode::Char('4')));
    app.advance_clock(Duration::from_millis(2000));
    // The info toast was enqueued at t=1000, so it lives until t=4000
    assert_eq!(app.notifications.len(), 1);
}

#[test]
fn test_unbound_key_changes_nothing() {
    let mut app = test_app();
    app.clear_dirty();
    app.handle_key_event(key(KeyCode::Char('z')));
    assert!(!app.should_render());
    assert!(!app.should_quit());
}

fn titles(app: &App) -> Vec<&str> {
    app.notifications.list().map(|n| n.title()).collect()
}

fn enqueue_titles(app: &mut App, titles: &[&str]) {
    for title in titles {
        app.notifications.enqueue(NotificationSpec::info(*title));
    }
}

#[test]
fn test_focus_up_then_close_middle_toast() {
    let mut app = test_app();
    enqueue_titles(&mut app, &["Alpha", "Bravo", "Charlie"]);

    app.handle_key_event(key(KeyCode::Up));
    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(titles(&app), vec!["Alpha", "Charlie"]);
}

#[test]
fn test_focus_up_then_run_middle_action() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('2')));
    enqueue_titles(&mut app, &["Later"]);

    // Newest has no action, so nothing runs until focus moves
    app.handle_key_event(key(KeyCode::Char('a')));
    assert!(app.activity.is_empty());

    app.handle_key_event(key(KeyCode::Char('k')));
    app.handle_key_event(key(KeyCode::Char('a')));

    assert_eq!(app.activity.len(), 1);
    assert_eq!(app.notifications.len(), 2);
}

#[test]
fn test_focus_stops_at_stack_ends() {
    let mut app = test_app();
    let ids: Vec<_> = ["Alpha", "Bravo"]
        .into_iter()
        .map(|t| app.notifications.enqueue(NotificationSpec::info(t)))
        .collect();

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Up));
    }
    assert_eq!(app.focused_notification(), Some(ids[0]));

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Char('j')));
    }
    assert_eq!(app.focused_notification(), Some(ids[1]));
}

#[test]
fn test_closing_focused_toast_hands_focus_to_newest() {
    let mut app = test_app();
    enqueue_titles(&mut app, &["Alpha", "Bravo", "Charlie"]);

    app.handle_key_event(key(KeyCode::Up));
    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(titles(&app), vec!["Alpha"]);
}

#[test]
fn test_shift_x_skips_toasts_hidden_by_cap() {
    let mut app = test_app();
    app.config.notifications.max_visible = 5;
    let names: Vec<String> = (0..7).map(|i| format!("Toast {}", i)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    enqueue_titles(&mut app, &names);

    app.handle_key_event(key(KeyCode::Char('X')));

    let left = titles(&app);
    assert_eq!(left.len(), 6);
    assert!(left.contains(&"Toast 0"));
    assert!(left.contains(&"Toast 1"));
    assert!(!left.contains(&"Toast 2"));
}

#[test]
fn test_focus_cannot_reach_toasts_hidden_by_cap() {
    let mut app = test_app();
    app.config.notifications.max_visible = 2;
    enqueue_titles(&mut app, &["Hidden", "Shown", "Newest"]);

    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::Up));
    }
    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(titles(&app), vec!["Hidden", "Newest"]);
}

#[test]
fn test_focus_move_requests_render() {
    let mut app = test_app();
    enqueue_titles(&mut app, &["Alpha", "Bravo"]);
    app.clear_dirty();

    app.handle_key_event(key(KeyCode::Up));
    assert!(app.should_render());

    // Already at the top: nothing changes
    app.clear_dirty();
    app.handle_key_event(key(KeyCode::Up));
    assert!(!app.should_render());
}
