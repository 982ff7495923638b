/*!
 * Signal Blocker Tests
 */

use scoped_guards::core::guard::*;
use scoped_guards::host::{suppress_notifications, Emitter, SuppressNotifications};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counted(emitter: &Emitter<String>) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    emitter.connect(move |_| {
        h.fetch_add(1, Ordering::SeqCst);
    });
    hits
}

#[test]
fn test_blocker_suppresses_emission() {
    let emitter = Emitter::new();
    let hits = counted(&emitter);

    {
        let _blocker = SignalBlocker::new(&emitter);
        assert_eq!(emitter.emit(&"hidden".to_string()), 0);
    }
    assert_eq!(emitter.emit(&"seen".to_string()), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_nested_blockers_restore_in_order() {
    let emitter = Emitter::<String>::new();

    let outer = suppress_notifications(&emitter);
    {
        let inner = suppress_notifications(&emitter);
        assert!(inner.previous());
    }
    assert!(emitter.notifications_blocked());
    drop(outer);
    assert!(!emitter.notifications_blocked());
}

#[test]
fn test_blocker_respects_preexisting_block() {
    let emitter = Emitter::<String>::new();
    emitter.block_notifications(true);
    {
        let blocker = SignalBlocker::new(&emitter);
        assert!(blocker.previous());
    }
    assert!(emitter.notifications_blocked());
}

#[test]
fn test_unblock_window_inside_scope() {
    let emitter = Emitter::new();
    let hits = counted(&emitter);

    {
        let mut blocker = SignalBlocker::new(&emitter);
        emitter.emit(&"a".to_string());
        blocker.unblock();
        emitter.emit(&"b".to_string());
        blocker.reblock();
        emitter.emit(&"c".to_string());
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!emitter.notifications_blocked());
}

#[test]
fn test_reblock_without_unblock_restores_on_drop() {
    let emitter = Emitter::new();
    let hits = counted(&emitter);

    {
        let mut blocker = SignalBlocker::new(&emitter);
        blocker.reblock();
        blocker.reblock();
        assert!(!blocker.previous());
        assert_eq!(emitter.emit(&"hidden".to_string()), 0);
    }

    assert!(!emitter.notifications_blocked());
    assert_eq!(emitter.emit(&"seen".to_string()), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dismissed_blocker_keeps_emitter_blocked() {
    let emitter = Emitter::<String>::new();
    suppress_notifications(&emitter).dismiss();
    assert!(emitter.notifications_blocked());
}

#[test]
fn test_blocker_restores_on_panic() {
    let emitter = Emitter::<String>::new();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _blocker = SignalBlocker::new(&emitter);
        panic!("handler failed");
    }));

    assert!(result.is_err());
    assert!(!emitter.notifications_blocked());
}
