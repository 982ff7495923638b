/*!
 * Guard Integration Tests
 *
 * Real-world scenarios combining multiple guard types
 */

use super::support::{TeardownLog, Widget};
use pretty_assertions::assert_eq;
use scoped_guards::core::guard::*;
use scoped_guards::host::{
    suppress_notifications, DeletionConfig, DeletionQueue, Emitter, SuppressNotifications,
};
use std::cell::Cell;
use std::sync::Arc;

#[test]
fn test_delete_guard_panic_unwind() {
    let torn_down = TeardownLog::default();
    let queue = DeletionQueue::new();
    let mut slot = Widget::boxed(42, queue.scheduler(), &torn_down);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = DeleteGuard::new(&mut slot);
        panic!("failure before explicit cleanup");
    }));

    assert!(result.is_err());
    assert!(slot.is_none());
    assert_eq!(queue.pending(), 1);

    queue.process_deferred_deletes();
    assert_eq!(*torn_down.lock(), vec![42]);
}

/// A page-loading routine in the style of an installer step
struct Page {
    loading: Cell<bool>,
    changed: Emitter<String>,
    title: String,
    preview: Option<Box<Widget>>,
}

impl Page {
    /// Rebuild the page; returns early when the source is empty
    fn reload(&mut self, source: &str, status: Option<&mut &'static str>) {
        let mut status = PointerSetter::new(status);
        let _loading = SetTrue::new(&self.loading);
        let _quiet = suppress_notifications(&self.changed);
        let mut preview = DeleteGuard::new(&mut self.preview);

        if source.is_empty() {
            status.set("empty");
            return;
        }

        // Keep the preview when the title is unchanged
        if self.title == source {
            preview.preserve();
            status.set("unchanged");
            return;
        }

        self.changed.emit(&source.to_string());
        status.set("reloaded");
    }
}

#[test]
fn test_combined_guards_on_every_exit_path() {
    let torn_down = TeardownLog::default();
    let queue = DeletionQueue::with_config(DeletionConfig::interactive());
    let hits = Arc::new(parking_lot::Mutex::new(Vec::new()));

    let mut page = Page {
        loading: Cell::new(false),
        changed: Emitter::new(),
        title: "Welcome".into(),
        preview: Widget::boxed(1, queue.scheduler(), &torn_down),
    };
    let h = hits.clone();
    page.changed.connect(move |s: &String| h.lock().push(s.clone()));

    let mut status = "none";

    page.reload("Welcome", Some(&mut status));
    assert_eq!(status, "unchanged");
    assert!(page.preview.is_some());
    assert!(!page.loading.get());

    page.reload("Partitions", Some(&mut status));
    assert_eq!(status, "reloaded");
    assert!(page.preview.is_none());
    assert_eq!(queue.pending(), 1);

    page.reload("", None);
    assert!(!page.loading.get());
    assert!(!page.changed.notifications_blocked());

    // Emission inside reload was suppressed
    assert!(hits.lock().is_empty());
    page.changed.emit(&"after".to_string());
    assert_eq!(*hits.lock(), vec!["after".to_string()]);
}
