use fenestra_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, HistoryEvent};
use fenestra_core::{Momento, MomentoManager};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[test]
fn test_manager_starts_empty() {
    let manager = MomentoManager::new();
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert!(manager.current().is_none());
}

#[test]
fn test_undo_redo_cursor() {
    let mut manager = MomentoManager::new();
    manager.check_point();
    manager.check_point();
    manager.check_point();
    assert_eq!(manager.checkpoint_count(), 3);

    assert_eq!(manager.undo().map(|c| c.seq), Some(2));
    assert_eq!(manager.undo().map(|c| c.seq), Some(1));
    // The first checkpoint is the base state and cannot be undone.
    assert!(manager.undo().is_none());

    assert_eq!(manager.redo().map(|c| c.seq), Some(2));
    assert!(manager.can_redo());
}

#[test]
fn test_new_checkpoint_clears_redo() {
    let mut manager = MomentoManager::new();
    manager.check_point();
    manager.check_point();
    manager.undo();
    assert!(manager.can_redo());

    manager.check_point();
    assert!(!manager.can_redo());
    assert_eq!(manager.current().map(|c| c.seq), Some(3));
}

#[test]
fn test_max_depth_drops_oldest() {
    let mut manager = MomentoManager::with_depth(3);
    for _ in 0..5 {
        manager.check_point();
    }
    assert_eq!(manager.checkpoint_count(), 3);
    manager.undo();
    assert_eq!(manager.undo().map(|c| c.seq), Some(3));
}

#[test]
fn test_snapshot_source() {
    let counter = Rc::new(Cell::new(0));
    let source = counter.clone();
    let mut manager = MomentoManager::new().with_snapshot_source(move || {
        source.set(source.get() + 1);
        serde_json::json!({ "version": source.get() })
    });

    manager.check_point();
    manager.check_point();
    assert_eq!(counter.get(), 2);
    let snapshot = manager.current().and_then(|c| c.snapshot.clone());
    assert_eq!(snapshot, Some(serde_json::json!({ "version": 2 })));
}

#[test]
fn test_history_events_published() {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::History]),
        move |event| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(event.clone());
            }
        },
    );

    let mut manager = MomentoManager::new().with_event_bus(bus);
    manager.check_point();
    manager.check_point();
    manager.undo();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            AppEvent::History(HistoryEvent::CheckpointRecorded { seq: 1 }),
            AppEvent::History(HistoryEvent::CheckpointRecorded { seq: 2 }),
            AppEvent::History(HistoryEvent::Undone { seq: 1 }),
        ]
    );
}
