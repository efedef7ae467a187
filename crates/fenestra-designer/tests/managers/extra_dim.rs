use fenestra_core::{Point, Vector};
use fenestra_designer::managers::{DimEnd, DimKind};
use fenestra_designer::{ExtraDim, ExtraDimManager, Frame, FrameRelation, Host, PolyId, WinPolygon};

fn board() -> Vec<Frame> {
    vec![Frame::new(
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 1000.0, 600.0).unwrap(),
    )]
}

fn pinned(frames: &[Frame]) -> ExtraDim {
    ExtraDim::new(
        "width",
        Point::new(-500.0, 0.0),
        Point::new(0.0, 0.0),
        Vector::new(0.0, -400.0),
        DimKind::Horizontal,
    )
    .with_relation(FrameRelation {
        frame_id: frames[0].id().to_string(),
        edge_index: 1,
        ratio: 0.5,
        end: DimEnd::End,
    })
}

#[test]
fn test_pinned_end_follows_frame() {
    let mut frames = board();
    let mut dim = pinned(&frames);
    assert!(dim.update_pt_from_relation(&frames));
    assert_eq!(dim.et, Point::new(500.0, 0.0));
    assert_eq!(dim.value(), 1000.0);

    frames[0].translate(Vector::new(100.0, 0.0));
    assert!(dim.update_pt_from_relation(&frames));
    assert_eq!(dim.et, Point::new(600.0, 0.0));
    assert_eq!(dim.value(), 1100.0);
    assert_eq!(dim.shapes().len(), 3);
}

#[test]
fn test_lost_frame_keeps_last_position() {
    let frames = board();
    let mut dim = pinned(&frames);
    dim.update_pt_from_relation(&frames);
    assert!(!dim.update_pt_from_relation(&[]));
    assert_eq!(dim.et, Point::new(500.0, 0.0));
}

#[test]
fn test_manager_updates_and_persists() {
    let frames = board();
    let mut manager = ExtraDimManager::new();
    manager.add(pinned(&frames));
    manager.update_from_frames(&frames);
    assert_eq!(manager.get("width").unwrap().value(), 1000.0);

    let json = manager.to_json().unwrap();
    assert_eq!(json[0]["name"], "width");
    assert_eq!(json[0]["dt"], "horizontal");

    let mut restored = ExtraDimManager::new();
    restored.deserialize(&json).unwrap();
    let dim = restored.get("width").unwrap();
    assert_eq!(dim.fr.len(), 1);
    assert_eq!(dim.shapes().len(), 3);

    let deleted = restored.delete("width").unwrap();
    assert!(deleted.is_recycled());
    assert!(deleted.shapes().is_empty());
    assert!(restored.dims().is_empty());
}
