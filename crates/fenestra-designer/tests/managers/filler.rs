use fenestra_core::{Line, Point};
use fenestra_designer::{FillerUtils, Frame, Host, PolyId, WinPolygon};

fn frames() -> (Vec<Frame>, String, PolyId) {
    let mut frame = Frame::new(
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 800.0, 1200.0).unwrap(),
    );
    let glass = frame.mul_manager.glasses()[0].clone();
    frame.filler_manager.add_filler(glass.live_polygon().clone(), 3);
    let id = frame.id().to_string();
    (vec![frame], id, glass.polygon.id)
}

#[test]
fn test_change_shade_count() {
    let (mut frames, id, pane) = frames();
    let filler = FillerUtils::change_shade_count(&mut frames, &id, &pane.to_json(), 5).unwrap();
    assert_eq!(filler.count(), 5);
    assert_eq!(filler.slats().len(), 5);
}

#[test]
fn test_missing_host_is_noop() {
    let (mut frames, _, pane) = frames();
    assert!(FillerUtils::change_shade_count(&mut frames, "missing", &pane.to_json(), 5).is_none());
    let filler = frames[0].filler_manager().get_filler(&pane).unwrap();
    assert_eq!(filler.count(), 3);
}

#[test]
fn test_bad_pane_id_is_noop() {
    let (mut frames, id, pane) = frames();
    assert!(FillerUtils::change_shade_count(&mut frames, &id, "not json", 5).is_none());
    let other = PolyId::new(9).to_json();
    assert!(FillerUtils::change_shade_count(&mut frames, &id, &other, 5).is_none());
    assert_eq!(frames[0].filler_manager().get_filler(&pane).unwrap().count(), 3);
}

#[test]
fn test_split_pane_drops_filler() {
    let (mut frames, _, pane) = frames();
    frames[0].add_mullion(Line::horizontal(0.0));
    assert!(frames[0].filler_manager().get_filler(&pane).is_none());
    assert_eq!(frames[0].filler_manager().fillers().count(), 0);
}
