use fenestra_core::{Line, Point, Segment};
use fenestra_designer::{
    DecorationBarChinese, DecorationBarManager, DecorationShape, Frame, Host, Mullion, PolyId,
    WinPolygon,
};

fn frame() -> Frame {
    Frame::new(
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 1000.0, 1000.0).unwrap(),
    )
}

fn decorate(frame: &mut Frame, index: usize) -> PolyId {
    let glass = frame.mul_manager.glasses()[index].clone();
    frame.decoration.add_decoration_bar(DecorationShape::new(
        glass.live_polygon().clone(),
        DecorationBarChinese::default(),
    ));
    glass.polygon.id
}

#[test]
fn test_split_pane_drops_its_decoration() {
    let mut frame = frame();
    let id = decorate(&mut frame, 0);
    assert!(frame.decoration.get_decoration_bar(&id).is_some());

    assert!(frame.add_mullion(Line::vertical(0.0)));
    assert_eq!(frame.mul_manager.glasses().len(), 2);
    assert!(frame.decoration.is_empty());
}

#[test]
fn test_surviving_pane_follows_new_outline() {
    let mut frame = frame();
    frame.add_mullion(Line::vertical(0.0));
    let id = decorate(&mut frame, 0);
    let before = frame.decoration.get_decoration_bar(&id).unwrap().polygon().clone();

    let taller =
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 1000.0, 1400.0).unwrap();
    frame.set_polygon(taller);

    let shape = frame.decoration.get_decoration_bar(&id).unwrap();
    assert!(shape.polygon().height() > before.height() + 300.0);
    let glass = frame
        .mul_manager
        .glasses()
        .iter()
        .find(|g| g.polygon.id == id)
        .unwrap();
    assert_eq!(shape.polygon(), glass.live_polygon());
    // a 2 x 2 grid has one vertical and one horizontal bar
    assert_eq!(shape.bars().len(), 2);
}

#[test]
fn test_remove_bar_keeps_entry_unless_asked() {
    let mut frame = frame();
    let id = decorate(&mut frame, 0);
    frame.decoration_mut().remove_bar(&id, false);
    let shape = frame.decoration.get_decoration_bar(&id).unwrap();
    assert!(shape.bars().is_empty());

    frame.decoration_mut().remove_bar(&id, true);
    assert!(frame.decoration().is_empty());
}

#[test]
fn test_hit_test_finds_decorated_pane() {
    let mut frame = frame();
    let id = decorate(&mut frame, 0);
    // the default grid puts bars through the pane center
    assert_eq!(frame.decoration.hit_test(&Point::new(0.0, 10.0)), Some(&id));
    assert_eq!(frame.decoration.hit_test(&Point::new(10.0, 10.0)), None);
}

#[test]
fn test_saved_decorations_reattach_by_pane_id() {
    let mut frame = frame();
    frame.add_mullion(Line::vertical(0.0));
    let left = decorate(&mut frame, 0);
    let tall = DecorationBarChinese {
        rows: 3,
        cols: 1,
        ..DecorationBarChinese::default()
    };
    let right = frame.mul_manager.glasses()[1].polygon.id.clone();
    let pane = frame.mul_manager.glasses()[1].live_polygon().clone();
    frame.decoration.add_decoration_bar(DecorationShape::new(pane, tall));

    let json = frame.decoration.to_json().unwrap();
    let keys: Vec<&str> = json["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry[0].as_str().unwrap())
        .collect();
    let mut expected = vec![left.to_json(), right.to_json()];
    expected.sort();
    assert_eq!(keys, expected);

    let mut loaded = DecorationBarManager::new();
    loaded.deserialize(&json, frame.mul_manager.glasses()).unwrap();
    assert_eq!(loaded.len(), 2);
    for glass in frame.mul_manager.glasses() {
        let shape = loaded.get_decoration_bar(&glass.polygon.id).unwrap();
        assert_eq!(shape.polygon(), glass.live_polygon());
    }
    assert_eq!(loaded.get_decoration_bar(&right).unwrap().definition(), &tall);
}

#[test]
fn test_splitting_one_of_three_panes_keeps_the_others() {
    let mut frame = frame();
    assert!(frame.add_mullion(Line::vertical(-200.0)));
    assert!(frame.add_mullion(Line::vertical(200.0)));
    assert_eq!(frame.mul_manager.glasses().len(), 3);
    let ids: Vec<PolyId> = (0..3).map(|i| decorate(&mut frame, i)).collect();
    let middle = frame
        .mul_manager
        .glasses()
        .iter()
        .find(|g| g.polygon.bounds().center().x.abs() < 1e-6)
        .map(|g| g.polygon.id.clone())
        .unwrap();

    // only reaches across the middle pane
    let across = Mullion::bounded(Segment::new(Point::new(-200.0, 0.0), Point::new(200.0, 0.0)));
    assert!(frame.add_mullion(across));
    assert_eq!(frame.mul_manager.glasses().len(), 4);

    assert_eq!(frame.decoration.len(), 2);
    assert!(frame.decoration.get_decoration_bar(&middle).is_none());
    for id in ids.iter().filter(|id| **id != middle) {
        let shape = frame.decoration.get_decoration_bar(id).unwrap();
        let glass = frame
            .mul_manager
            .glasses()
            .iter()
            .find(|g| &g.polygon.id == id)
            .unwrap();
        assert_eq!(shape.polygon(), glass.live_polygon());
    }
}
