use fenestra_core::{AppEvent, EditEvent, EventBus, EventBusConfig, Point, ShapeEvent};
use fenestra_designer::{
    AntiTheft, AntiTheftSettings, DesignView, FrameSettings, IsoscelesTrianglePoly, OpenToward,
    ParametricShape, PolyId, ShapeManager, WinPolygon,
};
use fenestra_settings::ProfileSettings;
use std::sync::Arc;

fn bus() -> Arc<EventBus> {
    Arc::new(EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    }))
}

fn square(size: f64) -> WinPolygon {
    WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), size, size).unwrap()
}

fn bar_xs(anti_theft: &AntiTheft) -> Vec<f64> {
    anti_theft.bars().iter().map(|s| s.start.x).collect()
}

#[test]
fn test_profile_change_relays_anti_theft_bars() {
    let mut shapes = ShapeManager::new();
    let id = shapes.add(square(1000.0));
    {
        let frame = shapes.frame_mut(&id).unwrap();
        let opening = frame.mul_manager.area().clone();
        frame.anti_theft = Some(AntiTheft::new(opening, 200.0, 40.0, &ProfileSettings::default()));
    }
    let xs = bar_xs(shapes.frame(&id).unwrap().anti_theft.as_ref().unwrap());
    assert_eq!(xs.len(), 5);
    assert!((xs[0] + 400.0).abs() < 1e-6);

    let mut view = DesignView::new("main");
    FrameSettings::new(&mut shapes, &id, &mut view).set_profile_width(100.0);

    let xs = bar_xs(shapes.frame(&id).unwrap().anti_theft.as_ref().unwrap());
    assert_eq!(xs.len(), 4);
    assert!((xs[0] + 360.0).abs() < 1e-6);
    assert_eq!(view.draw_count(), 1);
}

#[test]
fn test_anti_theft_gap_edit_on_real_host() {
    let mut host = AntiTheft::new(square(400.0), 100.0, 50.0, &ProfileSettings::default());
    host.show_assist();
    let mut view = DesignView::new("main");
    AntiTheftSettings::new(&mut host, &mut view).set_gap(150.0);

    assert_eq!(bar_xs(&host).len(), 3);
    assert!(!host.assist_visible());
    assert_eq!(view.momento().checkpoint_count(), 1);
}

#[test]
fn test_committed_edits_are_published() {
    let bus = bus();
    let mut shapes = ShapeManager::new();
    let id = shapes.add(square(1000.0));
    let mut view = DesignView::new("main").with_event_bus(Arc::clone(&bus));
    {
        let mut settings = FrameSettings::new(&mut shapes, &id, &mut view);
        settings.set_open_toward(OpenToward::Outward);
        settings.set_open_toward(OpenToward::Outward);
        settings.set_lock_drag_size(true);
    }

    let committed: Vec<String> = bus
        .history(None)
        .into_iter()
        .filter_map(|e| match e {
            AppEvent::Edit(EditEvent::Committed { source, property }) => {
                Some(format!("{}.{}", source, property))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        committed,
        vec!["FrameSettings.openToward", "FrameSettings.lockDragSize"]
    );
    assert_eq!(view.momento().checkpoint_count(), 2);
}

#[test]
fn test_shape_opens_its_settings() {
    let bus = bus();
    let view = DesignView::new("main").with_event_bus(Arc::clone(&bus));
    let gable =
        IsoscelesTrianglePoly::new(PolyId::new(0), Point::new(0.0, 0.0), 100.0, 60.0).unwrap();
    gable.raise_frame_event(&view);

    let events = bus.history(None);
    assert!(events.iter().any(|e| matches!(
        e,
        AppEvent::Shape(ShapeEvent::OpenSettings { view, shape })
            if view == "main" && shape == "IsoscelesTriangle"
    )));
}
