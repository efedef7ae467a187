use fenestra_core::Momento;
use fenestra_designer::{AntiTheftHost, AntiTheftSettings, AssistHost, Layer, View};
use fenestra_settings::EditSettings;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

struct RecordingHost {
    log: Log,
    gap: f64,
    handle_width: f64,
}

impl AssistHost for RecordingHost {
    fn hide_assist(&mut self) {
        self.log.borrow_mut().push("hide_assist");
    }
}

impl AntiTheftHost for RecordingHost {
    fn gap(&self) -> f64 {
        self.gap
    }

    fn set_gap(&mut self, gap: f64) {
        self.log.borrow_mut().push("set_gap");
        self.gap = gap;
    }

    fn handle_width(&self) -> f64 {
        self.handle_width
    }

    fn set_handle_width(&mut self, width: f64) {
        self.log.borrow_mut().push("set_handle_width");
        self.handle_width = width;
    }

    fn min_profile_size(&self) -> f64 {
        10.0
    }

    fn update_poly(&mut self) {
        self.log.borrow_mut().push("update_poly");
    }
}

struct RecordingLayer(Log);

impl Layer for RecordingLayer {
    fn batch_draw(&mut self) {
        self.0.borrow_mut().push("batch_draw");
    }
}

struct RecordingMomento(Log);

impl Momento for RecordingMomento {
    fn check_point(&mut self) {
        self.0.borrow_mut().push("check_point");
    }
}

struct RecordingView {
    layer: RecordingLayer,
    momento: RecordingMomento,
}

impl View for RecordingView {
    fn id(&self) -> &str {
        "recording"
    }

    fn active_layer(&mut self) -> &mut dyn Layer {
        &mut self.layer
    }

    fn momento_manager(&mut self) -> &mut dyn Momento {
        &mut self.momento
    }
}

fn fixture() -> (Log, RecordingHost, RecordingView) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let host = RecordingHost {
        log: Rc::clone(&log),
        gap: 100.0,
        handle_width: 50.0,
    };
    let view = RecordingView {
        layer: RecordingLayer(Rc::clone(&log)),
        momento: RecordingMomento(Rc::clone(&log)),
    };
    (log, host, view)
}

#[test]
fn test_commit_runs_in_order() {
    let (log, mut host, mut view) = fixture();
    AntiTheftSettings::new(&mut host, &mut view).set_gap(120.0);

    assert_eq!(
        *log.borrow(),
        vec!["set_gap", "update_poly", "hide_assist", "batch_draw", "check_point"]
    );
    assert_eq!(host.gap, 120.0);
}

#[test]
fn test_small_change_touches_nothing() {
    let (log, mut host, mut view) = fixture();
    {
        let mut settings = AntiTheftSettings::new(&mut host, &mut view);
        settings.set_gap(100.4);
        settings.set_handle_width(49.6);
    }
    assert!(log.borrow().is_empty());
    assert_eq!(host.gap, 100.0);
    assert_eq!(host.handle_width, 50.0);
}

#[test]
fn test_undersized_and_non_finite_rejected() {
    let (log, mut host, mut view) = fixture();
    {
        let mut settings = AntiTheftSettings::new(&mut host, &mut view);
        settings.set_gap(5.0);
        settings.set_gap(f64::NAN);
        settings.set_handle_width(f64::INFINITY);
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn test_custom_threshold() {
    let (log, mut host, mut view) = fixture();
    let edit = EditSettings { min_delta: 5.0 };
    {
        let mut settings = AntiTheftSettings::with_edit(&mut host, &mut view, &edit);
        settings.set_handle_width(53.0);
        assert_eq!(settings.handle_width(), 50.0);
        settings.set_handle_width(60.0);
        assert_eq!(settings.handle_width(), 60.0);
    }
    assert_eq!(log.borrow().iter().filter(|e| **e == "check_point").count(), 1);
}
