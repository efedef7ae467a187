use fenestra::{
    Config, DesignView, FrameSettings, HandDrawnRecognition, RawRect, ShapeManager,
};
use tempfile::tempdir;

#[test]
fn test_configured_recognition_then_edit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::new();
    config.profile.frame_width = 40.0;
    config.save_to_file(&path).unwrap();
    let config = Config::load_from_file(&path).unwrap();

    let mut shapes = ShapeManager::new().with_profile(config.profile.clone());
    let outcome = HandDrawnRecognition::new(config.recognition.clone())
        .recognize(
            &[
                RawRect::new(0.0, 0.0, 600.0, 400.0),
                RawRect::new(300.0, 0.0, 1.0, 400.0),
            ],
            &mut shapes,
        )
        .unwrap();
    assert_eq!(outcome.splitters.len(), 1);
    assert!(outcome.splitters[0].is_vertical());

    let mut view = DesignView::new("main").with_momento(config.history.momento_manager());
    let copy = FrameSettings::new(&mut shapes, &outcome.frame_id, &mut view)
        .copy_and_paste()
        .unwrap();
    assert_eq!(shapes.len(), 2);
    let pasted = shapes.frame(&copy).unwrap();
    assert_eq!(pasted.mul_manager.mullions().len(), 1);
    assert_eq!(pasted.frame_manager.profile_width(), 40.0);
    assert_eq!(view.momento().checkpoint_count(), 1);
}

#[test]
fn test_logging_initializes_once() {
    assert!(fenestra::init_logging().is_ok());
    assert!(fenestra::init_logging().is_err());
}
