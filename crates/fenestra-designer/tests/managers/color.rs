use fenestra_designer::{
    ColorData, ColorManager, ColorSlot, ColorValue, FileTextureLoader, TokioTextureLoader,
};
use std::time::Duration;

fn literals() -> ColorData {
    ColorData {
        bn: "#FFFFFF".to_string(),
        ben: "#FFFFFF".to_string(),
        g: "#A9D3F2".to_string(),
        hd: "#C0C0C0".to_string(),
    }
}

#[test]
fn test_texture_saves_without_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oak.png");
    image::RgbaImage::new(4, 2).save(&path).unwrap();
    let url = format!("{}?v=7", path.display());

    let texture = FileTextureLoader::read(&url).unwrap();
    assert_eq!((texture.width(), texture.height()), (4, 2));

    let manager = ColorManager::default();
    manager.set(ColorSlot::BarNormal, ColorValue::Texture(texture));
    assert_eq!(manager.to_data().bn, path.display().to_string());
}

#[test]
fn test_shadow_falls_back_for_textures_and_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oak.png");
    image::RgbaImage::new(1, 1).save(&path).unwrap();

    let manager = ColorManager::default();
    manager.set(ColorSlot::BarNormal, ColorValue::Color("white".to_string()));
    assert_eq!(manager.bar_shadow(), "#5A5A5A");

    let texture = FileTextureLoader::read(&path.display().to_string()).unwrap();
    manager.set(ColorSlot::BarNormal, ColorValue::Texture(texture));
    assert_eq!(manager.bar_shadow(), "#5A5A5A");
}

#[test]
fn test_detached_copy_does_not_share_slots() {
    let manager = ColorManager::default();
    let shared = manager.clone();
    let copy = manager.detached();
    manager.set(ColorSlot::Glass, ColorValue::Color("#000000".to_string()));
    assert_eq!(shared.glass(), ColorValue::Color("#000000".to_string()));
    assert_eq!(copy.glass(), ColorValue::Color("#A9D3F2".to_string()));
}

#[tokio::test]
async fn test_async_texture_load_completes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walnut.png");
    image::RgbaImage::new(8, 8).save(&path).unwrap();

    let data = ColorData {
        bn: format!("{}?t=1", path.display()),
        ..literals()
    };
    let manager = ColorManager::default();
    let (tx, rx) = tokio::sync::oneshot::channel();
    manager.deserialize(
        &data,
        &TokioTextureLoader::current(),
        Box::new(move |outcome| {
            tx.send(outcome).ok();
        }),
    );

    let outcome = tokio::time::timeout(Duration::from_secs(10), rx)
        .await
        .unwrap()
        .unwrap();
    assert!(outcome.is_complete());
    match manager.bar_normal() {
        ColorValue::Texture(t) => assert_eq!(t.width(), 8),
        other => panic!("expected a texture, got {:?}", other),
    }
    assert_eq!(manager.to_data().bn, path.display().to_string());
}

#[tokio::test]
async fn test_failed_load_keeps_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let data = ColorData {
        hd: missing.display().to_string(),
        ..literals()
    };
    let manager = ColorManager::default();
    manager.set(ColorSlot::Hardware, ColorValue::Color("#123456".to_string()));

    let (tx, rx) = tokio::sync::oneshot::channel();
    manager.deserialize(
        &data,
        &TokioTextureLoader::current(),
        Box::new(move |outcome| {
            tx.send(outcome).ok();
        }),
    );
    let outcome = tokio::time::timeout(Duration::from_secs(10), rx)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].0, ColorSlot::Hardware);
    assert_eq!(manager.hardware(), ColorValue::Color("#123456".to_string()));
}
