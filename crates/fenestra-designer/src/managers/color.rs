//! Profile, bead, glass and hardware colors.
//!
//! A slot holds either a flat CSS color or a texture loaded from an image.
//! Saved data only carries strings; anything that is not a color literal is
//! treated as an image location and loaded through a [`TextureLoader`].
//! Loads may finish on another thread, so slots sit behind shared locks.

use fenestra_core::types::{DataCallback, ThreadSafeRw};
use fenestra_core::thread_safe_rw;
use fenestra_settings::ColorSettings;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextureError {
    #[error("Failed to load texture '{url}': {reason}")]
    Load { url: String, reason: String },
}

/// A decoded image used as a fill.
#[derive(Debug, Clone)]
pub struct Texture {
    pub url: String,
    pub image: Arc<image::RgbaImage>,
}

impl Texture {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && Arc::ptr_eq(&self.image, &other.image)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Color(String),
    Texture(Texture),
}

impl ColorValue {
    /// String form for saving. Texture locations lose their query string.
    pub fn to_data(&self) -> String {
        match self {
            ColorValue::Color(c) => c.clone(),
            ColorValue::Texture(t) => strip_query(&t.url).to_string(),
        }
    }
}

/// Cuts a cache-busting `?query` off an image location.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(head, _)| head)
}

fn is_color_literal(s: &str) -> bool {
    let s = s.trim();
    s.is_empty()
        || s.starts_with('#')
        || s.starts_with("rgb")
        || s.starts_with("hsl")
        || s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses `#RGB` or `#RRGGBB`.
fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok();
    match hex.len() {
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 16 + v;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Saved colors: `{ "bn", "ben", "g", "hd" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorData {
    pub bn: String,
    pub ben: String,
    pub g: String,
    pub hd: String,
}

/// Loads images for color slots. `done` may run on any thread.
pub trait TextureLoader: Send + Sync {
    fn load(&self, url: &str, done: DataCallback<Result<Texture, TextureError>>);
}

/// Reads image files synchronously with the `image` crate.
#[derive(Debug, Default, Clone)]
pub struct FileTextureLoader;

impl FileTextureLoader {
    pub fn read(url: &str) -> Result<Texture, TextureError> {
        let path = Path::new(strip_query(url));
        let image = image::open(path).map_err(|e| TextureError::Load {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Texture {
            url: url.to_string(),
            image: Arc::new(image.to_rgba8()),
        })
    }
}

impl TextureLoader for FileTextureLoader {
    fn load(&self, url: &str, done: DataCallback<Result<Texture, TextureError>>) {
        done(Self::read(url));
    }
}

/// Decodes images on the tokio blocking pool.
#[derive(Debug, Clone)]
pub struct TokioTextureLoader {
    handle: tokio::runtime::Handle,
}

impl TokioTextureLoader {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Loader bound to the runtime of the calling task.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl TextureLoader for TokioTextureLoader {
    fn load(&self, url: &str, done: DataCallback<Result<Texture, TextureError>>) {
        let url = url.to_string();
        self.handle.spawn(async move {
            let key = url.clone();
            let result = tokio::task::spawn_blocking(move || FileTextureLoader::read(&url))
                .await
                .unwrap_or_else(|e| {
                    Err(TextureError::Load {
                        url: key,
                        reason: e.to_string(),
                    })
                });
            done(result);
        });
    }
}

/// Which slot a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    BarNormal,
    BeadNormal,
    Glass,
    Hardware,
}

/// Result of [`ColorManager::deserialize`], handed to its callback.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub failures: Vec<(ColorSlot, TextureError)>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

struct PendingLoads {
    pending: usize,
    outcome: LoadOutcome,
    callback: Option<DataCallback<LoadOutcome>>,
}

impl PendingLoads {
    /// Counts one load down, running the callback when none are left.
    fn finish(batch: &Mutex<PendingLoads>) {
        let ready = {
            let mut guard = batch.lock();
            guard.pending = guard.pending.saturating_sub(1);
            if guard.pending == 0 {
                guard
                    .callback
                    .take()
                    .map(|cb| (cb, std::mem::take(&mut guard.outcome)))
            } else {
                None
            }
        };
        if let Some((callback, outcome)) = ready {
            callback(outcome);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorManager {
    bar_normal: ThreadSafeRw<ColorValue>,
    bead_normal: ThreadSafeRw<ColorValue>,
    glass: ThreadSafeRw<ColorValue>,
    hardware: ThreadSafeRw<ColorValue>,
    settings: ColorSettings,
}

impl Default for ColorManager {
    fn default() -> Self {
        Self::new(&ColorSettings::default())
    }
}

impl ColorManager {
    pub fn new(settings: &ColorSettings) -> Self {
        Self {
            bar_normal: thread_safe_rw(ColorValue::Color("#FFFFFF".to_string())),
            bead_normal: thread_safe_rw(ColorValue::Color("#FFFFFF".to_string())),
            glass: thread_safe_rw(ColorValue::Color("#A9D3F2".to_string())),
            hardware: thread_safe_rw(ColorValue::Color("#C0C0C0".to_string())),
            settings: settings.clone(),
        }
    }

    /// Copy whose slots are no longer shared with `self`.
    pub fn detached(&self) -> ColorManager {
        Self {
            bar_normal: thread_safe_rw(self.bar_normal()),
            bead_normal: thread_safe_rw(self.bead_normal()),
            glass: thread_safe_rw(self.glass()),
            hardware: thread_safe_rw(self.hardware()),
            settings: self.settings.clone(),
        }
    }

    fn slot(&self, slot: ColorSlot) -> &ThreadSafeRw<ColorValue> {
        match slot {
            ColorSlot::BarNormal => &self.bar_normal,
            ColorSlot::BeadNormal => &self.bead_normal,
            ColorSlot::Glass => &self.glass,
            ColorSlot::Hardware => &self.hardware,
        }
    }

    pub fn get(&self, slot: ColorSlot) -> ColorValue {
        self.slot(slot).read().clone()
    }

    pub fn set(&self, slot: ColorSlot, value: ColorValue) {
        *self.slot(slot).write() = value;
    }

    pub fn bar_normal(&self) -> ColorValue {
        self.get(ColorSlot::BarNormal)
    }

    pub fn bead_normal(&self) -> ColorValue {
        self.get(ColorSlot::BeadNormal)
    }

    pub fn glass(&self) -> ColorValue {
        self.get(ColorSlot::Glass)
    }

    pub fn hardware(&self) -> ColorValue {
        self.get(ColorSlot::Hardware)
    }

    /// Darkened bar color. Textures and unparsable colors use the fallback.
    pub fn bar_shadow(&self) -> String {
        match &*self.bar_normal.read() {
            ColorValue::Color(c) => match parse_hex(c) {
                Some(rgb) => {
                    let k = self.settings.shadow_factor;
                    let dark = rgb.map(|v| (f64::from(v) * k).round().clamp(0.0, 255.0) as u8);
                    format!("#{:02X}{:02X}{:02X}", dark[0], dark[1], dark[2])
                }
                None => self.settings.shadow_fallback.clone(),
            },
            ColorValue::Texture(_) => self.settings.shadow_fallback.clone(),
        }
    }

    pub fn to_data(&self) -> ColorData {
        ColorData {
            bn: self.bar_normal.read().to_data(),
            ben: self.bead_normal.read().to_data(),
            g: self.glass.read().to_data(),
            hd: self.hardware.read().to_data(),
        }
    }

    /// Applies saved colors. Color literals are set at once; image
    /// locations are loaded through `loader`. `callback` runs exactly once,
    /// after the last load, with the loads that failed. A failed slot keeps
    /// its previous value.
    pub fn deserialize(
        &self,
        data: &ColorData,
        loader: &dyn TextureLoader,
        callback: DataCallback<LoadOutcome>,
    ) {
        // starts at one so loads finishing inline cannot fire the callback early
        let batch = Arc::new(Mutex::new(PendingLoads {
            pending: 1,
            outcome: LoadOutcome::default(),
            callback: Some(callback),
        }));

        let entries = [
            (ColorSlot::BarNormal, &data.bn),
            (ColorSlot::BeadNormal, &data.ben),
            (ColorSlot::Glass, &data.g),
            (ColorSlot::Hardware, &data.hd),
        ];
        for (slot, value) in entries {
            if is_color_literal(value) {
                self.set(slot, ColorValue::Color(value.clone()));
                continue;
            }
            batch.lock().pending += 1;
            let target = Arc::clone(self.slot(slot));
            let batch = Arc::clone(&batch);
            loader.load(
                value,
                Box::new(move |result| {
                    match result {
                        Ok(texture) => *target.write() = ColorValue::Texture(texture),
                        Err(e) => {
                            tracing::warn!("{}", e);
                            batch.lock().outcome.failures.push((slot, e));
                        }
                    }
                    PendingLoads::finish(&batch);
                }),
            );
        }
        PendingLoads::finish(&batch);
    }
}
