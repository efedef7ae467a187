//! Shared-state and callback aliases.
//!
//! Color slots are read by the drawing code while texture loads complete on
//! loader threads, so they sit behind a `parking_lot` lock that never poisons.

use parking_lot::RwLock;
use std::sync::Arc;

/// State shared between the owner and background loaders.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// One-shot completion handed to an asynchronous operation.
pub type DataCallback<T> = Box<dyn FnOnce(T) + Send + 'static>;

#[inline]
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_from_loader_thread() {
        let slot: ThreadSafeRw<&str> = thread_safe_rw("#FFFFFF");
        let loader = Arc::clone(&slot);
        std::thread::spawn(move || *loader.write() = "texture.png")
            .join()
            .unwrap();
        assert_eq!(*slot.read(), "texture.png");
    }

    #[test]
    fn test_callback_fires_once_with_value() {
        let slot = thread_safe_rw(0.0);
        let target = Arc::clone(&slot);
        let done: DataCallback<f64> = Box::new(move |w| *target.write() = w);
        done(12.5);
        assert_eq!(*slot.read(), 12.5);
        assert_eq!(Arc::strong_count(&slot), 1);
    }
}
