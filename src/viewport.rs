//! Viewport size access for placement calculations.
//!
//! Placement code never reads display dimensions from ambient global state.
//! It goes through [`ViewportSource`], queried once per placement call, so
//! every result reflects the viewport as it is right now and tests can
//! inject whatever dimensions they need.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::layout::Size;

/// Provider of the current viewport dimensions.
///
/// Implementations should return the live size on every call rather than a
/// snapshot taken at construction time.
pub trait ViewportSource {
    /// Current viewport dimensions in pixels.
    fn size(&self) -> Size;
}

/// A fixed size is its own source. Useful for tests and headless hosts.
impl ViewportSource for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Errors that can occur while acquiring a viewport backend.
#[derive(Debug, Error)]
pub enum ViewportError {
    /// No global `window` object exists (e.g. a worker context).
    #[error("no global window available")]
    WindowUnavailable,
}

/// Cloneable handle to a viewport size that the host updates from its
/// resize handler.
///
/// All clones share one cell, so a placement made through any of them sees
/// the most recent `set`. Single-threaded on purpose: placement happens on
/// the UI thread.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    size: Rc<Cell<Size>>,
}

impl SharedViewport {
    /// Create a handle with an initial size.
    pub fn new(size: Size) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    /// Record a new viewport size, typically from a window resize event.
    pub fn set(&self, size: Size) {
        log::trace!("viewport resized to {}x{}", size.width, size.height);
        self.size.set(size);
    }

    /// The most recently recorded size.
    pub fn get(&self) -> Size {
        self.size.get()
    }
}

impl ViewportSource for SharedViewport {
    fn size(&self) -> Size {
        self.size.get()
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Size, ViewportError, ViewportSource};

    /// Viewport backed by the browser window's inner dimensions.
    ///
    /// Re-queries `window.innerWidth` / `window.innerHeight` on every call,
    /// so placements track live resizes without extra plumbing.
    #[derive(Debug, Clone)]
    pub struct BrowserViewport {
        _private: (),
    }

    impl BrowserViewport {
        /// Fails when no global window exists, such as inside a worker.
        pub fn new() -> Result<Self, ViewportError> {
            match web_sys::window() {
                Some(_) => Ok(Self { _private: () }),
                None => Err(ViewportError::WindowUnavailable),
            }
        }
    }

    impl ViewportSource for BrowserViewport {
        fn size(&self) -> Size {
            let Some(window) = web_sys::window() else {
                log::warn!("global window disappeared, reporting zero viewport");
                return Size::zero();
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            Size::new(width as f32, height as f32)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserViewport;
