//! overlay_popup - viewport-aware placement for floating annotation popups
//!
//! Given a click point (or an anchor rectangle), a popup size, and the
//! current viewport, computes a clamped on-screen position so the popup
//! never renders off screen. The viewport is injected through
//! [`ViewportSource`] and read at call time, never from ambient global
//! state.

mod layout;
mod popup;
mod viewport;

pub use layout::{Point, Rect, Size};
pub use popup::{
    anchored_position, clamp_to_viewport, popup_position, AnchorSide, PopupConfig, Position,
    DEFAULT_CLICK_OFFSET, DEFAULT_EDGE_MARGIN, DEFAULT_POPUP_SIZE,
};
pub use viewport::{SharedViewport, ViewportError, ViewportSource};

#[cfg(target_arch = "wasm32")]
pub use viewport::BrowserViewport;
