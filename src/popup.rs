//! Click-anchored popup placement.
//!
//! Computes where a floating popup (an annotation editor, a context panel)
//! should open so that it stays fully on screen: above and to the right of
//! the click when there is room, flipped to the left of the click near the
//! right edge, and clamped against every viewport edge with a small margin.

use serde::{Deserialize, Serialize};

use crate::layout::{Point, Rect, Size};
use crate::viewport::ViewportSource;

// =============================================================================
// Defaults
// =============================================================================

/// Default popup dimensions when the host does not override them.
pub const DEFAULT_POPUP_SIZE: Size = Size {
    width: 340.0,
    height: 320.0,
};

/// Default minimum clearance between the popup and any viewport edge.
pub const DEFAULT_EDGE_MARGIN: f32 = 12.0;

/// Default gap between the click point (or anchor edge) and the popup.
pub const DEFAULT_CLICK_OFFSET: f32 = 8.0;

// =============================================================================
// Configuration
// =============================================================================

/// Placement settings for floating popups.
///
/// Serializable so hosts can persist it alongside their other UI settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Popup dimensions in pixels
    pub size: Size,
    /// Minimum clearance kept between the popup and any viewport edge
    pub margin: f32,
    /// Gap between the click point (or anchor edge) and the popup's near edge
    pub offset: f32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_POPUP_SIZE,
            margin: DEFAULT_EDGE_MARGIN,
            offset: DEFAULT_CLICK_OFFSET,
        }
    }
}

impl PopupConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the popup size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the viewport edge margin.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the click offset.
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }
}

// =============================================================================
// Position
// =============================================================================

/// On-screen position for a popup's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub left: f32,
    pub top: f32,
}

impl Position {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// The rectangle a popup of `size` occupies at this position.
    pub fn bounds(self, size: Size) -> Rect {
        Rect::new(self.left, self.top, size.width, size.height)
    }
}

// =============================================================================
// Placement
// =============================================================================

/// Compute where a popup opened at `click` should appear.
///
/// The popup prefers to sit above and to the right of the click. When its
/// right edge would crowd the viewport's right margin it flips to the left
/// of the click instead. Either way the final position is clamped so the
/// popup keeps `config.margin` clearance from every edge whenever the
/// viewport is large enough, and degrades to `[0, viewport - size]` when it
/// is not.
///
/// The viewport is queried once per call, so the result always reflects the
/// current window size. Total over finite inputs: degenerate clicks and
/// undersized viewports produce a clamped position, never an error.
pub fn popup_position<V>(click: Point, viewport: &V, config: &PopupConfig) -> Position
where
    V: ViewportSource + ?Sized,
{
    let view = viewport.size();
    let size = config.size;

    let mut left = click.x + config.offset;
    let top = click.y - size.height;

    // Flip to the left of the click when the right edge would be crowded
    if left + size.width > view.width - config.margin {
        left = click.x - size.width - config.offset;
    }

    Position::new(
        clamp_to_viewport(left, size.width, view.width, config.margin),
        clamp_to_viewport(top, size.height, view.height, config.margin),
    )
}

/// Side of an anchor rectangle a popup attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorSide {
    /// Popup opens above the anchor.
    #[default]
    Above,
    /// Popup opens below the anchor.
    Below,
    /// Popup opens to the left of the anchor.
    Left,
    /// Popup opens to the right of the anchor.
    Right,
}

/// Place a popup against one side of an anchor rectangle.
///
/// The popup centers along the anchor's other axis, sits `config.offset`
/// away from the chosen side, and then passes through the same edge clamps
/// as [`popup_position`]. Used for popups attached to an existing element
/// (a hovered annotation, a toolbar button) rather than a bare click.
pub fn anchored_position<V>(
    anchor: Rect,
    side: AnchorSide,
    viewport: &V,
    config: &PopupConfig,
) -> Position
where
    V: ViewportSource + ?Sized,
{
    let view = viewport.size();
    let size = config.size;

    let centered_x = anchor.x + (anchor.width - size.width) / 2.0;
    let centered_y = anchor.y + (anchor.height - size.height) / 2.0;

    let (left, top) = match side {
        AnchorSide::Above => (centered_x, anchor.y - size.height - config.offset),
        AnchorSide::Below => (centered_x, anchor.bottom() + config.offset),
        AnchorSide::Left => (anchor.x - size.width - config.offset, centered_y),
        AnchorSide::Right => (anchor.right() + config.offset, centered_y),
    };

    Position::new(
        clamp_to_viewport(left, size.width, view.width, config.margin),
        clamp_to_viewport(top, size.height, view.height, config.margin),
    )
}

/// Clamp one axis of a popup position so the popup stays on screen.
///
/// The margin bounds apply when the viewport can hold the popup plus
/// clearance on both sides. Otherwise the bounds fall back to
/// `[0, viewport_extent - extent]`, and a popup larger than the viewport
/// pins to 0 and overflows past the far edge.
pub fn clamp_to_viewport(value: f32, extent: f32, viewport_extent: f32, margin: f32) -> f32 {
    let max = viewport_extent - extent - margin;
    if margin <= max {
        value.clamp(margin, max)
    } else {
        value.min(viewport_extent - extent).max(0.0)
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// With the default config in a roomy viewport, every click lands the
        /// popup fully inside the margin frame, even clicks far off screen.
        #[test]
        fn default_popup_stays_within_margins(
            x in -2000.0..2000.0f32,
            y in -2000.0..2000.0f32,
        ) {
            let view = Size::new(1024.0, 768.0);
            let config = PopupConfig::default();
            let pos = popup_position(Point::new(x, y), &view, &config);
            let rect = pos.bounds(config.size);
            prop_assert!(rect.x >= config.margin);
            prop_assert!(rect.y >= config.margin);
            prop_assert!(rect.right() <= view.width - config.margin);
            prop_assert!(rect.bottom() <= view.height - config.margin);
        }

        /// When the viewport cannot hold the popup plus margins, the popup
        /// still never goes negative or past the far edge.
        #[test]
        fn cramped_viewport_never_goes_negative(
            x in -500.0..500.0f32,
            y in -500.0..500.0f32,
        ) {
            let view = Size::new(200.0, 200.0);
            let config = PopupConfig::new().size(Size::new(180.0, 180.0));
            let pos = popup_position(Point::new(x, y), &view, &config);
            prop_assert!(pos.left >= 0.0 && pos.top >= 0.0);
            prop_assert!(pos.left + 180.0 <= 200.0);
            prop_assert!(pos.top + 180.0 <= 200.0);
        }
    }
}
