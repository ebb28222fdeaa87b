use super::constants::{
    HERO_PARALLAX_SPEED, INDICATOR_HIDE_THRESHOLD, NAV_SCROLLED_THRESHOLD, PARALLAX_BASE_SPEED,
    PARALLAX_LAYER_STEP,
};

/// Whether the nav bar should carry its `scrolled` styling.
#[inline]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Reading progress in percent, 0 when the page cannot scroll.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll position normalized to [0, 1] over the scrollable height.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    progress_percent(scroll_y, scroll_height, viewport_height) / 100.0
}

#[inline]
pub fn parallax_speed(layer_index: usize) -> f64 {
    PARALLAX_BASE_SPEED + layer_index as f64 * PARALLAX_LAYER_STEP
}

/// Vertical offset for a section background layer; layers move up as the page
/// scrolls down.
#[inline]
pub fn layer_offset(scroll_y: f64, layer_index: usize) -> f64 {
    -(scroll_y * parallax_speed(layer_index))
}

#[inline]
pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_SPEED
}

pub fn layer_transform(scroll_y: f64, layer_index: usize) -> String {
    format!(
        "translate3d(0, {}px, 0) scale(1.1)",
        layer_offset(scroll_y, layer_index)
    )
}

pub fn hero_transform(scroll_y: f64) -> String {
    format!("translate3d(0, {}px, 0)", hero_offset(scroll_y))
}

/// Coalesces bursts of scroll events into a single animation-frame update.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Returns true when the caller must request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback before writing.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// One-way latch for the "scroll down" hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndicatorLatch {
    hidden: bool,
}

impl IndicatorLatch {
    /// Returns true exactly once: on the first scroll past the threshold.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if self.hidden || scroll_y <= INDICATOR_HIDE_THRESHOLD {
            return false;
        }
        self.hidden = true;
        true
    }

    #[cfg(test)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
