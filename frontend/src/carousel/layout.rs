//! Track geometry

/// Measurements taken from the DOM right before a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    /// Bounding-box width of a slide, gap excluded
    pub slide_width: f64,
    pub container_width: f64,
    pub slide_gap: f64,
}

impl TrackMetrics {
    /// Distance from one slide's left edge to the next one's.
    pub fn slide_pitch(&self) -> f64 {
        self.slide_width + self.slide_gap
    }

    /// Horizontal translation that centers slide `index` in the container.
    pub fn offset_for(&self, index: usize) -> f64 {
        let pitch = self.slide_pitch();
        self.container_width / 2.0 - pitch / 2.0 - index as f64 * pitch
    }
}

/// CSS `transform` value for a horizontal offset in pixels.
pub fn translate_x(offset: f64) -> String {
    format!("translateX({}px)", offset)
}
