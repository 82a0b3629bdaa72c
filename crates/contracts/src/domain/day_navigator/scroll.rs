/// Layout measurements taken after the selected panel became visible
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Top of the panel relative to the document
    pub panel_top: f64,
    pub header_height: f64,
    pub sub_header_height: f64,
    pub margin: f64,
}

/// Vertical scroll position that puts the panel just below the fixed headers
pub fn scroll_target(metrics: &ScrollMetrics) -> f64 {
    let top = metrics.panel_top - metrics.header_height - metrics.sub_header_height - metrics.margin;
    top.max(0.0)
}
