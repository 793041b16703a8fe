//! Scroll position math for the infinite-reveal listener

/// Whether the viewport's bottom edge is within `threshold` pixels of the end
/// of the document.
pub fn near_bottom(scroll_y: f64, viewport_height: f64, document_height: f64, threshold: f64) -> bool {
    scroll_y + viewport_height >= document_height - threshold
}
