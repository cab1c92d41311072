//! Scroll Geometry
//!
//! Where to scroll a container so that a card sits in its vertical center.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Height of the scroll container's bounding rect
    pub container_height: f64,
    /// `offsetTop` of the card
    pub card_offset_top: f64,
    /// Height of the card's bounding rect
    pub card_height: f64,
}

impl ScrollGeometry {
    /// Target `scrollTop`. May be negative for cards near the top; browsers clamp it.
    pub fn centered_top(&self) -> f64 {
        self.card_offset_top - self.container_height / 2.0 + self.card_height / 2.0
    }
}
