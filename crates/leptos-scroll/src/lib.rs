//! Leptos Scroll Utilities
//!
//! Centers an element inside its scrolling container with a smooth scroll.
//! Measuring happens on the live DOM, the arithmetic lives in
//! [`recycle_core::ScrollGeometry`].

use leptos::html::Div;
use leptos::prelude::*;
use recycle_core::ScrollGeometry;

/// Read the container and card sizes the centering formula needs
pub fn measure(container: &web_sys::Element, card: &web_sys::HtmlElement) -> ScrollGeometry {
    ScrollGeometry {
        container_height: container.get_bounding_client_rect().height(),
        card_offset_top: f64::from(card.offset_top()),
        card_height: card.get_bounding_client_rect().height(),
    }
}

/// `container.scrollTo({ top, behavior: 'smooth' })`
pub fn scroll_smooth(container: &web_sys::Element, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Scroll `container` so `card` sits in its vertical middle.
/// Returns false when either element is not mounted.
pub fn center_card(container: NodeRef<Div>, card: NodeRef<Div>) -> bool {
    let (Some(container), Some(card)) = (container.get_untracked(), card.get_untracked()) else {
        return false;
    };
    let geometry = measure(&container, &card);
    scroll_smooth(&container, geometry.centered_top());
    true
}
