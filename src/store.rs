//! Board State Store
//!
//! Uses Leptos reactive_stores so each card re-renders from the fields it reads.

use leptos::prelude::*;
use reactive_stores::Store;
use recycle_core::{Card, MemberId, StatusLabels};

/// What the view renders: a snapshot of the controller's state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards in roster order
    pub cards: Vec<Card>,
    /// Alert texts, copied from the controller
    pub labels: StatusLabels,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered cards with the controller's current ones
pub fn store_sync_cards(store: &BoardStore, cards: &[Card]) {
    *store.cards().write() = cards.to_vec();
}

/// Copy the controller's alert texts into the store
pub fn store_sync_labels(store: &BoardStore, labels: &StatusLabels) {
    *store.labels().write() = labels.clone();
}

/// Find one card by member (tracked)
pub fn store_card(store: &BoardStore, member_id: &MemberId) -> Option<Card> {
    store.cards().read().iter()
        .find(|card| &card.member_id == member_id)
        .cloned()
}

/// Member ids in render order (tracked)
pub fn store_member_ids(store: &BoardStore) -> Vec<MemberId> {
    store.cards().read().iter()
        .map(|card| card.member_id.clone())
        .collect()
}

/// Alert text for a card (tracked)
pub fn store_alert_text(store: &BoardStore, card: &Card) -> String {
    card.alert_text(&store.labels().read()).to_string()
}
