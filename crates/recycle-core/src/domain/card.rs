//! Card Entity
//!
//! One visual unit bound to a household member.

use serde::{Deserialize, Serialize};
use super::member::MemberId;

/// Alert texts shown inside the card header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabels {
    pub completed: String,
    pub not_completed: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            completed: "✅ Kitchen-waste recycling completed".to_string(),
            not_completed: "❌ Kitchen-waste recycling not completed".to_string(),
        }
    }
}

impl StatusLabels {
    pub fn for_status(&self, completed: bool) -> &str {
        if completed {
            &self.completed
        } else {
            &self.not_completed
        }
    }
}

/// A member card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Member this card belongs to
    pub member_id: MemberId,
    /// Display name shown in the header
    pub name: String,
    /// Whether the content region is open (transient)
    pub expanded: bool,
    /// Whether today's recycling is done (persisted)
    pub completed: bool,
    /// Cards stay hidden until the controller starts
    pub visible: bool,
}

impl Card {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
            expanded: false,
            completed: false,
            visible: false,
        }
    }

    /// Class list for `.card-container`
    pub fn container_class(&self) -> &'static str {
        if self.expanded { "card-container expanded" } else { "card-container" }
    }

    /// Class list for `.card-content-wrapper`
    pub fn content_class(&self) -> &'static str {
        if self.expanded { "card-content-wrapper expanded" } else { "card-content-wrapper" }
    }

    /// Class list for `.member-header`
    pub fn header_class(&self) -> &'static str {
        if self.completed { "member-header completed" } else { "member-header" }
    }

    /// Class list for `.green-card-container`
    pub fn indicator_class(&self) -> &'static str {
        if self.completed { "green-card-container completed" } else { "green-card-container" }
    }

    pub fn alert_text<'a>(&self, labels: &'a StatusLabels) -> &'a str {
        labels.for_status(self.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new(MemberId::new("m1"), "Mom");
        assert_eq!(card.member_id.as_str(), "m1");
        assert!(!card.expanded);
        assert!(!card.completed);
        assert!(!card.visible);
    }

    #[test]
    fn test_completed_classes_move_together() {
        let mut card = Card::new(MemberId::new("m1"), "Mom");
        assert_eq!(card.header_class(), "member-header");
        assert_eq!(card.indicator_class(), "green-card-container");

        card.completed = true;
        assert_eq!(card.header_class(), "member-header completed");
        assert_eq!(card.indicator_class(), "green-card-container completed");
    }

    #[test]
    fn test_alert_text_follows_status() {
        let labels = StatusLabels::default();
        let mut card = Card::new(MemberId::new("m1"), "Mom");
        assert!(card.alert_text(&labels).contains("not completed"));
        card.completed = true;
        assert!(!card.alert_text(&labels).contains("not completed"));
    }
}
