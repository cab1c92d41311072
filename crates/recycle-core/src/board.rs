//! Card Board
//!
//! The ordered list of cards plus the "one expanded card at a time" rule.

use crate::domain::{Card, DomainError, DomainResult, MemberId};

/// Result of clicking a card header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, Default)]
pub struct CardBoard {
    cards: Vec<Card>,
}

impl CardBoard {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn members(&self) -> Vec<MemberId> {
        self.cards.iter().map(|card| card.member_id.clone()).collect()
    }

    pub fn get(&self, member: &MemberId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.member_id == member)
    }

    pub fn get_mut(&mut self, member: &MemberId) -> DomainResult<&mut Card> {
        self.cards
            .iter_mut()
            .find(|card| &card.member_id == member)
            .ok_or_else(|| DomainError::NotFound(member.to_string()))
    }

    pub fn expanded(&self) -> Option<&Card> {
        self.cards.iter().find(|card| card.expanded)
    }

    pub fn show_all(&mut self) {
        for card in &mut self.cards {
            card.visible = true;
        }
    }

    /// Collapse every other card, then flip the clicked one
    pub fn toggle(&mut self, member: &MemberId) -> DomainResult<Toggle> {
        if self.get(member).is_none() {
            return Err(DomainError::NotFound(member.to_string()));
        }

        for card in self.cards.iter_mut().filter(|card| &card.member_id != member) {
            card.expanded = false;
        }

        let card = self.get_mut(member)?;
        card.expanded = !card.expanded;
        Ok(if card.expanded { Toggle::Expanded } else { Toggle::Collapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> CardBoard {
        CardBoard::new(vec![
            Card::new(MemberId::new("a"), "A"),
            Card::new(MemberId::new("b"), "B"),
            Card::new(MemberId::new("c"), "C"),
        ])
    }

    #[test]
    fn test_double_click_collapses() {
        let mut board = board();
        let a = MemberId::new("a");
        assert_eq!(board.toggle(&a).unwrap(), Toggle::Expanded);
        assert_eq!(board.toggle(&a).unwrap(), Toggle::Collapsed);
        assert!(board.expanded().is_none());
    }

    #[test]
    fn test_only_last_expanded_stays_open() {
        let mut board = board();
        board.toggle(&MemberId::new("a")).unwrap();
        board.toggle(&MemberId::new("b")).unwrap();

        let open: Vec<_> = board.cards().iter().filter(|c| c.expanded).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].member_id.as_str(), "b");
    }

    #[test]
    fn test_unknown_member_changes_nothing() {
        let mut board = board();
        board.toggle(&MemberId::new("a")).unwrap();
        let err = board.toggle(&MemberId::new("zzz")).unwrap_err();
        assert_eq!(err, DomainError::NotFound("zzz".to_string()));
        assert_eq!(board.expanded().map(|c| c.member_id.as_str()), Some("a"));
    }

    #[test]
    fn test_show_all() {
        let mut board = board();
        assert!(board.cards().iter().all(|c| !c.visible));
        board.show_all();
        assert!(board.cards().iter().all(|c| c.visible));
    }
}
