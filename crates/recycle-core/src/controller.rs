//! Card Controller
//!
//! Mediates between the card board, persisted status and the clock.
//! The UI calls one method per user event or timer tick and re-renders from
//! [`CardController::cards`] afterwards.

use log::{debug, info};

use crate::board::{CardBoard, Toggle};
use crate::clock::Clock;
use crate::config::CardConfig;
use crate::domain::{Card, DomainResult, MemberId, StatusLabels};
use crate::repository::{KeyValueStore, StatusRepository};

pub struct CardController<S, C> {
    board: CardBoard,
    repo: StatusRepository<S>,
    clock: C,
    labels: StatusLabels,
}

impl<S: KeyValueStore, C: Clock> CardController<S, C> {
    pub fn new(cards: Vec<Card>, store: S, clock: C) -> Self {
        Self {
            board: CardBoard::new(cards),
            repo: StatusRepository::new(store),
            clock,
            labels: StatusLabels::default(),
        }
    }

    pub fn from_config(config: &CardConfig, store: S, clock: C) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self::new(config.cards(), store, clock).with_labels(config.labels.clone()))
    }

    pub fn with_labels(mut self, labels: StatusLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    pub fn card(&self, member: &MemberId) -> Option<&Card> {
        self.board.get(member)
    }

    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    /// Show every card and load each one's status from storage
    pub fn start(&mut self) -> DomainResult<()> {
        self.board.show_all();
        for member in self.board.members() {
            self.initialize_status(&member)?;
        }
        info!("started with {} cards", self.board.cards().len());
        Ok(())
    }

    /// Header click: collapse the others, flip this one
    pub fn toggle_expanded(&mut self, member: &MemberId) -> DomainResult<Toggle> {
        let toggle = self.board.toggle(member)?;
        debug!("card {member} {toggle:?}");
        Ok(toggle)
    }

    /// Checkbox change: update indicators, then persist with today's date
    pub fn set_completed(&mut self, member: &MemberId, completed: bool) -> DomainResult<()> {
        self.board.get_mut(member)?.completed = completed;
        let today = self.clock.today();
        self.repo.save(member, completed, &today)?;
        debug!("card {member} completed={completed} on {today}");
        Ok(())
    }

    /// Load one card's status; a record from another day resets it to false
    pub fn initialize_status(&mut self, member: &MemberId) -> DomainResult<()> {
        let today = self.clock.today();
        let record = self.repo.load(member)?;

        if record.day.as_ref() != Some(&today) {
            debug!("card {member} has stale record {:?}, resetting", record.day);
            self.set_completed(member, false)
        } else {
            self.board.get_mut(member)?.completed = record.completed;
            Ok(())
        }
    }

    /// Uncheck every card, persisting each one like a manual uncheck
    pub fn reset_all(&mut self) -> DomainResult<()> {
        for member in self.board.members() {
            self.set_completed(&member, false)?;
        }
        Ok(())
    }

    /// Run the bulk reset once per calendar day. Returns whether it ran.
    pub fn check_daily_reset(&mut self) -> DomainResult<bool> {
        let today = self.clock.today();
        if self.repo.last_reset_day()?.as_ref() == Some(&today) {
            return Ok(false);
        }

        self.reset_all()?;
        self.repo.set_last_reset_day(&today)?;
        info!("daily reset ran for {today}");
        Ok(true)
    }
}
