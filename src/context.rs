//! Card Context
//!
//! Shared handle to the controller, provided via Leptos Context API.
//! Every action runs against the controller and then re-syncs the store.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use log::{debug, error};
use recycle_core::{
    CardConfig, CardController, DomainResult, MemberId, Scheduler, SystemClock, Toggle,
};

use crate::scheduler::BrowserScheduler;
use crate::storage::LocalStore;
use crate::store::{store_sync_cards, store_sync_labels, BoardStore};

pub type BrowserController = CardController<LocalStore, SystemClock>;

#[derive(Clone, Copy)]
pub struct CardContext {
    /// Controller lives in thread-local storage, `web_sys::Storage` is not `Send`
    controller: StoredValue<BrowserController, LocalStorage>,
    /// Rendered state
    pub store: BoardStore,
    /// The `.cards-container` scroll element
    pub container: NodeRef<Div>,
    center_delay: Duration,
}

impl CardContext {
    /// Open localStorage and build the controller; `None` leaves the widget inert
    pub fn open(config: &CardConfig, store: BoardStore, container: NodeRef<Div>) -> Option<Self> {
        let built = LocalStore::open()
            .and_then(|storage| CardController::from_config(config, storage, SystemClock));
        match built {
            Ok(controller) => {
                store_sync_labels(&store, controller.labels());
                Some(Self {
                    controller: StoredValue::new_local(controller),
                    store,
                    container,
                    center_delay: config.center_delay(),
                })
            }
            Err(err) => {
                error!("card widget disabled: {err}");
                None
            }
        }
    }

    /// Run `op`, then push the controller's cards into the store even on error,
    /// since indicators may already have changed before a failed write
    fn run<T>(
        &self,
        action: &str,
        op: impl FnOnce(&mut BrowserController) -> DomainResult<T>,
    ) -> Option<T> {
        let store = self.store;
        let result = self.controller.try_update_value(|controller| {
            let result = op(controller);
            store_sync_cards(&store, controller.cards());
            result
        })?;

        match result {
            Ok(value) => Some(value),
            Err(err) => {
                error!("{action} failed: {err}");
                None
            }
        }
    }

    pub fn start(&self) {
        self.run("start", |controller| controller.start());
    }

    /// Header click; an expanded card is centered after the configured delay
    pub fn toggle(&self, member_id: &MemberId, card_ref: NodeRef<Div>) {
        let toggled = self.run("toggle", |controller| controller.toggle_expanded(member_id));
        if toggled != Some(Toggle::Expanded) {
            return;
        }

        let container = self.container;
        let member_id = member_id.clone();
        BrowserScheduler.once(
            self.center_delay,
            Box::new(move || {
                if !leptos_scroll::center_card(container, card_ref) {
                    debug!("card {member_id} not mounted, skipping scroll");
                }
            }),
        );
    }

    pub fn set_completed(&self, member_id: &MemberId, completed: bool) {
        self.run("status change", |controller| controller.set_completed(member_id, completed));
    }

    pub fn check_daily_reset(&self) {
        self.run("daily reset", |controller| controller.check_daily_reset());
    }
}
