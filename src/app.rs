//! Recycle Cards App
//!
//! Builds the controller from the page config, starts it and the daily reset
//! timer, then renders the `.cards-container` list.

use leptos::html::Div;
use leptos::prelude::*;
use reactive_stores::Store;
use recycle_core::start_daily_reset;

use crate::components::MemberCard;
use crate::config::load_page_config;
use crate::context::CardContext;
use crate::scheduler::BrowserScheduler;
use crate::store::{store_member_ids, BoardState};

#[component]
pub fn App() -> impl IntoView {
    let config = load_page_config();
    let store = Store::new(BoardState::default());
    let container = NodeRef::<Div>::new();

    let Some(ctx) = CardContext::open(&config, store, container) else {
        return view! { <div class="cards-container" node_ref=container></div> }.into_any();
    };

    // Show cards and load today's status before the first reset check
    ctx.start();
    provide_context(ctx);
    start_daily_reset(&BrowserScheduler, config.reset_check_interval(), move || {
        ctx.check_daily_reset();
    });

    view! {
        <div class="cards-container" node_ref=container>
            <For
                each=move || store_member_ids(&store)
                key=|member_id| member_id.clone()
                children=move |member_id| view! { <MemberCard member_id=member_id /> }
            />
        </div>
    }
    .into_any()
}
