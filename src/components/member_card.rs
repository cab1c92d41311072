//! Member Card Component
//!
//! One `.card-container`: a clickable header with the status alert, and a
//! collapsible content region holding the recycling checkbox.

use leptos::html::Div;
use leptos::prelude::*;
use recycle_core::MemberId;

use super::RecycleCheck;
use crate::context::CardContext;
use crate::store::{store_alert_text, store_card};

#[component]
pub fn MemberCard(member_id: MemberId) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");
    let store = ctx.store;
    let card_ref = NodeRef::<Div>::new();

    let card = {
        let member_id = member_id.clone();
        Memo::new(move |_| store_card(&store, &member_id))
    };

    let visible = move || card.get().is_some_and(|c| c.visible);
    let completed = Signal::derive(move || card.get().is_some_and(|c| c.completed));
    let name = move || card.get().map(|c| c.name).unwrap_or_default();
    let alert = move || {
        card.get()
            .map(|c| store_alert_text(&store, &c))
            .unwrap_or_default()
    };

    let on_header_click = {
        let member_id = member_id.clone();
        move |ev: web_sys::MouseEvent| {
            // outer handlers must not see header clicks
            ev.stop_propagation();
            ctx.toggle(&member_id, card_ref);
        }
    };

    view! {
        <div
            class=move || card.get().map(|c| c.container_class()).unwrap_or("card-container")
            style:display=move || if visible() { "block" } else { "none" }
            node_ref=card_ref
        >
            <div
                class=move || card.get().map(|c| c.header_class()).unwrap_or("member-header")
                data-member-id=member_id.to_string()
                on:click=on_header_click
            >
                <span class="member-name">{name}</span>
                <span class="alert">{alert}</span>
            </div>

            <div class=move || card.get().map(|c| c.content_class()).unwrap_or("card-content-wrapper")>
                <div class=move || card.get().map(|c| c.indicator_class()).unwrap_or("green-card-container")>
                    <RecycleCheck member_id=member_id.clone() completed=completed />
                </div>
            </div>
        </div>
    }
}
