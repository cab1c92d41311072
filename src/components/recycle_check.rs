//! Recycle Checkbox Component

use leptos::prelude::*;
use recycle_core::MemberId;

use crate::context::CardContext;

/// The `.recycleCheck` checkbox for one member
#[component]
pub fn RecycleCheck(
    member_id: MemberId,
    #[prop(into)] completed: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    view! {
        <label class="recycle-label" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
            <input
                type="checkbox"
                class="recycleCheck"
                prop:checked=move || completed.get()
                on:change=move |ev: web_sys::Event| {
                    ev.stop_propagation();
                    ctx.set_completed(&member_id, event_target_checked(&ev));
                }
            />
            "Kitchen waste recycled today"
        </label>
    }
}
