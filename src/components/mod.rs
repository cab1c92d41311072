//! UI Components
//!
//! Reusable Leptos components.

mod member_card;
mod recycle_check;

pub use member_card::MemberCard;
pub use recycle_check::RecycleCheck;
