//! Page Configuration
//!
//! Reads the card roster from `<script id="card-config" type="application/json">`.

use leptos::prelude::*;
use log::{info, warn};
use recycle_core::CardConfig;

pub const CONFIG_ELEMENT_ID: &str = "card-config";

/// Load the roster, falling back to an empty default on any problem
pub fn load_page_config() -> CardConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let Some(raw) = raw else {
        warn!("#{CONFIG_ELEMENT_ID} not found, no cards to show");
        return CardConfig::default();
    };

    match CardConfig::from_json(&raw) {
        Ok(config) => {
            info!("loaded {} members from #{CONFIG_ELEMENT_ID}", config.members.len());
            config
        }
        Err(err) => {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            CardConfig::default()
        }
    }
}
