//! Card Configuration
//!
//! Roster and tunables, read as JSON from the host page.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::domain::{Card, DomainError, DomainResult, MemberId, StatusLabels};
use crate::schedule::{CENTER_DELAY, RESET_CHECK_INTERVAL};

/// Longest delay a browser timer honors
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// One roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntry {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
}

impl MemberEntry {
    /// Name shown in the header, falls back to the id
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub members: Vec<MemberEntry>,
    #[serde(default)]
    pub labels: StatusLabels,
    #[serde(default = "default_center_delay_ms")]
    pub center_delay_ms: u64,
    #[serde(default = "default_reset_check_interval_secs")]
    pub reset_check_interval_secs: u64,
}

fn default_center_delay_ms() -> u64 {
    CENTER_DELAY.as_millis() as u64
}

fn default_reset_check_interval_secs() -> u64 {
    RESET_CHECK_INTERVAL.as_secs()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            labels: StatusLabels::default(),
            center_delay_ms: default_center_delay_ms(),
            reset_check_interval_secs: default_reset_check_interval_secs(),
        }
    }
}

impl CardConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| DomainError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Member ids must be unique, they are storage keys. Timer values must fit
    /// a browser timeout, which treats anything above `i32::MAX` ms as zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.reset_check_interval_secs == 0 {
            return Err(DomainError::Config("reset_check_interval_secs must be positive".to_string()));
        }
        if self.reset_check_interval_secs.saturating_mul(1000) > MAX_TIMER_MS {
            return Err(DomainError::Config(format!(
                "reset_check_interval_secs {} exceeds the timer limit",
                self.reset_check_interval_secs
            )));
        }
        if self.center_delay_ms > MAX_TIMER_MS {
            return Err(DomainError::Config(format!(
                "center_delay_ms {} exceeds the timer limit",
                self.center_delay_ms
            )));
        }
        let mut seen = HashSet::new();
        for member in &self.members {
            if member.id.as_str().is_empty() {
                return Err(DomainError::Config("empty member id".to_string()));
            }
            if !seen.insert(&member.id) {
                return Err(DomainError::Config(format!("duplicate member id: {}", member.id)));
            }
        }
        Ok(())
    }

    pub fn cards(&self) -> Vec<Card> {
        self.members
            .iter()
            .map(|member| Card::new(member.id.clone(), member.display_name()))
            .collect()
    }

    pub fn center_delay(&self) -> Duration {
        Duration::from_millis(self.center_delay_ms)
    }

    pub fn reset_check_interval(&self) -> Duration {
        Duration::from_secs(self.reset_check_interval_secs)
    }
}
