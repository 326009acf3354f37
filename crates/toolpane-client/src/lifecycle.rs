//! Handshake lifecycle state for one widget instance.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a widget stands in its handshake with the host.
///
/// Exactly one handshake is attempted per instance. `Initialized` and
/// `Standalone` are terminal; there is no re-handshake, and inbound
/// notifications keep flowing in both terminal states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// No handshake attempted yet.
    #[default]
    Uninitialized,
    /// Initialize sent, waiting for the host's answer.
    Initializing,
    /// Handshake succeeded; the host relationship is live.
    Initialized,
    /// Handshake failed or timed out; the widget runs on whatever
    /// out-of-band data still arrives.
    Standalone,
}

impl LifecycleState {
    /// Returns true if the state accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Initialized | Self::Standalone)
    }

    /// Stable lowercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Initialized => "initialized",
            Self::Standalone => "standalone",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current lifecycle state plus when it was entered, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecycleStatus {
    pub state: LifecycleState,
    pub since: DateTime<Utc>,
}

impl LifecycleStatus {
    /// A fresh status in `Uninitialized`, stamped now.
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            since: Utc::now(),
        }
    }

    /// Enter `state`, restamping the transition time.
    pub fn transition(&mut self, state: LifecycleState) {
        self.state = state;
        self.since = Utc::now();
    }
}

impl Default for LifecycleStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_uninitialized() {
        let status = LifecycleStatus::new();
        assert_eq!(status.state, LifecycleState::Uninitialized);
        assert!(!status.state.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(LifecycleState::Initialized.is_terminal());
        assert!(LifecycleState::Standalone.is_terminal());
        assert!(!LifecycleState::Initializing.is_terminal());
    }

    #[test]
    fn test_transition_restamps_time() {
        let mut status = LifecycleStatus::new();
        let created = status.since;

        status.transition(LifecycleState::Initializing);

        assert_eq!(status.state, LifecycleState::Initializing);
        assert!(status.since >= created);
    }

    #[test]
    fn test_wire_form_is_snake_case() {
        let json = serde_json::to_string(&LifecycleState::Standalone).unwrap();
        assert_eq!(json, "\"standalone\"");
        assert_eq!(LifecycleState::Standalone.to_string(), "standalone");
    }
}
