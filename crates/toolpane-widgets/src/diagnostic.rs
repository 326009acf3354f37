//! Payload model for the docs diagnostic widget.

use serde::{Deserialize, Serialize};

use toolpane_theme::vars;

/// Answer to a documentation question plus an integration roll call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// The question that was asked.
    #[serde(default)]
    pub query: String,

    /// The answer sourced from the documentation.
    #[serde(default)]
    pub answer: String,

    /// Connection status of each relevant integration.
    #[serde(default)]
    pub integrations: Vec<Integration>,
}

impl DiagnosticReport {
    /// True when every listed integration reports green.
    pub fn all_healthy(&self) -> bool {
        self.integrations
            .iter()
            .all(|i| i.status == IntegrationStatus::Green)
    }
}

/// One integration's connection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    /// Integration name as the tool reports it.
    pub name: String,

    /// Traffic-light status.
    pub status: IntegrationStatus,

    /// Short human-readable explanation of the status.
    #[serde(default)]
    pub detail: String,
}

/// Traffic-light status reported per integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Green,
    Yellow,
    Red,
}

impl IntegrationStatus {
    /// The canonical color token this status renders with.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Green => vars::SUCCESS,
            Self::Yellow => vars::WARNING,
            Self::Red => vars::ERROR,
        }
    }
}
