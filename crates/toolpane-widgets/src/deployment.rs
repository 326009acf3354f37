//! Payload model for the deployment scaffold widget.

use serde::{Deserialize, Serialize};

/// Generated CI configuration plus the steps to finish wiring it up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    /// CI provider detected in the repository, if any.
    #[serde(default)]
    pub detected_ci: Option<String>,

    /// Application name the workflow deploys.
    #[serde(default)]
    pub app_name: String,

    /// Name of the generated workflow.
    #[serde(default)]
    pub workflow_name: String,

    /// The generated configuration, ready to paste.
    #[serde(default)]
    pub yaml_snippet: String,

    /// Manual follow-up steps, in order.
    #[serde(default)]
    pub setup_steps: Vec<String>,
}

impl DeploymentPlan {
    /// True when a CI provider was detected.
    pub fn has_ci(&self) -> bool {
        self.detected_ci.is_some()
    }
}
