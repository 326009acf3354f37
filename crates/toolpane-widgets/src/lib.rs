//! Typed payload models for the shipped toolpane widgets.
//!
//! Each widget is a thin, data-bound view over one tool's structured
//! content. The models here mirror the tool wire format (snake_case
//! fields, default-tolerant collections) and carry the handful of
//! derived values the views render; [`WidgetState`] holds the
//! waiting-versus-ready distinction every widget shares.

mod deployment;
mod diagnostic;
mod hygiene;
mod state;

pub use deployment::DeploymentPlan;
pub use diagnostic::{DiagnosticReport, Integration, IntegrationStatus};
pub use hygiene::{Commit, CommitHygieneReport, IssueInfo};
pub use state::{WidgetState, WAITING_MESSAGE};
