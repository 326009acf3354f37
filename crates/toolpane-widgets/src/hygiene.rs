//! Payload model for the commit hygiene widget.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Issue-key coverage for a branch and its commits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitHygieneReport {
    /// Branch under inspection.
    #[serde(default)]
    pub branch: String,

    /// Issue keys parsed out of the branch name.
    #[serde(default)]
    pub branch_ids: Vec<String>,

    /// Commits on the branch, newest first.
    #[serde(default)]
    pub commits: Vec<Commit>,

    /// Tracker details keyed by issue key.
    #[serde(default)]
    pub linear_data: HashMap<String, IssueInfo>,

    /// One-line verdict produced by the tool.
    #[serde(default)]
    pub summary: String,
}

impl CommitHygieneReport {
    /// Number of commits referencing at least one issue key.
    pub fn pass_count(&self) -> usize {
        self.commits.iter().filter(|c| c.has_issue_key()).count()
    }

    /// Total number of commits inspected.
    pub fn total(&self) -> usize {
        self.commits.len()
    }

    /// True when the branch name itself carries an issue key.
    pub fn branch_has_issue_key(&self) -> bool {
        !self.branch_ids.is_empty()
    }
}

/// One commit and the issue keys found in its message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit sha.
    pub sha: String,

    /// First line of the commit message.
    pub message: String,

    /// Issue keys referenced by the message.
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Commit {
    /// True when the message references at least one issue key.
    pub fn has_issue_key(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Abbreviated sha for table display.
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

/// Tracker-side details for one issue key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueInfo {
    /// Issue title.
    pub title: String,

    /// Workflow state name, as the tracker reports it.
    pub state: String,

    /// Whether the issue is assigned to the requesting user; null when
    /// the tracker could not resolve the assignee.
    #[serde(default)]
    pub assigned_to_you: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CommitHygieneReport {
        let json = r#"{
            "branch": "eng-142-retry-webhooks",
            "branch_ids": ["ENG-142"],
            "commits": [
                {
                    "sha": "8f3a21bc9e77d04512aa09c1f2b5d6e8a1b2c3d4",
                    "message": "ENG-142 retry failed webhook deliveries",
                    "ids": ["ENG-142"]
                },
                {
                    "sha": "1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d",
                    "message": "fix typo in changelog",
                    "ids": []
                }
            ],
            "linear_data": {
                "ENG-142": {
                    "title": "Retry failed webhook deliveries",
                    "state": "In Progress",
                    "assigned_to_you": true
                }
            },
            "summary": "1 of 2 commits reference an issue key."
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pass_count_and_total() {
        let report = fixture();

        assert_eq!(report.pass_count(), 1);
        assert_eq!(report.total(), 2);
        assert!(report.branch_has_issue_key());
    }

    #[test]
    fn test_short_sha() {
        let report = fixture();

        assert_eq!(report.commits[0].short_sha(), "8f3a21b");

        let stub = Commit {
            sha: "ab12".to_string(),
            message: String::new(),
            ids: Vec::new(),
        };
        assert_eq!(stub.short_sha(), "ab12");
    }

    #[test]
    fn test_tracker_details() {
        let report = fixture();

        let info = &report.linear_data["ENG-142"];
        assert_eq!(info.state, "In Progress");
        assert_eq!(info.assigned_to_you, Some(true));
    }

    #[test]
    fn test_null_assignee_tolerated() {
        let json = r#"{"title": "t", "state": "Done", "assigned_to_you": null}"#;
        let info: IssueInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.assigned_to_you, None);
    }

    #[test]
    fn test_empty_report_defaults() {
        let report: CommitHygieneReport = serde_json::from_str("{}").unwrap();

        assert_eq!(report.pass_count(), 0);
        assert_eq!(report.total(), 0);
        assert!(!report.branch_has_issue_key());
        assert!(report.linear_data.is_empty());
    }
}
