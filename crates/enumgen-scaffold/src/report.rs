//! Scaffold run report (JSON)

use enumgen_core::{ArtifactKind, ErrorCode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::plan::ScaffoldPlan;

/// Report schema version
pub const REPORT_VERSION: &str = "1.0";

/// What happened to one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Written to disk
    Written,

    /// Rendered but not written (cancelled, dry run, or an earlier failure)
    Skipped,

    /// Write attempted and failed
    Failed,
}

/// Per-artifact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Created,
    Cancelled,

    /// Dry run: rendered and shown, nothing written
    Previewed,
    Failed,
}

/// Summary of a scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldReport {
    /// Schema version
    pub version: String,

    pub outcome: OutcomeKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default)]
    pub cases: Vec<String>,

    #[serde(default)]
    pub artifacts: Vec<ArtifactReport>,

    /// Failure message, if the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Stable code when the failure was a validation error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl ScaffoldReport {
    /// Report for a run that failed before a plan existed
    pub fn failed_early(error: impl Into<String>) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            outcome: OutcomeKind::Failed,
            enum_class: None,
            type_class: None,
            type_name: None,
            cases: Vec::new(),
            artifacts: Vec::new(),
            error: Some(error.into()),
            error_code: None,
        }
    }

    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Report for a planned run; every artifact starts as skipped
    pub fn for_plan(plan: &ScaffoldPlan, outcome: OutcomeKind) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            outcome,
            enum_class: Some(plan.enum_spec.qualified_name()),
            type_class: Some(plan.type_spec.qualified_class_name()),
            type_name: Some(plan.type_spec.type_name.clone()),
            cases: plan.case_names(),
            artifacts: plan
                .artifacts
                .iter()
                .map(|a| ArtifactReport {
                    kind: a.kind,
                    path: a.path.clone(),
                    status: ArtifactStatus::Skipped,
                })
                .collect(),
            error: None,
            error_code: None,
        }
    }

    /// Update the status of one artifact
    pub fn mark(&mut self, kind: ArtifactKind, status: ArtifactStatus) {
        if let Some(entry) = self.artifacts.iter_mut().find(|a| a.kind == kind) {
            entry.status = status;
        }
    }

    /// Paths of artifacts that reached the disk
    pub fn written_paths(&self) -> Vec<&Path> {
        self.artifacts
            .iter()
            .filter(|a| a.status == ArtifactStatus::Written)
            .map(|a| a.path.as_path())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcome != OutcomeKind::Failed
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_report() {
        let report = ScaffoldReport::failed_early("At least one case is required").with_error_code(ErrorCode::NoCases);
        assert!(!report.is_success());
        assert!(report.written_paths().is_empty());

        let json = report.to_json().unwrap();
        assert!(json.contains("\"error_code\": \"NO_CASES\""));
    }

    #[test]
    fn report_serialization() {
        let mut report = ScaffoldReport::failed_early("boom");
        report.outcome = OutcomeKind::Cancelled;
        report.artifacts.push(ArtifactReport {
            kind: ArtifactKind::Enum,
            path: PathBuf::from("src/Enum/A.php"),
            status: ArtifactStatus::Skipped,
        });
        report.mark(ArtifactKind::Enum, ArtifactStatus::Written);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"outcome\": \"cancelled\""));
        assert!(json.contains("\"status\": \"written\""));
        assert!(!json.contains("enum_class"));

        let parsed: ScaffoldReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
