//! Enum scaffolding
//!
//! Collects an enum definition (interactively or from arguments), renders the
//! enum and its column type, and writes both files after confirmation.

pub mod console;
pub mod error;
pub mod plan;
pub mod report;
pub mod scaffold;
pub mod writer;

pub use console::{Console, TerminalConsole};
pub use error::ScaffoldError;
pub use plan::{ScaffoldPlan, ScaffoldRequest};
pub use report::{ArtifactReport, ArtifactStatus, OutcomeKind, ScaffoldReport, REPORT_VERSION};
pub use scaffold::{ScaffoldOptions, Scaffolder};
pub use writer::ArtifactWriter;
