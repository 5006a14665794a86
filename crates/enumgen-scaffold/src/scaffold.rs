//! Interactive generator run
//!
//! Sequence: enum name, cases until a blank line, both namespaces, summary,
//! confirmation, then the two writes. Nothing reaches the filesystem before
//! the confirmation.

use enumgen_core::{parse_case_line, CaseLine, CaseSet, Config, EnumName, Namespace};
use enumgen_render::TemplateRenderer;
use tracing::{debug, info, instrument, warn};

use crate::console::Console;
use crate::error::ScaffoldError;
use crate::plan::{ScaffoldPlan, ScaffoldRequest};
use crate::report::{ArtifactStatus, OutcomeKind, ScaffoldReport};
use crate::writer::ArtifactWriter;

/// Switches for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Render and show the files without writing them
    pub dry_run: bool,

    /// Replace existing target files
    pub overwrite: bool,
}

/// Drives a generator run against a [`Console`]
#[derive(Debug)]
pub struct Scaffolder {
    config: Config,
    renderer: TemplateRenderer,
    options: ScaffoldOptions,
}

impl Scaffolder {
    /// Scaffolder using the templates named in `config` (or the built-in ones)
    pub fn new(config: Config) -> Result<Self, ScaffoldError> {
        let renderer = TemplateRenderer::from_config(&config)?;
        Ok(Self {
            config,
            renderer,
            options: ScaffoldOptions::default(),
        })
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn overwrite(&self) -> bool {
        self.options.overwrite || self.config.overwrite
    }

    /// Collect everything interactively, then execute.
    ///
    /// Invalid answers are reported and the same question is asked again.
    /// Only closed input ends the run with an `Err`.
    pub fn run(&self, console: &mut dyn Console) -> Result<ScaffoldReport, ScaffoldError> {
        console.title("Enum Generator")?;
        console.text(&["This command will help you create a new enum and its Doctrine type.".to_string()])?;

        let enum_name = loop {
            let answer = console.ask("Enum name (e.g., UserStatus, OrderState):", None)?;
            match EnumName::parse(&answer) {
                Ok(name) => break name,
                Err(err) => console.error(&err.to_string())?,
            }
        };

        console.section("Enum Cases")?;
        console.text(&["Enter the enum cases (values). Press enter on empty line to finish.".to_string()])?;

        let mut cases = CaseSet::new();
        loop {
            let question = format!("Case #{} (name=value, e.g., ACTIVE=active):", cases.len() + 1);
            let answer = console.ask(&question, Some(""))?;

            let pushed = parse_case_line(&answer).and_then(|line| match line {
                CaseLine::End => Ok(false),
                CaseLine::Case(case) => cases.push(case).map(|_| true),
            });

            match pushed {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if err.is_retryable() => {
                    debug!(code = %err.code(), "Rejected case line");
                    console.error(&err.to_string())?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let cases = match cases.finish() {
            Ok(cases) => cases,
            Err(err) => {
                console.error("At least one case is required.")?;
                warn!(enum_name = %enum_name, "No cases given");
                return Ok(ScaffoldReport::failed_early(err.to_string()).with_error_code(err.code()));
            }
        };

        let enum_namespace = self.ask_namespace(console, "Enum", self.config.default_enum_namespace()?)?;
        let type_namespace = self.ask_namespace(console, "Type", self.config.default_type_namespace()?)?;

        let request = ScaffoldRequest {
            enum_name,
            cases,
            enum_namespace,
            type_namespace,
            type_name: None,
        };
        self.execute(&request, console)
    }

    fn ask_namespace(
        &self,
        console: &mut dyn Console,
        label: &str,
        default: Namespace,
    ) -> Result<Namespace, ScaffoldError> {
        let question = format!("{} namespace (default: {}):", label, default);
        loop {
            let answer = console.ask(&question, Some(default.as_str()))?;
            match Namespace::parse(&answer) {
                Ok(namespace) => return Ok(namespace),
                Err(err) => console.error(&err.to_string())?,
            }
        }
    }

    /// Plan, confirm and write for an already collected request
    #[instrument(skip_all, fields(enum_name = %request.enum_name))]
    pub fn execute(
        &self,
        request: &ScaffoldRequest,
        console: &mut dyn Console,
    ) -> Result<ScaffoldReport, ScaffoldError> {
        let plan = match ScaffoldPlan::build(request, &self.config, &self.renderer) {
            Ok(plan) => plan,
            Err(ScaffoldError::Validation(err)) => {
                console.error(&err.to_string())?;
                warn!(code = %err.code(), "Invalid request");
                return Ok(ScaffoldReport::failed_early(err.to_string()).with_error_code(err.code()));
            }
            Err(err @ (ScaffoldError::Config(_) | ScaffoldError::Render(_))) => {
                console.error(&err.to_string())?;
                warn!(error = %err, "Could not plan files");
                return Ok(ScaffoldReport::failed_early(err.to_string()));
            }
            Err(err) => return Err(err),
        };

        console.section("Summary")?;
        console.listing(&plan.summary())?;

        if self.options.dry_run {
            for artifact in &plan.artifacts {
                console.section(&artifact.path.display().to_string())?;
                console.text(&artifact.content.lines().map(str::to_string).collect::<Vec<_>>())?;
            }
            info!("Dry run, nothing written");
            return Ok(ScaffoldReport::for_plan(&plan, OutcomeKind::Previewed));
        }

        if !self.options.assume_yes && !console.confirm("Create these files? (yes/no)", false)? {
            console.warning("Cancelled.")?;
            info!("Cancelled by user");
            return Ok(ScaffoldReport::for_plan(&plan, OutcomeKind::Cancelled));
        }

        let writer = ArtifactWriter::new(self.overwrite());
        let mut report = ScaffoldReport::for_plan(&plan, OutcomeKind::Created);

        if let Err(err) = writer.check_targets(&plan.artifacts) {
            console.error(&err.to_string())?;
            warn!(error = %err, "Refusing to overwrite");
            report.outcome = OutcomeKind::Failed;
            report.error = Some(err.to_string());
            return Ok(report);
        }

        for artifact in &plan.artifacts {
            match writer.write(artifact) {
                Ok(()) => {
                    report.mark(artifact.kind, ArtifactStatus::Written);
                    console.success(&format!("Created: {}", artifact.path.display()))?;
                    info!(kind = %artifact.kind, path = %artifact.path.display(), "Created file");
                }
                Err(err) => {
                    // Earlier writes stay on disk
                    report.mark(artifact.kind, ArtifactStatus::Failed);
                    report.outcome = OutcomeKind::Failed;
                    report.error = Some(err.to_string());
                    console.error(&format!("Error creating files: {}", err))?;
                    warn!(error = %err, "Write failed");
                    return Ok(report);
                }
            }
        }

        console.section("Next Steps")?;
        console.text(&plan.next_steps())?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Scripted console recording every message
    #[derive(Default)]
    struct ScriptedConsole {
        answers: VecDeque<String>,
        errors: Vec<String>,
        warnings: Vec<String>,
        questions: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> io::Result<String> {
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    impl Console for ScriptedConsole {
        fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String> {
            self.questions.push(question.to_string());
            let answer = self.next()?;
            match default {
                Some(default) if answer.is_empty() => Ok(default.to_string()),
                _ => Ok(answer),
            }
        }

        fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
            self.questions.push(question.to_string());
            let answer = self.next()?;
            Ok(if answer.is_empty() { default } else { answer.starts_with('y') })
        }

        fn title(&mut self, _: &str) -> io::Result<()> {
            Ok(())
        }

        fn section(&mut self, _: &str) -> io::Result<()> {
            Ok(())
        }

        fn text(&mut self, _: &[String]) -> io::Result<()> {
            Ok(())
        }

        fn listing(&mut self, _: &[String]) -> io::Result<()> {
            Ok(())
        }

        fn success(&mut self, _: &str) -> io::Result<()> {
            Ok(())
        }

        fn warning(&mut self, message: &str) -> io::Result<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }

        fn error(&mut self, message: &str) -> io::Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }

    fn scaffolder(root: &std::path::Path) -> Scaffolder {
        Scaffolder::new(Config::default().with_project_root(root)).unwrap()
    }

    #[test]
    fn test_case_prompt_numbering_skips_rejected_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&["OrderState", "NEW", "bad", "PAID", "", "", "", "no"]);

        let report = scaffolder(dir.path()).run(&mut console).unwrap();

        assert_eq!(report.outcome, OutcomeKind::Cancelled);
        assert_eq!(console.errors.len(), 1);
        let case_questions: Vec<_> = console.questions.iter().filter(|q| q.starts_with("Case #")).collect();
        assert_eq!(case_questions.len(), 4);
        assert!(case_questions[2].starts_with("Case #2"));
        assert!(case_questions[3].starts_with("Case #3"));
    }

    #[test]
    fn test_duplicate_case_is_reprompted() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&["OrderState", "NEW", "NEW=again", "", "", "", "no"]);

        let report = scaffolder(dir.path()).run(&mut console).unwrap();

        assert_eq!(report.cases, vec!["NEW".to_string()]);
        assert_eq!(console.errors.len(), 1);
    }

    #[test]
    fn test_invalid_namespace_is_reprompted() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&["OrderState", "NEW", "", "App\\\\Bad", "App\\Domain", "", "no"]);

        let report = scaffolder(dir.path()).run(&mut console).unwrap();

        assert_eq!(report.enum_class.as_deref(), Some("App\\Domain\\OrderState"));
        assert_eq!(console.errors.len(), 1);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let scaffolder = scaffolder(dir.path()).with_options(ScaffoldOptions {
            dry_run: true,
            ..ScaffoldOptions::default()
        });
        let mut console = ScriptedConsole::new(&["OrderState", "NEW", "", "", ""]);

        let report = scaffolder.run(&mut console).unwrap();

        assert_eq!(report.outcome, OutcomeKind::Previewed);
        assert!(report.written_paths().is_empty());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&["OrderState", "NEW"]);

        let err = scaffolder(dir.path()).run(&mut console).unwrap_err();
        assert!(matches!(err, ScaffoldError::Input(_)));
    }
}
