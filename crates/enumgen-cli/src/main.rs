use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use enumgen_core::{resolve_type_name, Config, CONFIG_FILE_NAME};
use enumgen_registry::TypeRegistry;
use enumgen_scaffold::{
    Console, OutcomeKind, ScaffoldError, ScaffoldOptions, ScaffoldReport, ScaffoldRequest, Scaffolder,
    TerminalConsole,
};

/// enumgen - Generate backed enums and their Doctrine column types
#[derive(Parser)]
#[command(name = "enumgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: <project-dir>/enumgen.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project directory generated paths are relative to
    #[arg(short = 'p', long, global = true)]
    project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GenerateArgs {
    /// Enum class name, e.g. OrderState
    #[arg(short, long)]
    name: String,

    /// Case as NAME=value or NAME (repeatable)
    #[arg(long = "case", value_name = "CASE", required = true)]
    cases: Vec<String>,

    /// Namespace of the enum (default from config)
    #[arg(long)]
    enum_namespace: Option<String>,

    /// Namespace of the column type (default from config)
    #[arg(long)]
    type_namespace: Option<String>,

    /// Explicit type name instead of the derived one
    #[arg(long)]
    type_name: Option<String>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Show the generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    force: bool,

    /// Write a JSON report of the run
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an enum and its column type interactively
    Make {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Write a JSON report of the run
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Create an enum and its column type from arguments
    Generate(GenerateArgs),

    /// Print the type name for a column type class
    TypeName {
        /// Class name, e.g. DayOfWeekEnumType
        class: String,

        /// Explicit name that takes precedence over the derived one
        #[arg(short, long = "override")]
        override_name: Option<String>,
    },

    /// List the built-in column types
    Types {
        /// Print the type map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default enumgen.toml
    InitConfig {
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_dir = match &cli.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    match cli.command {
        Commands::Make { force, report } => {
            let config = load_config(cli.config.as_deref(), &project_dir, cli.verbose)?;
            let options = ScaffoldOptions {
                overwrite: force,
                ..ScaffoldOptions::default()
            };
            make_command(config, options, report.as_deref())
        }
        Commands::Generate(args) => {
            let config = load_config(cli.config.as_deref(), &project_dir, cli.verbose)?;
            generate_command(config, &args)
        }
        Commands::TypeName { class, override_name } => {
            type_name_command(&class, override_name.as_deref());
            Ok(())
        }
        Commands::Types { json } => types_command(json),
        Commands::InitConfig { force } => {
            let path = cli.config.unwrap_or_else(|| project_dir.join(CONFIG_FILE_NAME));
            init_config_command(&path, force)
        }
    }
}

/// Logs go to stderr; RUST_LOG overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(config_path: Option<&Path>, project_dir: &Path, verbose: bool) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::discover(project_dir)?,
    };
    tracing::debug!(project_root = %config.project_root.display(), "Loaded config");

    if verbose {
        eprintln!("{} {}", "Project root:".cyan(), config.project_root.display());
        eprintln!(
            "{} {} / {}",
            "Default namespaces:".cyan(),
            config.enum_namespace,
            config.type_namespace
        );
    }

    Ok(config)
}

/// Make command - interactive prompts on stdin/stdout
fn make_command(config: Config, options: ScaffoldOptions, report_path: Option<&Path>) -> Result<()> {
    let scaffolder = Scaffolder::new(config)?.with_options(options);
    let mut console = TerminalConsole::stdio();

    let report = scaffolder.run(&mut console)?;
    finish(&report, report_path)
}

/// Generate command - same pipeline, input from arguments
fn generate_command(config: Config, args: &GenerateArgs) -> Result<()> {
    let mut console = TerminalConsole::stdio();
    let report = generate_report(config, args, &mut console)?;
    finish(&report, args.report.as_deref())
}

/// Run `generate`; invalid arguments become a failed report, not an error
fn generate_report(config: Config, args: &GenerateArgs, console: &mut dyn Console) -> Result<ScaffoldReport> {
    let parsed = ScaffoldRequest::parse(
        &args.name,
        &args.cases,
        args.enum_namespace.as_deref(),
        args.type_namespace.as_deref(),
        args.type_name.as_deref(),
        &config,
    );

    let request = match parsed {
        Ok(request) => request,
        Err(ScaffoldError::Validation(err)) => {
            console.error(&err.to_string())?;
            tracing::warn!(code = %err.code(), "Invalid generate arguments");
            return Ok(ScaffoldReport::failed_early(err.to_string()).with_error_code(err.code()));
        }
        Err(err) => return Err(err.into()),
    };

    let options = ScaffoldOptions {
        assume_yes: args.yes,
        dry_run: args.dry_run,
        overwrite: args.force,
    };
    let scaffolder = Scaffolder::new(config)?.with_options(options);
    Ok(scaffolder.execute(&request, console)?)
}

/// Save the report if asked, and exit with an error code on failure
fn finish(report: &ScaffoldReport, report_path: Option<&Path>) -> Result<()> {
    if let Some(path) = report_path {
        save_report(report, path)?;
    }

    if report.outcome == OutcomeKind::Failed {
        std::process::exit(1);
    }

    Ok(())
}

fn save_report(report: &ScaffoldReport, path: &Path) -> Result<()> {
    report
        .save_to_file(path)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    eprintln!("{} {}", "Report written to:".green(), path.display());
    Ok(())
}

/// Type name command - resolve a type name the way generated types do
fn type_name_command(class: &str, override_name: Option<&str>) {
    println!("{}", resolve_type_name(class, override_name));
}

/// Types command - show the built-in registry
fn types_command(json: bool) -> Result<()> {
    let registry = TypeRegistry::with_builtins()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&registry.type_map())?);
        return Ok(());
    }

    println!("{}", "Registered column types:".bold());
    for type_name in registry.type_names() {
        let adapter = registry
            .get(type_name)
            .with_context(|| format!("Type {} vanished from the registry", type_name))?;
        println!("  {} -> {}", type_name.green(), adapter.enum_reference());
        println!("    {}", registry.sql_declaration(type_name)?);
    }

    Ok(())
}

/// Init config command - write the default configuration
fn init_config_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to replace it)", path.display());
    }

    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Created:".green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::ErrorCode;
    use std::io::Cursor;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_arguments() {
        let cli = Cli::try_parse_from([
            "enumgen",
            "generate",
            "--name",
            "OrderState",
            "--case",
            "NEW=new",
            "--case",
            "PAID",
            "--yes",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "OrderState");
                assert_eq!(args.cases, vec!["NEW=new", "PAID"]);
                assert!(args.yes);
                assert!(!args.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    /// Parse `generate` arguments and run them against a temp project
    fn generate_in(root: &Path, argv: &[&str]) -> (ScaffoldReport, String) {
        let cli = Cli::try_parse_from(["enumgen", "generate"].iter().chain(argv)).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };

        let config = Config::default().with_project_root(root);
        let mut console = TerminalConsole::new(Cursor::new(Vec::new()), Vec::new());
        let report = generate_report(config, &args, &mut console).unwrap();

        let path = args.report.expect("tests always pass --report");
        save_report(&report, &path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        (report, json)
    }

    #[test]
    fn generate_lowercase_name_writes_failed_report() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let report_arg = report_path.to_string_lossy().to_string();

        let (report, json) = generate_in(
            dir.path(),
            &["--name", "orderState", "--case", "NEW", "--yes", "--report", &report_arg],
        );

        assert_eq!(report.outcome, OutcomeKind::Failed);
        assert_eq!(report.error_code, Some(ErrorCode::InvalidEnumName));
        assert!(json.contains("\"error_code\": \"INVALID_ENUM_NAME\""));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn generate_without_cases_writes_failed_report() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let report_arg = report_path.to_string_lossy().to_string();

        let (report, json) = generate_in(
            dir.path(),
            &["--name", "OrderState", "--case", "", "--yes", "--report", &report_arg],
        );

        assert_eq!(report.outcome, OutcomeKind::Failed);
        assert_eq!(report.error_code, Some(ErrorCode::NoCases));
        assert!(json.contains("\"error_code\": \"NO_CASES\""));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn generate_valid_arguments_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let report_arg = report_path.to_string_lossy().to_string();

        let (report, json) = generate_in(
            dir.path(),
            &["--name", "OrderState", "--case", "NEW=new", "--yes", "--report", &report_arg],
        );

        assert_eq!(report.outcome, OutcomeKind::Created);
        assert!(json.contains("\"outcome\": \"created\""));
        assert!(dir.path().join("src/Enum/OrderState.php").exists());
        assert!(dir.path().join("src/Type/OrderStateEnumType.php").exists());
    }

    #[test]
    fn parse_type_name_override() {
        let cli = Cli::try_parse_from(["enumgen", "type-name", "StatusType", "--override", "state"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::TypeName { ref class, override_name: Some(ref o) } if class == "StatusType" && o == "state"
        ));
    }

    #[test]
    fn init_config_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        init_config_command(&path, false).unwrap();
        assert!(Config::from_file(&path).is_ok());
        assert!(init_config_command(&path, false).is_err());
        assert!(init_config_command(&path, true).is_ok());
    }
}
