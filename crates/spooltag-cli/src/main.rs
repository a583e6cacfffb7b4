use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;
use spooltag_core::{CatalogEntry, FilamentCatalog, Report};
use tracing::debug;

mod text;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("SPOOLTAG_BUILD_COMMIT"),
    "\nbuild date: ",
    env!("SPOOLTAG_BUILD_DATE")
);

const EXAMPLES: &str = "Examples:\n  spooltag dump decode spool.nfc -o report.json\n  spooltag dump parse spool.nfc --text\n  spooltag catalog lookup A00-R3";

#[derive(Parser, Debug)]
#[command(name = "spooltag")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for Bambu Lab filament spool NFC tags (Mifare Classic 1K dumps).",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on NFC tag dumps.
    Dump {
        #[command(subcommand)]
        command: DumpCommands,
    },
    /// Operations on the filament reference catalog.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DumpCommands {
    /// Decode a tag dump and generate a versioned JSON report.
    #[command(alias = "parse")]
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Path to a .nfc dump file (a glob matching one file is accepted)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present_any = ["stdout", "text"])]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Print the spool card as text to stdout
        #[arg(long, conflicts_with = "stdout")]
        text: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Catalog JSON file replacing the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if the tag is not a recognised spool
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// Look up a variant id (e.g. A00-R3) and print its catalog entry as JSON.
    Lookup {
        variant_id: String,

        /// Catalog JSON file replacing the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

struct DecodeOptions {
    report: Option<PathBuf>,
    stdout: bool,
    text: bool,
    pretty: bool,
    compact: bool,
    catalog: Option<PathBuf>,
    quiet: bool,
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Dump { command } => match command {
            DumpCommands::Decode {
                input,
                report,
                stdout,
                text,
                pretty,
                compact,
                catalog,
                quiet,
                strict,
            } => cmd_dump_decode(
                input,
                DecodeOptions {
                    report,
                    stdout,
                    text,
                    pretty,
                    compact,
                    catalog,
                    quiet,
                    strict,
                },
            ),
        },
        Commands::Catalog { command } => match command {
            CatalogCommands::Lookup {
                variant_id,
                catalog,
            } => cmd_catalog_lookup(&variant_id, catalog.as_deref()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("spooltag_core=debug,spooltag=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_dump_decode(input: PathBuf, opts: DecodeOptions) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    if let Some(report_path) = opts.report.as_ref() {
        ensure_distinct_output(report_path, &input_abs)?;
    }

    let catalog = load_catalog(opts.catalog.as_deref())?;
    debug!(input = %resolved_input.display(), entries = catalog.len(), "decoding dump");

    let rep = spooltag_core::analyze_dump_file(&resolved_input, &catalog).map_err(|err| {
        CliError::new(
            format!("failed to decode {}: {}", resolved_input.display(), err),
            Some("expected a Flipper-style Mifare Classic .nfc dump".to_string()),
        )
    })?;

    if opts.stdout {
        let json = serialize_report(&rep, opts.pretty, opts.compact)?;
        print!("{}", json);
    }

    if let Some(report) = opts.report.as_ref() {
        let json = serialize_report(&rep, opts.pretty, opts.compact)?;
        if let Some(parent) = report.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        fs::write(report, json)
            .with_context(|| format!("Failed to write report: {}", report.display()))?;
        if !opts.quiet {
            eprintln!("OK: report written -> {}", report.display());
        }
    }

    if opts.text {
        print!("{}", text::render_report(&rep));
    }

    if opts.strict && !rep.recognized {
        return Err(CliError::new(
            format!(
                "tag not recognised: {}",
                rep.rejection.as_deref().unwrap_or("unknown reason")
            ),
            Some("the dump does not hold a Bambu Lab filament spool tag".to_string()),
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    catalog: String,
    entry: &'a CatalogEntry,
}

fn cmd_catalog_lookup(variant_id: &str, catalog_path: Option<&Path>) -> Result<(), CliError> {
    let catalog = load_catalog(catalog_path)?;
    let entry = catalog.lookup(variant_id).ok_or_else(|| {
        CliError::new(
            format!("variant id not found: {}", variant_id),
            Some("variant ids look like A00-R3 and are case-sensitive".to_string()),
        )
    })?;

    let output = LookupOutput {
        catalog: catalog_path
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        entry,
    };
    let json = serde_json::to_string_pretty(&output).context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<FilamentCatalog, CliError> {
    match path {
        Some(path) => FilamentCatalog::from_json_file(path).map_err(|err| {
            CliError::new(
                format!("failed to load catalog {}: {}", path.display(), err),
                Some(
                    "expected a JSON array of {variant_id, product_code, color_name} objects"
                        .to_string(),
                ),
            )
        }),
        None => FilamentCatalog::builtin()
            .context("built-in catalog is invalid")
            .map_err(Into::into),
    }
}

fn ensure_distinct_output(report_path: &Path, input_abs: &Path) -> Result<(), CliError> {
    let report_dir = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent),
        _ => fs::canonicalize("."),
    };
    // A directory that does not exist yet cannot contain the input.
    let Ok(report_dir) = report_dir else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .nfc dump file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .nfc dump file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "nfc" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .nfc file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .nfc file".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let mut message = format!(
                "multiple files match pattern '{}' ({} matches); matches: ",
                pattern, count
            );
            message.push_str(
                &matches
                    .iter()
                    .take(3)
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            if count > 3 {
                message.push_str(", ...");
            }
            Err(CliError::new(
                message,
                Some("pass a single dump file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
