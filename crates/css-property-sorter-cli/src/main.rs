mod messages;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use css_property_sorter_config::Config;
use css_property_sorter_engine::editing::{
    EditError, PlannedEdit, apply_planned, feedback_selections, plan_file_edits,
    plan_selection_edits,
};
use css_property_sorter_engine::{
    Document, OrderingPolicy, Selection, SortMode, SortOutcome, UnknownPlacement,
    UnterminatedPolicy,
};

use messages::{Locale, Message};

#[derive(Parser)]
#[command(
    name = "css-property-sorter",
    version,
    about = "Sort CSS/SCSS property declarations"
)]
struct Cli {
    /// Config file to use instead of the discovered one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Message language (en, zh-cn). Defaults to LANG
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort properties inside the given selections
    Selection(SelectionArgs),

    /// Sort properties across the whole file
    File(FileArgs),
}

#[derive(clap::Args)]
struct SelectionArgs {
    /// Stylesheet to sort
    file: PathBuf,

    /// LINE[:COL]-LINE[:COL], lines 1-based. Repeatable.
    #[arg(short, long = "select", required = true)]
    selections: Vec<Selection>,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    write: bool,

    #[command(flatten)]
    policy: PolicyArgs,
}

#[derive(clap::Args)]
struct FileArgs {
    /// Stylesheet to sort
    file: PathBuf,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    write: bool,

    /// Don't ask before rewriting
    #[arg(short, long)]
    yes: bool,

    #[command(flatten)]
    policy: PolicyArgs,
}

#[derive(clap::Args, Default)]
struct PolicyArgs {
    /// Override the configured sort mode
    #[arg(long, value_enum)]
    sort_mode: Option<SortModeArg>,

    /// Override where properties missing from the custom order go
    #[arg(long, value_enum)]
    unknown_position: Option<PlacementArg>,

    /// Sort a final declaration that has no closing `;`
    #[arg(long)]
    include_unterminated: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortModeArg {
    Custom,
    Alphabetical,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Top,
    Bottom,
}

impl PolicyArgs {
    fn apply(&self, mut policy: OrderingPolicy) -> OrderingPolicy {
        if let Some(mode) = self.sort_mode {
            policy.sort_mode = match mode {
                SortModeArg::Custom => SortMode::Custom,
                SortModeArg::Alphabetical => SortMode::Alphabetical,
            };
        }
        if let Some(position) = self.unknown_position {
            policy.unknown_placement = match position {
                PlacementArg::Top => UnknownPlacement::Top,
                PlacementArg::Bottom => UnknownPlacement::Bottom,
            };
        }
        if self.include_unterminated {
            policy.unterminated = UnterminatedPolicy::Include;
        }
        policy
    }
}

#[derive(Debug, PartialEq)]
enum Status {
    Sorted { elapsed: Duration },
    NoChanges,
    NoSortableContent,
    Cancelled,
    ReplaceFailed(String),
    NoActiveDocument(String),
}

impl Status {
    fn exit_code(&self) -> i32 {
        match self {
            Status::ReplaceFailed(_) | Status::NoActiveDocument(_) => 1,
            _ => 0,
        }
    }

    fn describe(&self, locale: Locale) -> String {
        match self {
            Status::Sorted { elapsed } => format!(
                "{} ({} ms)",
                Message::SortSuccess.text(locale),
                elapsed.as_millis()
            ),
            Status::NoChanges => Message::NoChanges.text(locale).to_string(),
            Status::NoSortableContent => {
                format!("warning: {}", Message::NoCssProperties.text(locale))
            }
            Status::Cancelled => Message::Cancelled.text(locale).to_string(),
            Status::ReplaceFailed(reason) => {
                format!("error: {}: {reason}", Message::ReplaceFailed.text(locale))
            }
            Status::NoActiveDocument(reason) => {
                format!("error: {}: {reason}", Message::OpenFileFirst.text(locale))
            }
        }
    }
}

struct Report {
    status: Status,
    /// Resulting text, when it goes to stdout rather than back to the file.
    output: Option<String>,
}

impl Report {
    fn status_only(status: Status) -> Self {
        Self {
            status,
            output: None,
        }
    }
}

/// Where the confirmation prompt is written and answered.
struct Console<'a> {
    input: &'a mut dyn BufRead,
    prompt: &'a mut dyn Write,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let locale = Locale::resolve(cli.locale.as_deref());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt = io::stderr();
    let mut console = Console {
        input: &mut input,
        prompt: &mut prompt,
    };

    match run(&cli, locale, &mut console) {
        Ok(report) => {
            if let Some(text) = &report.output
                && let Err(e) = write_output(&mut io::stdout().lock(), text)
            {
                log::warn!("Failed to write sorted text to stdout: {e}");
            }
            eprintln!("{}", report.status.describe(locale));
            process::exit(report.status.exit_code());
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli, locale: Locale, console: &mut Console<'_>) -> Result<Report> {
    match &cli.command {
        Command::Selection(args) => {
            let config = load_config(cli.config.as_deref(), &args.file)?;
            let policy = args.policy.apply(config.policy());
            sort_document(&args.file, args.write, |doc| {
                plan_selection_edits(doc, &args.selections, &policy)
            })
        }
        Command::File(args) => {
            let config = load_config(cli.config.as_deref(), &args.file)?;
            if args.write
                && config.enable_confirm
                && !args.yes
                && !confirm(Message::ConfirmSort.text(locale), console)?
            {
                log::info!("Sort of {} declined", args.file.display());
                return Ok(Report::status_only(Status::Cancelled));
            }
            let policy = args.policy.apply(config.policy());
            sort_document(&args.file, args.write, |doc| plan_file_edits(doc, &policy))
        }
    }
}

/// `--config` first, then the nearest project config, then the user config.
fn load_config(explicit: Option<&Path>, file: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        let path = Config::expand_path(path);
        log::info!("Using config from --config: {}", path.display());
        return Config::load_from_path(&path)?
            .with_context(|| format!("Config file not found: {}", path.display()));
    }

    let dir = file
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    if let Some(path) = Config::discover_path(&dir)
        && let Some(config) = Config::load_from_path(&path)?
    {
        log::info!("Using project config: {}", path.display());
        return Ok(config);
    }

    match Config::load()? {
        Some(config) => {
            log::info!("Using user config: {}", Config::config_path().display());
            Ok(config)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn write_output(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

fn confirm(question: &str, console: &mut Console<'_>) -> Result<bool> {
    write!(console.prompt, "{question} [y/N] ")?;
    console.prompt.flush()?;

    let mut answer = String::new();
    console.input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn sort_document(
    path: &Path,
    write: bool,
    plan: impl FnOnce(&Document) -> Vec<PlannedEdit>,
) -> Result<Report> {
    let started = Instant::now();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(Report::status_only(Status::NoActiveDocument(format!(
                "{}: {e}",
                path.display()
            ))));
        }
    };
    let mut doc = Document::from_bytes(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let edits = plan(&doc);
    log::debug!("Feedback selections: {:?}", feedback_selections(&edits));

    let outcome = match apply_planned(&mut doc, &edits) {
        Ok(outcome) => outcome,
        Err(e @ EditError::ReplaceFailed { .. }) => {
            return Ok(Report::status_only(Status::ReplaceFailed(e.to_string())));
        }
        Err(e) => return Err(e.into()),
    };

    let status = match outcome {
        SortOutcome::Sorted { changed } => {
            log::info!("Reordered {changed} runs in {}", path.display());
            if write && let Err(e) = std::fs::write(path, doc.to_bytes()) {
                return Ok(Report::status_only(Status::ReplaceFailed(format!(
                    "{}: {e}",
                    path.display()
                ))));
            }
            Status::Sorted {
                elapsed: started.elapsed(),
            }
        }
        SortOutcome::NoChanges => Status::NoChanges,
        SortOutcome::NoSortableContent => Status::NoSortableContent,
    };

    Ok(Report {
        status,
        output: (!write).then(|| doc.text()),
    })
}
