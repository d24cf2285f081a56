//! Purpose: `axe-selector` CLI entry point and command dispatch bootstrap.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Commands emit JSON on stdout (pretty when stdout is a terminal).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Logging goes to stderr so stdout stays machine readable.
use std::error::Error as StdError;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod color_json;
mod command_dispatch;

use axe_selector::api::{Error, ErrorKind, FrameLevel, RunContext, Selector, to_exit_code};
use color_json::colorize_json;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "axe-selector",
    version,
    about = "Validate, normalize, and build frame/shadow-aware element selectors",
    propagate_version = true
)]
struct Cli {
    /// Colorize output: auto (TTY only), always, or never.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
    /// Pretty-print JSON output even when stdout is not a terminal.
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a selector is well formed.
    Check {
        #[command(flatten)]
        input: SelectorInput,
    },
    /// Print the canonical compact JSON form of a selector.
    Normalize {
        #[command(flatten)]
        input: SelectorInput,
    },
    /// Describe each frame level of a selector.
    Describe {
        #[command(flatten)]
        input: SelectorInput,
    },
    /// Build a selector from a target and its enclosing iframes.
    Build {
        /// Iframe selector, outermost first. Repeat for nested frames.
        #[arg(long = "frame", value_name = "SELECTOR")]
        frames: Vec<String>,
        /// Selector for the element inside the innermost frame.
        target: String,
    },
    /// Build a run context from include/exclude selectors (JSON).
    Context {
        /// Selector JSON to include. Repeatable.
        #[arg(long, value_name = "JSON")]
        include: Vec<String>,
        /// Selector JSON to exclude. Repeatable.
        #[arg(long, value_name = "JSON")]
        exclude: Vec<String>,
    },
    /// Generate shell completion scripts.
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct SelectorInput {
    /// Selector JSON. Read from --file or stdin when omitted.
    #[arg(value_name = "JSON")]
    selector: Option<String>,
    /// Read selector JSON from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "selector")]
    file: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct OutputOptions {
    color: ColorMode,
    pretty: bool,
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome { exit_code });
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `axe-selector --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let output = OutputOptions {
        color: cli.color,
        pretty: cli.pretty,
    };
    command_dispatch::dispatch_command(cli.command, output).map_err(|err| (err, cli.color))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error: ").to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

fn read_selector_input(input: SelectorInput) -> Result<String, Error> {
    if let Some(text) = input.selector {
        return Ok(text);
    }
    if let Some(path) = input.file {
        return read_file(&path);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("missing selector")
            .with_hint("Pass selector JSON as an argument, use --file, or pipe it on stdin."));
    }
    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to read {}", path.display()))
            .with_source(err)
    })
}

fn describe_json(selector: &Selector) -> Value {
    let levels: Vec<Value> = selector
        .levels()
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let role = if index + 1 == selector.len() {
                "target"
            } else {
                "frame"
            };
            match level {
                FrameLevel::Plain(text) => json!({
                    "kind": "plain",
                    "role": role,
                    "selector": text,
                }),
                FrameLevel::Shadow(steps) => json!({
                    "kind": "shadow",
                    "role": role,
                    "steps": steps,
                }),
            }
        })
        .collect();
    json!({
        "selector": selector.to_value(),
        "depth": selector.len(),
        "nested": selector.is_nested(),
        "levels": levels,
    })
}

fn emit_json(value: Value, output: OutputOptions) {
    let is_tty = io::stdout().is_terminal();
    let use_color = output.color.use_color(is_tty);
    let pretty = output.pretty || is_tty || use_color;
    let json = if pretty {
        colorize_json(&value, use_color)
    } else {
        value.to_string()
    };
    println!("{json}");
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Syntax => "invalid JSON".to_string(),
        ErrorKind::Malformed => "malformed selector".to_string(),
        ErrorKind::InvalidArgument => "invalid argument".to_string(),
        ErrorKind::InvalidContext => "invalid run context".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(reason) = err.reason() {
        inner.insert("reason".to_string(), json!(reason.as_str()));
    }
    if let Some(position) = err.position() {
        inner.insert("at".to_string(), json!(position.to_string()));
    }
    if let Some(found) = err.found() {
        inner.insert("found".to_string(), json!(found.as_str()));
    }
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    let mut headline = format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    );
    if let Some(position) = err.position() {
        headline.push_str(&format!(" (at {position})"));
    }
    if let Some(found) = err.found() {
        headline.push_str(&format!(" (found {found})"));
    }
    lines.push(headline);

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    for cause in error_causes(err) {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}
