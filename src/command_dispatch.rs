//! Purpose: Hold top-level CLI command dispatch for `axe-selector`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Every command validates its selectors before emitting anything on stdout.
//! Invariants: Helpers in `main.rs` remain the source of output formatting.

use super::*;

pub(super) fn dispatch_command(command: Command, output: OutputOptions) -> Result<RunOutcome, Error> {
    match command {
        Command::Check { input } => {
            let selector = read_selector(input)?;
            emit_json(json!({ "ok": true, "levels": selector.len() }), output);
            Ok(RunOutcome::ok())
        }
        Command::Normalize { input } => {
            let selector = read_selector(input)?;
            emit_json(selector.to_value(), output);
            Ok(RunOutcome::ok())
        }
        Command::Describe { input } => {
            let selector = read_selector(input)?;
            emit_json(describe_json(&selector), output);
            Ok(RunOutcome::ok())
        }
        Command::Build { frames, target } => {
            let selector = Selector::from_target_and_frames(target, frames)
                .map_err(|err| err.with_hint("Selectors passed to build must not be empty."))?;
            emit_json(selector.to_value(), output);
            Ok(RunOutcome::ok())
        }
        Command::Context { include, exclude } => {
            let mut context = RunContext::new();
            for (index, raw) in include.iter().enumerate() {
                context = context.include(parse_flag_selector("--include", index, raw)?);
            }
            for (index, raw) in exclude.iter().enumerate() {
                context = context.exclude(parse_flag_selector("--exclude", index, raw)?);
            }
            emit_json(context.to_value(), output);
            Ok(RunOutcome::ok())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "axe-selector", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}

fn read_selector(input: SelectorInput) -> Result<Selector, Error> {
    let text = read_selector_input(input)?;
    text.trim().parse::<Selector>()
}

fn parse_flag_selector(flag: &str, index: usize, raw: &str) -> Result<Selector, Error> {
    raw.parse::<Selector>()
        .map_err(|err| err.with_hint(format!("in {flag} #{}", index + 1)))
}
