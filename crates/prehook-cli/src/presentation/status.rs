//! Per-hook status lines and the terminal run-event printer.

use console::{Style, style};
use prehook_core::{HookOutcome, HookResult, RunEvent, RunEventSink, RunReport};

use super::tables::truncate_string;

/// Total width of a status line.
pub const STATUS_WIDTH: usize = 79;

/// `name.....status` padded with dots to `width` characters.
pub fn format_status_line(name: &str, status: &str, width: usize) -> String {
    let status_len = status.chars().count();
    let name = truncate_string(name, width.saturating_sub(status_len + 3));
    let dots = width.saturating_sub(name.chars().count() + status_len).max(3);
    format!("{name}{}{status}", ".".repeat(dots))
}

fn status_text(outcome: &HookOutcome) -> String {
    match outcome {
        HookOutcome::Skipped { reason } => format!("({reason}){}", outcome.label()),
        _ => outcome.label().to_string(),
    }
}

fn status_style(outcome: &HookOutcome) -> Style {
    match outcome {
        HookOutcome::Passed => Style::new().green(),
        HookOutcome::Failed { .. } | HookOutcome::Errored { .. } => Style::new().red(),
        HookOutcome::Skipped { .. } => Style::new().cyan(),
    }
}

/// Print the status line and, for failures, the details and captured output.
pub fn print_result(result: &HookResult) {
    let text = status_text(&result.outcome);
    let line = format_status_line(&result.name, &text, STATUS_WIDTH);
    let (head, _) = line.split_at(line.len() - text.len());
    println!("{head}{}", status_style(&result.outcome).apply_to(&text));

    if !result.outcome.is_failure() {
        return;
    }

    println!("{}", style(format!("- hook id: {}", result.id)).dim());
    match &result.outcome {
        HookOutcome::Failed {
            exit_code: Some(code),
        } if *code != 0 => println!("{}", style(format!("- exit code: {code}")).dim()),
        HookOutcome::Errored { message } => println!("{}", style(format!("- error: {message}")).dim()),
        _ => {}
    }
    if !result.files_modified.is_empty() {
        println!("{}", style("- files were modified by this hook").dim());
    }

    let output = result.output.trim_end();
    if !output.is_empty() {
        println!();
        println!("{output}");
        println!();
    }
}

/// Print the closing line of a text run.
pub fn print_summary(report: &RunReport) {
    let failed = report.failures().count();
    if failed == 0 {
        println!("{}", style(format!("{} hook(s) passed", report.results.len())).green());
    } else {
        println!("{}", style(format!("{failed} hook(s) failed")).red().bold());
    }
}

/// Run-event sink that prints each hook's result as it finishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub const fn new() -> Self {
        Self
    }
}

impl RunEventSink for TerminalEvents {
    fn emit(&self, event: RunEvent) {
        match event {
            RunEvent::HookStarted { .. } => {}
            RunEvent::HookFinished(result) => print_result(&result),
            RunEvent::StoppedEarly { id, remaining } => println!(
                "{}",
                style(format!(
                    "Stopped after `{id}` failed; {remaining} hook(s) not run (fail_fast)"
                ))
                .yellow()
            ),
        }
    }
}
