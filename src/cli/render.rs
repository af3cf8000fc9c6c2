//! Terminal rendering helpers: step headers, task cards, detail panes.

use chrono::{DateTime, NaiveDateTime};
use colored::{ColoredString, Colorize};

use crate::cli::interaction::StepContext;
use crate::plan::task::PersistedTask;
use crate::views::detail::TaskDetailView;

const PROGRESS_BAR_WIDTH: usize = 24;

/// Colored badge weighted by the level label.
pub fn importance_badge(level: &str) -> ColoredString {
    match level {
        "High" => level.red().bold(),
        "Medium" => level.yellow(),
        "Low" => level.green(),
        other => other.normal(),
    }
}

pub fn urgency_badge(level: &str) -> ColoredString {
    match level {
        "Urgent" => level.red().bold(),
        "Soon" => level.yellow(),
        "Not urgent" => level.blue(),
        other => other.normal(),
    }
}

pub fn print_step_header(context: &StepContext) {
    let bar_filled = PROGRESS_BAR_WIDTH * usize::from(context.progress) / 100;
    let bar = format!(
        "[{}{}] {}%",
        "#".repeat(bar_filled),
        "-".repeat(PROGRESS_BAR_WIDTH - bar_filled),
        context.progress
    );
    println!();
    println!(
        "{}  {}",
        format!("Step {} of {}", context.index + 1, context.total).bold(),
        bar.dimmed()
    );
    println!("{}", context.step.title.bold());
    println!("{}", context.step.subtitle.dimmed());
}

pub fn print_field_error(message: &str) {
    println!("{}", message.red());
}

pub fn print_root_error(message: &str) {
    println!("{} {}", "Could not save:".red().bold(), message.red());
}

pub fn print_hint(message: &str) {
    println!("{}", message.dimmed());
}

pub fn print_summary(summary: &[(String, String)]) {
    println!("{}", "Summary".bold());
    for (label, value) in summary {
        println!("  {}: {}", label.dimmed(), value);
    }
}

/// Best-effort timestamp display; unparseable values pass through raw.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

pub fn print_task_card(position: usize, task: &PersistedTask) {
    println!(
        "{} {}  [{} / {}]",
        format!("{position}.").dimmed(),
        task.task.bold(),
        importance_badge(&task.importance),
        urgency_badge(&task.urgency)
    );
    println!("   {}", task.main_goal);
    if let Some(created_at) = &task.created_at {
        println!("   {}", format_created_at(created_at).dimmed());
    }
}

pub fn print_detail(view: &TaskDetailView) {
    let task = view.task();
    println!();
    println!("{}", task.task.bold());
    println!("{}", "Main goal".dimmed());
    println!("  {}", task.main_goal);
    println!("{}", "Minor goals".dimmed());
    for line in view.minor_goal_lines() {
        if !line.is_empty() {
            println!("  • {line}");
        }
    }
    println!(
        "{}: {}   {}: {}",
        "Importance".dimmed(),
        importance_badge(&task.importance),
        "Urgency".dimmed(),
        urgency_badge(&task.urgency)
    );
    if let Some(created_at) = &task.created_at {
        println!("{}: {}", "Created".dimmed(), format_created_at(created_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_when_parseable() {
        assert_eq!(
            format_created_at("2024-05-01T10:30:00Z"),
            "2024-05-01 10:30"
        );
        assert_eq!(
            format_created_at("2024-05-01T10:30:00.123456"),
            "2024-05-01 10:30"
        );
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
