//! Command implementations for the CLI interface.
//!
//! This module contains the subcommand definitions and the handlers that
//! drive the task store, plus the table renderer. The handlers are the only
//! place where errors are printed and where the user is prompted; the store
//! itself never talks to the terminal.

use std::io::{self, Write};

use chrono::{Duration, Local, NaiveDate};
use clap::Subcommand;
use colored::Colorize;

use crate::error::Error;
use crate::fields::{Priority, StatusFilter};
use crate::filter::{compute_visible, is_upcoming, pending_count, CategoryFilter};
use crate::persist::{self, KvStore};
use crate::store::TaskStore;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task text.
        text: String,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
        #[arg(long)]
        due: Option<String>,
        /// Category label, free-form.
        #[arg(long, default_value = "general")]
        category: String,
        /// Priority: low | medium | high.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// List tasks with optional filters.
    List {
        /// Filter by completion state.
        #[arg(long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        /// Filter by exact category. Omit to show all categories.
        #[arg(long)]
        category: Option<String>,
    },

    /// Replace the text of a task.
    Edit {
        /// Task id to edit.
        id: u64,
        /// Replacement text.
        text: String,
    },

    /// Toggle a task between pending and completed.
    Toggle {
        /// Task id to toggle.
        id: u64,
    },

    /// Delete a task by id.
    Rm {
        /// Task id to delete.
        id: u64,
    },

    /// Delete every completed task.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Toggle dark-mode colours for list output.
    Theme,
}

/// Add a new task and show the updated list.
pub fn cmd_add<S: KvStore>(
    store: &mut TaskStore<S>,
    text: &str,
    due: Option<&str>,
    category: &str,
    priority: Priority,
    dark: bool,
) {
    let due = match due {
        Some(raw) => match parse_due_input(raw) {
            Some(date) => Some(date),
            None => {
                eprintln!("Unrecognised due date '{raw}'. Use YYYY-MM-DD, \"today\", \"tomorrow\" or \"in Nd\".");
                std::process::exit(1);
            }
        },
        None => None,
    };

    match store.add(text, due, category, priority) {
        Ok(task) => println!("Added task #{}", task.id),
        Err(e) => fail(e),
    }
    render_all(store, dark);
}

/// List tasks through the status and category filters.
pub fn cmd_list<S: KvStore>(
    store: &TaskStore<S>,
    status: StatusFilter,
    category: Option<String>,
    dark: bool,
) {
    let category = CategoryFilter::from(category);
    let visible = compute_visible(store.all(), status, &category);
    print_table(&visible, pending_count(store.all()), dark);
}

/// Replace a task's text and show the updated list.
pub fn cmd_edit<S: KvStore>(store: &mut TaskStore<S>, id: u64, text: &str, dark: bool) {
    match store.edit(id, text) {
        Ok(task) => println!("Updated task #{}", task.id),
        Err(e) => fail(e),
    }
    render_all(store, dark);
}

/// Flip a task's completion state and show the updated list.
pub fn cmd_toggle<S: KvStore>(store: &mut TaskStore<S>, id: u64, dark: bool) {
    match store.toggle(id) {
        Ok(task) => {
            let state = if task.completed { "completed" } else { "pending" };
            println!("Task #{} is now {state}", task.id);
        }
        Err(e) => fail(e),
    }
    render_all(store, dark);
}

/// Delete a task and show the updated list.
pub fn cmd_rm<S: KvStore>(store: &mut TaskStore<S>, id: u64, dark: bool) {
    match store.remove(id) {
        Ok(()) => println!("Deleted task #{id}"),
        Err(e) => fail(e),
    }
    render_all(store, dark);
}

/// Delete all completed tasks after confirmation.
pub fn cmd_clear<S: KvStore>(store: &mut TaskStore<S>, yes: bool, dark: bool) {
    if !yes && !confirm("Delete all completed tasks? (y/N): ") {
        println!("Clear cancelled.");
        return;
    }
    match store.clear_completed() {
        Ok(n) => println!("Removed {n} completed task(s)"),
        Err(e) => fail(e),
    }
    render_all(store, dark);
}

/// Toggle the persisted dark-mode display preference.
pub fn cmd_theme<S: KvStore>(kv: &mut S) {
    let on = !persist::load_dark_mode(kv);
    match persist::save_dark_mode(kv, on) {
        Ok(()) => println!("Dark mode {}", if on { "on" } else { "off" }),
        Err(e) => eprintln!("Warning: could not save display preference: {e}"),
    }
}

/// Report a store error. A persistence failure means the change was applied
/// in memory but not saved, so it is surfaced as a warning and the handler
/// falls through to render; everything else exits the command.
fn fail(err: Error) {
    match err {
        Error::Persistence(e) => eprintln!("Warning: change applied but not saved: {e}"),
        other => {
            eprintln!("{other}");
            std::process::exit(1);
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut response = String::new();
    io::stdin().read_line(&mut response).is_ok()
        && response.trim().to_lowercase().starts_with('y')
}

fn render_all<S: KvStore>(store: &TaskStore<S>, dark: bool) {
    let visible = compute_visible(store.all(), StatusFilter::All, &CategoryFilter::All);
    print_table(&visible, pending_count(store.all()), dark);
}

/// Print tasks in a formatted table with a pending-count footer.
pub fn print_table(tasks: &[&Task], pending: usize, dark: bool) {
    println!(
        "{:<5} {:<4} {:<7} {:<11} {:<12} {}",
        "ID", "", "Pri", "Due", "Category", "Text"
    );
    let today = Local::now().date_naive();
    for t in tasks {
        let upcoming = !t.completed && is_upcoming(t, today);
        let mark = if t.completed { "[x]" } else { "[ ]" };
        let cue = if upcoming { " (upcoming)" } else { "" };
        let line = format!(
            "{:<5} {:<4} {:<7} {:<11} {:<12} {}{}",
            t.id,
            mark,
            format_priority(t.priority),
            format_due_relative(t.due, today),
            truncate(&t.category, 12),
            sanitize_cell(&t.text),
            cue
        );
        if dark {
            println!("{}", style_row(t, upcoming, line));
        } else {
            println!("{line}");
        }
    }
    println!("\n{pending} pending");
}

fn style_row(task: &Task, upcoming: bool, line: String) -> String {
    if task.completed {
        line.dimmed().to_string()
    } else if upcoming {
        line.yellow().to_string()
    } else if task.priority == Priority::High {
        line.red().to_string()
    } else {
        line
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {days}d")
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Parse due date input: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Collapse control characters so a task's text cannot break the table.
/// The stored text itself is never altered.
fn sanitize_cell(s: &str) -> String {
    s.replace(['\n', '\r', '\t'], " ")
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
