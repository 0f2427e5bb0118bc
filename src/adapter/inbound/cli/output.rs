//! Terminal output formatting.
//!
//! Every line the scheduler prints goes through this module so that JSON
//! mode (for scripting), quiet mode and color settings apply uniformly.
//! Human output uses colored status symbols; JSON mode emits one object per
//! line.

use std::fmt::Display;
use std::io::Write;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress menus, banners and the prompt.
    pub quiet: bool,
    /// Use ANSI colors in human output.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, color: bool) -> Self {
        Self { json, quiet, color }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Menus, banners and the prompt are only for interactive human use.
fn chrome_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from the process arguments.
///
/// Call this early in the entry point, before anything is printed.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }

    if config.color {
        println!("  {} {}", "✓".green(), message);
    } else {
        println!("  ✓ {message}");
    }
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    if config.color {
        println!("  {} {}", "⚠".yellow(), message);
    } else {
        println!("  ⚠ {message}");
    }
}

/// Print an error line.
///
/// Rejected commands are part of the conversation with the user, so they go
/// to stdout next to the menu; JSON mode tags them with `"type": "error"`.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("error", json!({ "message": message }));
        return;
    }

    if config.color {
        println!("  {} {}", "×".red(), message);
    } else {
        println!("  × {message}");
    }
}

/// Print a fatal startup error to stderr.
pub fn fatal(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "fatal",
                "payload": { "message": message },
            })
        );
        return;
    }

    if config.color {
        eprintln!("  {} {}", "×".red(), message);
    } else {
        eprintln!("  × {message}");
    }
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();
    if config.json {
        return;
    }

    println!();
    if config.color {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    if is_json() {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Print a dimmed note.
pub fn note(message: &str) {
    let config = read_config();
    if config.json {
        return;
    }
    if config.color {
        println!("  {}", message.dimmed());
    } else {
        println!("  {message}");
    }
}

/// Print interactive chrome (menus, banners). Suppressed in quiet and JSON
/// mode.
pub fn chrome(content: &str) {
    let config = read_config();
    if chrome_suppressed(config) {
        return;
    }
    for line in content.lines() {
        if config.color && line.starts_with('>') {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}

/// Print the input prompt without a trailing newline.
pub fn prompt(text: &str) {
    let config = read_config();
    if chrome_suppressed(config) {
        return;
    }
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let config = read_config();
    let value = value.to_string();
    if config.json || !config.color {
        return value;
    }
    format!("{}", value.cyan())
}

/// Emit a JSON value directly (for commands that need custom JSON output).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
