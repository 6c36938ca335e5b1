//! Terminal output helpers shared by every command.
//!
//! Global flags decide the mode once at startup via [`configure`]:
//!
//! - human: indented lines, optionally colored
//! - `--json`: each helper prints one `{"type": ..., "payload": ...}` line
//! - `--quiet`: only warnings and errors
//!
//! Errors always go to stderr. Everything else goes to stdout.

use std::fmt::Display;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Output mode selected by the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

static MODE: RwLock<OutputConfig> =
    parking_lot::const_rwlock(OutputConfig::new(false, false, 0, false));

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn mode() -> OutputConfig {
    *MODE.read()
}

/// Set the output mode. Call once, before printing anything.
pub fn configure(config: OutputConfig) {
    *MODE.write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn verbosity() -> u8 {
    mode().verbose
}

/// Print one typed JSON line to stdout.
pub fn json_line(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Print a JSON document as-is.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// JSON mode prints `kind`/`payload`; human mode runs `human` unless quiet.
fn emit(kind: &str, payload: Value, human: impl FnOnce()) {
    let mode = mode();
    if mode.json {
        json_line(kind, payload);
    } else if !mode.quiet {
        human();
    }
}

/// `value` in `style`, or plain when colors are off.
pub fn paint(value: impl Display, style: Style) -> String {
    let mode = mode();
    if mode.color && !mode.json {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}

pub fn positive(value: impl Display) -> String {
    paint(value, Style::new().green())
}

pub fn negative(value: impl Display) -> String {
    paint(value, Style::new().red())
}

pub fn highlight(value: impl Display) -> String {
    paint(value, Style::new().cyan())
}

pub fn muted(value: impl Display) -> String {
    paint(value, Style::new().dimmed())
}

pub fn bold(value: impl Display) -> String {
    paint(value, Style::new().bold())
}

/// `wynnxp <version>` banner.
pub fn header(version: &str) {
    emit("header", json!({ "app": "wynnxp", "version": version }), || {
        println!("{} {}", bold("wynnxp"), muted(version));
        println!();
    });
}

/// A `label  value` row with the label padded to a fixed column.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit("field", json!({ "label": label, "value": value }), || {
        println!("  {} {value}", muted(format!("{label:<14}")));
    });
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), || {
        println!();
        println!("{}", bold(title));
    });
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), || {
        println!("  {} {message}", positive("✓"));
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), || {
        println!("  {}", muted(message));
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), || {
        println!("  {}: {}", highlight("hint"), muted(message));
    });
}

/// Printed even with `--quiet`.
pub fn warning(message: &str) {
    if is_json() {
        json_line("warning", json!({ "message": message }));
    } else {
        println!("  {} {message}", paint("⚠", Style::new().yellow()));
    }
}

/// Printed to stderr, even with `--quiet`.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {message}", negative("×"));
    }
}

/// A ticking spinner; hidden in JSON and quiet modes.
pub fn spinner(message: &str) -> ProgressBar {
    let mode = mode();
    if mode.json || mode.quiet {
        let bar = ProgressBar::hidden();
        bar.set_message(message.to_string());
        return bar;
    }

    let template = if mode.color {
        "  {spinner:.cyan} {msg}"
    } else {
        "  {spinner} {msg}"
    };
    let style = ProgressStyle::default_spinner()
        .template(template)
        .map(|style| style.tick_strings(SPINNER_FRAMES))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
