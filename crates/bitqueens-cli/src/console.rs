//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors
//! on stderr, so stdout carries nothing but result lines.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "bitqueens_solver=warn",
        1 => "bitqueens_solver=info",
        _ => "bitqueens_solver=debug",
    }
}

/// Prints an error line on stderr.
pub fn error(message: impl Display) {
    let _ = writeln!(io::stderr(), "{} {}", "error:".bright_red().bold(), message);
}

/// Prints per-solve statistics on stderr.
pub fn stats(message: impl Display) {
    let _ = writeln!(io::stderr(), "{} {}", "stats:".bright_cyan(), message);
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only handle bitqueens_solver events
        if !metadata.target().starts_with("bitqueens_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    width: Option<u64>,
    column: Option<u64>,
    center: bool,
    count: Option<String>,
    nodes: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    kernel: Option<String>,
    mask_width: Option<String>,
    count_width: Option<String>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "count" => self.count = Some(s),
            "kernel" => self.kernel = Some(s),
            "mask_width" => self.mask_width = Some(s),
            "count_width" => self.count_width = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "width" => self.width = Some(value),
            "column" => self.column = Some(value),
            "nodes" => self.nodes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "center" {
            self.center = value;
        }
    }
}

fn format_solver_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "start_column" => format_start_column(v),
        "solve_end" => format_solve_end(v),
        "solve_rejected" => format_solve_rejected(level, v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {}-queens started: kernel ({}), mask ({}), count ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.width.unwrap_or(0).to_string().white().bold(),
        v.kernel.as_deref().unwrap_or("?").yellow(),
        v.mask_width.as_deref().unwrap_or("?").yellow(),
        v.count_width.as_deref().unwrap_or("?").yellow()
    )
}

fn format_start_column(v: &EventVisitor) -> String {
    let position = if v.center { " (center)" } else { "" };
    format!(
        "    {} column {:>3}{} | {} solutions",
        "->".bright_blue(),
        v.column.unwrap_or(0),
        position,
        v.count.as_deref().unwrap_or("0").white()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {}-queens ended: solutions ({}), nodes ({}), time spent ({}), search speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.width.unwrap_or(0).to_string().white().bold(),
        v.count.as_deref().unwrap_or("0").bright_green().bold(),
        v.nodes.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.speed
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold()
    )
}

fn format_solve_rejected(level: Level, v: &EventVisitor) -> String {
    format!(
        "{} {} {} width {} rejected: {}",
        timestamp().bright_black(),
        level.to_string().bright_yellow(),
        "[Solver]".bright_cyan(),
        v.width.unwrap_or(0),
        v.error.as_deref().unwrap_or("unknown error")
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
