use colored::Colorize;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use crate::suggestion::{Suggestion, SuggestionStats};

/// Verbosity levels for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet = 0,
    /// Normal output (default)
    #[default]
    Normal = 1,
    /// Verbose output with additional info
    Verbose = 2,
    /// Debug output with detailed information
    Debug = 3,
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbosityLevel::Quiet => write!(f, "quiet"),
            VerbosityLevel::Normal => write!(f, "normal"),
            VerbosityLevel::Verbose => write!(f, "verbose"),
            VerbosityLevel::Debug => write!(f, "debug"),
        }
    }
}

impl VerbosityLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(VerbosityLevel::Quiet),
            "normal" => Some(VerbosityLevel::Normal),
            "verbose" => Some(VerbosityLevel::Verbose),
            "debug" => Some(VerbosityLevel::Debug),
            _ => None,
        }
    }
}

/// Where console lines end up. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone)]
enum Sink {
    Terminal,
    File(Arc<Mutex<File>>),
}

#[derive(Debug, Clone)]
pub struct Console {
    verbosity: VerbosityLevel,
    sink: Sink,
}

impl Console {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            sink: Sink::Terminal,
        }
    }

    pub fn with_log_file(verbosity: VerbosityLevel, path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            verbosity,
            sink: Sink::File(Arc::new(Mutex::new(file))),
        })
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    fn should_show(&self, level: VerbosityLevel) -> bool {
        self.verbosity >= level
    }

    fn emit(&self, tag: &str, rendered: String, to_stderr: bool) {
        match &self.sink {
            Sink::Terminal if to_stderr => eprintln!("{}", rendered),
            Sink::Terminal => println!("{}", rendered),
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                    let _ = writeln!(file, "{} [{}] {}", stamp, tag, rendered);
                }
            }
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self.sink, Sink::Terminal)
    }

    pub fn error(&self, message: &str) {
        if self.verbosity > VerbosityLevel::Quiet {
            let rendered = if self.is_terminal() {
                format!("❌ {}", message)
            } else {
                message.to_string()
            };
            self.emit("error", rendered, true);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show(VerbosityLevel::Normal) {
            let rendered = if self.is_terminal() {
                format!("⚠️  {}", message)
            } else {
                message.to_string()
            };
            self.emit("warn", rendered, true);
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show(VerbosityLevel::Normal) {
            let rendered = if self.is_terminal() {
                format!("ℹ️  {}", message)
            } else {
                message.to_string()
            };
            self.emit("info", rendered, false);
        }
    }

    pub fn success(&self, message: &str) {
        if self.should_show(VerbosityLevel::Normal) {
            let rendered = if self.is_terminal() {
                format!("✅ {}", message)
            } else {
                message.to_string()
            };
            self.emit("info", rendered, false);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.should_show(VerbosityLevel::Verbose) {
            self.emit("verbose", message.to_string(), false);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show(VerbosityLevel::Debug) {
            let rendered = if self.is_terminal() {
                format!("🐛 DEBUG: {}", message)
            } else {
                message.to_string()
            };
            self.emit("debug", rendered, true);
        }
    }

    pub fn plain(&self, message: &str) {
        if self.should_show(VerbosityLevel::Normal) {
            self.emit("plain", message.to_string(), false);
        }
    }

    pub fn newline(&self) {
        if self.should_show(VerbosityLevel::Normal) && self.is_terminal() {
            println!();
        }
    }

    pub fn suggestion_row(&self, suggestion: &Suggestion) {
        if !self.should_show(VerbosityLevel::Normal) {
            return;
        }
        let category = suggestion
            .category
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        let last_used = suggestion
            .last_used
            .map(|t| format!("  last used {}", t.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        self.emit(
            "plain",
            format!(
                "{:>6}  {}{}  {}{}",
                suggestion.id.to_string().dimmed(),
                suggestion.text.green(),
                category.cyan(),
                format!("({})", suggestion.frequency).dimmed(),
                last_used.dimmed()
            ),
            false,
        );
    }

    pub fn suggestion_table(&self, suggestions: &[Suggestion]) {
        if suggestions.is_empty() {
            self.info("No suggestions");
            return;
        }
        for suggestion in suggestions {
            self.suggestion_row(suggestion);
        }
        self.verbose(&format!("{} suggestion(s)", suggestions.len()));
    }

    pub fn stats(&self, stats: &SuggestionStats) {
        if self.should_show(VerbosityLevel::Normal) {
            self.emit(
                "plain",
                format!("Total suggestions: {}", stats.total_suggestions.to_string().bold()),
                false,
            );
            self.emit("plain", format!("English words:     {}", stats.english_words), false);
            self.emit("plain", format!("Sample words:      {}", stats.sample_words), false);
        }
    }
}

static GLOBAL_CONSOLE: OnceLock<RwLock<Arc<Console>>> = OnceLock::new();

fn global() -> &'static RwLock<Arc<Console>> {
    GLOBAL_CONSOLE.get_or_init(|| RwLock::new(Arc::new(Console::default())))
}

pub fn init_console(verbosity: VerbosityLevel) {
    install_console(Console::new(verbosity));
}

/// Replaces the process-wide console, e.g. to move logging into a file while
/// the TUI owns the terminal.
pub fn install_console(console: Console) {
    if let Ok(mut slot) = global().write() {
        *slot = Arc::new(console);
    }
}

pub fn console() -> Arc<Console> {
    match global().read() {
        Ok(slot) => Arc::clone(&slot),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(VerbosityLevel::Normal)
    }
}
