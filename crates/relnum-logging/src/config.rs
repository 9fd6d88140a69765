// ABOUTME: Logging settings read from RELNUM_LOG* and RUST_LOG
// ABOUTME: A base level, per-target levels, the console format, and an optional log file

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

/// How events are written to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    Off,
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Everything `init_subscriber` needs to build the global subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for targets without their own entry
    pub level: Level,

    /// Per-target levels, e.g. `relnum_core=trace`
    pub targets: Vec<(String, Level)>,

    pub console: ConsoleFormat,

    /// Daily-rotated log file, when file output is on
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            targets: Vec::new(),
            console: ConsoleFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// `RELNUM_LOG` takes a single level and wins over `RUST_LOG`, which takes
    /// comma-separated directives. `RELNUM_LOG_FILE` may name the file; an
    /// empty value means the default location.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = lookup("RELNUM_LOG") {
            config.level = parse_log_level(&level).context("Invalid RELNUM_LOG level")?;
        } else if let Some(directives) = lookup("RUST_LOG") {
            config
                .apply_directives(&directives)
                .context("Invalid RUST_LOG")?;
        }

        if lookup("RELNUM_LOG_PRETTY").is_some() {
            config.console = ConsoleFormat::Pretty;
        }
        if lookup("RELNUM_LOG_JSON").is_some() {
            config.console = ConsoleFormat::Json;
        }
        if lookup("RELNUM_LOG_NO_CONSOLE").is_some() {
            config.console = ConsoleFormat::Off;
        }

        if let Some(path) = lookup("RELNUM_LOG_FILE") {
            config.file = Some(if path.trim().is_empty() {
                default_log_file_path()
            } else {
                PathBuf::from(path)
            });
        }
        if lookup("RELNUM_LOG_NO_FILE").is_some() {
            config.file = None;
        }

        Ok(config)
    }

    /// Apply `RUST_LOG` style directives such as `info,relnum_core=trace`.
    fn apply_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',').map(str::trim) {
            if directive.is_empty() {
                continue;
            }

            match directive.split_once('=') {
                Some((target, level)) => {
                    let level = parse_log_level(level)
                        .with_context(|| format!("Bad level for target '{target}'"))?;
                    self.targets.retain(|(t, _)| t != target);
                    self.targets.push((target.to_string(), level));
                }
                None => self.level = parse_log_level(directive)?,
            }
        }
        Ok(())
    }

    /// The level and target overrides as an `EnvFilter` directive string
    pub fn filter_directives(&self) -> String {
        let mut directives = level_name(self.level);
        for (target, level) in &self.targets {
            directives.push_str(&format!(",{target}={}", level_name(*level)));
        }
        directives
    }
}

fn level_name(level: Level) -> String {
    level.as_str().to_ascii_lowercase()
}

/// `<config dir>/relnum/relnum.log`, or `relnum.log` when there is no config dir
fn default_log_file_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("relnum").join("relnum.log"))
        .unwrap_or_else(|| PathBuf::from("relnum.log"))
}

/// Parse a level name, ignoring case and surrounding whitespace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Unknown log level '{level}', expected trace, debug, info, warn or error"
        ),
    }
}
