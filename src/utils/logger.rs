use crate::utils::error::{Result, ScaffoldError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const DEFAULT_FILE_LEVEL: &str = "debug";
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file: PathBuf,
    pub file_level: String,
    pub verbose: bool,
}

impl LogConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            file_level: DEFAULT_FILE_LEVEL.to_string(),
            verbose: false,
        }
    }
}

/// 以程式名稱決定日誌檔名，例如 `/usr/bin/aoc-new-year` -> `aoc-new-year.log`
pub fn default_log_file(program: &str) -> PathBuf {
    let stem = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(env!("CARGO_PKG_NAME"));
    PathBuf::from(format!("{}.log", stem))
}

pub fn normalize_level(level: &str) -> Result<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if VALID_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ScaffoldError::InvalidConfigValue {
            field: "logging.level".to_string(),
            value: level.to_string(),
            reason: format!("Level must be one of: {}", VALID_LEVELS.join(", ")),
        })
    }
}

pub fn init_cli_logger(config: &LogConfig) -> Result<()> {
    let file_level = normalize_level(&config.file_level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| ScaffoldError::ConfigError {
            message: format!("cannot open log file '{}': {}", config.file.display(), e),
        })?;

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aoc_new_year={}", file_level)));
    let console_filter = if config.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aoc_new_year=debug"))
    } else {
        EnvFilter::new("aoc_new_year=info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact()
                .with_filter(console_filter),
        )
        .try_init()
        .map_err(|e| ScaffoldError::ConfigError {
            message: format!("failed to initialize logging: {}", e),
        })
}

/// 每次執行在日誌中留下的起始標記
pub fn log_run_banner(program: &str) {
    let now = chrono::Local::now();
    tracing::info!(
        "****** {}: {} ******",
        program,
        now.format(TIMESTAMP_FORMAT)
    );
}
