pub mod args;
pub mod toml_config;

use crate::domain::model::{Layout, RunConfig, Year, MAX_DAYS};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::logger::{default_log_file, LogConfig, DEFAULT_FILE_LEVEL};
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub use args::normalize_keyword_args;

const KEYWORD_HELP: &str = "\
Keyword arguments:
  y:<year>    same as --year <year>
  d:<path>    same as --path <path>

Creates <path>/<year>/01/data through <path>/<year>/25/data.";

#[derive(Debug, Clone, Parser)]
#[command(name = "aoc-new-year")]
#[command(about = "Set up a new year of Advent of Code directories", version)]
#[command(disable_version_flag = true, after_help = KEYWORD_HELP)]
pub struct CliConfig {
    /// 4 digit year [default: current year]
    #[arg(value_name = "YEAR")]
    pub year_arg: Option<String>,

    /// Directory to create the year in [default: .]
    #[arg(value_name = "PATH")]
    pub path_arg: Option<String>,

    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "4 digit year (overrides YEAR)")]
    pub year: Option<String>,

    #[arg(short = 'd', long = "path", value_name = "PATH", help = "Target directory (overrides PATH)")]
    pub path: Option<String>,

    #[arg(short, long, value_name = "FILE", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Append log output to FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Print the directories that would be created and exit")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// clap 指令，`-v` 取代預設的 `-V` 作為版本旗標
    pub fn cli_command() -> clap::Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    /// Parses an argument list that still contains the program name.
    /// Legacy `y:`/`d:` tokens are accepted.
    pub fn try_parse_args<I>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let normalized = normalize_keyword_args(args);
        let matches = Self::cli_command().try_get_matches_from(normalized)?;
        Self::from_arg_matches(&matches)
    }

    pub fn year_input(&self) -> Option<&str> {
        self.year.as_deref().or(self.year_arg.as_deref())
    }

    pub fn path_input(&self) -> Option<&str> {
        self.path.as_deref().or(self.path_arg.as_deref())
    }

    /// 合併命令列與設定檔：命令列 > 設定檔 > 內建預設值
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<RunConfig> {
        let year = match (self.year_input(), file.and_then(|f| f.default_year())) {
            (Some(raw), _) => validation::validate_year(raw)?,
            (None, Some(year)) => Year::try_from(year)?,
            (None, None) => current_year()?,
        };

        let raw_path = self
            .path_input()
            .or_else(|| file.and_then(|f| f.default_path()))
            .unwrap_or(".");
        let path = validation::validate_target_path(raw_path)?;

        let layout = file.map(TomlConfig::layout).unwrap_or_default();

        let config = RunConfig {
            year,
            path,
            layout,
            dry_run: self.dry_run,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn log_config(&self, program: &str, file: Option<&TomlConfig>) -> LogConfig {
        let log_file = self
            .log_file
            .clone()
            .or_else(|| file.and_then(|f| f.log_file()).map(PathBuf::from))
            .unwrap_or_else(|| default_log_file(program));
        let file_level = file
            .and_then(|f| f.log_level())
            .unwrap_or(DEFAULT_FILE_LEVEL)
            .to_string();

        LogConfig {
            file: log_file,
            file_level,
            verbose: self.verbose,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_layout(&self.layout)
    }
}

pub fn validate_layout(layout: &Layout) -> Result<()> {
    validation::validate_range("layout.days", layout.days, 1, MAX_DAYS)?;
    validation::validate_dir_component("layout.data_dir", &layout.data_dir)
}

/// 未指定年份時使用本地時間的當年
pub fn current_year() -> Result<Year> {
    let year = chrono::Local::now().year();
    let year = u64::try_from(year).map_err(|_| ScaffoldError::ConfigError {
        message: format!("system clock reports an invalid year: {}", year),
    })?;
    Year::try_from(year)
}

/// Help and version requests come back from clap as errors but are not failures.
pub fn is_display_request(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayVersion
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

pub fn argument_error(err: &clap::Error) -> ScaffoldError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    ScaffoldError::ArgumentError { message }
}
