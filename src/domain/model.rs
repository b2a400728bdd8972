use crate::utils::error::ScaffoldError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const MIN_YEAR_DIGITS: usize = 4;
pub const MAX_DAYS: u8 = 25;
pub const DEFAULT_DATA_DIR: &str = "data";

/// 四位數以上的年份，只能透過驗證建立。以正規化後的十進位字串保存，不設上限
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year(String);

impl Year {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn dir_name(&self) -> String {
        self.0.clone()
    }

    fn from_digits(digits: &str) -> Result<Self, ScaffoldError> {
        let trimmed = digits.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };
        if normalized.len() < MIN_YEAR_DIGITS {
            return Err(ScaffoldError::YearTooShort {
                year: normalized.to_string(),
            });
        }
        Ok(Self(normalized.to_string()))
    }
}

/// Accepts an optional leading `+`; surrounding whitespace is ignored.
impl FromStr for Year {
    type Err = ScaffoldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScaffoldError::InvalidYearFormat {
                value: raw.to_string(),
            });
        }
        Self::from_digits(digits)
    }
}

impl TryFrom<u64> for Year {
    type Error = ScaffoldError;

    fn try_from(year: u64) -> Result<Self, Self::Error> {
        Self::from_digits(&year.to_string())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Day directory name: "01".."09", then "10".."25".
pub fn day_dir_name(day: u8) -> String {
    format!("{:02}", day)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub days: u8,
    pub data_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            days: MAX_DAYS,
            data_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub year: Year,
    pub path: PathBuf,
    pub layout: Layout,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDir {
    pub path: PathBuf,
    pub display: String,
}

/// Every directory a run will create, in creation order.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub year_dir: PathBuf,
    pub dirs: Vec<PlannedDir>,
}

impl ScaffoldPlan {
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationLog {
    entries: Vec<String>,
}

impl CreationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for CreationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub year_dir: PathBuf,
    pub year_dir_exists: bool,
    pub log: CreationLog,
}
