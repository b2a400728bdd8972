use crate::domain::model::{Layout, Year, MAX_DAYS};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::logger::normalize_level;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub defaults: Option<DefaultsConfig>,
    pub layout: Option<LayoutConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    pub year: Option<u64>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutConfig {
    pub days: Option<u8>,
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigError {
            message: format!("cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScaffoldError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScaffoldError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(year) = self.default_year() {
            Year::try_from(year)?;
        }

        if let Some(path) = self.default_path() {
            validation::validate_path("defaults.path", path)?;
        }

        if let Some(layout) = &self.layout {
            if let Some(days) = layout.days {
                validation::validate_range("layout.days", days, 1, MAX_DAYS)?;
            }
            if let Some(data_dir) = &layout.data_dir {
                validation::validate_dir_component("layout.data_dir", data_dir)?;
            }
        }

        if let Some(file) = self.log_file() {
            validation::validate_path("logging.file", file)?;
        }
        if let Some(level) = self.log_level() {
            normalize_level(level)?;
        }

        Ok(())
    }

    pub fn default_year(&self) -> Option<u64> {
        self.defaults.as_ref().and_then(|d| d.year)
    }

    pub fn default_path(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.path.as_deref())
    }

    /// 未設定的欄位使用預設版面（25 天、`data` 子目錄）
    pub fn layout(&self) -> Layout {
        let defaults = Layout::default();
        match &self.layout {
            Some(layout) => Layout {
                days: layout.days.unwrap_or(defaults.days),
                data_dir: layout.data_dir.clone().unwrap_or(defaults.data_dir),
            },
            None => defaults,
        }
    }

    pub fn log_file(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.file.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
