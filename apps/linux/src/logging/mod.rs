//! Logging configuration for the DeepThought desktop application
//!
//! Console output plus an optional daily-rolling log file, configured from
//! presets per environment or from a YAML file. Typed passwords never reach
//! the log; callers log lengths only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the logging preset
pub const ENV_VAR: &str = "DEEPTHOUGHT_ENV";

/// Environment variable pointing at a logging YAML file
pub const CONFIG_ENV_VAR: &str = "DEEPTHOUGHT_LOG_CONFIG";

/// YAML configuration structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YamlLoggingConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    #[serde(default)]
    pub retention: RetentionConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub enabled: bool,
    pub level: String,
    pub directory: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    pub max_files: usize,
    pub max_total_size: String,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_total_size: "50MB".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub thread_ids: bool,
    pub source_location: bool,
}

/// How many old log files are kept
#[derive(Debug, Clone, PartialEq)]
pub struct LogRetention {
    /// Maximum number of log files to keep (default: 5)
    pub max_files: usize,
    /// Upper bound on the combined size of kept files in bytes (default: 50MB)
    pub max_total_size: u64,
}

impl Default for LogRetention {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_total_size: 50 * 1024 * 1024,
        }
    }
}

/// Logging configuration for the application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Base name for log files (default: "deepthought")
    pub log_file_name: String,
    /// Log level for console output
    pub console_level: String,
    /// Log level for file output
    pub file_level: String,
    /// Whether to enable console logging
    pub enable_console: bool,
    /// Whether to enable file logging
    pub enable_file: bool,
    /// Log retention
    pub retention: LogRetention,
    /// Whether to include thread IDs in logs
    pub include_thread_ids: bool,
    /// Whether to include source code locations in logs
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: get_default_log_dir(),
            log_file_name: "deepthought".to_string(),
            console_level: "INFO".to_string(),
            file_level: "DEBUG".to_string(),
            enable_console: true,
            enable_file: true,
            retention: LogRetention::default(),
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with custom log directory
    #[allow(dead_code)]
    pub fn new(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            ..Default::default()
        }
    }

    /// Set console log level
    pub fn console_level(mut self, level: &str) -> Self {
        self.console_level = level.to_string();
        self
    }

    /// Development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "TRACE".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Production configuration: quiet console, informative file
    pub fn production() -> Self {
        Self {
            console_level: "WARN".to_string(),
            file_level: "INFO".to_string(),
            retention: LogRetention {
                max_files: 10,
                max_total_size: 100 * 1024 * 1024,
            },
            ..Default::default()
        }
    }

    /// Console only, nothing written to disk
    pub fn console_only() -> Self {
        Self {
            enable_file: false,
            ..Default::default()
        }
    }

    /// Prefix shared by every file the rolling appender creates
    pub fn current_log_file(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.log_file_name))
    }
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: LoggingConfig) -> Result<()> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers = Vec::new();

    if config.enable_console {
        let console_filter =
            EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("INFO"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_writer(std::io::stdout)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("DEBUG"));

        let file_appender = tracing_appender::rolling::daily(
            &config.log_dir,
            format!("{}.log", config.log_file_name),
        );

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "Logging initialized (console: {} at {}, file: {} at {})",
        config.enable_console, config.console_level, config.enable_file, config.file_level
    );
    if config.enable_file {
        info!("Log files written to {:?}.*", config.current_log_file());
        if let Err(e) = cleanup_old_logs(&config) {
            warn!("Log cleanup failed: {}", e);
        }
    }

    Ok(())
}

/// Load logging configuration for `environment` from a YAML file
pub fn load_config_from_file(config_path: &Path, environment: &str) -> Result<LoggingConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read logging config file: {:?}", config_path))?;

    let yaml_configs: HashMap<String, YamlLoggingConfig> = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse logging config file: {:?}", config_path))?;

    let yaml_config = yaml_configs
        .get(environment)
        .or_else(|| yaml_configs.get("default"))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No logging configuration for environment '{}' and no default",
                environment
            )
        })?;

    yaml_to_logging_config(yaml_config)
}

fn yaml_to_logging_config(yaml: &YamlLoggingConfig) -> Result<LoggingConfig> {
    Ok(LoggingConfig {
        log_dir: expand_directory_path(&yaml.file.directory)?,
        log_file_name: yaml.file.filename.clone(),
        console_level: yaml.console.level.clone(),
        file_level: yaml.file.level.clone(),
        enable_console: yaml.console.enabled,
        enable_file: yaml.file.enabled,
        retention: LogRetention {
            max_files: yaml.retention.max_files,
            max_total_size: parse_file_size(&yaml.retention.max_total_size)?,
        },
        include_thread_ids: yaml.features.thread_ids,
        include_source_location: yaml.features.source_location,
    })
}

/// Expand `~/` and `./` prefixes
fn expand_directory_path(path_str: &str) -> Result<PathBuf> {
    if let Some(rest) = path_str.strip_prefix("~/") {
        return Ok(match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path_str),
        });
    }

    if let Some(rest) = path_str.strip_prefix("./") {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        return Ok(cwd.join(rest));
    }

    Ok(PathBuf::from(path_str))
}

/// Parse a size string such as "10MB" or "512KB" into bytes
fn parse_file_size(size_str: &str) -> Result<u64> {
    let size_str = size_str.trim().to_uppercase();

    let (number, multiplier) = if let Some(n) = size_str.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = size_str.strip_suffix('B') {
        (n, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let number: f64 = number
        .trim()
        .parse()
        .with_context(|| format!("Invalid file size: {size_str:?}"))?;

    Ok((number * multiplier as f64) as u64)
}

/// Initialize logging from the environment, an optional YAML file and an
/// optional console level override
pub fn initialize_default_logging(console_level: Option<&str>) -> Result<()> {
    let environment = get_environment();
    let config_path = get_config_file_path();

    let mut config = if config_path.exists() {
        match load_config_from_file(&config_path, &environment) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load logging config: {e:#}. Using defaults.");
                get_default_config_for_environment(&environment)
            }
        }
    } else {
        get_default_config_for_environment(&environment)
    };

    if let Some(level) = console_level {
        config = config.console_level(level);
    }

    initialize_logging(config)
}

/// Get the current environment name
pub fn get_environment() -> String {
    std::env::var(ENV_VAR).unwrap_or_else(|_| {
        if is_development_environment() {
            "development".to_string()
        } else {
            "production".to_string()
        }
    })
}

/// Path of the logging YAML file
pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(config_path);
    }

    let mut candidates = vec![PathBuf::from("./config/logging.yaml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("deepthought/logging.yaml"));
    }

    candidates
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("./config/logging.yaml"))
}

fn get_default_config_for_environment(environment: &str) -> LoggingConfig {
    match environment {
        "development" | "dev" => LoggingConfig::development(),
        "production" | "prod" => LoggingConfig::production(),
        "testing" | "test" => LoggingConfig {
            console_level: "DEBUG".to_string(),
            file_level: "DEBUG".to_string(),
            log_dir: PathBuf::from("./target/test-logs"),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        },
        "console" => LoggingConfig::console_only(),
        _ => LoggingConfig::default(),
    }
}

/// Default log directory under the user cache directory
pub fn get_default_log_dir() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache_dir) => cache_dir.join("deepthought").join("logs"),
        None => std::env::temp_dir().join("deepthought").join("logs"),
    }
}

/// Whether we are running a development build
pub fn is_development_environment() -> bool {
    std::env::var(ENV_VAR).unwrap_or_default() == "development" || cfg!(debug_assertions)
}

/// Remove log files beyond the retention limits, oldest first
pub fn cleanup_old_logs(config: &LoggingConfig) -> Result<()> {
    if !config.enable_file || !config.log_dir.exists() {
        return Ok(());
    }

    let mut log_files = Vec::new();
    for entry in fs::read_dir(&config.log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |name| {
                name.starts_with(&config.log_file_name) && name.contains(".log")
            });

        if is_ours {
            let metadata = entry.metadata()?;
            let modified = metadata.modified().unwrap_or(std::time::UNIX_EPOCH);
            log_files.push((path, modified, metadata.len()));
        }
    }

    // Newest first
    log_files.sort_by_key(|(_, modified, _)| std::cmp::Reverse(*modified));

    // The newest file is the one the appender writes to today; it is never removed
    let mut kept_size = 0u64;
    for (index, (path, _, len)) in log_files.into_iter().enumerate() {
        kept_size += len;
        if index == 0
            || (index < config.retention.max_files
                && kept_size <= config.retention.max_total_size)
        {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => info!("Removed old log file: {:?}", path),
            Err(e) => warn!("Failed to remove old log file {:?}: {}", path, e),
        }
    }

    Ok(())
}
