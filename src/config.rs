//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the file named by `TUBE_TUTOR_CONFIG`), then applies the
//! `TUBE_TUTOR_LOG_LEVEL` override. The API key is never part of the
//! config: it is typed into the console at runtime.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;

/// Config file used when `TUBE_TUTOR_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// OpenAI / OpenAI-compatible provider configuration (`[llm.openai]`).
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Per-request HTTP timeout. `None` keeps the transport default.
    pub timeout_seconds: Option<u64>,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (`"openai"`, `"openai-compatible"`, `"dummy"`).
    /// Maps to `default` in `[llm]`.
    pub provider: String,
    pub openai: OpenAiConfig,
}

/// Learning-guide knobs (`[guide]`).
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// How many videos the find prompt asks for.
    pub video_count: usize,
    /// Summary calls in flight at once; `1` means strictly sequential.
    pub summary_concurrency: usize,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub llm: LlmConfig,
    pub guide: GuideConfig,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    app: RawApp,
    #[serde(default)]
    llm: RawLlm,
    #[serde(default)]
    guide: RawGuide,
}

#[derive(Deserialize)]
struct RawApp {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawApp {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), openai: RawOpenAiConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_openai_model")]
    model: String,
    #[serde(default)]
    timeout_seconds: Option<u64>,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            timeout_seconds: None,
        }
    }
}

#[derive(Deserialize)]
struct RawGuide {
    #[serde(default = "default_video_count")]
    video_count: usize,
    #[serde(default = "default_summary_concurrency")]
    summary_concurrency: usize,
}

impl Default for RawGuide {
    fn default() -> Self {
        Self {
            video_count: default_video_count(),
            summary_concurrency: default_summary_concurrency(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_llm_provider() -> String { "openai".to_string() }
fn default_openai_api_base_url() -> String { "https://api.openai.com/v1/chat/completions".to_string() }
fn default_openai_model() -> String { "gpt-4o".to_string() }
fn default_video_count() -> usize { 3 }
fn default_summary_concurrency() -> usize { 1 }

/// Load config from the configured path, then apply env-var overrides.
///
/// A missing default file falls back to built-in defaults; a file named
/// explicitly through `TUBE_TUTOR_CONFIG` must exist.
pub fn load() -> Result<Config, AppError> {
    let log_level_override = env::var("TUBE_TUTOR_LOG_LEVEL").ok();
    match env::var("TUBE_TUTOR_CONFIG") {
        Ok(path) => load_from(&expand_home(&path), log_level_override.as_deref()),
        Err(_) => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_from(path, log_level_override.as_deref())
            } else {
                resolve(RawConfig::default(), log_level_override.as_deref())
            }
        }
    }
}

/// Internal loader — accepts an explicit path and optional override.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_str(&raw, log_level_override).map_err(|e| match e {
        AppError::Config(msg) => AppError::Config(format!("{msg} in {}", path.display())),
        other => other,
    })
}

/// Parse TOML text into a resolved [`Config`].
pub fn parse_str(raw: &str, log_level_override: Option<&str>) -> Result<Config, AppError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| AppError::Config(format!("parse error: {e}")))?;
    resolve(parsed, log_level_override)
}

fn resolve(parsed: RawConfig, log_level_override: Option<&str>) -> Result<Config, AppError> {
    if parsed.guide.video_count == 0 {
        return Err(AppError::Config("guide.video_count must be at least 1".into()));
    }
    if parsed.guide.summary_concurrency == 0 {
        return Err(AppError::Config("guide.summary_concurrency must be at least 1".into()));
    }

    let log_level = log_level_override.unwrap_or(&parsed.app.log_level).to_string();

    Ok(Config {
        log_level,
        llm: LlmConfig {
            provider: parsed.llm.provider,
            openai: OpenAiConfig {
                api_base_url: parsed.llm.openai.api_base_url,
                model: parsed.llm.openai.model,
                timeout_seconds: parsed.llm.openai.timeout_seconds,
            },
        },
        guide: GuideConfig {
            video_count: parsed.guide.video_count,
            summary_concurrency: parsed.guide.summary_concurrency,
        },
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — dummy LLM, no external calls.
#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            log_level: "info".into(),
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    timeout_seconds: Some(1),
                },
            },
            guide: GuideConfig { video_count: 3, summary_concurrency: 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_TOML: &str = r#"
[app]
log_level = "debug"

[llm]
default = "openai"

[llm.openai]
api_base_url = "http://localhost:11434/v1/chat/completions"
model = "llama3"
timeout_seconds = 30

[guide]
video_count = 5
summary_concurrency = 2
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.llm.provider, "openai");
        assert_eq!(cfg.llm.openai.model, "llama3");
        assert_eq!(cfg.llm.openai.timeout_seconds, Some(30));
        assert_eq!(cfg.guide.video_count, 5);
        assert_eq!(cfg.guide.summary_concurrency, 2);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse_str("", None).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.llm.provider, "openai");
        assert_eq!(cfg.llm.openai.model, "gpt-4o");
        assert_eq!(
            cfg.llm.openai.api_base_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(cfg.llm.openai.timeout_seconds, None);
        assert_eq!(cfg.guide.video_count, 3);
        assert_eq!(cfg.guide.summary_concurrency, 1);
    }

    #[test]
    fn log_level_override_wins() {
        let f = write_toml(FULL_TOML);
        let cfg = load_from(f.path(), Some("trace")).unwrap();
        assert_eq!(cfg.log_level, "trace");
    }

    #[test]
    fn zero_video_count_rejected() {
        let err = parse_str("[guide]\nvideo_count = 0\n", None).unwrap_err();
        assert!(err.to_string().contains("video_count"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let err = parse_str("[guide]\nsummary_concurrency = 0\n", None).unwrap_err();
        assert!(err.to_string().contains("summary_concurrency"));
    }

    #[test]
    fn malformed_toml_errors() {
        let err = parse_str("[guide\nvideo_count = ", None).unwrap_err();
        assert!(err.to_string().contains("parse error"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn relative_path_unchanged() {
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }
}
