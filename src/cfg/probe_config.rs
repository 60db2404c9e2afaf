// shift-probe 配置加载

use anyhow::{anyhow, Context, Result};
use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::document::DocumentFormat;
use super::env::expand_env_vars;
use super::serde_duration::{serde_as, HumanDur};
use crate::client::{ScheduleClientConfig, DEFAULT_ENDPOINT};
use crate::probe::ProbeOptions;
use crate::report::OutputFormat;

/// shift-probe 配置
///
/// 所有字段都有默认值，不提供配置文件时行为与直接运行完全一致：
/// 请求 `http://localhost:8000/schedule`，不设超时，输出文本报告
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, SmartDefault, Validate, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// 排班服务地址
    #[default(DEFAULT_ENDPOINT.to_string())]
    #[garde(pattern(r"^https?://"))]
    pub endpoint: String,

    /// 请求超时，未设置时一直等待
    #[serde_as(as = "Option<HumanDur>")]
    #[garde(skip)]
    pub timeout: Option<Duration>,

    /// 请求文档路径，未设置时使用内置的调试请求
    #[garde(skip)]
    pub request: Option<PathBuf>,

    /// 输出格式
    #[garde(skip)]
    pub format: OutputFormat,

    /// 是否在每个班次下额外输出员工姓名（ID 列表保持原样）
    #[default = true]
    #[garde(skip)]
    pub roster_names: bool,

    /// 请求失败时以非零状态码退出
    #[garde(skip)]
    pub strict: bool,

    /// 班次 CSV 导出路径
    #[garde(skip)]
    pub csv: Option<PathBuf>,
}

impl ProbeConfig {
    /// 加载配置
    ///
    /// - 显式指定的路径必须存在
    /// - 未指定时读取 `~/.shift-probe/config.yaml`，不存在则使用默认配置
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = match config_path {
            Some(p) => PathBuf::from(shellexpand::tilde(p).to_string()),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        Self::load_from(&path)
    }

    /// 从指定文件加载配置，格式由扩展名决定
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = DocumentFormat::from_path(path)
            .parse(&expand_env_vars(&content))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        // 相对路径以配置文件所在目录为基准
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.request = config.request.map(|p| resolve_path(base, &p));
        config.csv = config.csv.map(|p| resolve_path(base, &p));

        tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "loaded config");
        Ok(config)
    }

    /// 默认配置路径 (~/.shift-probe/config.yaml)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".shift-probe").join("config.yaml"))
    }

    /// 客户端配置
    pub fn client_config(&self) -> ScheduleClientConfig {
        ScheduleClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }

    /// 报告选项
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            format: self.format,
            roster_names: self.roster_names,
            csv: self.csv.clone(),
        }
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
