//! cfg 模块 - 配置管理
//!
//! 负责 shift-probe 的配置文件加载、环境变量展开、多格式文档解析以及时间字符串解析

pub mod document;
pub mod env;
pub mod probe_config;
pub mod serde_duration;

pub use document::{load_document, DocumentFormat};
pub use env::expand_env_vars;
pub use probe_config::ProbeConfig;
pub use serde_duration::{format_duration, parse_duration, HumanDur};
