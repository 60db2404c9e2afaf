//! shift-probe - 排班服务调试客户端
//!
//! 向本地运行的排班服务发送一个固定的排班请求，并把返回的班次、员工工作量和约束违反情况
//! 输出为便于阅读的报告。排班算法本身由外部服务实现，这里只依赖其请求/响应约定。
//!
//! ## 模块
//!
//! - **cfg**: 配置文件加载、环境变量展开、多格式文档解析
//! - **model**: 排班请求与响应文档
//! - **fixture**: 内置调试请求
//! - **client**: 排班服务 HTTP 客户端
//! - **report**: 文本/JSON 报告、CSV 导出、分配诊断
//! - **probe**: 一次性调试调用

pub mod cfg;
pub mod client;
pub mod fixture;
pub mod model;
pub mod probe;
pub mod report;

pub use cfg::ProbeConfig;
pub use client::{ProbeError, ScheduleClient, ScheduleClientConfig, DEFAULT_ENDPOINT};
pub use model::{ScheduleResult, SchedulingConfig};
pub use probe::{debug_assignment, debug_assignment_with, run_debug, ProbeOptions};
pub use report::OutputFormat;
