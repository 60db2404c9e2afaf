//! report 模块 - 排班结果的输出
//!
//! - 文本调试报告与失败诊断
//! - JSON 输出
//! - 班次 CSV 导出
//! - 分配诊断

pub mod csv;
pub mod diagnosis;
pub mod text;

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::model::ScheduleResult;

pub use self::csv::{format_shift_date, write_csv};
pub use diagnosis::AssignmentDiagnosis;
pub use text::{render_failure, render_text};

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 以格式化 JSON 输出解析后的结果
pub fn render_json(result: &ScheduleResult, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}
