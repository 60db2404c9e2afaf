//! 一次性调试调用
//!
//! 发送排班请求并把结果（或失败诊断）写到输出，调用方根据返回值决定如何退出

use smart_default::SmartDefault;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::client::{ProbeError, ScheduleClient, ScheduleClientConfig};
use crate::fixture::debug_request;
use crate::model::{ScheduleResult, SchedulingConfig};
use crate::report::{render_failure, render_json, render_text, write_csv, OutputFormat};

/// 报告选项
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct ProbeOptions {
    pub format: OutputFormat,
    /// 在每个班次下额外输出员工姓名，ID 列表不变
    #[default = true]
    pub roster_names: bool,
    /// 班次 CSV 导出路径
    pub csv: Option<PathBuf>,
}

/// 发送请求并输出报告
///
/// 成功时按 `options.format` 输出结果并返回解析后的文档；
/// 失败时输出诊断信息（状态码和响应体，或错误描述），并把错误返回给调用方。
/// CSV 导出失败同样输出诊断并返回错误，此时报告已经输出
pub fn run_debug(
    client: &ScheduleClient,
    request: &SchedulingConfig,
    options: &ProbeOptions,
    out: &mut dyn Write,
) -> Result<ScheduleResult, ProbeError> {
    let result = match client.submit(request) {
        Ok(result) => result,
        Err(err) => {
            report_failure(&err, out);
            return Err(err);
        }
    };

    match options.format {
        OutputFormat::Text => {
            let roster = options.roster_names.then_some(request);
            render_text(&result, roster, out)?;
        }
        OutputFormat::Json => render_json(&result, out)?,
    }

    if let Some(path) = &options.csv {
        if let Err(err) = export_csv(&result, path) {
            report_failure(&err, out);
            return Err(err);
        }
        tracing::info!(path = %path.display(), shifts = result.shifts.len(), "exported shifts to csv");
    }

    Ok(result)
}

fn export_csv(result: &ScheduleResult, path: &Path) -> Result<(), ProbeError> {
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_csv(result, &mut writer)?;
        writer.flush()
    };
    write().map_err(|source| ProbeError::Export {
        path: path.to_path_buf(),
        source,
    })
}

/// 诊断输出失败时只记录日志，调用方拿到的仍是原始错误
fn report_failure(err: &ProbeError, out: &mut dyn Write) {
    if let Err(write_err) = render_failure(err, out) {
        tracing::warn!(error = %err, write_error = %write_err, "failed to print diagnostic");
    }
}

/// 使用默认地址和内置调试请求执行一次调用，结果输出到标准输出
///
/// 任何失败都只打印诊断信息并返回 None
pub fn debug_assignment() -> Option<ScheduleResult> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    debug_assignment_with(ScheduleClientConfig::default(), &mut out)
}

/// 同 [`debug_assignment`]，可指定服务地址和输出
pub fn debug_assignment_with(
    config: ScheduleClientConfig,
    out: &mut dyn Write,
) -> Option<ScheduleResult> {
    let client = match ScheduleClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            report_failure(&err, out);
            return None;
        }
    };

    run_debug(&client, debug_request(), &ProbeOptions::default(), out).ok()
}
