// 文本报告

use std::io::{self, Write};

use super::diagnosis::AssignmentDiagnosis;
use crate::client::ProbeError;
use crate::model::{ScheduleAnalytics, ScheduleResult, SchedulingConfig};

/// 员工显示名，提供名单时附带姓名: "emp1 (John Manager)"
fn employee_label(id: &str, roster: Option<&SchedulingConfig>) -> String {
    match roster.and_then(|r| r.employee_name(id)) {
        Some(name) => format!("{} ({})", id, name),
        None => id.to_string(),
    }
}

/// 输出排班结果的调试报告
///
/// 先输出班次、员工工作量、约束违反三段，再输出服务提供的汇总指标和分配诊断
pub fn render_text(
    result: &ScheduleResult,
    roster: Option<&SchedulingConfig>,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "=== DEBUGGING ASSIGNMENT ISSUE ===")?;
    writeln!(out, "Total shifts generated: {}", result.shifts.len())?;

    for (i, shift) in result.shifts.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Shift {}:", i + 1)?;
        writeln!(out, "  ID: {}", shift.id)?;
        writeln!(out, "  Date: {}", shift.date)?;
        writeln!(out, "  Time: {} - {}", shift.start_time, shift.end_time)?;
        writeln!(out, "  Assigned employees: {:?}", shift.assigned_employees)?;
        writeln!(out, "  Status: {}", shift.status)?;

        // 姓名单独一行，上面的 ID 列表保持服务返回的原样
        if let Some(roster) = roster {
            if !shift.assigned_employees.is_empty() {
                let names: Vec<&str> = shift
                    .assigned_employees
                    .iter()
                    .map(|id| roster.employee_name(id).unwrap_or(id.as_str()))
                    .collect();
                writeln!(out, "  Assigned names: {:?}", names)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Employee utilization:")?;
    for util in &result.analytics.employee_utilization {
        write!(
            out,
            "  {}: {} shifts, {} hours",
            util.employee_id, util.shifts_assigned, util.total_hours
        )?;
        if let Some(pct) = util.utilization_percentage {
            write!(out, ", {}% utilized", pct.round())?;
        }
        if let Some(pct) = util.preferences_respected {
            write!(out, ", {}% preferences respected", pct.round())?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Constraint violations: {}", result.violations.len())?;
    for violation in &result.violations {
        writeln!(out, "  - {}: {}", violation.kind, violation.description)?;
    }

    render_analytics(&result.analytics, out)?;
    render_diagnosis(&AssignmentDiagnosis::from_result(result, roster), roster, out)
}

fn render_analytics(analytics: &ScheduleAnalytics, out: &mut dyn Write) -> io::Result<()> {
    let metrics = [
        ("Shift coverage", analytics.shift_coverage_percentage, "%"),
        ("Preference score", analytics.preference_satisfaction_score, "%"),
        ("Fairness", analytics.fairness_metric, "%"),
        ("Total hours scheduled", analytics.total_hours_scheduled, ""),
    ];

    if metrics.iter().all(|(_, value, _)| value.is_none()) {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Schedule analytics:")?;
    for (label, value, unit) in metrics {
        if let Some(value) = value {
            writeln!(out, "  {}: {}{}", label, value.round(), unit)?;
        }
    }
    Ok(())
}

fn render_diagnosis(
    diagnosis: &AssignmentDiagnosis,
    roster: Option<&SchedulingConfig>,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Assignment diagnosis:")?;

    if diagnosis.unassigned_shifts.is_empty() {
        writeln!(out, "  Unassigned shifts: 0/{}", diagnosis.total_shifts)?;
    } else {
        writeln!(
            out,
            "  Unassigned shifts: {}/{} ({})",
            diagnosis.unassigned_shifts.len(),
            diagnosis.total_shifts,
            diagnosis.unassigned_shifts.join(", ")
        )?;
    }

    if !diagnosis.status_counts.is_empty() {
        let counts: Vec<String> = diagnosis
            .status_counts
            .iter()
            .map(|(status, n)| format!("{} {}", status, n))
            .collect();
        writeln!(out, "  Shift status: {}", counts.join(", "))?;
    }

    writeln!(
        out,
        "  Hard violations: {}, soft violations: {}",
        diagnosis.hard_violations, diagnosis.soft_violations
    )?;

    if !diagnosis.idle_employees.is_empty() {
        let idle: Vec<String> = diagnosis
            .idle_employees
            .iter()
            .map(|id| employee_label(id, roster))
            .collect();
        writeln!(out, "  Employees without shifts: {}", idle.join(", "))?;
    }

    if diagnosis.nobody_assigned() {
        writeln!(out, "  ⚠️  No employees were assigned to any shift")?;
    }

    Ok(())
}

/// 输出失败诊断信息
///
/// - 非 200 状态：输出状态码和原始响应体
/// - 其他错误：输出错误描述
pub fn render_failure(err: &ProbeError, out: &mut dyn Write) -> io::Result<()> {
    match err {
        ProbeError::Status { code, body } => {
            writeln!(out, "❌ API request failed with status {}", code)?;
            writeln!(out, "Response: {}", body)
        }
        other => writeln!(out, "❌ Error: {}", other),
    }
}
