// 班次 CSV 导出

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::{self, Write};

use crate::model::ScheduleResult;

const HEADER: [&str; 6] = [
    "Date",
    "Shift Type",
    "Start Time",
    "End Time",
    "Assigned Employees",
    "Status",
];

/// 将服务返回的日期规整为 YYYY-MM-DD，无法解析时原样输出
pub fn format_shift_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<S: AsRef<str>>(out: &mut dyn Write, fields: &[S]) -> io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f.as_ref())).collect();
    writeln!(out, "{}", line.join(","))
}

/// 导出班次列表，每个班次一行，员工 ID 以 `;` 分隔
pub fn write_csv(result: &ScheduleResult, out: &mut dyn Write) -> io::Result<()> {
    write_row(out, &HEADER)?;
    for shift in &result.shifts {
        write_row(
            out,
            &[
                format_shift_date(&shift.date),
                shift.shift_type_id.clone().unwrap_or_default(),
                shift.start_time.clone(),
                shift.end_time.clone(),
                shift.assigned_employees.join(";"),
                shift.status.to_string(),
            ],
        )?;
    }
    Ok(())
}
