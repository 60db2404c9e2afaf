use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// 排班服务返回的结果文档
///
/// 缺失字段的处理策略：
/// - `shifts`、`analytics` 必须存在，否则按结构错误处理
/// - `violations`、`analytics.employeeUtilization` 缺失时视为空列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    pub shifts: Vec<GeneratedShift>,
    pub analytics: ScheduleAnalytics,
    #[serde(default)]
    pub violations: Vec<ConstraintViolation>,
}

/// 单个排班结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedShift {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type_id: Option<String>,
    /// 服务返回的原始日期字符串（通常为 ISO 8601）
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub assigned_employees: Vec<String>,
    pub status: ShiftStatus,
}

impl GeneratedShift {
    pub fn is_unassigned(&self) -> bool {
        self.assigned_employees.is_empty()
    }
}

/// 班次状态，未知取值原样保留
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftStatus {
    Confirmed,
    Pending,
    Conflict,
    Other(String),
}

impl ShiftStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::Pending => "pending",
            ShiftStatus::Conflict => "conflict",
            ShiftStatus::Other(s) => s,
        }
    }
}

impl From<String> for ShiftStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "confirmed" => ShiftStatus::Confirmed,
            "pending" => ShiftStatus::Pending,
            "conflict" => ShiftStatus::Conflict,
            _ => ShiftStatus::Other(s),
        }
    }
}

impl From<ShiftStatus> for String {
    fn from(status: ShiftStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 排班统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_coverage_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_satisfaction_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairness_metric: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours_scheduled: Option<f64>,
    #[serde(default)]
    pub employee_utilization: Vec<EmployeeUtilization>,
}

/// 单个员工的工作量统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUtilization {
    pub employee_id: String,
    /// 保留服务返回的数字原貌（`16` 与 `16.0` 输出不同）
    pub total_hours: Number,
    pub shifts_assigned: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_respected: Option<f64>,
}

/// 约束违反记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintViolation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    #[serde(default)]
    pub affected_employees: Vec<String>,
    #[serde(default)]
    pub affected_shifts: Vec<String>,
}

/// 约束类型，hard 为必须满足的约束，soft 为偏好类约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViolationKind {
    Hard,
    Soft,
    Other(String),
}

impl ViolationKind {
    pub fn as_str(&self) -> &str {
        match self {
            ViolationKind::Hard => "hard",
            ViolationKind::Soft => "soft",
            ViolationKind::Other(s) => s,
        }
    }
}

impl From<String> for ViolationKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hard" => ViolationKind::Hard,
            "soft" => ViolationKind::Soft,
            _ => ViolationKind::Other(s),
        }
    }
}

impl From<ViolationKind> for String {
    fn from(kind: ViolationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "shifts": [{
                "id": "shift-1",
                "shiftTypeId": "morning-shift",
                "date": "2024-01-15T00:00:00",
                "startTime": "09:00",
                "endTime": "17:00",
                "assignedEmployees": ["emp1"],
                "status": "confirmed"
            }],
            "analytics": {
                "shiftCoveragePercentage": 100.0,
                "employeeUtilization": [
                    {"employeeId": "emp1", "totalHours": 16.0, "shiftsAssigned": 2}
                ]
            },
            "violations": [
                {"type": "soft", "description": "preference ignored", "severity": 3}
            ]
        })
    }

    #[test]
    fn test_decode_full_document() {
        let result: ScheduleResult = serde_json::from_value(sample()).unwrap();
        assert_eq!(result.shifts.len(), 1);
        assert_eq!(result.shifts[0].status, ShiftStatus::Confirmed);
        assert_eq!(result.shifts[0].shift_type_id.as_deref(), Some("morning-shift"));
        assert_eq!(result.analytics.shift_coverage_percentage, Some(100.0));
        assert_eq!(result.analytics.employee_utilization[0].total_hours.to_string(), "16.0");
        assert_eq!(result.violations[0].kind, ViolationKind::Soft);
        assert_eq!(result.violations[0].severity, Some(3.0));
    }

    #[test]
    fn test_missing_violations_is_empty() {
        let mut doc = sample();
        doc.as_object_mut().unwrap().remove("violations");
        let result: ScheduleResult = serde_json::from_value(doc).unwrap();
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_missing_utilization_is_empty() {
        let mut doc = sample();
        doc["analytics"]
            .as_object_mut()
            .unwrap()
            .remove("employeeUtilization");
        let result: ScheduleResult = serde_json::from_value(doc).unwrap();
        assert!(result.analytics.employee_utilization.is_empty());
    }

    #[test]
    fn test_missing_shifts_is_error() {
        let mut doc = sample();
        doc.as_object_mut().unwrap().remove("shifts");
        let err = serde_json::from_value::<ScheduleResult>(doc).unwrap_err();
        assert!(err.to_string().contains("shifts"));
    }

    #[test]
    fn test_unknown_status_preserved() {
        let status: ShiftStatus = serde_json::from_value(json!("needs-review")).unwrap();
        assert_eq!(status, ShiftStatus::Other("needs-review".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("needs-review"));
    }

    #[test]
    fn test_integer_hours_kept_verbatim() {
        let util: EmployeeUtilization = serde_json::from_value(
            json!({"employeeId": "emp2", "totalHours": 8, "shiftsAssigned": 1}),
        )
        .unwrap();
        assert_eq!(util.total_hours.to_string(), "8");
    }
}
