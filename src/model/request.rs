use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// 排班请求文档
///
/// 字段名与排班服务的 JSON 约定一致（camelCase），客户端只负责构造和校验，不解释其中的排班规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingConfig {
    #[garde(length(min = 1), dive)]
    pub employees: Vec<Employee>,

    #[garde(length(min = 1), dive)]
    pub shift_types: Vec<ShiftType>,

    #[garde(dive)]
    pub scheduling_period: SchedulingPeriod,

    #[garde(dive)]
    pub constraints: Constraints,

    #[garde(dive)]
    pub preferences: Preferences,
}

impl SchedulingConfig {
    /// 按 ID 查找员工姓名
    pub fn employee_name(&self, id: &str) -> Option<&str> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(skip)]
    pub name: String,

    #[garde(skip)]
    pub role: String,

    #[serde(default)]
    #[garde(skip)]
    pub skills: Vec<String>,

    #[garde(skip)]
    pub max_hours_per_week: u32,

    #[serde(default)]
    #[garde(dive)]
    pub availability: Vec<AvailabilitySlot>,

    #[serde(default)]
    #[garde(skip)]
    pub preferences: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub email: Option<String>,
}

/// 员工可用时段，dayOfWeek 从周一 (0) 开始
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    #[garde(range(max = 6))]
    pub day_of_week: u8,

    #[garde(skip)]
    pub start_time: String,

    #[garde(skip)]
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    #[garde(length(min = 1))]
    pub id: String,

    #[garde(skip)]
    pub name: String,

    #[garde(skip)]
    pub start_time: String,

    #[garde(skip)]
    pub end_time: String,

    #[serde(default)]
    #[garde(skip)]
    pub required_roles: Vec<RequiredRole>,

    /// 时长（小时）
    #[garde(skip)]
    pub duration: f64,

    #[garde(skip)]
    pub is_repeating: bool,

    #[garde(skip)]
    pub repeat_pattern: RepeatPattern,

    #[garde(skip)]
    pub priority: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredRole {
    pub role: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPattern {
    Daily,
    Weekly,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPeriod {
    #[garde(skip)]
    pub start_date: DateTime<Utc>,

    #[garde(custom(not_before(&self.start_date)))]
    pub end_date: DateTime<Utc>,

    #[serde(default)]
    #[garde(skip)]
    pub days_off: Vec<DateTime<Utc>>,

    #[serde(default)]
    #[garde(skip)]
    pub holidays: Vec<DateTime<Utc>>,

    /// 两个班次之间的最少休息小时数
    #[garde(skip)]
    pub min_rest_time_between_shifts: u32,

    #[garde(skip)]
    pub weekend_rules: WeekendRules,
}

fn not_before(start: &DateTime<Utc>) -> impl FnOnce(&DateTime<Utc>, &()) -> garde::Result + '_ {
    move |end, _| {
        if end < start {
            return Err(garde::Error::new("endDate is before startDate"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendRules {
    pub rotate_weekends: bool,
    pub avoid_back_to_back: bool,
    pub max_weekends_per_month: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[garde(skip)]
    pub max_hours_per_employee: u32,

    #[garde(skip)]
    pub max_shifts_per_day: u32,

    #[garde(skip)]
    pub max_night_shifts_per_week: u32,

    #[garde(skip)]
    pub min_hours_between_shifts: u32,

    #[garde(skip)]
    pub prefer_fixed_teams: bool,

    /// 公平性权重（0.0 - 1.0）
    #[garde(range(min = 0.0, max = 1.0))]
    pub prioritize_fairness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[garde(skip)]
    pub respect_employee_preferences: bool,

    #[garde(skip)]
    pub minimize_night_shifts: bool,

    #[garde(skip)]
    pub spread_weekend_shifts_fairly: bool,

    #[garde(skip)]
    pub minimize_consecutive_night_shifts: bool,

    /// 员工偏好权重（0.0 - 1.0）
    #[garde(range(min = 0.0, max = 1.0))]
    pub preference_weight: f64,
}
