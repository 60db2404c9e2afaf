//! 内置调试请求
//!
//! 一名经理、一个早班、两天排班周期的最小请求，用于排查"排班结果中没有分配员工"的问题。
//! 请求在首次使用时构造一次，之后只读。

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::model::{
    AvailabilitySlot, Constraints, Employee, Preferences, RepeatPattern, RequiredRole,
    SchedulingConfig, SchedulingPeriod, ShiftType, WeekendRules,
};

static DEBUG_REQUEST: Lazy<SchedulingConfig> = Lazy::new(build_debug_request);

/// 获取内置调试请求
pub fn debug_request() -> &'static SchedulingConfig {
    &DEBUG_REQUEST
}

fn utc(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hh, mm, ss)
        .single()
        .expect("fixture dates are valid")
}

fn office_hours(day_of_week: u8) -> AvailabilitySlot {
    AvailabilitySlot {
        day_of_week,
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
    }
}

fn build_debug_request() -> SchedulingConfig {
    SchedulingConfig {
        employees: vec![Employee {
            id: "emp1".to_string(),
            name: "John Manager".to_string(),
            role: "Manager".to_string(),
            skills: vec!["Leadership".to_string(), "Customer Service".to_string()],
            max_hours_per_week: 40,
            // 周一、周二
            availability: vec![office_hours(0), office_hours(1)],
            preferences: vec!["Morning shifts".to_string()],
            email: Some("john@example.com".to_string()),
        }],
        shift_types: vec![ShiftType {
            id: "morning-shift".to_string(),
            name: "Morning Shift".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            required_roles: vec![RequiredRole {
                role: "Manager".to_string(),
                count: 1,
            }],
            duration: 8.0,
            is_repeating: true,
            repeat_pattern: RepeatPattern::Daily,
            priority: 5,
        }],
        scheduling_period: SchedulingPeriod {
            start_date: utc(2024, 1, 15, 0, 0, 0),
            end_date: utc(2024, 1, 16, 23, 59, 59),
            days_off: vec![],
            holidays: vec![],
            min_rest_time_between_shifts: 12,
            weekend_rules: WeekendRules {
                rotate_weekends: true,
                avoid_back_to_back: true,
                max_weekends_per_month: 2,
            },
        },
        constraints: Constraints {
            max_hours_per_employee: 40,
            max_shifts_per_day: 1,
            max_night_shifts_per_week: 2,
            min_hours_between_shifts: 12,
            prefer_fixed_teams: false,
            prioritize_fairness: 0.8,
        },
        preferences: Preferences {
            respect_employee_preferences: true,
            minimize_night_shifts: true,
            spread_weekend_shifts_fairly: true,
            minimize_consecutive_night_shifts: true,
            preference_weight: 0.7,
        },
    }
}
