//! model 模块 - 排班服务的请求与响应文档

pub mod request;
pub mod response;

pub use request::{
    AvailabilitySlot, Constraints, Employee, Preferences, RepeatPattern, RequiredRole,
    SchedulingConfig, SchedulingPeriod, ShiftType, WeekendRules,
};
pub use response::{
    ConstraintViolation, EmployeeUtilization, GeneratedShift, ScheduleAnalytics, ScheduleResult,
    ShiftStatus, ViolationKind,
};
