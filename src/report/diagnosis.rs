use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{ScheduleResult, SchedulingConfig, ViolationKind};

/// 排班结果的分配诊断
///
/// 用于回答"为什么班次没有分配到员工"：统计未分配班次、各状态数量、硬/软约束违反数量，
/// 以及请求中存在但没有拿到任何班次的员工
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentDiagnosis {
    pub total_shifts: usize,
    pub unassigned_shifts: Vec<String>,
    pub status_counts: BTreeMap<String, usize>,
    pub hard_violations: usize,
    pub soft_violations: usize,
    /// 仅在提供请求员工名单时计算
    pub idle_employees: Vec<String>,
}

impl AssignmentDiagnosis {
    pub fn from_result(result: &ScheduleResult, roster: Option<&SchedulingConfig>) -> Self {
        let mut diagnosis = AssignmentDiagnosis {
            total_shifts: result.shifts.len(),
            ..Default::default()
        };

        for shift in &result.shifts {
            if shift.is_unassigned() {
                diagnosis.unassigned_shifts.push(shift.id.clone());
            }
            *diagnosis
                .status_counts
                .entry(shift.status.as_str().to_string())
                .or_default() += 1;
        }

        for violation in &result.violations {
            match violation.kind {
                ViolationKind::Hard => diagnosis.hard_violations += 1,
                ViolationKind::Soft => diagnosis.soft_violations += 1,
                ViolationKind::Other(_) => {}
            }
        }

        if let Some(roster) = roster {
            diagnosis.idle_employees = roster
                .employees
                .iter()
                .filter(|e| {
                    !result
                        .shifts
                        .iter()
                        .any(|s| s.assigned_employees.iter().any(|id| id == &e.id))
                })
                .map(|e| e.id.clone())
                .collect();
        }

        diagnosis
    }

    /// 所有班次都没有分配员工
    pub fn nobody_assigned(&self) -> bool {
        self.total_shifts > 0 && self.unassigned_shifts.len() == self.total_shifts
    }
}
