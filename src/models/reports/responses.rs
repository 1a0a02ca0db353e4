//! `GET /classes/:id/comprehensive-report` 的原始响应

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::marks::AssessmentType;
use crate::models::sessions::Student;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub attendance_dates: Vec<AttendanceDate>,
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDate {
    pub date: String,
    #[serde(default = "default_weight")]
    pub attendance_weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// 某学生的考勤记录，除 `studentId` 外的键都是日期
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, serde_json::Value>,
}

impl AttendanceRecord {
    /// 某日期的出勤数
    ///
    /// 接受整数或整数字符串；小数向零取整，其他值记为 0，两种情况都记 debug 日志。
    pub fn count_for(&self, date: &str) -> i64 {
        let Some(value) = self.counts.get(date) else {
            return 0;
        };
        if let Some(count) = value.as_i64() {
            return count;
        }
        if let Some(count) = value.as_f64() {
            debug!(
                "Attendance count {} for {} on {} truncated",
                count, self.student_id, date
            );
            return count as i64;
        }
        if let Some(count) = value.as_str().and_then(|s| s.trim().parse::<i64>().ok()) {
            return count;
        }
        debug!(
            "Attendance count {} for {} on {} is not a number, counted as 0",
            value, self.student_id, date
        );
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub total_marks: f64,
    #[serde(default)]
    pub records: Vec<AssessmentMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMark {
    pub student_id: String,
    #[serde(default)]
    pub mark: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_record_pivots_date_keys() {
        let record: AttendanceRecord = serde_json::from_str(
            r#"{"studentId":"S1","2024-03-01":2,"2024-03-02":0,"name":"Alice"}"#,
        )
        .unwrap();
        assert_eq!(record.student_id, "S1");
        assert_eq!(record.count_for("2024-03-01"), 2);
        assert_eq!(record.count_for("2024-03-02"), 0);
        assert_eq!(record.count_for("2024-03-03"), 0);
        assert_eq!(record.count_for("name"), 0);
    }

    #[test]
    fn test_attendance_count_of_loose_values() {
        let record: AttendanceRecord = serde_json::from_str(
            r#"{"studentId":"S1","2024-03-01":"2","2024-03-02":1.7,"2024-03-03":null,"2024-03-04":"two"}"#,
        )
        .unwrap();
        assert_eq!(record.count_for("2024-03-01"), 2);
        assert_eq!(record.count_for("2024-03-02"), 1);
        assert_eq!(record.count_for("2024-03-03"), 0);
        assert_eq!(record.count_for("2024-03-04"), 0);
    }

    #[test]
    fn test_report_tolerates_missing_sections() {
        let report: ComprehensiveReport = serde_json::from_str(r#"{"students":[]}"#).unwrap();
        assert!(report.attendance_dates.is_empty());
        assert!(report.assessments.is_empty());
    }
}
