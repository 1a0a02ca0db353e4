//! 报表透视
//!
//! 把 `comprehensive-report` 的原始数据整理成考勤表和两张成绩表。
//! 纯函数，不做网络请求，输出只依赖输入顺序。

pub mod export;

use std::collections::HashMap;

use crate::models::marks::AssessmentType;
use crate::models::reports::{
    Assessment, AttendanceColumn, AttendanceRecord, AttendanceRow, AttendanceTable,
    ComprehensiveReport, MarkCell, MarkColumn, MarkRow, MarksTable, ReportView,
};

pub use export::{attendance_csv, marks_csv};

pub fn aggregate(report: &ComprehensiveReport) -> ReportView {
    ReportView {
        attendance: attendance_table(report),
        class_tests: marks_table(report, AssessmentType::ClassTest),
        lab_quizzes: marks_table(report, AssessmentType::LabQuiz),
    }
}

/// 出勤率，保留两位小数；没有任何可出勤次数时为 0
pub fn percentage(total: i64, total_possible: i64) -> f64 {
    if total_possible <= 0 {
        return 0.0;
    }
    let raw = total as f64 / total_possible as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

fn attendance_table(report: &ComprehensiveReport) -> AttendanceTable {
    let columns: Vec<AttendanceColumn> = report
        .attendance_dates
        .iter()
        .map(|d| AttendanceColumn {
            date: d.date.clone(),
            attendance_weight: d.attendance_weight,
        })
        .collect();
    let total_possible: i64 = columns.iter().map(|c| c.attendance_weight).sum();

    // 同一学生多条记录时取第一条
    let mut records: HashMap<&str, &AttendanceRecord> = HashMap::new();
    for record in &report.attendance_records {
        records.entry(record.student_id.as_str()).or_insert(record);
    }

    let rows = report
        .students
        .iter()
        .map(|student| {
            let record = records.get(student.student_id.as_str());
            let cells: Vec<i64> = columns
                .iter()
                .map(|c| record.map(|r| r.count_for(&c.date)).unwrap_or(0))
                .collect();
            let total = cells.iter().sum();
            AttendanceRow {
                student_id: student.student_id.clone(),
                name: student.name.clone(),
                cells,
                total,
                percentage: percentage(total, total_possible),
            }
        })
        .collect();

    AttendanceTable {
        columns,
        total_possible,
        rows,
    }
}

fn marks_table(report: &ComprehensiveReport, kind: AssessmentType) -> MarksTable {
    let assessments: Vec<&Assessment> = report
        .assessments
        .iter()
        .filter(|a| a.kind == kind)
        .collect();

    let marks: Vec<HashMap<&str, Option<f64>>> = assessments
        .iter()
        .map(|assessment| {
            let mut by_student = HashMap::new();
            for record in &assessment.records {
                by_student
                    .entry(record.student_id.as_str())
                    .or_insert(record.mark);
            }
            by_student
        })
        .collect();

    let rows = report
        .students
        .iter()
        .map(|student| MarkRow {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            cells: marks
                .iter()
                .map(|by_student| match by_student.get(student.student_id.as_str()) {
                    Some(Some(mark)) => MarkCell::Mark(*mark),
                    _ => MarkCell::NotApplicable,
                })
                .collect(),
        })
        .collect();

    MarksTable {
        kind,
        columns: assessments
            .iter()
            .map(|a| MarkColumn {
                name: a.name.clone(),
                total_marks: a.total_marks,
            })
            .collect(),
        rows,
    }
}
