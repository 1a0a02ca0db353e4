//! 报表视图模型（透视后的表格结构）

use serde::Serialize;

use crate::models::marks::AssessmentType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub attendance: AttendanceTable,
    pub class_tests: MarksTable,
    pub lab_quizzes: MarksTable,
}

/// 考勤表：每个日期一列，外加 Total 与 Percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTable {
    pub columns: Vec<AttendanceColumn>,
    pub total_possible: i64,
    pub rows: Vec<AttendanceRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceColumn {
    pub date: String,
    pub attendance_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow {
    pub student_id: String,
    pub name: String,
    pub cells: Vec<i64>,
    pub total: i64,
    pub percentage: f64,
}

/// 成绩表：每个同类型测验一列
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksTable {
    pub kind: AssessmentType,
    pub columns: Vec<MarkColumn>,
    pub rows: Vec<MarkRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkColumn {
    pub name: String,
    pub total_marks: f64,
}

impl MarkColumn {
    /// 表头：`名称 (满分)`
    pub fn header(&self) -> String {
        format!("{} ({})", self.name, format_number(self.total_marks))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkRow {
    pub student_id: String,
    pub name: String,
    pub cells: Vec<MarkCell>,
}

/// 成绩单元格，`NotApplicable` 与 0 分不同
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkCell {
    Mark(f64),
    NotApplicable,
}

impl MarkCell {
    pub const NOT_APPLICABLE: &'static str = "N/A";

    pub fn display(&self) -> String {
        match self {
            MarkCell::Mark(mark) => format_number(*mark),
            MarkCell::NotApplicable => Self::NOT_APPLICABLE.to_string(),
        }
    }
}

impl Serialize for MarkCell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            MarkCell::Mark(mark) => serializer.serialize_f64(*mark),
            MarkCell::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE),
        }
    }
}

/// 整数不带小数点，其余保留原样
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
