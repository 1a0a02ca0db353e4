use serde::Serialize;
use ts_rs::TS;

// 单个学生的出勤状态：0 表示缺勤，否则等于当天的考勤权重
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: String,
    pub name: String,
    pub status: i64,
}

// 提交某班级某天的考勤
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    pub date: String,
    #[serde(rename = "attdnc")]
    pub attendance_weight: i64,
    pub class_name: String,
    pub session: String,
    pub students: Vec<AttendanceEntry>,
}
