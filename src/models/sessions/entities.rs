use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期/届（与登录会话无关），以名称为唯一键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Session {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub students: Vec<Student>,
}

// 学生，studentId 在同一 Session 内唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub name: String,
}

impl Student {
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
        }
    }

    /// 两个字段去空白后都非空才算有效行
    pub fn is_complete(&self) -> bool {
        !self.student_id.trim().is_empty() && !self.name.trim().is_empty()
    }
}
