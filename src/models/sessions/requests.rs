use serde::Serialize;
use ts_rs::TS;

use super::Student;

// 创建 Session，学生名单可以为空，之后再追加
#[derive(Debug, Clone, Serialize, TS)]
pub struct CreateSessionRequest {
    pub name: String,
    pub students: Vec<Student>,
}

// 追加学生
#[derive(Debug, Clone, Serialize, TS)]
pub struct AddStudentsRequest {
    pub students: Vec<Student>,
}
