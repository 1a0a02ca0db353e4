use serde::Serialize;
use ts_rs::TS;

use super::{AssessmentType, MarkRecord};

// 上传一次测验的全部成绩
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UploadMarksRequest {
    pub name: String,
    #[serde(rename = "type")]
    #[ts(type = "\"CT\" | \"Lab Quiz\"")]
    pub kind: AssessmentType,
    pub total_marks: f64,
    pub records: Vec<MarkRecord>,
}
