use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师账号（管理员视图）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_approved: Option<bool>,
}

impl Teacher {
    pub fn status_label(&self) -> &'static str {
        match self.is_approved {
            Some(true) => "approved",
            Some(false) => "pending",
            None => "-",
        }
    }
}
