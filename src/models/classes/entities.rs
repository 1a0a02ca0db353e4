use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Class {
    // 班级ID（服务端为 `_id`）
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    // 班级名称
    pub name: String,
    // 所属 Session 名称
    pub session: String,
}
