use serde::Serialize;
use ts_rs::TS;

// 创建班级请求，教师由服务端根据 token 推断
#[derive(Debug, Clone, Serialize, TS)]
pub struct CreateClassRequest {
    pub name: String,
    pub session: String,
}
