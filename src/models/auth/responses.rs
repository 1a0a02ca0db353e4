use serde::Deserialize;
use ts_rs::TS;

use super::UserRole;

// 登录响应，token 缺失视为登录失败
#[derive(Debug, Clone, Deserialize, TS)]
pub struct LoginResponse {
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub message: Option<String>,
}
