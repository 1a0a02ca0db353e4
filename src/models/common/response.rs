use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 无数据载荷的操作结果
///
/// 204 或非 JSON 的成功响应会被转换为 `operation_successful()`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct MessageResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub const OPERATION_SUCCESSFUL: &'static str = "Operation successful";

    pub fn operation_successful() -> Self {
        Self {
            success: true,
            message: Self::OPERATION_SUCCESSFUL.to_string(),
        }
    }

    /// 返回服务端消息，为空时使用给定的默认文案
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

fn default_success() -> bool {
    true
}

// 非 2xx 响应体，尽力提取错误信息
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
