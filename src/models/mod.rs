//! 数据模型定义
//!
//! 所有请求/响应结构都与远端 API 的 JSON 形状一一对应，
//! 在边界处完成反序列化校验，使用处不再猜测字段。

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod marks;
pub mod reports;
pub mod sessions;
pub mod teachers;

pub use common::{ErrorBody, MessageResponse};
