//! 本地持久化存储
//!
//! 相当于浏览器的 localStorage，只保存 `authToken` 与 `userRole`。
//! 以 trait 注入，测试中可替换为内存实现。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// 登录令牌的存储键
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// 用户角色的存储键
pub const USER_ROLE_KEY: &str = "userRole";

#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    // 读取键值
    async fn get(&self, key: &str) -> Result<Option<String>>;
    // 写入键值
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    // 删除单个键
    async fn remove(&self, key: &str) -> Result<()>;
    // 清空全部键
    async fn clear(&self) -> Result<()>;
}

/// 根据配置创建存储后端
pub async fn create_storage() -> Result<Arc<dyn KeyValueStore>> {
    let config = AppConfig::get();
    if config.uses_memory_storage() {
        tracing::debug!("Using in-memory key-value storage");
        return Ok(Arc::new(MemoryStorage::new()));
    }

    let storage = FileStorage::open(&config.storage.path).await?;
    tracing::debug!("Using file key-value storage at {}", config.storage.path);
    Ok(Arc::new(storage))
}
