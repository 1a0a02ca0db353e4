use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::teachers::Teacher;
use crate::utils::require_field;

pub struct TeacherService {
    client: Arc<ApiClient>,
}

impl TeacherService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // 待审核教师
    pub async fn list_pending(&self) -> Result<Vec<Teacher>> {
        self.client.get(&["admin", "teachers", "pending"]).await
    }

    pub async fn list_all(&self) -> Result<Vec<Teacher>> {
        self.client.get(&["admin", "teachers"]).await
    }

    pub async fn approve(&self, teacher_id: &str) -> Result<MessageResponse> {
        let teacher_id = require_field("Teacher ID", teacher_id)?;
        let response = self
            .client
            .post_command(&["admin", "teachers", "approve", teacher_id], &serde_json::json!({}))
            .await?;
        info!("Teacher {} approved", teacher_id);
        Ok(response)
    }

    /// 拒绝即删除该教师账号
    pub async fn reject(&self, teacher_id: &str) -> Result<MessageResponse> {
        let teacher_id = require_field("Teacher ID", teacher_id)?;
        let response = self.client.delete(&["admin", "teachers", teacher_id]).await?;
        info!("Teacher {} rejected", teacher_id);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn offline_service() -> TeacherService {
        // 端口 1 上没有服务，校验失败时不会走到网络
        let client =
            ApiClient::new("http://127.0.0.1:1", "test", Arc::new(MemoryStorage::new())).unwrap();
        TeacherService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_blank_teacher_id_is_rejected_locally() {
        let service = offline_service();

        let err = service.approve("").await.unwrap_err();
        assert_eq!(err.code(), "E003");
        assert_eq!(err.message(), "Teacher ID is required");

        let err = service.reject("  ").await.unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
