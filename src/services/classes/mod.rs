use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::errors::{AttendanceError, Result};
use crate::models::MessageResponse;
use crate::models::classes::{Class, CreateClassRequest};
use crate::utils::require_field;

pub struct ClassService {
    client: Arc<ApiClient>,
}

impl ClassService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // 获取当前教师的班级列表
    pub async fn list_classes(&self) -> Result<Vec<Class>> {
        self.client.get(&["classes"]).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, class_id: &str) -> Result<Class> {
        let class_id = require_field("Class ID", class_id)?;
        self.client.get(&["classes", class_id]).await
    }

    // 创建班级
    pub async fn create_class(&self, name: &str, session: &str) -> Result<MessageResponse> {
        let (Ok(name), Ok(session)) = (
            require_field("Class name", name),
            require_field("Session", session),
        ) else {
            return Err(AttendanceError::validation("Please fill all fields."));
        };

        let request = CreateClassRequest {
            name: name.to_string(),
            session: session.to_string(),
        };
        let response = self.client.post_command(&["classes"], &request).await?;
        info!("Class '{}' created in session '{}'", name, session);
        Ok(response)
    }

    // 根据班级 ID 删除班级
    pub async fn delete_class(&self, class_id: &str) -> Result<MessageResponse> {
        let class_id = require_field("Class ID", class_id)?;
        self.client.delete(&["classes", class_id]).await
    }
}
