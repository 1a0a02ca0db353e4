use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::MessageResponse;
use crate::models::sessions::{AddStudentsRequest, CreateSessionRequest, Session, Student};
use crate::utils::require_field;

pub struct SessionService {
    client: Arc<ApiClient>,
}

impl SessionService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // 获取全部 Session
    pub async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.client.get(&["sessions"]).await
    }

    // 获取单个 Session 及其学生名单
    pub async fn get_session(&self, name: &str) -> Result<Session> {
        let name = require_field("Session name", name)?;
        self.client.get(&["sessions", name]).await
    }

    // 创建空名单的 Session
    pub async fn create_session(&self, name: &str) -> Result<MessageResponse> {
        let name = require_field("Session name", name)?;
        let request = CreateSessionRequest {
            name: name.to_string(),
            students: Vec::new(),
        };
        let response = self.client.post_command(&["sessions"], &request).await?;
        info!("Session '{}' created", name);
        Ok(response)
    }

    // 删除 Session（服务端会级联删除关联班级）
    pub async fn delete_session(&self, name: &str) -> Result<MessageResponse> {
        let name = require_field("Session name", name)?;
        self.client.delete(&["sessions", name]).await
    }

    /// 追加学生
    ///
    /// 只提交两个字段都非空的行；过滤后为空则不发请求。
    pub async fn add_students(
        &self,
        session_name: &str,
        students: Vec<Student>,
    ) -> Result<Option<MessageResponse>> {
        let session_name = require_field("Session name", session_name)?;
        let students: Vec<Student> = students
            .into_iter()
            .filter(Student::is_complete)
            .map(|s| Student::new(s.student_id.trim(), s.name.trim()))
            .collect();

        if students.is_empty() {
            return Ok(None);
        }

        let count = students.len();
        let response = self
            .client
            .post_command(
                &["sessions", session_name, "students"],
                &AddStudentsRequest { students },
            )
            .await?;
        info!("Saved {} student(s) to session '{}'", count, session_name);
        Ok(Some(response))
    }

    // 从 Session 中移除学生
    pub async fn remove_student(
        &self,
        session_name: &str,
        student_id: &str,
    ) -> Result<MessageResponse> {
        let session_name = require_field("Session name", session_name)?;
        let student_id = require_field("Student ID", student_id)?;
        self.client
            .delete(&["sessions", session_name, "students", student_id])
            .await
    }

    /// 班级所属 Session 的学生名单
    pub async fn roster_for(&self, session_name: &str) -> Result<Vec<Student>> {
        Ok(self.get_session(session_name).await?.students)
    }
}
