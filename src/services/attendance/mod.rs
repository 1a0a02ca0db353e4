pub mod sheet;

use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::MessageResponse;
use crate::services::sessions::SessionService;

use super::ClassService;

pub use sheet::AttendanceSheet;

pub struct AttendanceService {
    client: Arc<ApiClient>,
}

impl AttendanceService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 加载考勤表：先取班级，再取其 Session 的学生名单
    ///
    /// 两次请求之间没有事务保证。
    pub async fn load_sheet(&self, class_id: &str, default_weight: i64) -> Result<AttendanceSheet> {
        let class = ClassService::new(self.client.clone())
            .get_class(class_id)
            .await?;
        let students = SessionService::new(self.client.clone())
            .roster_for(&class.session)
            .await?;
        AttendanceSheet::new(class, students, default_weight)
    }

    // 提交考勤
    pub async fn submit(&self, sheet: &AttendanceSheet) -> Result<MessageResponse> {
        let submission = sheet.to_submission()?;
        let response = self
            .client
            .post_command(&["attendance"], &submission)
            .await?;
        info!(
            "Attendance for {} on {} submitted ({}/{} present, weight {})",
            submission.class_name,
            submission.date,
            sheet.present_count(),
            submission.students.len(),
            submission.attendance_weight
        );
        Ok(response)
    }
}
