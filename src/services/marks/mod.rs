use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::errors::{AttendanceError, Result};
use crate::models::MessageResponse;
use crate::models::marks::{AssessmentType, MarkRecord, UploadMarksRequest};
use crate::utils::require_field;

pub struct MarkService {
    client: Arc<ApiClient>,
}

impl MarkService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 构造上传请求并做客户端校验
    pub fn build_upload(
        name: &str,
        kind: AssessmentType,
        total_marks: f64,
        records: Vec<MarkRecord>,
    ) -> Result<UploadMarksRequest> {
        let name = require_field("Assessment name", name)?;

        if let AssessmentType::Other(other) = &kind {
            return Err(AttendanceError::validation(format!(
                "Unsupported assessment type '{other}', expected CT or Lab Quiz"
            )));
        }
        if !total_marks.is_finite() || total_marks <= 0.0 {
            return Err(AttendanceError::validation(
                "Total marks must be a positive number",
            ));
        }
        if records.is_empty() {
            return Err(AttendanceError::validation(
                "No valid mark records found in the file",
            ));
        }

        Ok(UploadMarksRequest {
            name: name.to_string(),
            kind,
            total_marks,
            records,
        })
    }

    pub async fn upload(
        &self,
        class_id: &str,
        request: &UploadMarksRequest,
    ) -> Result<MessageResponse> {
        let class_id = require_field("Class ID", class_id)?;
        let response = self
            .client
            .post_command(&["classes", class_id, "marks"], request)
            .await?;
        info!(
            "Uploaded {} marks for {} '{}' in class {}",
            request.records.len(),
            request.kind,
            request.name,
            class_id
        );
        Ok(response)
    }
}
