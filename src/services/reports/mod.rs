use std::sync::Arc;
use tracing::debug;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::reports::{ComprehensiveReport, ReportView};
use crate::report;

pub struct ReportService {
    client: Arc<ApiClient>,
}

impl ReportService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_report(&self, class_id: &str) -> Result<ComprehensiveReport> {
        let report: ComprehensiveReport = self
            .client
            .get(&["classes", class_id, "comprehensive-report"])
            .await?;
        debug!(
            "Report for class {}: {} students, {} dates, {} assessments",
            class_id,
            report.students.len(),
            report.attendance_dates.len(),
            report.assessments.len()
        );
        Ok(report)
    }

    /// 获取并透视
    pub async fn load_view(&self, class_id: &str) -> Result<(ComprehensiveReport, ReportView)> {
        let raw = self.fetch_report(class_id).await?;
        let view = report::aggregate(&raw);
        Ok((raw, view))
    }
}
