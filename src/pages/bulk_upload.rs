//! 成绩批量上传页

use std::path::Path;

use crate::bulk::parse_marks;
use crate::errors::Result;
use crate::models::marks::{AssessmentType, MarkRecord};
use crate::models::reports::format_number;
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::services::MarkService;
use crate::utils::{Notice, TextTable};

use super::{Rendered, enter};

pub struct MarksUpload<'a> {
    pub class_id: &'a str,
    pub name: &'a str,
    pub kind: AssessmentType,
    pub total_marks: f64,
    pub file: &'a Path,
    pub dry_run: bool,
}

pub async fn upload(ctx: &mut AppContext, upload: MarksUpload<'_>) -> Result<Rendered> {
    enter(
        ctx,
        Page::BulkUpload,
        PageParams::new().with(PageParams::CLASS_ID, upload.class_id),
    )?;

    let text = tokio::fs::read_to_string(upload.file).await?;
    let records = parse_marks(&text)?;
    let request = MarkService::build_upload(upload.name, upload.kind, upload.total_marks, records)?;

    let rendered = Rendered::new().section(records_table(&request.records, request.total_marks));
    if upload.dry_run {
        return Ok(rendered.notice(Notice::info(format!(
            "{} record(s) ready for {} '{}'. Nothing was uploaded.",
            request.records.len(),
            request.kind,
            request.name
        ))));
    }

    let response = ctx.marks.upload(upload.class_id, &request).await?;
    Ok(rendered.notice(Notice::success(
        response.message_or("Marks uploaded successfully!"),
    )))
}

fn records_table(records: &[MarkRecord], total_marks: f64) -> TextTable {
    let mut table = TextTable::new([
        "Student ID".to_string(),
        "Name".to_string(),
        format!("Mark (/{})", format_number(total_marks)),
    ])
    .title("Marks to upload");
    for record in records {
        table.push_row([
            record.student_id.clone(),
            record.student_name.clone(),
            format_number(record.mark),
        ]);
    }
    table
}
