//! 综合报表页：考勤表 + CT 成绩表 + Lab Quiz 成绩表

use std::path::Path;
use tracing::info;

use crate::errors::Result;
use crate::models::reports::{AttendanceTable, ComprehensiveReport, MarksTable, ReportView};
use crate::navigation::{Page, PageParams};
use crate::report::{attendance_csv, marks_csv};
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::{Notice, TextTable};

use super::{Rendered, enter};

pub async fn show(
    ctx: &mut AppContext,
    class_id: &str,
    export_dir: Option<&Path>,
) -> Result<Rendered> {
    enter(
        ctx,
        Page::AttendanceReport,
        PageParams::new().with(PageParams::CLASS_ID, class_id),
    )?;

    let (raw, view) = ctx.reports.load_view(class_id).await?;
    let rendered = render(&raw, &view);

    match export_dir {
        Some(dir) => {
            export(&view, dir).await?;
            Ok(rendered.notice(Notice::success(format!(
                "Report exported to {}",
                dir.display()
            ))))
        }
        None => Ok(rendered),
    }
}

fn render(raw: &ComprehensiveReport, view: &ReportView) -> Rendered {
    let heading = match (&raw.class_name, &raw.session) {
        (Some(class), Some(session)) => format!("{class} ({session})"),
        (Some(class), None) => class.clone(),
        _ => "Class".to_string(),
    };
    Rendered::new()
        .section(attendance_table(&heading, &view.attendance))
        .section(marks_table("Class Tests", &view.class_tests))
        .section(marks_table("Lab Quizzes", &view.lab_quizzes))
}

async fn export(view: &ReportView, dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let files = [
        ("attendance.csv", attendance_csv(&view.attendance)?),
        ("class_tests.csv", marks_csv(&view.class_tests)?),
        ("lab_quizzes.csv", marks_csv(&view.lab_quizzes)?),
    ];
    for (name, content) in files {
        tokio::fs::write(dir.join(name), content).await?;
    }
    info!("Report written to {}", dir.display());
    Ok(())
}

fn attendance_table(heading: &str, table: &AttendanceTable) -> TextTable {
    let mut headers = vec!["Student ID".to_string(), "Name".to_string()];
    headers.extend(
        table
            .columns
            .iter()
            .map(|c| format!("{} (x{})", c.date, c.attendance_weight)),
    );
    headers.push(format!("Total ({})", table.total_possible));
    headers.push("Percentage".to_string());

    let mut text = TextTable::new(headers)
        .title(format!("Attendance: {heading}"))
        .empty_message("No students found.");
    for row in &table.rows {
        let mut cells = vec![row.student_id.clone(), row.name.clone()];
        cells.extend(row.cells.iter().map(|c| c.to_string()));
        cells.push(row.total.to_string());
        cells.push(format!("{:.2}%", row.percentage));
        text.push_row(cells);
    }
    text
}

fn marks_table(title: &str, table: &MarksTable) -> TextTable {
    let mut headers = vec!["Student ID".to_string(), "Name".to_string()];
    headers.extend(table.columns.iter().map(|c| c.header()));

    let empty = if table.columns.is_empty() {
        format!("No {} assessments yet.", table.kind)
    } else {
        "No students found.".to_string()
    };
    let mut text = TextTable::new(headers).title(title).empty_message(empty);
    if table.columns.is_empty() {
        return text;
    }
    for row in &table.rows {
        let mut cells = vec![row.student_id.clone(), row.name.clone()];
        cells.extend(row.cells.iter().map(|c| c.display()));
        text.push_row(cells);
    }
    text
}
