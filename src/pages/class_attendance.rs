//! 课堂考勤页

use crate::errors::Result;
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::services::AttendanceSheet;
use crate::utils::{Notice, TextTable};

use super::{Rendered, enter};

/// 考勤表单的输入
#[derive(Debug, Clone, Default)]
pub struct AttendanceForm {
    pub date: Option<String>,
    pub weight: Option<i64>,
    /// 出勤学生的学号
    pub present: Vec<String>,
    /// 全选 / 取消全选，在逐个勾选之前应用
    pub toggle_all: bool,
    /// 只预览不提交
    pub dry_run: bool,
}

pub async fn take(ctx: &mut AppContext, class_id: &str, form: AttendanceForm) -> Result<Rendered> {
    enter(
        ctx,
        Page::ClassAttendance,
        PageParams::new().with(PageParams::CLASS_ID, class_id),
    )?;

    let default_weight = crate::config::AppConfig::get().attendance.default_weight;
    let mut sheet = ctx.attendance.load_sheet(class_id, default_weight).await?;
    fill(&mut sheet, &form)?;

    let rendered = Rendered::new().section(sheet_table(&sheet));
    if form.dry_run {
        return Ok(rendered.notice(Notice::info(format!(
            "{} of {} student(s) marked present. Nothing was submitted.",
            sheet.present_count(),
            sheet.students().len()
        ))));
    }

    ctx.attendance.submit(&sheet).await?;
    Ok(rendered.notice(Notice::success("Attendance submitted successfully!")))
}

fn fill(sheet: &mut AttendanceSheet, form: &AttendanceForm) -> Result<()> {
    if let Some(date) = &form.date {
        sheet.set_date(date)?;
    }
    if let Some(weight) = form.weight {
        sheet.set_weight(weight)?;
    }
    if form.toggle_all {
        sheet.toggle_all();
    }
    for student_id in &form.present {
        sheet.set_present(student_id.trim(), true)?;
    }
    Ok(())
}

fn sheet_table(sheet: &AttendanceSheet) -> TextTable {
    let class = sheet.class();
    let mut table = TextTable::new(["#", "Name", "ID", "Present"])
        .title(format!(
            "Attendance for {} ({}) on {}, count {}",
            class.name,
            class.session,
            sheet.date(),
            sheet.weight()
        ))
        .empty_message("No students in this session.");
    for (i, student) in sheet.students().iter().enumerate() {
        let mark = if sheet.is_present(&student.student_id) {
            "[x]"
        } else {
            "[ ]"
        };
        table.push_row([
            (i + 1).to_string(),
            student.name.clone(),
            student.student_id.clone(),
            mark.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::Class;
    use crate::models::sessions::Student;

    fn sheet() -> AttendanceSheet {
        let class = Class {
            id: "c1".to_string(),
            name: "CSE-101".to_string(),
            session: "2026".to_string(),
        };
        AttendanceSheet::new(
            class,
            vec![Student::new("S1", "Alice"), Student::new("S2", "Bob")],
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_fill_applies_form() {
        let mut sheet = sheet();
        let form = AttendanceForm {
            date: Some("2026-03-02".to_string()),
            weight: Some(3),
            present: vec![" S2 ".to_string()],
            ..Default::default()
        };
        fill(&mut sheet, &form).unwrap();
        assert_eq!(sheet.date(), "2026-03-02");
        assert_eq!(sheet.weight(), 3);
        assert!(!sheet.is_present("S1"));
        assert!(sheet.is_present("S2"));
    }

    #[test]
    fn test_fill_rejects_unknown_student() {
        let mut sheet = sheet();
        let form = AttendanceForm {
            present: vec!["S9".to_string()],
            ..Default::default()
        };
        assert!(fill(&mut sheet, &form).is_err());
    }

    #[test]
    fn test_sheet_table_marks_present() {
        let mut sheet = sheet();
        sheet.toggle_all();
        let rendered = sheet_table(&sheet).to_string();
        assert!(rendered.contains("CSE-101 (2026)"));
        assert_eq!(rendered.matches("[x]").count(), 2);
    }
}
