use crate::errors::{AttendanceError, Result};
use crate::models::auth::UserRole;
use crate::models::classes::Class;
use crate::models::sessions::Session;
use crate::models::teachers::Teacher;
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::{Notice, TextTable};

use super::{Rendered, enter};

pub async fn show(ctx: &mut AppContext) -> Result<Rendered> {
    match enter(ctx, Page::Dashboard, PageParams::new())? {
        UserRole::Admin => {
            let data = ctx.dashboard.load_admin().await?;
            let summary = format!(
                "{} session(s), {} teacher(s) awaiting approval.",
                data.sessions.len(),
                data.pending_teachers.len()
            );
            Ok(Rendered::new()
                .section(sessions_table(&data.sessions))
                .section(teachers_table("Pending Teachers", &data.pending_teachers, false))
                .section(teachers_table("All Teachers", &data.teachers, true))
                .notice(Notice::info(summary)))
        }
        UserRole::Teacher => {
            let data = ctx.dashboard.load_teacher().await?;
            Ok(Rendered::new()
                .section(classes_table(&data.classes))
                .section(sessions_table(&data.sessions)))
        }
    }
}

fn require_admin(ctx: &mut AppContext) -> Result<()> {
    if enter(ctx, Page::Dashboard, PageParams::new())? != UserRole::Admin {
        return Err(AttendanceError::validation(
            "Only administrators can review teacher accounts.",
        ));
    }
    Ok(())
}

pub async fn list_pending(ctx: &mut AppContext) -> Result<Rendered> {
    require_admin(ctx)?;
    let teachers = ctx.teachers.list_pending().await?;
    Ok(Rendered::new().section(teachers_table("Pending Teachers", &teachers, false)))
}

pub async fn list_teachers(ctx: &mut AppContext) -> Result<Rendered> {
    require_admin(ctx)?;
    let teachers = ctx.teachers.list_all().await?;
    Ok(Rendered::new().section(teachers_table("All Teachers", &teachers, true)))
}

pub async fn approve(ctx: &mut AppContext, teacher_id: &str) -> Result<Rendered> {
    require_admin(ctx)?;
    let response = ctx.teachers.approve(teacher_id).await?;
    Ok(Rendered::from_response(&response, "Teacher approved."))
}

pub async fn reject(ctx: &mut AppContext, teacher_id: &str) -> Result<Rendered> {
    require_admin(ctx)?;
    let response = ctx.teachers.reject(teacher_id).await?;
    Ok(Rendered::from_response(&response, "Teacher rejected."))
}

pub(crate) fn sessions_table(sessions: &[Session]) -> TextTable {
    let mut table = TextTable::new(["Session", "Students"])
        .title("Sessions")
        .empty_message("No sessions found.");
    for session in sessions {
        table.push_row([session.name.clone(), session.students.len().to_string()]);
    }
    table
}

pub(crate) fn classes_table(classes: &[Class]) -> TextTable {
    let mut table = TextTable::new(["ID", "Class", "Session"])
        .title("Classes")
        .empty_message("No classes yet. Add one with `classes create`.");
    for class in classes {
        table.push_row([class.id.clone(), class.name.clone(), class.session.clone()]);
    }
    table
}

fn teachers_table(title: &str, teachers: &[Teacher], with_status: bool) -> TextTable {
    let mut headers = vec!["ID", "Name", "Email"];
    if with_status {
        headers.push("Status");
    }
    let mut table = TextTable::new(headers)
        .title(title)
        .empty_message("No teachers found.");
    for teacher in teachers {
        let mut row = vec![teacher.id.clone(), teacher.name.clone(), teacher.email.clone()];
        if with_status {
            row.push(teacher.status_label().to_string());
        }
        table.push_row(row);
    }
    table
}
