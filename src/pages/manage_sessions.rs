//! 管理员的 Session 管理页
//!
//! 每次修改后重新拉取名单展示。

use std::path::Path;

use crate::bulk::parse_roster;
use crate::errors::Result;
use crate::models::sessions::{Session, Student};
use crate::navigation::{Page, PageParams};
use crate::runtime::lifetime::startup::AppContext;
use crate::utils::{Notice, TextTable};

use super::dashboard::sessions_table;
use super::{Rendered, enter};

fn enter_session(ctx: &mut AppContext, session_name: Option<&str>) -> Result<()> {
    let params = match session_name {
        Some(name) => PageParams::new().with(PageParams::SESSION_NAME, name),
        None => PageParams::new(),
    };
    enter(ctx, Page::ManageSessions, params)?;
    Ok(())
}

pub async fn list(ctx: &mut AppContext) -> Result<Rendered> {
    enter_session(ctx, None)?;
    let sessions = ctx.sessions.list_sessions().await?;
    Ok(Rendered::new().section(sessions_table(&sessions)))
}

pub async fn show(ctx: &mut AppContext, session_name: &str) -> Result<Rendered> {
    enter_session(ctx, Some(session_name))?;
    let session = ctx.sessions.get_session(session_name).await?;
    Ok(Rendered::new().section(roster_table(&session)))
}

pub async fn create(ctx: &mut AppContext, session_name: &str) -> Result<Rendered> {
    enter_session(ctx, Some(session_name))?;
    ctx.sessions.create_session(session_name).await?;
    Ok(Rendered::from_notice(Notice::success(format!(
        "Session '{}' created!",
        session_name.trim()
    ))))
}

/// 删除 Session 及其全部班级，两种角色都可以从仪表盘发起
pub async fn delete(ctx: &mut AppContext, session_name: &str) -> Result<Rendered> {
    enter(ctx, Page::Dashboard, PageParams::new())?;
    let response = ctx.sessions.delete_session(session_name).await?;
    Ok(Rendered::from_response(&response, "Session deleted."))
}

/// 手动录入的学生行，只保存两个字段都填写的行
pub async fn add_students(
    ctx: &mut AppContext,
    session_name: &str,
    students: Vec<Student>,
) -> Result<Rendered> {
    enter_session(ctx, Some(session_name))?;
    save_students(ctx, session_name, students).await
}

/// 从名单文件批量导入
pub async fn import_roster(
    ctx: &mut AppContext,
    session_name: &str,
    path: &Path,
) -> Result<Rendered> {
    enter_session(ctx, Some(session_name))?;
    let text = tokio::fs::read_to_string(path).await?;
    let students = parse_roster(&text);
    save_students(ctx, session_name, students).await
}

async fn save_students(
    ctx: &AppContext,
    session_name: &str,
    students: Vec<Student>,
) -> Result<Rendered> {
    if ctx.sessions.add_students(session_name, students).await?.is_none() {
        return Ok(Rendered::from_notice(Notice::info(
            "No complete student rows to save.",
        )));
    }

    let session = ctx.sessions.get_session(session_name).await?;
    Ok(Rendered::new()
        .section(roster_table(&session))
        .notice(Notice::success("Students saved successfully!")))
}

pub async fn remove_student(
    ctx: &mut AppContext,
    session_name: &str,
    student_id: &str,
) -> Result<Rendered> {
    enter_session(ctx, Some(session_name))?;
    ctx.sessions.remove_student(session_name, student_id).await?;
    let session = ctx.sessions.get_session(session_name).await?;
    Ok(Rendered::new()
        .section(roster_table(&session))
        .notice(Notice::success("Student removed!")))
}

fn roster_table(session: &Session) -> TextTable {
    let mut table = TextTable::new(["Student ID", "Name"])
        .title(format!("Students in {}", session.name))
        .empty_message("No students in this session yet.");
    for student in &session.students {
        table.push_row([student.student_id.clone(), student.name.clone()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_table_lists_students_in_order() {
        let session = Session {
            id: None,
            name: "2026".to_string(),
            students: vec![Student::new("S2", "Bob"), Student::new("S1", "Alice")],
        };
        let rendered = roster_table(&session).to_string();
        let bob = rendered.find("Bob").unwrap();
        let alice = rendered.find("Alice").unwrap();
        assert!(bob < alice);
        assert!(rendered.starts_with("== Students in 2026 =="));
    }
}
